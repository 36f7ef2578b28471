// ABOUTME: Probe target value type: base URL, health path, optional version marker.
// ABOUTME: Normalizes the path so probed URLs are stable regardless of caller input.

/// Immutable description of what one verification call probes.
///
/// Constructed once per `verify` invocation from the resolved slot URL and the
/// caller's health path. A path without a leading `/` gets one prepended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    base_url: String,
    path: String,
    expected_version: Option<String>,
}

impl ProbeTarget {
    pub fn new(
        base_url: impl Into<String>,
        path: &str,
        expected_version: Option<String>,
    ) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            base_url: base_url.into(),
            path,
            expected_version,
        }
    }

    /// The fully-qualified URL this target probes.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    pub fn expected_version(&self) -> Option<&str> {
        self.expected_version.as_deref()
    }
}
