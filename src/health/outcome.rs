// ABOUTME: Classification of a single probe attempt into a structured outcome.
// ABOUTME: Covers status codes, version matching, and transport failure kinds.

/// Outcome of one HTTP probe attempt, produced fresh per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response; either no version check was requested or it matched.
    Healthy { status: u16 },

    /// 2xx response but the body does not carry the expected version.
    VersionMismatch { status: u16, body_preview: String },

    /// Non-2xx response. 3xx/4xx/5xx are all retryable at this layer.
    UnhealthyStatus { status: u16 },

    /// The request could not complete at all.
    TransportFailure { kind: TransportKind, message: String },
}

/// Why a request failed before any HTTP response was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    ConnectionRefused,
    RequestTimeout,
    Other,
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }

    /// Classify a 2xx response body against an optional expected version.
    pub fn from_success(status: u16, body: &str, expected_version: Option<&str>) -> Self {
        let Some(expected) = expected_version else {
            // Presence of a 2xx is sufficient without a version check.
            return ProbeOutcome::Healthy { status };
        };

        if version_matches(body, expected) {
            ProbeOutcome::Healthy { status }
        } else {
            ProbeOutcome::VersionMismatch {
                status,
                body_preview: body_preview(body),
            }
        }
    }
}

/// Exact JSON field match first (`version`, then `app_version`), substring
/// search over the raw body as a fallback.
///
/// The fallback is deliberately permissive: health endpoints are
/// heterogeneous (plain text, HTML banners, JSON) and versions often appear
/// embedded in a greeting string. A short expected version can therefore match
/// coincidentally; that is an accepted tradeoff of this matcher.
fn version_matches(body: &str, expected: &str) -> bool {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["version", "app_version"] {
            if let Some(serde_json::Value::String(found)) = fields.get(key)
                && found == expected
            {
                return true;
            }
        }
    }

    body.contains(expected)
}

/// First 50 characters of the body with newlines collapsed to spaces,
/// suffixed with "...". Keeps log lines readable for long HTML responses.
fn body_preview(body: &str) -> String {
    let mut preview: String = body
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_xx_without_version_check_is_healthy() {
        let outcome = ProbeOutcome::from_success(204, "", None);
        assert_eq!(outcome, ProbeOutcome::Healthy { status: 204 });
    }

    #[test]
    fn json_version_field_matches_exactly() {
        assert!(version_matches(r#"{"version":"1.2.3"}"#, "1.2.3"));
        assert!(version_matches(r#"{"app_version":"1.2.3"}"#, "1.2.3"));
        assert!(!version_matches(r#"{"version":"1.0.0"}"#, "2.0.0"));
    }

    #[test]
    fn substring_fallback_matches_text_bodies() {
        assert!(version_matches("build abc123-1.2.3", "1.2.3"));
        assert!(version_matches("<h1>app is up (v1.2.3)</h1>", "1.2.3"));
        assert!(!version_matches("app is up", "1.2.3"));
    }

    #[test]
    fn substring_fallback_applies_when_json_field_misses() {
        // Field comparison fails, but the marker still appears in the raw body.
        let body = r#"{"version":"1.0.0","notes":"supersedes 2.0.0"}"#;
        assert!(version_matches(body, "2.0.0"));
    }

    #[test]
    fn non_object_json_uses_substring_match() {
        assert!(version_matches(r#"["1.2.3"]"#, "1.2.3"));
        assert!(!version_matches(r#"["1.0.0"]"#, "2.0.0"));
    }

    #[test]
    fn mismatch_carries_truncated_preview() {
        let body = format!("line one\nline two\n{}", "x".repeat(100));
        let outcome = ProbeOutcome::from_success(200, &body, Some("9.9.9"));

        match outcome {
            ProbeOutcome::VersionMismatch {
                status,
                body_preview,
            } => {
                assert_eq!(status, 200);
                assert_eq!(body_preview.chars().count(), 53);
                assert!(body_preview.ends_with("..."));
                assert!(!body_preview.contains('\n'));
                assert!(body_preview.starts_with("line one line two "));
            }
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn short_body_preview_keeps_full_body() {
        let outcome = ProbeOutcome::from_success(200, "ok", Some("1.2.3"));
        match outcome {
            ProbeOutcome::VersionMismatch { body_preview, .. } => {
                assert_eq!(body_preview, "ok...");
            }
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }
}
