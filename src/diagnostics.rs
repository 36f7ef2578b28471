// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects warnings that shouldn't fail a deployment but should be shown to users.

/// Collects non-fatal warnings during deployment operations.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a temp-file cleanup warning.
    pub fn temp_cleanup(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::TempCleanup,
            message: message.into(),
        }
    }

    /// Create an unpinned-version warning.
    pub fn unpinned_version(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::UnpinnedVersion,
            message: message.into(),
        }
    }

    /// Create a warning for a swap target supplied in a mode that never swaps.
    pub fn ignored_swap_target(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::IgnoredSwapTarget,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Failed to remove a temp zip created for this run.
    TempCleanup,
    /// Prod verification ran without an expected version; liveness only.
    UnpinnedVersion,
    /// --swap-target given in non-prod mode; no swap occurs.
    IgnoredSwapTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::temp_cleanup("failed to remove deploy-1.zip"));
        diag.warn(Warning::unpinned_version("no expected version configured"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        let cleanup = Warning::temp_cleanup("test");
        assert_eq!(cleanup.kind, WarningKind::TempCleanup);

        let unpinned = Warning::unpinned_version("test");
        assert_eq!(unpinned.kind, WarningKind::UnpinnedVersion);

        let ignored = Warning::ignored_swap_target("test");
        assert_eq!(ignored.kind, WarningKind::IgnoredSwapTarget);
    }
}
