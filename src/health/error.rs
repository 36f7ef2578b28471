// ABOUTME: Terminal error type for health verification.
// ABOUTME: The only error the retry orchestrator ever raises.

use thiserror::Error;

/// The overall deadline was exhausted without a healthy outcome.
///
/// All per-attempt failures are absorbed as retryable; this is the sole
/// fatal error the health subsystem raises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "health check timed out: {url} did not become healthy{} within the deadline",
    version_clause(.expected_version)
)]
pub struct HealthCheckTimeout {
    pub url: String,
    pub expected_version: Option<String>,
}

fn version_clause(expected: &Option<String>) -> String {
    match expected {
        Some(version) => format!(" or match version '{version}'"),
        None => String::new(),
    }
}
