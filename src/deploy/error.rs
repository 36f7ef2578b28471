// ABOUTME: Error types for deployment pipeline transitions.
// ABOUTME: Wraps azure failures per step and carries the terminal health timeout.

use crate::azure::AzureError;
use crate::health::HealthCheckTimeout;

/// Errors that can occur during deployment state transitions.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Writing the APP_VERSION setting failed.
    #[error("failed to stamp version setting: {0}")]
    VersionStamp(#[source] AzureError),

    /// Pushing the package or container image failed.
    #[error("failed to deploy artifact: {0}")]
    ArtifactDeploy(#[source] AzureError),

    /// The slot hostname could not be resolved. Occurs once, before the
    /// retry loop begins; never retried.
    #[error("failed to resolve slot url: {0}")]
    Resolution(#[source] AzureError),

    /// The slot swap failed.
    #[error("slot swap failed: {0}")]
    Swap(#[source] AzureError),

    /// Health verification exhausted its budget.
    #[error(transparent)]
    HealthCheck(#[from] HealthCheckTimeout),
}
