// ABOUTME: Error types for az CLI invocations.
// ABOUTME: Distinguishes launch failures, command failures, and unresolvable slots.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AzureError {
    /// The az binary could not be spawned at all.
    #[error("failed to launch azure cli: {0}")]
    Spawn(#[from] std::io::Error),

    /// az ran but exited non-zero.
    #[error("azure cli failed: az {args}: {stderr}")]
    CommandFailed { args: String, stderr: String },

    /// No hostname could be determined for the target slot. Raised before
    /// the retry loop begins and never retried.
    #[error("could not resolve a hostname for app '{app}' slot '{slot}'")]
    Resolution { app: String, slot: String },
}
