// ABOUTME: Deployment orchestration using the typestate pattern.
// ABOUTME: Exports state markers and the Deployment struct for compile-time safe pipelines.

mod deployment;
mod error;
mod state;
mod transitions;

pub use deployment::{DeployTarget, Deployment};
pub use error::DeployError;
pub use state::{ArtifactDeployed, Completed, Initialized, SlotVerified, Swapped};
