// ABOUTME: Command module aggregator for the slipway CLI.
// ABOUTME: Re-exports deploy and verify command handlers.

mod deploy;
mod verify;

pub use deploy::{DeployArgs, deploy};
pub use verify::verify;
