// ABOUTME: Azure collaborators: slot resolution, artifact deployment, swap, settings.
// ABOUTME: Consumed by the driver through the SlotApi trait.

mod cli;
mod error;

pub use cli::{AzureCli, SlotApi};
pub use error::AzureError;
