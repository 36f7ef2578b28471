// ABOUTME: Library root for slipway - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod artifact;
pub mod azure;
pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod output;
pub mod types;
