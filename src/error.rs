// ABOUTME: Application-wide error types for slipway.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::azure::AzureError;
use crate::deploy::DeployError;
use crate::health::HealthCheckTimeout;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("you must provide either a package path or a container image")]
    MissingArtifact,

    #[error("package path does not exist: {0}")]
    PackageNotFound(PathBuf),

    #[error("failed to prepare package: {0}")]
    PackagePreparation(String),

    #[error(transparent)]
    Azure(#[from] AzureError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error(transparent)]
    HealthCheck(#[from] HealthCheckTimeout),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
