// ABOUTME: Package preparation for code deployments.
// ABOUTME: Zips folders, infers the deploy kind from file extensions.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// What is being deployed to the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Code package: a prepared file ready for the deployment endpoint.
    Package(PathBuf),
    /// Container image reference.
    Image(String),
}

/// Package kinds recognized by the deployment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployKind {
    Zip,
    War,
    Jar,
    Ear,
    Static,
    Startup,
}

impl DeployKind {
    /// Infer from a file extension; anything unrecognized falls back to zip.
    pub fn infer(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("war") => DeployKind::War,
            Some("jar") => DeployKind::Jar,
            Some("ear") => DeployKind::Ear,
            Some("static") => DeployKind::Static,
            Some("startup") => DeployKind::Startup,
            _ => DeployKind::Zip,
        }
    }
}

/// A package ready to hand to the deployment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPackage {
    pub path: PathBuf,
    pub kind: DeployKind,
    /// Set when the package was zipped into a temp file this run, so the
    /// caller can clean it up afterwards.
    pub temp_zip: bool,
}

/// Zip a folder into the runner's temp directory, returning the archive path.
pub async fn zip_folder(folder: &Path) -> Result<PathBuf> {
    let temp_dir = std::env::var("RUNNER_TEMP")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());

    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let zip_path = temp_dir.join(format!("deploy-{millis}.zip"));

    tracing::info!(folder = %folder.display(), zip = %zip_path.display(), "zipping folder");

    let status = Command::new("zip")
        .args(["-q", "-r"])
        .arg(&zip_path)
        .arg(".")
        .current_dir(folder)
        .status()
        .await?;

    if !status.success() {
        return Err(Error::PackagePreparation(format!(
            "zip exited with status {:?} for {}",
            status.code(),
            folder.display()
        )));
    }

    Ok(zip_path)
}

/// Prepare a package path for deployment.
///
/// Folders are zipped into a temp archive; files pass through as-is with
/// their kind inferred from the extension.
pub async fn prepare_package(src: &Path) -> Result<PreparedPackage> {
    if !src.exists() {
        return Err(Error::PackageNotFound(src.to_path_buf()));
    }

    if src.is_dir() {
        let zip_path = zip_folder(src).await?;
        return Ok(PreparedPackage {
            path: zip_path,
            kind: DeployKind::Zip,
            temp_zip: true,
        });
    }

    Ok(PreparedPackage {
        path: src.to_path_buf(),
        kind: DeployKind::infer(src),
        temp_zip: false,
    })
}
