// ABOUTME: Thin wrapper over the az CLI for App Service slot operations.
// ABOUTME: Spawns az with tokio and captures stdout for query commands.

use super::error::AzureError;
use crate::types::SlotName;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Slot-level App Service operations the deployment driver needs.
#[async_trait]
pub trait SlotApi: Send + Sync {
    /// Resolve the base URL of a slot (`https://<hostname>`).
    async fn resolve_slot_url(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
    ) -> Result<String, AzureError>;

    /// Push a zip package to a slot.
    async fn deploy_zip(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        src: &Path,
    ) -> Result<(), AzureError>;

    /// Point a slot at a container image and restart it to force a pull.
    async fn update_container(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        image: &str,
    ) -> Result<(), AzureError>;

    /// Promote the source slot into the target slot.
    async fn swap_slots(
        &self,
        resource_group: &str,
        app: &str,
        source: &SlotName,
        target: &SlotName,
    ) -> Result<(), AzureError>;

    /// Write one app setting on a slot.
    async fn set_app_setting(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        key: &str,
        value: &str,
    ) -> Result<(), AzureError>;
}

/// Production implementation shelling out to `az`.
pub struct AzureCli {
    program: String,
}

impl AzureCli {
    pub fn new() -> Self {
        Self {
            program: "az".to_string(),
        }
    }

    /// Use an alternate binary. Tests point this at a stub script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[String]) -> Result<String, AzureError> {
        tracing::debug!(program = %self.program, args = %args.join(" "), "running azure cli");

        let output = Command::new(&self.program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(AzureError::CommandFailed {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for AzureCli {
    fn default() -> Self {
        Self::new()
    }
}

/// The conventional production slot is addressed without a slot qualifier.
fn slot_args(slot: &SlotName) -> Vec<String> {
    if slot.is_production() {
        Vec::new()
    } else {
        vec!["--slot".to_string(), slot.to_string()]
    }
}

fn base_args(command: &[&str], resource_group: &str, app: &str) -> Vec<String> {
    let mut args: Vec<String> = command.iter().map(|s| s.to_string()).collect();
    args.extend([
        "--resource-group".to_string(),
        resource_group.to_string(),
        "--name".to_string(),
        app.to_string(),
    ]);
    args
}

#[async_trait]
impl SlotApi for AzureCli {
    async fn resolve_slot_url(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
    ) -> Result<String, AzureError> {
        let mut args = base_args(&["webapp", "show"], resource_group, app);
        args.extend(slot_args(slot));
        args.extend([
            "--query".to_string(),
            "defaultHostName".to_string(),
            "-o".to_string(),
            "tsv".to_string(),
        ]);

        let hostname = self.run(&args).await?;
        if hostname.is_empty() {
            return Err(AzureError::Resolution {
                app: app.to_string(),
                slot: slot.to_string(),
            });
        }

        Ok(format!("https://{hostname}"))
    }

    async fn deploy_zip(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        src: &Path,
    ) -> Result<(), AzureError> {
        let mut args = base_args(
            &["webapp", "deployment", "source", "config-zip"],
            resource_group,
            app,
        );
        args.extend(slot_args(slot));
        args.extend(["--src".to_string(), src.display().to_string()]);

        self.run(&args).await?;
        Ok(())
    }

    async fn update_container(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        image: &str,
    ) -> Result<(), AzureError> {
        let mut args = base_args(&["webapp", "config", "container", "set"], resource_group, app);
        args.extend(slot_args(slot));
        args.extend([
            "--docker-custom-image-name".to_string(),
            image.to_string(),
        ]);
        self.run(&args).await?;

        // Restart to force an immediate pull of the new image.
        let mut args = base_args(&["webapp", "restart"], resource_group, app);
        args.extend(slot_args(slot));
        self.run(&args).await?;

        Ok(())
    }

    async fn swap_slots(
        &self,
        resource_group: &str,
        app: &str,
        source: &SlotName,
        target: &SlotName,
    ) -> Result<(), AzureError> {
        let mut args = base_args(&["webapp", "deployment", "slot", "swap"], resource_group, app);
        args.extend([
            "--slot".to_string(),
            source.to_string(),
            "--target-slot".to_string(),
            target.to_string(),
        ]);

        self.run(&args).await?;
        Ok(())
    }

    async fn set_app_setting(
        &self,
        resource_group: &str,
        app: &str,
        slot: &SlotName,
        key: &str,
        value: &str,
    ) -> Result<(), AzureError> {
        let mut args = base_args(&["webapp", "config", "appsettings", "set"], resource_group, app);
        args.extend(slot_args(slot));
        args.extend(["--settings".to_string(), format!("{key}={value}")]);

        self.run(&args).await?;
        Ok(())
    }
}
