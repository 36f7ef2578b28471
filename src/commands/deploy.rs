// ABOUTME: Deploy command implementation.
// ABOUTME: Drives the artifact push, slot verification, and optional swap pipeline.

use crate::cli::Mode;
use slipway::artifact::{self, Artifact};
use slipway::azure::AzureCli;
use slipway::config::Config;
use slipway::deploy::{DeployTarget, Deployment};
use slipway::diagnostics::{Diagnostics, Warning};
use slipway::error::{Error, Result};
use slipway::health::{HealthVerifier, HttpProber, SystemClock};
use slipway::output::Output;
use slipway::types::SlotName;
use std::path::PathBuf;

pub struct DeployArgs {
    pub package: Option<PathBuf>,
    pub image: Option<String>,
    pub mode: Mode,
    pub expected_version: Option<String>,
    pub swap_target: Option<String>,
}

/// Deploy to the configured slot, verify it, and swap in prod mode.
pub async fn deploy(config: Config, args: DeployArgs, mut output: Output) -> Result<()> {
    output.start_timer();
    let mut diag = Diagnostics::default();

    if args.mode == Mode::NonProd && args.swap_target.is_some() {
        diag.warn(Warning::ignored_swap_target(
            "--swap-target has no effect in non-prod mode",
        ));
    }

    let result = run_pipeline(&config, &args, &output, &mut diag).await;

    // Warnings flush on every exit path, including early aborts.
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    result?;
    output.success("Deployment complete!");
    Ok(())
}

async fn run_pipeline(
    config: &Config,
    args: &DeployArgs,
    output: &Output,
    diag: &mut Diagnostics,
) -> Result<()> {
    // Resolve the artifact before touching Azure at all.
    let (deploy_artifact, temp_zip) = match (&args.package, &args.image) {
        (Some(path), None) => {
            let prepared = artifact::prepare_package(path).await?;
            tracing::debug!(kind = ?prepared.kind, path = %prepared.path.display(), "package prepared");
            let temp = prepared.temp_zip.then(|| prepared.path.clone());
            (Artifact::Package(prepared.path), temp)
        }
        (None, Some(image)) => (Artifact::Image(image.clone()), None),
        _ => return Err(Error::MissingArtifact),
    };

    let result = run_deployment(config, args, deploy_artifact, output, diag).await;

    // A zip created this run is ours to remove, pass or fail.
    if let Some(path) = temp_zip
        && let Err(e) = std::fs::remove_file(&path)
    {
        diag.warn(Warning::temp_cleanup(format!(
            "failed to remove {}: {e}",
            path.display()
        )));
    }

    result
}

async fn run_deployment(
    config: &Config,
    args: &DeployArgs,
    deploy_artifact: Artifact,
    output: &Output,
    diag: &mut Diagnostics,
) -> Result<()> {
    let expected_version = args
        .expected_version
        .clone()
        .or_else(|| config.health.expected_version.clone());

    output.progress(&format!(
        "Deploying {} to slot '{}'",
        config.app, config.slot
    ));

    let api = AzureCli::new();
    let verifier = HealthVerifier::new(HttpProber::new(), SystemClock);

    let target = DeployTarget {
        resource_group: config.resource_group.clone(),
        app: config.app.clone(),
        slot: config.slot.clone(),
    };
    let deployment = Deployment::new(
        target,
        deploy_artifact,
        config.health.path.clone(),
        expected_version.clone(),
    );

    deployment.stamp_version(&api).await?;

    output.progress("  → Pushing artifact...");
    let deployment = deployment.deploy_artifact(&api).await?;

    output.progress("  → Verifying slot health...");
    let (deployment, report) = deployment.verify_slot(&api, &verifier).await?;
    output.progress(&format!(
        "  ✓ Slot healthy after {} attempt(s)",
        report.attempts
    ));

    match args.mode {
        Mode::NonProd => {
            let _completed = deployment.finish();
            Ok(())
        }
        Mode::Prod => {
            let swap_target = match &args.swap_target {
                Some(name) => SlotName::new(name)
                    .map_err(|e| Error::InvalidConfig(format!("swap target '{name}': {e}")))?,
                None => config.swap_target.clone(),
            };

            if expected_version.is_none() {
                diag.warn(Warning::unpinned_version(
                    "no expected version configured; post-swap verification checks liveness only",
                ));
            }

            output.progress(&format!("  → Swapping into '{swap_target}'..."));
            let deployment = deployment.swap(&api, &swap_target).await?;

            output.progress("  → Verifying after swap...");
            match deployment
                .verify_production(&api, &verifier, &swap_target)
                .await
            {
                Ok((_completed, report)) => {
                    output.progress(&format!(
                        "  ✓ '{swap_target}' healthy after {} attempt(s)",
                        report.attempts
                    ));
                    Ok(())
                }
                Err(e) => {
                    output.error(
                        "production health check failed after swap; operator attention required",
                    );
                    Err(Error::from(e))
                }
            }
        }
    }
}
