// ABOUTME: Verify command implementation.
// ABOUTME: Probes the configured slot's health endpoint without deploying.

use slipway::azure::{AzureCli, SlotApi};
use slipway::config::Config;
use slipway::error::Result;
use slipway::health::{HealthVerifier, HttpProber, ProbeTarget, SystemClock};
use slipway::output::Output;

/// Probe the configured slot until healthy or the deadline expires.
pub async fn verify(
    config: Config,
    expected_version: Option<String>,
    mut output: Output,
) -> Result<()> {
    output.start_timer();

    let api = AzureCli::new();
    let verifier = HealthVerifier::new(HttpProber::new(), SystemClock);

    let base_url = api
        .resolve_slot_url(&config.resource_group, &config.app, &config.slot)
        .await?;

    let expected_version = expected_version.or(config.health.expected_version);
    let target = ProbeTarget::new(base_url, &config.health.path, expected_version);

    output.progress(&format!("Probing {}", target.url()));
    let report = verifier.verify(&target).await?;

    output.success(&format!(
        "Healthy (HTTP {}, {} attempt(s))",
        report.status, report.attempts
    ));
    Ok(())
}
