// ABOUTME: Bounded-time retry loop around the health prober.
// ABOUTME: Owns the overall deadline, attempt counting, and the terminal timeout.

use super::clock::Clock;
use super::error::HealthCheckTimeout;
use super::outcome::{ProbeOutcome, TransportKind};
use super::prober::Probe;
use super::target::ProbeTarget;
use std::time::Duration;

/// Timing budget for one verification call.
///
/// The per-attempt timeout is deliberately shorter than the overall deadline:
/// it bounds latency under cold starts while leaving room for many attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total time allowed for the endpoint to become healthy.
    pub overall_deadline: Duration,
    /// Upper bound on a single HTTP attempt.
    pub attempt_timeout: Duration,
    /// Pause between attempts.
    pub retry_delay: Duration,
    /// Attempts are not started with less than this much budget remaining.
    pub min_attempt_budget: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            overall_deadline: Duration::from_secs(300),
            attempt_timeout: Duration::from_secs(20),
            retry_delay: Duration::from_secs(5),
            min_attempt_budget: Duration::from_secs(1),
        }
    }
}

/// What a successful verification observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    /// Number of HTTP attempts issued, including the successful one.
    pub attempts: u32,
    pub elapsed: Duration,
    /// Status code of the healthy response.
    pub status: u16,
}

/// Drives the prober until the target is healthy or the deadline expires.
///
/// No state survives a `verify` call; each invocation is independent.
pub struct HealthVerifier<P, C> {
    prober: P,
    clock: C,
    policy: RetryPolicy,
}

impl<P: Probe, C: Clock> HealthVerifier<P, C> {
    pub fn new(prober: P, clock: C) -> Self {
        Self {
            prober,
            clock,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(prober: P, clock: C, policy: RetryPolicy) -> Self {
        Self {
            prober,
            clock,
            policy,
        }
    }

    /// Probe the target until it reports healthy or the deadline expires.
    ///
    /// All per-attempt failures are absorbed into retry decisions. The only
    /// error raised is the terminal [`HealthCheckTimeout`]. The deadline is
    /// cooperative: it is checked at loop boundaries, so a late attempt may
    /// run to its own timeout before the next check observes expiry.
    pub async fn verify(&self, target: &ProbeTarget) -> Result<HealthReport, HealthCheckTimeout> {
        let url = target.url();
        tracing::info!(%url, "probing");

        let start = self.clock.now();
        let mut attempts: u32 = 0;

        loop {
            let elapsed = self.clock.now().duration_since(start);
            if elapsed >= self.policy.overall_deadline {
                break;
            }

            let remaining = self.policy.overall_deadline - elapsed;
            if remaining < self.policy.min_attempt_budget {
                // An attempt this close to the deadline cannot complete
                // meaningfully; fail now instead of starting a doomed request.
                break;
            }

            attempts += 1;
            let attempt_timeout = self.policy.attempt_timeout.min(remaining);
            tracing::debug!(attempt = attempts, elapsed_secs = elapsed.as_secs(), "attempt");

            match self.prober.probe(target, attempt_timeout).await {
                ProbeOutcome::Healthy { status } => {
                    tracing::info!(attempt = attempts, status, "healthy");
                    return Ok(HealthReport {
                        attempts,
                        elapsed: self.clock.now().duration_since(start),
                        status,
                    });
                }
                ProbeOutcome::VersionMismatch {
                    status,
                    ref body_preview,
                } => {
                    tracing::info!(
                        attempt = attempts,
                        status,
                        wanted = target.expected_version().unwrap_or_default(),
                        got = %body_preview,
                        "2xx but version mismatch; retrying"
                    );
                }
                ProbeOutcome::UnhealthyStatus { status } => {
                    tracing::info!(attempt = attempts, status, "waiting for 2xx");
                }
                ProbeOutcome::TransportFailure {
                    kind: TransportKind::ConnectionRefused,
                    ..
                } => {
                    tracing::info!(
                        attempt = attempts,
                        "connection refused; app may be cold-starting"
                    );
                }
                ProbeOutcome::TransportFailure {
                    kind: TransportKind::RequestTimeout,
                    ..
                } => {
                    tracing::info!(attempt = attempts, "attempt timed out; likely cold-starting");
                }
                ProbeOutcome::TransportFailure {
                    kind: TransportKind::Other,
                    ref message,
                } => {
                    tracing::info!(attempt = attempts, error = %message, "attempt failed; retrying");
                }
            }

            self.clock.sleep(self.policy.retry_delay).await;
        }

        Err(HealthCheckTimeout {
            url,
            expected_version: target.expected_version().map(str::to_string),
        })
    }
}
