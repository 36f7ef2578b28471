// ABOUTME: Health verification core: prober, outcome classification, retry loop.
// ABOUTME: Reused for post-deploy slot checks and post-swap production checks.

mod clock;
mod error;
mod outcome;
mod prober;
mod retry;
mod target;

pub use clock::{Clock, SystemClock};
pub use error::HealthCheckTimeout;
pub use outcome::{ProbeOutcome, TransportKind};
pub use prober::{HttpProber, Probe};
pub use retry::{HealthReport, HealthVerifier, RetryPolicy};
pub use target::ProbeTarget;
