// ABOUTME: Clock abstraction for the retry loop.
// ABOUTME: Injected so tests can simulate elapsed time without real waiting.

use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Time source and sleep used by the retry orchestrator.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}

/// Tokio-backed wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
