// ABOUTME: Test support utilities.
// ABOUTME: Provides a virtual clock and scripted prober for deterministic retry tests.

use async_trait::async_trait;
use slipway::health::{Clock, Probe, ProbeOutcome, ProbeTarget};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// Virtual clock: `sleep` advances time instantly, so deadline-length
/// retry loops run in microseconds.
pub struct TestClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

#[allow(dead_code)]
impl TestClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

#[async_trait]
impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Prober that replays a fixed script of outcomes, then repeats a fallback.
pub struct ScriptedProber {
    script: Mutex<VecDeque<ProbeOutcome>>,
    fallback: ProbeOutcome,
    calls: AtomicU32,
}

#[allow(dead_code)]
impl ScriptedProber {
    pub fn new(outcomes: Vec<ProbeOutcome>, fallback: ProbeOutcome) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            fallback,
            calls: AtomicU32::new(0),
        }
    }

    /// Replay the same outcome on every attempt.
    pub fn always(outcome: ProbeOutcome) -> Self {
        Self::new(Vec::new(), outcome)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for ScriptedProber {
    async fn probe(&self, _target: &ProbeTarget, _attempt_timeout: Duration) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
