// ABOUTME: HTTP health prober: one bounded GET per attempt.
// ABOUTME: Folds every HTTP and network failure into a ProbeOutcome variant.

use super::outcome::{ProbeOutcome, TransportKind};
use super::target::ProbeTarget;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// One bounded HTTP attempt against a target.
///
/// Implementations never fail for ordinary HTTP or network trouble; every
/// failure texture is folded into a [`ProbeOutcome`] variant so the retry
/// orchestrator can decide what to do with it.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, target: &ProbeTarget, attempt_timeout: Duration) -> ProbeOutcome;
}

#[async_trait]
impl<T: Probe + ?Sized> Probe for Arc<T> {
    async fn probe(&self, target: &ProbeTarget, attempt_timeout: Duration) -> ProbeOutcome {
        (**self).probe(target, attempt_timeout).await
    }
}

/// HTTP GET prober backed by reqwest.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, target: &ProbeTarget, attempt_timeout: Duration) -> ProbeOutcome {
        let url = target.url();

        // One budget governs connect, response, and body read. The timeout
        // drops the attempt future on expiry, which aborts the in-flight
        // request rather than leaving it dangling.
        let attempt = async {
            let response = self.client.get(&url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        match tokio::time::timeout(attempt_timeout, attempt).await {
            Err(_elapsed) => ProbeOutcome::TransportFailure {
                kind: TransportKind::RequestTimeout,
                message: format!("attempt timed out after {}ms", attempt_timeout.as_millis()),
            },
            Ok(Err(e)) => ProbeOutcome::TransportFailure {
                kind: classify_transport(&e),
                message: e.to_string(),
            },
            Ok(Ok((status, body))) => {
                if (200..300).contains(&status) {
                    ProbeOutcome::from_success(status, &body, target.expected_version())
                } else {
                    ProbeOutcome::UnhealthyStatus { status }
                }
            }
        }
    }
}

/// Walk the error source chain looking for connection-refused and timeout
/// patterns; everything else carries its raw message as `Other`.
fn classify_transport(err: &reqwest::Error) -> TransportKind {
    if err.is_timeout() {
        return TransportKind::RequestTimeout;
    }

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            match io.kind() {
                std::io::ErrorKind::ConnectionRefused => return TransportKind::ConnectionRefused,
                std::io::ErrorKind::TimedOut => return TransportKind::RequestTimeout,
                _ => {}
            }
        }
        source = cause.source();
    }

    TransportKind::Other
}
