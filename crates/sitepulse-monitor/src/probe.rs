//! Probe executor — one HTTP GET per site per cycle.
//!
//! A probe is a single attempt with a fixed timeout; there are no
//! retries. The outcome is an [`Observation`], never an error: transport
//! failures are part of the domain, not exceptional.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Fixed per-probe timeout covering the whole request.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Browser-compatible User-Agent so naive robot blocking does not show
/// up as a false outage.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; SitePulse/",
    env!("CARGO_PKG_VERSION"),
    "; +https://your-monitoring-domain.com)"
);

/// Raw transport-level outcome of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// The server answered with a status code in [200, 600).
    Reachable { code: u16 },
    /// Transport failure, timeout, or a status code outside [200, 600).
    Unreachable { reason: String },
}

/// Probe capability, so the cycle runner and its tests can substitute a
/// scripted prober for the real HTTP client.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Execute one GET against `url` and report the outcome.
    async fn probe(&self, url: &str) -> Observation;
}

/// Production prober backed by a `reqwest` client.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: &str) -> Observation {
        debug!(%url, "probing");
        match self.client.get(url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                // 4xx/5xx are a completed exchange, not a failure; the
                // classifier decides whether the code is a problem.
                if (200..600).contains(&code) {
                    Observation::Reachable { code }
                } else {
                    Observation::Unreachable {
                        reason: format!("status code {code} outside 200-599"),
                    }
                }
            }
            Err(e) => Observation::Unreachable {
                reason: failure_reason(&e),
            },
        }
    }
}

/// Short cause for an unreachable site: the root of the error chain, so
/// the alert reads "connection refused" instead of the full reqwest
/// wrapper chain.
fn failure_reason(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timed out".to_string();
    }
    let mut cause: &dyn std::error::Error = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
