//! Warmer Client Module
//!
//! Sends the warm-up request and absorbs every way it can go wrong.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{redirect::Policy, Client, Method};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{WarmOutcome, WarmStats, WarmTarget, DEFAULT_MAX_REDIRECTS, DEFAULT_WARM_TIMEOUT_MS};
use crate::error::{Result, WarmerError};

// == Warm Method ==
/// HTTP method used for warm-ups.
///
/// GET makes the origin render the full page; HEAD is cheaper but some caches
/// will not store a body from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarmMethod {
    #[default]
    Get,
    Head,
}

impl WarmMethod {
    fn as_method(self) -> Method {
        match self {
            WarmMethod::Get => Method::GET,
            WarmMethod::Head => Method::HEAD,
        }
    }
}

impl FromStr for WarmMethod {
    type Err = WarmerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("GET") {
            Ok(WarmMethod::Get)
        } else if s.eq_ignore_ascii_case("HEAD") {
            Ok(WarmMethod::Head)
        } else {
            Err(WarmerError::InvalidConfig(format!(
                "Unsupported warm-up method '{}', expected GET or HEAD",
                s
            )))
        }
    }
}

// == Warmer Config ==
/// Settings for building a [`Warmer`].
#[derive(Debug, Clone)]
pub struct WarmerConfig {
    /// Whole-request timeout, body included
    pub timeout: Duration,
    pub method: WarmMethod,
    /// Redirect hops followed before giving up
    pub max_redirects: usize,
}

impl Default for WarmerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_WARM_TIMEOUT_MS),
            method: WarmMethod::Get,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

// == Warmer ==
/// Fires best-effort warm-up requests.
///
/// Cloning is cheap: clones share the connection pool and the stats.
#[derive(Debug, Clone)]
pub struct Warmer {
    client: Client,
    method: WarmMethod,
    timeout: Duration,
    stats: Arc<RwLock<WarmStats>>,
}

impl Warmer {
    // == Constructor ==
    /// Builds a warmer with its own HTTP client.
    pub fn new(config: WarmerConfig) -> Result<Self> {
        let redirect = if config.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(config.max_redirects)
        };

        // Warm-ups must reach the cache in front of the origin, not a forward proxy.
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect)
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            method: config.method,
            timeout: config.timeout,
            stats: Arc::new(RwLock::new(WarmStats::new())),
        })
    }

    /// Method every warm-up is sent with.
    pub fn method(&self) -> WarmMethod {
        self.method
    }

    /// Whole-request timeout of a warm-up.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // == Warm ==
    /// Sends one request to `url` and discards the response.
    ///
    /// Empty or malformed input sends nothing. Never fails and returns within
    /// the configured timeout; the outcome is only informational.
    pub async fn warm(&self, url: &str) -> WarmOutcome {
        let outcome = match WarmTarget::parse(url) {
            Some(target) => self.send(&target).await,
            None => {
                debug!("Skipping warm-up for non-http URL {:?}", url);
                WarmOutcome::Skipped
            }
        };

        self.stats.write().await.record(&outcome);
        outcome
    }

    async fn send(&self, target: &WarmTarget) -> WarmOutcome {
        let request = self
            .client
            .request(self.method.as_method(), target.url().clone());

        let mut response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let outcome = WarmOutcome::from_error(&err);
                if let WarmOutcome::Failed { reason } = &outcome {
                    warn!("Warm-up of {} failed: {}", target, reason);
                }
                return outcome;
            }
        };

        let outcome = WarmOutcome::from_status(response.status());

        // Drain the body so the backend fetch completes; a broken body does
        // not change the outcome once a status is in.
        loop {
            match response.chunk().await {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(err) => {
                    debug!("Stopped reading warm-up body from {}: {}", target, err);
                    break;
                }
            }
        }

        match &outcome {
            WarmOutcome::Warmed { status } => debug!("Warmed {} ({})", target, status),
            WarmOutcome::Failed { reason } => warn!("Warm-up of {} failed: {}", target, reason),
            WarmOutcome::Skipped => {}
        }
        outcome
    }

    // == Stats ==
    /// Snapshot of the warm-up counters.
    pub async fn stats(&self) -> WarmStats {
        self.stats.read().await.clone()
    }
}
