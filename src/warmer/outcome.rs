//! Warm Outcome Module
//!
//! What happened to a single warm-up. Callers are free to ignore it.

use serde::Serialize;

// == Warm Outcome ==
/// Result of one `warm` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WarmOutcome {
    /// Input was empty or not an http(s) URL; no request was sent
    Skipped,
    /// The target answered with a 2xx or 3xx status
    Warmed { status: u16 },
    /// DNS, connect, timeout, or an error status
    Failed { reason: String },
}

impl WarmOutcome {
    /// Classifies a response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        if status.is_success() || status.is_redirection() {
            WarmOutcome::Warmed {
                status: status.as_u16(),
            }
        } else {
            WarmOutcome::Failed {
                reason: format!("HTTP {}", status.as_u16()),
            }
        }
    }

    /// Classifies a transport error.
    pub fn from_error(err: &reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "timed out".to_string()
        } else if err.is_connect() {
            format!("connect failed: {}", err)
        } else if err.is_redirect() {
            "too many redirects".to_string()
        } else {
            err.to_string()
        };
        WarmOutcome::Failed { reason }
    }

    pub fn is_warmed(&self) -> bool {
        matches!(self, WarmOutcome::Warmed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, WarmOutcome::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WarmOutcome::Failed { .. })
    }
}
