//! Warm Statistics Module
//!
//! Tracks how many warm-ups were requested and how they ended.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::WarmOutcome;

// == Warm Stats ==
/// Tracks warm-up counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WarmStats {
    /// Number of `warm` calls
    pub requested: u64,
    /// Calls skipped because the URL was empty or malformed
    pub skipped: u64,
    /// Requests answered with a 2xx/3xx status
    pub warmed: u64,
    /// Requests that timed out, errored, or got an error status
    pub failed: u64,
    /// When the last successful warm-up finished
    pub last_warmed_at: Option<DateTime<Utc>>,
}

impl WarmStats {
    // == Constructor ==
    /// Creates a new WarmStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts one finished `warm` call.
    pub fn record(&mut self, outcome: &WarmOutcome) {
        self.requested += 1;
        match outcome {
            WarmOutcome::Skipped => self.skipped += 1,
            WarmOutcome::Warmed { .. } => {
                self.warmed += 1;
                self.last_warmed_at = Some(Utc::now());
            }
            WarmOutcome::Failed { .. } => self.failed += 1,
        }
    }

    // == Success Rate ==
    /// warmed / (warmed + failed), or 0.0 if no request has been sent.
    pub fn success_rate(&self) -> f64 {
        let sent = self.warmed + self.failed;
        if sent == 0 {
            0.0
        } else {
            self.warmed as f64 / sent as f64
        }
    }
}
