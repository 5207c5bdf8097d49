//! Response DTOs for the purge warmer API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::warmer::WarmStats;

/// Response body for a purge notification (POST /purge)
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    /// Human-readable summary
    pub message: String,
    /// The URL as received
    pub url: String,
    /// Whether the URL is something a warm-up will be sent to
    pub accepted: bool,
}

impl PurgeResponse {
    /// Creates a new PurgeResponse
    pub fn new(url: impl Into<String>, accepted: bool) -> Self {
        let url = url.into();
        let message = if accepted {
            format!("Warm-up of '{}' dispatched", url)
        } else {
            format!("'{}' is not an http(s) URL, warm-up skipped", url)
        };
        Self {
            message,
            url,
            accepted,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub requested: u64,
    pub skipped: u64,
    pub warmed: u64,
    pub failed: u64,
    /// warmed / (warmed + failed)
    pub success_rate: f64,
    /// RFC 3339 time of the last successful warm-up
    pub last_warmed_at: Option<String>,
}

impl From<WarmStats> for StatsResponse {
    fn from(stats: WarmStats) -> Self {
        Self {
            success_rate: stats.success_rate(),
            requested: stats.requested,
            skipped: stats.skipped,
            warmed: stats.warmed,
            failed: stats.failed,
            last_warmed_at: stats.last_warmed_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
