//! API Handlers
//!
//! HTTP request handlers for each purge warmer endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::config::Config;
use crate::error::Result;
use crate::events::PurgeEvents;
use crate::models::{HealthResponse, PurgeRequest, PurgeResponse, StatsResponse};
use crate::warmer::{WarmTarget, Warmer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Purge listeners, the warmer among them
    pub events: Arc<PurgeEvents>,
    /// Kept for its stats
    pub warmer: Warmer,
}

impl AppState {
    /// Creates a new AppState with `warmer` subscribed to purge events.
    pub fn new(warmer: Warmer) -> Self {
        let mut events = PurgeEvents::new();
        events.subscribe(Arc::new(warmer.clone()));
        Self {
            events: Arc::new(events),
            warmer,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let warmer = Warmer::new(config.warmer_config()?)?;
        Ok(Self::new(warmer))
    }
}

/// Handler for POST /purge
///
/// Fires the purge event and answers right away. Unusable URLs are
/// acknowledged too; the purge source never sees a warm-up problem.
pub async fn purge_handler(
    State(state): State<AppState>,
    Json(req): Json<PurgeRequest>,
) -> (StatusCode, Json<PurgeResponse>) {
    let accepted = WarmTarget::parse(&req.url).is_some();
    state.events.after_purge_url(&req.url);

    (StatusCode::ACCEPTED, Json(PurgeResponse::new(req.url, accepted)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.warmer.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
