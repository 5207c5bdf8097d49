//! API Module
//!
//! HTTP handlers and routing for the purge warmer webhook.
//!
//! # Endpoints
//! - `POST /purge` - Notify that a URL was purged
//! - `GET /stats` - Get warm-up statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
