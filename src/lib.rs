//! Purge Warmer - warms cache entries right after they are purged
//!
//! When an upstream purger invalidates a URL, one best-effort request is sent
//! to it so the cache regenerates the entry before a visitor asks for it.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod tasks;
pub mod warmer;

pub use api::AppState;
pub use config::Config;
pub use events::{PurgeEvents, PurgeListener};
pub use tasks::spawn_warmup;
pub use warmer::{WarmOutcome, Warmer, WarmerConfig};
