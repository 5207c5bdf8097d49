//! Warmer Module
//!
//! Fires one best-effort request at a freshly purged URL so the cache in
//! front of it regenerates the entry.

mod client;
mod outcome;
mod stats;
mod target;


// Re-export public types
pub use client::{WarmMethod, Warmer, WarmerConfig};
pub use outcome::WarmOutcome;
pub use stats::WarmStats;
pub use target::WarmTarget;

// == Public Constants ==
/// Default whole-request timeout for a warm-up
pub const DEFAULT_WARM_TIMEOUT_MS: u64 = 1000;

/// Default number of redirect hops a warm-up follows
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
