//! Request DTOs for the purge warmer API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for a purge notification (POST /purge)
///
/// A missing `url` reads as empty, which the warmer skips.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurgeRequest {
    /// The URL that was just purged
    #[serde(default)]
    pub url: String,
}
