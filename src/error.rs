//! Error types for the purge warmer
//!
//! Warm-up failures never become errors; these only cover building a warmer.

use thiserror::Error;

// == Warmer Error Enum ==
/// Errors raised while configuring or constructing a [`crate::warmer::Warmer`].
#[derive(Error, Debug)]
pub enum WarmerError {
    /// A configuration value was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the purge warmer.
pub type Result<T> = std::result::Result<T, WarmerError>;
