//! Configuration Module
//!
//! Handles loading and managing server and warm-up configuration from
//! environment variables.

use std::env;
use std::time::Duration;

use crate::error::{Result, WarmerError};
use crate::warmer::{WarmMethod, WarmerConfig};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Warm-up request timeout in milliseconds
    pub warm_timeout_ms: u64,
    /// Warm-up request method, as given (`GET` or `HEAD`)
    pub warm_method: String,
    /// Redirect hops a warm-up request follows
    pub warm_max_redirects: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `WARM_TIMEOUT_MS` - Warm-up timeout in milliseconds (default: 1000)
    /// - `WARM_METHOD` - `GET` or `HEAD` (default: GET)
    /// - `WARM_MAX_REDIRECTS` - Redirect hops followed (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            warm_timeout_ms: env::var("WARM_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.warm_timeout_ms),
            warm_method: env::var("WARM_METHOD")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.warm_method),
            warm_max_redirects: env::var("WARM_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.warm_max_redirects),
        }
    }

    /// Builds the warmer settings, rejecting an unknown method or a zero timeout.
    pub fn warmer_config(&self) -> Result<WarmerConfig> {
        let method: WarmMethod = self.warm_method.parse()?;
        if self.warm_timeout_ms == 0 {
            return Err(WarmerError::InvalidConfig(
                "WARM_TIMEOUT_MS must be greater than zero".to_string(),
            ));
        }

        Ok(WarmerConfig {
            timeout: Duration::from_millis(self.warm_timeout_ms),
            method,
            max_redirects: self.warm_max_redirects,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            warm_timeout_ms: 1000,
            warm_method: "GET".to_string(),
            warm_max_redirects: 5,
        }
    }
}
