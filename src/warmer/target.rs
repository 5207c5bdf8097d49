//! Warm Target Module
//!
//! Decides whether a purged URL string is something we can send a request to.

use std::fmt;

use url::Url;

// == Warm Target ==
/// A purged URL that passed the guard: absolute, `http` or `https`, with a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmTarget {
    url: Url,
}

impl WarmTarget {
    // == Parse ==
    /// Parses a purged URL string.
    ///
    /// Returns `None` for empty input and anything that is not a well-formed
    /// http(s) URL; such inputs are skipped rather than reported.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let url = Url::parse(raw).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Some(Self { url }),
            _ => None,
        }
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL as a string.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for WarmTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
