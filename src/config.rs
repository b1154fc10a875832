//! Client configuration
//!
//! Production defaults match the upstream RugCheck service; everything is
//! overridable for tests (short TTLs, local mock servers).

use std::time::Duration;
use tracing::info;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://api.rugcheck.xyz/v1";

/// Cached reports stay fresh for 1 hour
pub const CACHE_TTL: Duration = Duration::from_millis(3_600_000);

/// Minimum gap between upstream calls
pub const THROTTLE_DELAY: Duration = Duration::from_millis(500);

/// Per-request HTTP timeout
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`crate::RugwatchClient`] instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream API base URL (no trailing slash)
    pub base_url: String,
    /// Cache entry time-to-live
    pub ttl: Duration,
    /// Minimum delay between upstream call completions
    pub throttle_delay: Duration,
    /// HTTP request timeout
    pub http_timeout: Duration,
    /// User-Agent sent on every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ttl: CACHE_TTL,
            throttle_delay: THROTTLE_DELAY,
            http_timeout: HTTP_TIMEOUT,
            user_agent: format!("rugwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment.
    ///
    /// `RUGCHECK_BASE_URL` overrides the upstream endpoint; everything else
    /// keeps production defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("RUGCHECK_BASE_URL") {
            if !url.is_empty() {
                info!("🔧 RUGCHECK_BASE_URL override: {}", url);
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }

        config
    }

    /// Override the base URL (mock servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the throttle delay.
    pub fn with_throttle_delay(mut self, delay: Duration) -> Self {
        self.throttle_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.rugcheck.xyz/v1");
        assert_eq!(config.ttl, Duration::from_millis(3_600_000));
        assert_eq!(config.throttle_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9999")
            .with_ttl(Duration::from_secs(1))
            .with_throttle_delay(Duration::from_millis(10));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.ttl, Duration::from_secs(1));
        assert_eq!(config.throttle_delay, Duration::from_millis(10));
    }
}
