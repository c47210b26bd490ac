//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Per-request timeout for upstream sources in seconds
    pub request_timeout: u64,
    /// Attempts per source request when it times out
    pub max_retries: u32,
    /// Delay between attempts in milliseconds
    pub retry_delay_ms: u64,
    /// Number of draws returned when the query has no `limit`
    pub default_limit: usize,
    /// UTC offset of the draw calendar, in hours
    pub draw_utc_offset_hours: i32,
    /// Append the synthetic generator to the end of every chain
    pub synthetic_fallback: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 15)
    /// - `MAX_RETRIES` - Attempts on timeout (default: 3)
    /// - `RETRY_DELAY_MS` - Delay between attempts (default: 2000)
    /// - `DEFAULT_LIMIT` - Draws per response (default: 300)
    /// - `DRAW_UTC_OFFSET_HOURS` - Draw calendar zone (default: 8)
    /// - `SYNTHETIC_FALLBACK` - `true` to enable generated data (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            request_timeout: env_or("REQUEST_TIMEOUT", defaults.request_timeout),
            max_retries: env_or("MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("RETRY_DELAY_MS", defaults.retry_delay_ms),
            default_limit: env_or("DEFAULT_LIMIT", defaults.default_limit),
            draw_utc_offset_hours: env_or("DRAW_UTC_OFFSET_HOURS", defaults.draw_utc_offset_hours),
            synthetic_fallback: env::var("SYNTHETIC_FALLBACK")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.synthetic_fallback),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl: 300,
            request_timeout: 15,
            max_retries: 3,
            retry_delay_ms: 2000,
            default_limit: 300,
            draw_utc_offset_hours: 8,
            synthetic_fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(2));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(!config.synthetic_fallback);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL");
        env::remove_var("DEFAULT_LIMIT");
        env::remove_var("SYNTHETIC_FALLBACK");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.default_limit, 300);
        assert!(!config.synthetic_fallback);
    }
}
