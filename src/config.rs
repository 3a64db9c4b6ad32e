//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the store can hold
    pub capacity: usize,
    /// Eviction policy tag (`LRU`, `MRU`, `LFU` or `MFU`), validated when the store is built
    pub eviction_policy: String,
    /// TTL in seconds for PUT requests without an explicit TTL
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup interval in seconds, 0 disables the sweeper
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `EVICTION_POLICY` - Eviction policy tag (default: LRU)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 0, disabled)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            eviction_policy: env::var("EVICTION_POLICY").unwrap_or(defaults.eviction_policy),
            default_ttl: parse_var("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            eviction_policy: "LRU".to_string(),
            default_ttl: 300,
            server_port: 3000,
            cleanup_interval: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.eviction_policy, "LRU");
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 0);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests cannot race on it
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("EVICTION_POLICY");
        env::remove_var("DEFAULT_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.eviction_policy, "LRU");
        assert_eq!(config.cleanup_interval, 0);

        env::set_var("CACHE_CAPACITY", "64");
        env::set_var("EVICTION_POLICY", "mfu");
        env::set_var("DEFAULT_TTL", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.capacity, 64);
        assert_eq!(config.eviction_policy, "mfu");
        assert_eq!(config.default_ttl, 300);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("EVICTION_POLICY");
        env::remove_var("DEFAULT_TTL");
    }
}
