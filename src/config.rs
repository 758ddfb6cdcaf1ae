//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{ITEM_TTL_SECS, LIST_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// SQLite connection URL for the todo table
    pub database_url: String,
    /// Redis URL; the in-memory cache store is used when unset
    pub redis_url: Option<String>,
    /// TTL in seconds for single-todo cache entries
    pub item_ttl: u64,
    /// TTL in seconds for paginated list cache entries
    pub list_ttl: u64,
    /// In-memory store purge interval in seconds
    pub cleanup_interval: u64,
    /// Insert the sample todos when the table is empty
    pub seed_database: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `DATABASE_URL` - SQLite URL (default: `sqlite://todos.db?mode=rwc`)
    /// - `REDIS_URL` - Redis URL (default: unset, in-memory cache)
    /// - `ITEM_CACHE_TTL` - Item entry TTL in seconds (default: 300)
    /// - `LIST_CACHE_TTL` - List entry TTL in seconds (default: 60)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 1)
    /// - `SEED_DATABASE` - Seed sample todos (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            item_ttl: parse_var("ITEM_CACHE_TTL").unwrap_or(defaults.item_ttl),
            list_ttl: parse_var("LIST_CACHE_TTL").unwrap_or(defaults.list_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            seed_database: parse_var("SEED_DATABASE").unwrap_or(defaults.seed_database),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            database_url: "sqlite://todos.db?mode=rwc".to_string(),
            redis_url: None,
            item_ttl: ITEM_TTL_SECS,
            list_ttl: LIST_TTL_SECS,
            cleanup_interval: 1,
            seed_database: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.item_ttl, 300);
        assert_eq!(config.list_ttl, 60);
        assert_eq!(config.cleanup_interval, 1);
        assert!(config.redis_url.is_none());
        assert!(config.seed_database);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("REDIS_URL");
        env::remove_var("ITEM_CACHE_TTL");
        env::remove_var("LIST_CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("SEED_DATABASE");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.database_url, "sqlite://todos.db?mode=rwc");
        assert_eq!(config.item_ttl, 300);
        assert_eq!(config.list_ttl, 60);
        assert!(config.redis_url.is_none());
    }
}
