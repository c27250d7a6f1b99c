//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// except the upstream API key which has no usable default.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached upstream responses
    pub cache_ttl: u64,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
    /// Path to the SQLite database holding saved builds
    pub database_path: String,
    /// API key sent to the upstream game-data API
    pub api_key: String,
    /// Base URL for per-user upstream endpoints
    pub upstream_base_url: String,
    /// Base URL for static metadata collections
    pub upstream_static_url: String,
    /// Timeout in seconds for outbound upstream calls
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 120)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 30)
    /// - `DATABASE_PATH` - SQLite file for saved builds (default: builds.db)
    /// - `GAME_API_KEY` - Upstream API key (default: empty)
    /// - `UPSTREAM_BASE_URL` - Per-user endpoint base URL
    /// - `UPSTREAM_STATIC_URL` - Static metadata base URL
    /// - `UPSTREAM_TIMEOUT` - Outbound request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "builds.db".to_string()),
            api_key: env::var("GAME_API_KEY").unwrap_or_default(),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "https://open.api.nexon.com/tfd/v1".to_string()),
            upstream_static_url: env::var("UPSTREAM_STATIC_URL")
                .unwrap_or_else(|_| "https://open.api.nexon.com/static/tfd/meta/en".to_string()),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl: 120,
            cleanup_interval: 30,
            database_path: "builds.db".to_string(),
            api_key: String::new(),
            upstream_base_url: "https://open.api.nexon.com/tfd/v1".to_string(),
            upstream_static_url: "https://open.api.nexon.com/static/tfd/meta/en".to_string(),
            upstream_timeout: 10,
        }
    }
}
