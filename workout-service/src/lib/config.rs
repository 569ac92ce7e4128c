use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for workout-service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Bearer token configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    /// Lifetime of session tokens issued at login
    pub ttl_hours: i64,
    /// How often expired token rows are purged
    #[serde(default = "default_purge_interval_minutes")]
    pub purge_interval_minutes: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_purge_interval_minutes() -> u64 {
    60
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, TOKEN__TTL_HOURS, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
