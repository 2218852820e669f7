//! Configuration management

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub calling: CallingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallingConfig {
    /// Maximum number of simultaneous live calls
    pub max_concurrent_calls: usize,
    /// Cadence of the shared duration ticker
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            calling: CallingConfig {
                max_concurrent_calls: 5,
                tick_interval_ms: 1000,
            },
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `dialdesk.toml` if present,
    /// then `DIALDESK_*` environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name("dialdesk").required(false))
            .add_source(config::Environment::with_prefix("DIALDESK").separator("__"))
            .build()?
            .try_deserialize()
    }
}
