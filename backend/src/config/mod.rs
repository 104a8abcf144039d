//! Configuration management for the Nutrilog backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NL__)

use anyhow::Result;
use nutrilog_shared::parser::ParserOptions;
use nutrilog_shared::recommendations::DEFAULT_DAILY_CALORIE_TARGET;
use nutrilog_shared::validation::DEFAULT_MAX_INPUT_LEN;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Food input parser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Longest accepted food line, in characters
    pub max_input_len: usize,
    /// Read "roti 2" as two rotis instead of the historical reading
    pub correct_name_then_quantity: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            correct_name_then_quantity: false,
        }
    }
}

impl ParserConfig {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            correct_name_then_quantity: self.correct_name_then_quantity,
        }
    }
}

/// Recommendation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Used when a request carries no daily calorie target
    pub default_daily_calorie_target: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_daily_calorie_target: DEFAULT_DAILY_CALORIE_TARGET,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            parser: ParserConfig::default(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NL__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(
                config::File::with_name(&config_file)
                    .required(false)
            )
            // Override with environment variables (NL__ prefix)
            // e.g., NL__SERVER__PORT=9000 sets server.port
            .add_source(
                config::Environment::with_prefix("NL")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
