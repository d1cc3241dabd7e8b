//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config/conveyor.toml.
//! The per-chain endpoint/router table is compiled in and never configured here.

use std::path::Path;
use std::time::Duration;

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::adapters::conveyor::ConveyorConfig;
use crate::domain::{slippage_to_bps, DEFAULT_BASE_URL, DEFAULT_SLIPPAGE_PCT};

/// Env var that overrides `conveyor.api_url`
pub const API_URL_ENV: &str = "CONVEYOR_API_URL";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure matching config/conveyor.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub conveyor: ConveyorSection,
    #[serde(default)]
    pub quote: QuoteSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Conveyor API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ConveyorSection {
    /// API base URL (chain path is appended)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Slippage tolerance in percent (0.5 = 0.5%)
    #[serde(default = "default_slippage_pct")]
    pub default_slippage_pct: Decimal,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_slippage_pct() -> Decimal {
    DEFAULT_SLIPPAGE_PCT
}

impl Default for ConveyorSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            default_slippage_pct: default_slippage_pct(),
        }
    }
}

impl ConveyorSection {
    /// Get API URL with environment variable override
    /// Checks CONVEYOR_API_URL env var first, falls back to config value
    pub fn get_api_url(&self) -> String {
        self.api_url_with_override(std::env::var(API_URL_ENV).ok())
    }

    fn api_url_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.api_url.clone())
    }

    /// Build the client configuration, applying the env override to the URL
    pub fn client_config(&self) -> Result<ConveyorConfig, ConfigError> {
        self.client_config_with_override(std::env::var(API_URL_ENV).ok())
    }

    fn client_config_with_override(
        &self,
        env_value: Option<String>,
    ) -> Result<ConveyorConfig, ConfigError> {
        let api_base_url = self.api_url_with_override(env_value);
        validate_api_url(&api_base_url)?;

        Ok(ConveyorConfig {
            api_base_url,
            timeout: Duration::from_secs(self.timeout_secs),
            default_slippage_pct: self.default_slippage_pct,
        })
    }
}

/// Client configuration from optional settings
///
/// Without a config file the built-in defaults apply, but `CONVEYOR_API_URL`
/// still takes precedence.
pub fn client_config(settings: Option<&Config>) -> Result<ConveyorConfig, ConfigError> {
    match settings {
        Some(config) => config.conveyor.client_config(),
        None => ConveyorSection::default().client_config(),
    }
}

fn validate_api_url(api_url: &str) -> Result<(), ConfigError> {
    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "api_url must be an http(s) URL, got '{}'",
            api_url
        )))
    }
}

/// Quote defaults section (optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteSection {
    /// Sender used to personalize quotes
    #[serde(default)]
    pub user_address: Option<Address>,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_api_url(&self.conveyor.api_url)?;

        if self.conveyor.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        slippage_to_bps(self.conveyor.default_slippage_pct)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
