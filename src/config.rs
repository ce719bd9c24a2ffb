//! Configuration management for `CycloneWatch`
//!
//! Handles loading configuration from files and environment variables and
//! validates all settings. Callers inject the resulting configuration into
//! the client and model constructors; nothing reads a global at use time.

use crate::CycloneWatchError;
use crate::risk::RiskWeights;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `CycloneWatch` library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycloneWatchConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Tunable risk model weights
    #[serde(default)]
    pub risk: RiskWeights,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key (optional for OpenMeteo)
    pub api_key: Option<String>,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CycloneWatchConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
            risk: RiskWeights::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl CycloneWatchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with CYCLONEWATCH_ prefix,
        // double underscore separating nested keys
        builder = builder.add_source(
            Environment::with_prefix("CYCLONEWATCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: CycloneWatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cyclonewatch").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(CycloneWatchError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        if self.weather.timeout_seconds > 300 {
            return Err(CycloneWatchError::config(
                "Weather request timeout must not exceed 300 seconds.",
            )
            .into());
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(CycloneWatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ))
            .into());
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(CycloneWatchError::config(format!(
                "Invalid log format '{}'. Must be 'pretty' or 'json'.",
                self.logging.format
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CycloneWatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timeout_seconds, 30);
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let mut config = CycloneWatchConfig::default();
        config.weather.api_key = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_timeout() {
        let mut config = CycloneWatchConfig::default();
        config.weather.timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = CycloneWatchConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut config = CycloneWatchConfig::default();
        config.weather.base_url = String::new();
        config.weather.timeout_seconds = 0;
        config.apply_defaults();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timeout_seconds, 30);
    }

    #[test]
    fn test_risk_weights_default_in_config() {
        let config = CycloneWatchConfig::default();
        assert_eq!(config.risk.coastal_points, 10);
        assert_eq!(config.risk.high_risk_points, 20);
    }
}
