//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

/// How the CLI prints a completed booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("OUTPUT_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (development, production)
    pub environment: String,

    /// Master switch for log output
    pub logging_enabled: bool,

    /// Only log while running in development
    pub logging_dev_only: bool,

    /// Booking summary format
    pub output_format: OutputFormat,

    /// Symbol printed before prices
    pub currency_symbol: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let logging_enabled = parse_bool(&lookup, "LOGGING_ENABLED", true)?;
        let logging_dev_only = parse_bool(&lookup, "LOGGING_DEV_ONLY", false)?;

        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let currency_symbol = lookup("CURRENCY_SYMBOL").unwrap_or_else(|| "£".to_string());

        Ok(Self {
            environment,
            logging_enabled,
            logging_dev_only,
            output_format,
            currency_symbol,
        })
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether log output should be produced at all
    pub fn logging_active(&self) -> bool {
        self.logging_enabled && (!self.logging_dev_only || self.is_development())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging_enabled: true,
            logging_dev_only: false,
            output_format: OutputFormat::Text,
            currency_symbol: "£".to_string(),
        }
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key)),
        },
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
