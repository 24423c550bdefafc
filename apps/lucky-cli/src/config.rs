//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Values                                  | Default |
//! |-----------------------|-----------------------------------------|---------|
//! | `LUCKY_LOG_LEVEL`     | off, error, warn, info, debug, trace    | `warn`  |
//! | `LUCKY_OUTPUT_FORMAT` | text, json                              | `text`  |
//!
//! `RUST_LOG`, when set, takes precedence over `LUCKY_LOG_LEVEL`.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

use crate::cli::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log level when `RUST_LOG` is not set
    pub log_level: LevelFilter,

    /// Output format when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("LUCKY_LOG_LEVEL") {
            Some(raw) => LevelFilter::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidValue("LUCKY_LOG_LEVEL".to_string()))?,
            None => defaults.log_level,
        };

        let output_format = match lookup("LUCKY_OUTPUT_FORMAT") {
            Some(raw) => <OutputFormat as ValueEnum>::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidValue("LUCKY_OUTPUT_FORMAT".to_string()))?,
            None => defaults.output_format,
        };

        Ok(Self {
            log_level,
            output_format,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
