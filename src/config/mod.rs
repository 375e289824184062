//! Normalizer configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUERY_NORMALIZER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use product_query_normalizer::config::NormalizerConfig;
//!
//! let config = NormalizerConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Extraction threshold: {}", config.thresholds.extraction_threshold);
//! ```

mod error;
mod logging;
mod thresholds;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use thresholds::ThresholdConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for all settings
pub const ENV_PREFIX: &str = "QUERY_NORMALIZER";

/// Root normalizer configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration with the documented constants.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NormalizerConfig {
    /// Confidence and budget heuristics
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NormalizerConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUERY_NORMALIZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QUERY_NORMALIZER__THRESHOLDS__EXTRACTION_THRESHOLD=0.7`
    /// - `QUERY_NORMALIZER__LOGGING__JSON=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top.
    ///
    /// The file format is inferred from its extension (TOML, YAML, JSON).
    /// A missing file is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(environment_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
