//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Extraction threshold must be in (0, 1], got {0}")]
    InvalidExtractionThreshold(f64),

    #[error("Price floor ratio must be in (0, 1], got {0}")]
    InvalidPriceFloorRatio(f64),

    #[error("Wide range factor must be greater than 1, got {0}")]
    InvalidWideRangeFactor(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
