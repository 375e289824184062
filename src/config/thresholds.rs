//! Threshold configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Confidence;

/// Numeric constants shared by extraction, analysis, and validation.
///
/// Read once at startup and passed by reference; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThresholdConfig {
    /// Confidence a present field must reach to count as settled
    #[serde(default = "default_extraction_threshold")]
    pub extraction_threshold: f64,

    /// Lower bound of a single-amount budget, as a share of the amount
    #[serde(default = "default_price_floor_ratio")]
    pub price_floor_ratio: f64,

    /// A range wider than this multiple of its lower bound draws a warning
    #[serde(default = "default_wide_range_factor")]
    pub wide_range_factor: f64,
}

impl ThresholdConfig {
    /// The extraction threshold as a confidence value.
    pub fn extraction_confidence(&self) -> Confidence {
        Confidence::new(self.extraction_threshold)
    }

    /// Validate threshold configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.extraction_threshold > 0.0 && self.extraction_threshold <= 1.0) {
            return Err(ValidationError::InvalidExtractionThreshold(
                self.extraction_threshold,
            ));
        }
        if !(self.price_floor_ratio > 0.0 && self.price_floor_ratio <= 1.0) {
            return Err(ValidationError::InvalidPriceFloorRatio(self.price_floor_ratio));
        }
        if !(self.wide_range_factor > 1.0 && self.wide_range_factor.is_finite()) {
            return Err(ValidationError::InvalidWideRangeFactor(self.wide_range_factor));
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            extraction_threshold: default_extraction_threshold(),
            price_floor_ratio: default_price_floor_ratio(),
            wide_range_factor: default_wide_range_factor(),
        }
    }
}

fn default_extraction_threshold() -> f64 {
    0.65
}

fn default_price_floor_ratio() -> f64 {
    0.7
}

fn default_wide_range_factor() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults() {
        let config = ThresholdConfig::default();
        assert_eq!(config.extraction_threshold, 0.65);
        assert_eq!(config.price_floor_ratio, 0.7);
        assert_eq!(config.wide_range_factor, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_rejects_zero() {
        let config = ThresholdConfig {
            extraction_threshold: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidExtractionThreshold(0.0))
        );
    }

    #[test]
    fn test_floor_ratio_above_one_rejected() {
        let config = ThresholdConfig {
            price_floor_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPriceFloorRatio(_))
        ));
    }

    #[test]
    fn test_wide_range_factor_must_exceed_one() {
        let config = ThresholdConfig {
            wide_range_factor: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: ThresholdConfig =
            serde_json::from_str(r#"{"extraction_threshold": 0.8}"#).unwrap();
        assert_eq!(config.extraction_threshold, 0.8);
        assert_eq!(config.price_floor_ratio, 0.7);
    }
}
