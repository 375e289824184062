//! Confidence value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How certain the extractor is about a value, between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// No confidence; used for absent fields.
    pub const NONE: Self = Self(0.0);

    /// Full confidence; used for user-asserted values.
    pub const CERTAIN: Self = Self(1.0);

    /// Creates a Confidence, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NONE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("confidence", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this confidence reaches the given threshold.
    pub fn meets(&self, threshold: Confidence) -> bool {
        self.0 >= threshold.0
    }

    /// Arithmetic mean of the given scores; zero when empty.
    pub fn mean<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = Confidence>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), c| (sum + c.0, count + 1));
        if count == 0 {
            return Self::NONE;
        }
        Self::new(sum / count as f64)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
