//! PriceRange value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A budget range in a single currency unit.
///
/// Invariant: `max_price >= min_price >= 0`, both finite. Amounts are
/// rounded to two decimals on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min_price: f64,
    max_price: f64,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min_price: f64,
    max_price: f64,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = ValidationError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.min_price, raw.max_price)
    }
}

impl PriceRange {
    /// Creates a range from literal bounds.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if either bound is not a finite number
    /// - `OutOfRange` if a bound is negative or `max_price < min_price`
    pub fn new(min_price: f64, max_price: f64) -> Result<Self, ValidationError> {
        if !min_price.is_finite() {
            return Err(ValidationError::invalid_format(
                "min_price",
                "must be a finite number",
            ));
        }
        if !max_price.is_finite() {
            return Err(ValidationError::invalid_format(
                "max_price",
                "must be a finite number",
            ));
        }
        if min_price < 0.0 {
            return Err(ValidationError::below_minimum("min_price", 0.0, min_price));
        }
        if max_price < 0.0 {
            return Err(ValidationError::below_minimum("max_price", 0.0, max_price));
        }
        let min_price = round_currency(min_price);
        let max_price = round_currency(max_price);
        if max_price < min_price {
            return Err(ValidationError::below_minimum("max_price", min_price, max_price));
        }
        Ok(Self {
            min_price,
            max_price,
        })
    }

    /// Creates a range from a single amount read as the upper bound, with the
    /// lower bound at `floor_ratio` of it.
    pub fn from_upper_bound(max_price: f64, floor_ratio: f64) -> Result<Self, ValidationError> {
        Self::new(max_price * floor_ratio, max_price)
    }

    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// Distance between the bounds.
    pub fn width(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// Returns true if the whole range lies within `[low, high]`.
    pub fn is_within(&self, low: f64, high: f64) -> bool {
        self.min_price >= low && self.max_price <= high
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} - {:.2}", self.min_price, self.max_price)
    }
}

/// Rounds a monetary amount to two decimals.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
