//! BusinessRuleValidator - advisory budget checks on a structurally valid query.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::config::ThresholdConfig;
use crate::domain::foundation::{PriceRange, ProductType, ValidationError};
use crate::domain::query::ParsedQuery;

use super::budget::{format_amount, BudgetBand};

/// An advisory finding that never blocks completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleWarning {
    /// The whole range sits below the product's band.
    BudgetTooLow {
        product: ProductType,
        max_price: f64,
        band_min: f64,
    },
    /// The whole range sits above the product's band.
    BudgetTooHigh {
        product: ProductType,
        min_price: f64,
        band_max: f64,
    },
    /// The range straddles one edge of the product's band.
    PartiallyOutsideBand {
        product: ProductType,
        min_price: f64,
        max_price: f64,
        band_min: f64,
        band_max: f64,
    },
    /// The range is wider than `factor` times its lower bound.
    UnusuallyWideRange {
        min_price: f64,
        max_price: f64,
        factor: f64,
    },
}

impl fmt::Display for RuleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleWarning::BudgetTooLow {
                product,
                max_price,
                band_min,
            } => write!(
                f,
                "Budget of {} is below the typical minimum of {} for {}",
                format_amount(*max_price),
                format_amount(*band_min),
                product
            ),
            RuleWarning::BudgetTooHigh {
                product,
                min_price,
                band_max,
            } => write!(
                f,
                "Budget of {} is above the typical maximum of {} for {}",
                format_amount(*min_price),
                format_amount(*band_max),
                product
            ),
            RuleWarning::PartiallyOutsideBand {
                product,
                min_price,
                max_price,
                band_min,
                band_max,
            } => write!(
                f,
                "Budget {} to {} extends outside the typical {} range of {} to {}",
                format_amount(*min_price),
                format_amount(*max_price),
                product,
                format_amount(*band_min),
                format_amount(*band_max)
            ),
            RuleWarning::UnusuallyWideRange {
                min_price,
                max_price,
                factor,
            } => write!(
                f,
                "Unusually wide range: {} to {} spans more than {}x its lower bound",
                format_amount(*min_price),
                format_amount(*max_price),
                format_amount(*factor)
            ),
        }
    }
}

/// Outcome of business-rule validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub warnings: Vec<RuleWarning>,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Valid unless at least one structural error was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a query against the budget band table.
#[derive(Debug, Clone, Copy)]
pub struct BusinessRuleValidator {
    wide_range_factor: f64,
}

impl BusinessRuleValidator {
    pub fn new(thresholds: &ThresholdConfig) -> Self {
        Self {
            wide_range_factor: thresholds.wide_range_factor,
        }
    }

    /// Validates the query. Reads only; never mutates.
    ///
    /// Structural violations recorded while the query was assembled become
    /// errors. Budget findings become warnings.
    pub fn validate(&self, query: &ParsedQuery) -> ValidationReport {
        let mut report = ValidationReport {
            warnings: Vec::new(),
            errors: query.violations().iter().map(|v| v.error.clone()).collect(),
        };

        if let Some(range) = query.price_range() {
            if let Some(product) = query.product_type() {
                report.warnings.extend(Self::check_band(product, range));
            }
            if let Some(warning) = self.check_width(range) {
                report.warnings.push(warning);
            }
        }

        for warning in &report.warnings {
            warn!(%warning, "business rule warning");
        }
        report
    }

    fn check_band(product: ProductType, range: &PriceRange) -> Option<RuleWarning> {
        let band = BudgetBand::for_product(product);
        if band.contains(range) {
            return None;
        }
        let warning = if range.max_price() < band.min_budget {
            RuleWarning::BudgetTooLow {
                product,
                max_price: range.max_price(),
                band_min: band.min_budget,
            }
        } else if range.min_price() > band.max_budget {
            RuleWarning::BudgetTooHigh {
                product,
                min_price: range.min_price(),
                band_max: band.max_budget,
            }
        } else {
            RuleWarning::PartiallyOutsideBand {
                product,
                min_price: range.min_price(),
                max_price: range.max_price(),
                band_min: band.min_budget,
                band_max: band.max_budget,
            }
        };
        Some(warning)
    }

    fn check_width(&self, range: &PriceRange) -> Option<RuleWarning> {
        if range.width() > self.wide_range_factor * range.min_price() {
            Some(RuleWarning::UnusuallyWideRange {
                min_price: range.min_price(),
                max_price: range.max_price(),
                factor: self.wide_range_factor,
            })
        } else {
            None
        }
    }

    /// A sentence describing the usual budget for a product.
    pub fn budget_recommendation(product: ProductType) -> String {
        let band = BudgetBand::for_product(product);
        let middle = band
            .tiers()
            .get(1)
            .map(|(low, high)| {
                format!(
                    "; most buyers spend {} to {}",
                    format_amount(*low),
                    format_amount(*high)
                )
            })
            .unwrap_or_default();
        format!(
            "Typical {} budgets run from {} to {}{}",
            product,
            format_amount(band.min_budget),
            format_amount(band.max_budget),
            middle
        )
    }
}

impl Default for BusinessRuleValidator {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}
