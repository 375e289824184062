//! FieldName enum naming the clarifiable attributes of a query.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The attributes of a parsed query that can be missing or clarified.
///
/// The declaration order is the clarification priority: product type first,
/// because budget and feature suggestions depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    ProductType,
    PriceRange,
    UsageContext,
    FeaturePreferences,
}

impl FieldName {
    /// All fields in clarification order.
    pub const ALL: [FieldName; 4] = [
        FieldName::ProductType,
        FieldName::PriceRange,
        FieldName::UsageContext,
        FieldName::FeaturePreferences,
    ];

    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::ProductType => "product_type",
            FieldName::PriceRange => "price_range",
            FieldName::UsageContext => "usage_context",
            FieldName::FeaturePreferences => "feature_preferences",
        }
    }

    /// Returns the human-readable label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::ProductType => "Product Type",
            FieldName::PriceRange => "Budget",
            FieldName::UsageContext => "Usage Context",
            FieldName::FeaturePreferences => "Features",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| ValidationError::unknown_category("field_name", s))
    }
}
