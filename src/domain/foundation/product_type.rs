//! ProductType enum representing the 9 supported product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{FieldName, ValidationError};

/// The 9 product categories a query can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Headphones,
    Earbuds,
    Speakers,
    Microphone,
    Camera,
    Laptop,
    Phone,
    Tablet,
    Watch,
}

impl ProductType {
    /// Returns all product types in canonical order.
    pub fn all() -> &'static [ProductType] {
        &[
            ProductType::Headphones,
            ProductType::Earbuds,
            ProductType::Speakers,
            ProductType::Microphone,
            ProductType::Camera,
            ProductType::Laptop,
            ProductType::Phone,
            ProductType::Tablet,
            ProductType::Watch,
        ]
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Headphones => "headphones",
            ProductType::Earbuds => "earbuds",
            ProductType::Speakers => "speakers",
            ProductType::Microphone => "microphone",
            ProductType::Camera => "camera",
            ProductType::Laptop => "laptop",
            ProductType::Phone => "phone",
            ProductType::Tablet => "tablet",
            ProductType::Watch => "watch",
        }
    }

    /// Returns the fields beyond the product type that a query for this
    /// product is expected to carry.
    ///
    /// Absent expected fields count against the aggregate confidence;
    /// absent unexpected fields are left out of the average.
    pub fn expected_fields(&self) -> &'static [FieldName] {
        match self {
            ProductType::Headphones
            | ProductType::Earbuds
            | ProductType::Speakers
            | ProductType::Laptop => &[
                FieldName::PriceRange,
                FieldName::UsageContext,
                FieldName::FeaturePreferences,
            ],
            ProductType::Microphone
            | ProductType::Camera
            | ProductType::Phone
            | ProductType::Tablet
            | ProductType::Watch => &[FieldName::PriceRange],
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    /// Parses a canonical product name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ValidationError::unknown_category(FieldName::ProductType.as_str(), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_9_products() {
        assert_eq!(ProductType::all().len(), 9);
    }

    #[test]
    fn parses_canonical_names_case_insensitively() {
        assert_eq!("Laptop".parse::<ProductType>().unwrap(), ProductType::Laptop);
        assert_eq!(" earbuds ".parse::<ProductType>().unwrap(), ProductType::Earbuds);
    }

    #[test]
    fn unknown_name_is_unknown_category() {
        match "toaster".parse::<ProductType>() {
            Err(ValidationError::UnknownCategory { field, value }) => {
                assert_eq!(field, "product_type");
                assert_eq!(value, "toaster");
            }
            other => panic!("Expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for product in ProductType::all() {
            assert_eq!(product.to_string().parse::<ProductType>().unwrap(), *product);
        }
    }

    #[test]
    fn audio_products_expect_usage_and_features() {
        assert_eq!(ProductType::Headphones.expected_fields().len(), 3);
        assert_eq!(ProductType::Camera.expected_fields(), &[FieldName::PriceRange]);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&ProductType::Phone).unwrap(), "\"phone\"");
    }
}
