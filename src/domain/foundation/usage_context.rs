//! UsageContext enum for where a product will be used.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{FieldName, ValidationError};

/// The 7 usage contexts a query can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageContext {
    Gym,
    Office,
    Home,
    Outdoor,
    Travel,
    Gaming,
    Professional,
}

impl UsageContext {
    /// Returns all usage contexts in canonical order.
    pub fn all() -> &'static [UsageContext] {
        &[
            UsageContext::Gym,
            UsageContext::Office,
            UsageContext::Home,
            UsageContext::Outdoor,
            UsageContext::Travel,
            UsageContext::Gaming,
            UsageContext::Professional,
        ]
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageContext::Gym => "gym",
            UsageContext::Office => "office",
            UsageContext::Home => "home",
            UsageContext::Outdoor => "outdoor",
            UsageContext::Travel => "travel",
            UsageContext::Gaming => "gaming",
            UsageContext::Professional => "professional",
        }
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UsageContext {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ValidationError::unknown_category(FieldName::UsageContext.as_str(), s))
    }
}
