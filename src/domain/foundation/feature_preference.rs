//! FeaturePreference value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FieldName, ValidationError};

/// Maximum length of a single feature token.
pub const MAX_FEATURE_LENGTH: usize = 64;

/// A desired product feature, such as "waterproof".
///
/// Usually a canonical entry of the feature vocabulary, but user-supplied
/// tokens outside the vocabulary are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeaturePreference(String);

impl FeaturePreference {
    /// Creates a feature preference from a token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the token is empty, too long, or contains a comma
    /// (commas delimit features in responses).
    pub fn try_new(token: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = token.as_ref().trim();
        let field = FieldName::FeaturePreferences.as_str();
        if trimmed.is_empty() {
            return Err(ValidationError::invalid_format(field, "feature cannot be empty"));
        }
        if trimmed.chars().count() > MAX_FEATURE_LENGTH {
            return Err(ValidationError::invalid_format(
                field,
                format!("feature longer than {} characters", MAX_FEATURE_LENGTH),
            ));
        }
        if trimmed.contains(',') {
            return Err(ValidationError::invalid_format(
                field,
                "feature cannot contain a comma",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FeaturePreference {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FeaturePreference> for String {
    fn from(f: FeaturePreference) -> Self {
        f.0
    }
}

impl fmt::Display for FeaturePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
