//! Responses - user answers keyed by field.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{DomainError, ErrorCode, FieldName};

/// A batch of answers, one per field at most.
///
/// Iterates in clarification order regardless of insertion order. Callers
/// accumulate answers across rounds and pass the whole map each time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(BTreeMap<FieldName, String>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the answer for a field.
    pub fn with(mut self, field: FieldName, answer: impl Into<String>) -> Self {
        self.insert(field, answer);
        self
    }

    pub fn insert(&mut self, field: FieldName, answer: impl Into<String>) {
        self.0.insert(field, answer.into());
    }

    /// Merges another batch on top of this one; later answers win.
    pub fn merge(&mut self, other: &Responses) {
        for (field, answer) in other.iter() {
            self.0.insert(field, answer.to_string());
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, answer)| (*field, answer.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds responses from wire field names.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if a key is not a known field name. This is
    /// caller misuse rather than bad user input, so it fails outward.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut responses = Self::new();
        for (key, answer) in pairs {
            let field: FieldName = key.as_ref().parse().map_err(|_| {
                DomainError::new(
                    ErrorCode::UnknownField,
                    format!("Unknown response field: {}", key.as_ref()),
                )
                .with_detail("field", key.as_ref())
            })?;
            responses.insert(field, answer);
        }
        Ok(responses)
    }
}

impl TryFrom<HashMap<String, String>> for Responses {
    type Error = DomainError;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

impl FromIterator<(FieldName, String)> for Responses {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_clarification_order() {
        let responses = Responses::new()
            .with(FieldName::FeaturePreferences, "waterproof")
            .with(FieldName::ProductType, "earbuds");
        let fields: Vec<_> = responses.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldName::ProductType, FieldName::FeaturePreferences]);
    }

    #[test]
    fn from_wire_names() {
        let map: HashMap<String, String> =
            [("price_range".to_string(), "5000".to_string())].into_iter().collect();
        let responses = Responses::try_from(map).unwrap();
        assert_eq!(responses.get(FieldName::PriceRange), Some("5000"));
    }

    #[test]
    fn unknown_field_name_fails_outward() {
        let err = Responses::from_pairs([("colour", "red")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.details.get("field").map(String::as_str), Some("colour"));
    }

    #[test]
    fn merge_overwrites_earlier_answers() {
        let mut first = Responses::new().with(FieldName::PriceRange, "5000");
        first.merge(&Responses::new().with(FieldName::PriceRange, "8000"));
        assert_eq!(first.get(FieldName::PriceRange), Some("8000"));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn serializes_as_plain_map() {
        let responses = Responses::new().with(FieldName::UsageContext, "gym");
        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"usage_context":"gym"}"#);
        let back: Responses = serde_json::from_str(&json).unwrap();
        assert_eq!(back, responses);
    }
}
