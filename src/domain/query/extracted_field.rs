//! ExtractedField - a value paired with the confidence it was extracted with.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

/// A possibly absent value and how confident the extractor is about it.
///
/// An absent value always carries zero confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawExtractedField<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ExtractedField<T> {
    value: Option<T>,
    confidence: Confidence,
}

#[derive(Deserialize)]
struct RawExtractedField<T> {
    value: Option<T>,
    #[serde(default)]
    confidence: Confidence,
}

impl<T> From<RawExtractedField<T>> for ExtractedField<T> {
    fn from(raw: RawExtractedField<T>) -> Self {
        match raw.value {
            Some(value) => Self::new(value, raw.confidence),
            None => Self::absent(),
        }
    }
}

impl<T> ExtractedField<T> {
    /// A field the extractor found nothing for.
    pub fn absent() -> Self {
        Self {
            value: None,
            confidence: Confidence::NONE,
        }
    }

    /// A field extracted with the given confidence.
    pub fn new(value: T, confidence: Confidence) -> Self {
        Self {
            value: Some(value),
            confidence,
        }
    }

    /// A value asserted by the user; always fully confident.
    pub fn asserted(value: T) -> Self {
        Self::new(value, Confidence::CERTAIN)
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for ExtractedField<T> {
    fn default() -> Self {
        Self::absent()
    }
}
