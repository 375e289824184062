//! ClarificationRequest - a question about one missing or uncertain field.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FieldName;

/// A request for the user to supply or confirm one field.
///
/// Regenerated on every analysis pass and never stored on the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub field_name: FieldName,
    pub field_label: String,
    /// The current, low-confidence value, if any.
    pub current_value: Option<String>,
    /// Suggested answers in display order.
    pub options: Vec<String>,
    pub question: String,
}

impl ClarificationRequest {
    /// Creates a request with no current value and no options.
    pub fn new(field_name: FieldName, question: impl Into<String>) -> Self {
        Self {
            field_name,
            field_label: field_name.label().to_string(),
            current_value: None,
            options: Vec::new(),
            question: question.into(),
        }
    }

    pub fn with_current_value(mut self, value: Option<String>) -> Self {
        self.current_value = value;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}
