//! GetAmbiguitiesHandler - Query handler previewing clarification requests.

use crate::config::ThresholdConfig;
use crate::domain::ambiguity::AmbiguityAnalyzer;
use crate::domain::extraction::ExtractionEngine;
use crate::domain::query::ClarificationRequest;
use crate::domain::vocabulary::Vocabulary;

/// Query for the clarification requests raised by a text.
#[derive(Debug, Clone)]
pub struct GetAmbiguitiesQuery {
    pub text: String,
}

impl GetAmbiguitiesQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Handler running extraction and analysis only. Applies nothing.
pub struct GetAmbiguitiesHandler<'a> {
    vocabulary: &'a Vocabulary,
    thresholds: &'a ThresholdConfig,
}

impl<'a> GetAmbiguitiesHandler<'a> {
    pub fn new(vocabulary: &'a Vocabulary, thresholds: &'a ThresholdConfig) -> Self {
        Self {
            vocabulary,
            thresholds,
        }
    }

    pub fn handle(&self, query: GetAmbiguitiesQuery) -> Vec<ClarificationRequest> {
        let parsed = ExtractionEngine::new(self.vocabulary, self.thresholds).extract(&query.text);
        AmbiguityAnalyzer::new(self.vocabulary).analyze(&parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldName;

    fn handle(text: &str) -> Vec<ClarificationRequest> {
        let thresholds = ThresholdConfig::default();
        GetAmbiguitiesHandler::new(Vocabulary::standard(), &thresholds)
            .handle(GetAmbiguitiesQuery::new(text))
    }

    #[test]
    fn gaming_laptop_has_two_ambiguities() {
        let fields: Vec<_> = handle("gaming laptop").iter().map(|r| r.field_name).collect();
        assert_eq!(fields, vec![FieldName::PriceRange, FieldName::FeaturePreferences]);
    }

    #[test]
    fn empty_text_asks_for_everything() {
        assert_eq!(handle("").len(), 4);
    }

    #[test]
    fn budget_suggestions_follow_detected_product() {
        let requests = handle("gaming laptop");
        assert_eq!(
            requests[0].options,
            vec!["30000 to 100000", "100000 to 200000", "200000 to 500000"]
        );
    }
}
