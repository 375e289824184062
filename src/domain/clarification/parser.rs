//! ResponseParser - turns a free-text answer into a typed field value.

use indexmap::IndexSet;

use crate::config::ThresholdConfig;
use crate::domain::extraction::PriceExtractor;
use crate::domain::foundation::{
    FeaturePreference, FieldName, PriceRange, ProductType, UsageContext, ValidationError,
};
use crate::domain::query::ParsedQuery;
use crate::domain::vocabulary::Vocabulary;

/// A parsed answer, ready to be merged into a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    ProductType(ProductType),
    PriceRange(PriceRange),
    UsageContext(Vec<UsageContext>),
    FeaturePreferences(IndexSet<FeaturePreference>),
}

impl ParsedResponse {
    pub fn field(&self) -> FieldName {
        match self {
            ParsedResponse::ProductType(_) => FieldName::ProductType,
            ParsedResponse::PriceRange(_) => FieldName::PriceRange,
            ParsedResponse::UsageContext(_) => FieldName::UsageContext,
            ParsedResponse::FeaturePreferences(_) => FieldName::FeaturePreferences,
        }
    }

    /// Merges the value into the query as a user-asserted field.
    pub(crate) fn apply_to(self, query: &mut ParsedQuery) {
        match self {
            ParsedResponse::ProductType(product) => query.assert_product_type(product),
            ParsedResponse::PriceRange(range) => query.assert_price_range(range),
            ParsedResponse::UsageContext(contexts) => query.assert_usage_context(contexts),
            ParsedResponse::FeaturePreferences(features) => {
                query.assert_feature_preferences(features)
            }
        }
    }
}

/// Parses answers per field type.
#[derive(Debug, Clone, Copy)]
pub struct ResponseParser<'a> {
    vocabulary: &'a Vocabulary,
    prices: PriceExtractor,
}

impl<'a> ResponseParser<'a> {
    pub fn new(vocabulary: &'a Vocabulary, thresholds: &ThresholdConfig) -> Self {
        Self {
            vocabulary,
            prices: PriceExtractor::new(thresholds.price_floor_ratio),
        }
    }

    /// Parses an answer for `field`.
    ///
    /// # Errors
    ///
    /// - `UnknownCategory` for a product or usage answer outside the closed set
    /// - `OutOfRange` for a negative or reversed budget
    /// - `InvalidFormat` for an empty answer or an unreadable budget
    pub fn parse(&self, field: FieldName, answer: &str) -> Result<ParsedResponse, ValidationError> {
        match field {
            FieldName::ProductType => self.parse_product(answer).map(ParsedResponse::ProductType),
            FieldName::PriceRange => self.prices.parse_answer(answer).map(ParsedResponse::PriceRange),
            FieldName::UsageContext => self.parse_usage(answer).map(ParsedResponse::UsageContext),
            FieldName::FeaturePreferences => self
                .parse_features(answer)
                .map(ParsedResponse::FeaturePreferences),
        }
    }

    fn parse_product(&self, answer: &str) -> Result<ProductType, ValidationError> {
        let answer = answer.trim();
        self.vocabulary
            .lookup_product(answer)
            .ok_or_else(|| ValidationError::unknown_category(FieldName::ProductType.as_str(), answer))
    }

    /// Every token must name a context; one unknown token rejects the answer.
    fn parse_usage(&self, answer: &str) -> Result<Vec<UsageContext>, ValidationError> {
        let mut contexts: IndexSet<UsageContext> = IndexSet::new();
        for token in tokens(answer) {
            let context = self.vocabulary.lookup_context(token).ok_or_else(|| {
                ValidationError::unknown_category(FieldName::UsageContext.as_str(), token)
            })?;
            contexts.insert(context);
        }
        if contexts.is_empty() {
            return Err(empty_answer(FieldName::UsageContext));
        }
        Ok(contexts.into_iter().collect())
    }

    /// Known spellings are canonicalized; anything else is kept verbatim.
    fn parse_features(&self, answer: &str) -> Result<IndexSet<FeaturePreference>, ValidationError> {
        let mut features = IndexSet::new();
        for token in tokens(answer) {
            let feature = match self.vocabulary.canonical_feature(token) {
                Some(canonical) => FeaturePreference::try_new(canonical)?,
                None => FeaturePreference::try_new(token)?,
            };
            features.insert(feature);
        }
        if features.is_empty() {
            return Err(empty_answer(FieldName::FeaturePreferences));
        }
        Ok(features)
    }
}

/// Comma-separated, trimmed, non-empty tokens.
fn tokens(answer: &str) -> impl Iterator<Item = &str> {
    answer.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn empty_answer(field: FieldName) -> ValidationError {
    ValidationError::invalid_format(field.as_str(), "answer is empty")
}
