//! ExtractionEngine - keyword and pattern extraction from raw query text.

use indexmap::IndexSet;
use tracing::debug;

use crate::config::ThresholdConfig;
use crate::domain::foundation::{
    Confidence, FeaturePreference, FieldName, ProductType, UsageContext,
};
use crate::domain::query::{ExtractedField, ParsedQuery};
use crate::domain::vocabulary::{text, MatchKind, Vocabulary};

use super::price::PriceExtractor;

const KEYWORD_CONFIDENCE: f64 = 0.95;
const ABBREVIATION_CONFIDENCE: f64 = 0.85;
const USAGE_CONFIDENCE: f64 = 0.85;
const FEATURE_CONFIDENCE: f64 = 0.80;

/// A word-bounded keyword hit in normalized text.
#[derive(Debug, Clone, Copy)]
struct Hit<T> {
    value: T,
    start: usize,
    len: usize,
}

impl<T> Hit<T> {
    fn end(&self) -> usize {
        self.start + self.len
    }

    fn overlaps(&self, other: &Hit<T>) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Turns raw text into a [`ParsedQuery`].
///
/// Pure and deterministic: the same text, vocabulary, and thresholds always
/// produce the same query. Unparseable input yields a query with every field
/// absent rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionEngine<'a> {
    vocabulary: &'a Vocabulary,
    thresholds: &'a ThresholdConfig,
}

impl<'a> ExtractionEngine<'a> {
    pub fn new(vocabulary: &'a Vocabulary, thresholds: &'a ThresholdConfig) -> Self {
        Self {
            vocabulary,
            thresholds,
        }
    }

    pub fn extract(&self, raw: &str) -> ParsedQuery {
        let normalized = text::normalize(raw);
        let mut query = ParsedQuery::new(raw, self.thresholds.extraction_confidence())
            .with_product_type(self.extract_product(&normalized))
            .with_usage_context(self.extract_usage(&normalized))
            .with_feature_preferences(self.extract_features(&normalized));

        match PriceExtractor::new(self.thresholds.price_floor_ratio).extract(&normalized) {
            Ok(Some(found)) => {
                debug!(range = %found.range, form = ?found.form, "price extracted");
                query = query.with_price_range(ExtractedField::new(found.range, found.confidence()));
            }
            Ok(None) => {}
            Err(violation) => {
                debug!(%violation, "price in query violates range invariant");
                query = query.with_violation(FieldName::PriceRange, violation);
            }
        }

        debug!(
            product = ?query.product_type(),
            missing = ?query.missing_fields(),
            confidence = %query.confidence_score(),
            "query extracted"
        );
        query
    }

    /// The longest matching keyword wins; ties go to the earliest position.
    fn extract_product(&self, normalized: &str) -> ExtractedField<ProductType> {
        let best = self
            .vocabulary
            .product_keywords()
            .iter()
            .filter_map(|k| {
                text::find_phrase(normalized, &k.keyword).map(|start| (k, start))
            })
            .min_by(|(a, a_start), (b, b_start)| {
                b.keyword
                    .len()
                    .cmp(&a.keyword.len())
                    .then(a_start.cmp(b_start))
                    .then(a.product.cmp(&b.product))
            });

        match best {
            Some((keyword, _)) => {
                let confidence = match keyword.kind {
                    MatchKind::Keyword => KEYWORD_CONFIDENCE,
                    MatchKind::Abbreviation => ABBREVIATION_CONFIDENCE,
                };
                debug!(keyword = %keyword.keyword, product = %keyword.product, "product matched");
                ExtractedField::new(keyword.product, Confidence::new(confidence))
            }
            None => ExtractedField::absent(),
        }
    }

    fn extract_usage(&self, normalized: &str) -> ExtractedField<Vec<UsageContext>> {
        let hits = self.vocabulary.context_keywords().iter().flat_map(|k| {
            text::find_phrases(normalized, &k.keyword)
                .into_iter()
                .map(move |start| Hit {
                    value: k.context,
                    start,
                    len: k.keyword.len(),
                })
        });

        let contexts: IndexSet<UsageContext> =
            first_occurrences(hits).into_iter().map(|h| h.value).collect();
        ExtractedField::new(contexts.into_iter().collect(), Confidence::new(USAGE_CONFIDENCE))
    }

    /// Longer spellings claim their span first, so "wireless charging" does
    /// not also yield "wireless".
    fn extract_features(&self, normalized: &str) -> ExtractedField<IndexSet<FeaturePreference>> {
        let hits = self.vocabulary.features().iter().flat_map(|feature| {
            feature.spellings().flat_map(move |spelling| {
                text::find_phrases(normalized, spelling)
                    .into_iter()
                    .map(move |start| Hit {
                        value: feature.canonical.as_str(),
                        start,
                        len: spelling.len(),
                    })
            })
        });

        let features: IndexSet<FeaturePreference> = first_occurrences(hits)
            .into_iter()
            .filter_map(|hit| FeaturePreference::try_new(hit.value).ok())
            .collect();
        ExtractedField::new(features, Confidence::new(FEATURE_CONFIDENCE))
    }
}

/// Keeps non-overlapping hits, preferring longer ones, ordered by position.
fn first_occurrences<T: Copy>(hits: impl Iterator<Item = Hit<T>>) -> Vec<Hit<T>> {
    let mut candidates: Vec<Hit<T>> = hits.collect();
    candidates.sort_by(|a, b| b.len.cmp(&a.len).then(a.start.cmp(&b.start)));

    let mut accepted: Vec<Hit<T>> = Vec::new();
    for hit in candidates {
        if !accepted.iter().any(|kept| kept.overlaps(&hit)) {
            accepted.push(hit);
        }
    }
    accepted.sort_by_key(|h| h.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ParsedQuery {
        let thresholds = ThresholdConfig::default();
        ExtractionEngine::new(Vocabulary::standard(), &thresholds).extract(text)
    }

    fn feature_names(query: &ParsedQuery) -> Vec<&str> {
        query.feature_preferences().iter().map(|f| f.as_str()).collect()
    }

    mod product_type {
        use super::*;

        #[test]
        fn keyword_match_is_high_confidence() {
            let query = extract("Best headphones around 4k for gym");
            assert_eq!(query.product_type(), Some(ProductType::Headphones));
            assert_eq!(
                query.field_confidence(FieldName::ProductType),
                Confidence::new(0.95)
            );
        }

        #[test]
        fn abbreviation_match_is_lower_confidence() {
            let query = extract("good tws under 3000");
            assert_eq!(query.product_type(), Some(ProductType::Earbuds));
            assert_eq!(
                query.field_confidence(FieldName::ProductType),
                Confidence::new(0.85)
            );
        }

        #[test]
        fn longest_keyword_wins() {
            // "bluetooth speaker" beats the feature-like "bluetooth" and the shorter "speaker"
            let query = extract("waterproof bluetooth speaker");
            assert_eq!(query.product_type(), Some(ProductType::Speakers));
            assert_eq!(
                query.field_confidence(FieldName::ProductType),
                Confidence::new(0.95)
            );
        }

        #[test]
        fn longer_keyword_beats_earlier_shorter_one() {
            let query = extract("mic or condenser microphone");
            assert_eq!(query.product_type(), Some(ProductType::Microphone));
            assert_eq!(
                query.field_confidence(FieldName::ProductType),
                Confidence::new(0.95)
            );
        }

        #[test]
        fn no_keyword_means_absent() {
            let query = extract("something nice for my dad");
            assert_eq!(query.product_type(), None);
            assert!(query.missing_fields().contains(&FieldName::ProductType));
        }

        #[test]
        fn keywords_must_be_whole_words() {
            assert_eq!(extract("catalog browsing").product_type(), None);
        }
    }

    mod usage_context {
        use super::*;

        #[test]
        fn contexts_in_first_occurrence_order() {
            let query = extract("earbuds for travel and gym, mostly workout");
            assert_eq!(
                query.usage_context(),
                &[UsageContext::Travel, UsageContext::Gym]
            );
        }

        #[test]
        fn usage_absent_when_not_mentioned() {
            let query = extract("headphones");
            assert!(query.usage_context().is_empty());
            assert!(query.missing_fields().contains(&FieldName::UsageContext));
        }
    }

    mod features {
        use super::*;

        #[test]
        fn aliases_are_canonicalized_and_deduplicated() {
            let query = extract("headphones with anc, noise cancelling and bass");
            assert_eq!(feature_names(&query), vec!["noise-cancelling", "bass boost"]);
        }

        #[test]
        fn longer_spelling_claims_its_span() {
            let query = extract("phone with wireless charging");
            assert_eq!(feature_names(&query), vec!["wireless charging"]);
        }

        #[test]
        fn features_ordered_by_first_appearance() {
            let query = extract("waterproof lightweight earbuds with usb-c");
            assert_eq!(
                feature_names(&query),
                vec!["waterproof", "lightweight", "usb-c"]
            );
        }
    }

    mod whole_query {
        use super::*;

        #[test]
        fn headphones_around_4k_for_gym() {
            let query = extract("Best headphones around 4k for gym");
            let range = query.price_range().unwrap();
            assert_eq!((range.min_price(), range.max_price()), (2800.0, 4000.0));
            assert_eq!(query.usage_context(), &[UsageContext::Gym]);
            assert!(query.feature_preferences().is_empty());
            assert_eq!(query.missing_fields(), &[FieldName::FeaturePreferences]);
            assert_eq!(query.original_query(), "Best headphones around 4k for gym");
        }

        #[test]
        fn gaming_laptop_misses_price_and_features() {
            let query = extract("gaming laptop");
            assert_eq!(query.product_type(), Some(ProductType::Laptop));
            assert_eq!(
                query.missing_fields(),
                &[FieldName::PriceRange, FieldName::FeaturePreferences]
            );
        }

        #[test]
        fn empty_input_yields_empty_query() {
            let query = extract("   ");
            assert_eq!(query.missing_fields(), &FieldName::ALL);
            assert_eq!(query.confidence_score(), Confidence::NONE);
            assert!(query.violations().is_empty());
        }

        #[test]
        fn reversed_range_is_recorded_as_violation() {
            let query = extract("speaker 5000 to 2000");
            assert!(query.price_range().is_none());
            assert_eq!(query.violations().len(), 1);
        }

        #[test]
        fn custom_floor_ratio_is_used() {
            let thresholds = ThresholdConfig {
                price_floor_ratio: 0.5,
                ..Default::default()
            };
            let query =
                ExtractionEngine::new(Vocabulary::standard(), &thresholds).extract("phone under 20k");
            assert_eq!(query.price_range().unwrap().min_price(), 10000.0);
        }

        #[test]
        fn substituted_vocabulary_is_used() {
            let vocabulary = Vocabulary::empty().with_product_keyword(
                ProductType::Watch,
                "chronometer",
                MatchKind::Keyword,
            );
            let thresholds = ThresholdConfig::default();
            let query = ExtractionEngine::new(&vocabulary, &thresholds).extract("swiss chronometer");
            assert_eq!(query.product_type(), Some(ProductType::Watch));
            assert_eq!(
                ExtractionEngine::new(&vocabulary, &thresholds)
                    .extract("headphones")
                    .product_type(),
                None
            );
        }
    }
}
