//! ParsedQuery - the structured form of a free-text product query.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Confidence, FeaturePreference, FieldError, FieldName, PriceRange, ProductType, UsageContext,
    ValidationError,
};

use super::ExtractedField;

/// Default confidence a present field must reach to count as settled.
pub const DEFAULT_EXTRACTION_THRESHOLD: f64 = 0.65;

/// The structured representation of a product search query.
///
/// `missing_fields`, `confidence_score`, and `is_complete` are derived from
/// the field state and recomputed on every change; they are never set
/// directly. Outside construction, only the clarification controller mutates
/// a `ParsedQuery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParsedQueryParts")]
pub struct ParsedQuery {
    original_query: String,
    product_type: ExtractedField<ProductType>,
    price_range: ExtractedField<PriceRange>,
    usage_context: ExtractedField<Vec<UsageContext>>,
    feature_preferences: ExtractedField<IndexSet<FeaturePreference>>,
    completeness_threshold: Confidence,
    violations: Vec<FieldError>,
    confidence_score: Confidence,
    missing_fields: Vec<FieldName>,
    is_complete: bool,
}

/// The stored, non-derived part of a `ParsedQuery`.
#[derive(Deserialize)]
struct ParsedQueryParts {
    original_query: String,
    #[serde(default)]
    product_type: ExtractedField<ProductType>,
    #[serde(default)]
    price_range: ExtractedField<PriceRange>,
    #[serde(default)]
    usage_context: ExtractedField<Vec<UsageContext>>,
    #[serde(default)]
    feature_preferences: ExtractedField<IndexSet<FeaturePreference>>,
    #[serde(default = "default_threshold")]
    completeness_threshold: Confidence,
    #[serde(default)]
    violations: Vec<FieldError>,
}

fn default_threshold() -> Confidence {
    Confidence::new(DEFAULT_EXTRACTION_THRESHOLD)
}

impl From<ParsedQueryParts> for ParsedQuery {
    fn from(parts: ParsedQueryParts) -> Self {
        let mut query = ParsedQuery::new(parts.original_query, parts.completeness_threshold)
            .with_product_type(parts.product_type)
            .with_price_range(parts.price_range)
            .with_usage_context(parts.usage_context)
            .with_feature_preferences(parts.feature_preferences);
        query.violations = parts.violations;
        query
    }
}

impl ParsedQuery {
    /// Creates a query with every field absent.
    pub fn new(original_query: impl Into<String>, completeness_threshold: Confidence) -> Self {
        let mut query = Self {
            original_query: original_query.into(),
            product_type: ExtractedField::absent(),
            price_range: ExtractedField::absent(),
            usage_context: ExtractedField::absent(),
            feature_preferences: ExtractedField::absent(),
            completeness_threshold,
            violations: Vec::new(),
            confidence_score: Confidence::NONE,
            missing_fields: Vec::new(),
            is_complete: false,
        };
        query.refresh();
        query
    }

    // ════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════

    pub fn with_product_type(mut self, field: ExtractedField<ProductType>) -> Self {
        self.product_type = field;
        self.refresh();
        self
    }

    pub fn with_price_range(mut self, field: ExtractedField<PriceRange>) -> Self {
        self.price_range = field;
        self.refresh();
        self
    }

    /// Sets usage contexts; an empty list is stored as absent.
    pub fn with_usage_context(mut self, field: ExtractedField<Vec<UsageContext>>) -> Self {
        self.usage_context = non_empty(field, |v| v.is_empty());
        self.refresh();
        self
    }

    /// Sets feature preferences; an empty set is stored as absent.
    pub fn with_feature_preferences(
        mut self,
        field: ExtractedField<IndexSet<FeaturePreference>>,
    ) -> Self {
        self.feature_preferences = non_empty(field, |v| v.is_empty());
        self.refresh();
        self
    }

    /// Records a structural violation hit while assembling a field value.
    ///
    /// The violation lasts until the user asserts a value for that field.
    pub fn with_violation(mut self, field: FieldName, violation: ValidationError) -> Self {
        self.violations.push(FieldError::new(field, violation));
        self
    }

    // ════════════════════════════════════════════════════════════════════════
    // Mutation (clarification controller only)
    // ════════════════════════════════════════════════════════════════════════

    pub(crate) fn assert_product_type(&mut self, product: ProductType) {
        self.product_type = ExtractedField::asserted(product);
        self.clear_violations(FieldName::ProductType);
        self.refresh();
    }

    pub(crate) fn assert_price_range(&mut self, range: PriceRange) {
        self.price_range = ExtractedField::asserted(range);
        self.clear_violations(FieldName::PriceRange);
        self.refresh();
    }

    pub(crate) fn assert_usage_context(&mut self, contexts: Vec<UsageContext>) {
        self.usage_context = non_empty(ExtractedField::asserted(contexts), |v| v.is_empty());
        self.clear_violations(FieldName::UsageContext);
        self.refresh();
    }

    pub(crate) fn assert_feature_preferences(&mut self, features: IndexSet<FeaturePreference>) {
        self.feature_preferences =
            non_empty(ExtractedField::asserted(features), |v| v.is_empty());
        self.clear_violations(FieldName::FeaturePreferences);
        self.refresh();
    }

    // ════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════

    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type.value().copied()
    }

    pub fn price_range(&self) -> Option<&PriceRange> {
        self.price_range.value()
    }

    pub fn usage_context(&self) -> &[UsageContext] {
        self.usage_context.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Features in first-appearance order.
    pub fn feature_preferences(&self) -> Vec<&FeaturePreference> {
        self.feature_preferences
            .value()
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.feature_preferences
            .value()
            .map_or(false, |set| set.iter().any(|f| f.as_str() == feature))
    }

    pub fn confidence_score(&self) -> Confidence {
        self.confidence_score
    }

    pub fn missing_fields(&self) -> &[FieldName] {
        &self.missing_fields
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn completeness_threshold(&self) -> Confidence {
        self.completeness_threshold
    }

    /// Structural violations recorded during assembly.
    pub fn violations(&self) -> &[FieldError] {
        &self.violations
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn is_present(&self, field: FieldName) -> bool {
        match field {
            FieldName::ProductType => self.product_type.is_present(),
            FieldName::PriceRange => self.price_range.is_present(),
            FieldName::UsageContext => self.usage_context.is_present(),
            FieldName::FeaturePreferences => self.feature_preferences.is_present(),
        }
    }

    pub fn field_confidence(&self, field: FieldName) -> Confidence {
        match field {
            FieldName::ProductType => self.product_type.confidence(),
            FieldName::PriceRange => self.price_range.confidence(),
            FieldName::UsageContext => self.usage_context.confidence(),
            FieldName::FeaturePreferences => self.feature_preferences.confidence(),
        }
    }

    /// A field needs clarification when absent or below the completeness threshold.
    pub fn needs_clarification(&self, field: FieldName) -> bool {
        !self.is_present(field) || !self.field_confidence(field).meets(self.completeness_threshold)
    }

    /// Human-readable rendering of a field's current value.
    pub fn display_value(&self, field: FieldName) -> Option<String> {
        match field {
            FieldName::ProductType => self.product_type().map(|p| p.to_string()),
            FieldName::PriceRange => self.price_range().map(|r| r.to_string()),
            FieldName::UsageContext => self.usage_context.value().map(|contexts| {
                contexts
                    .iter()
                    .map(UsageContext::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            FieldName::FeaturePreferences => self.feature_preferences.value().map(|features| {
                features
                    .iter()
                    .map(FeaturePreference::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Derived state
    // ════════════════════════════════════════════════════════════════════════

    fn clear_violations(&mut self, field: FieldName) {
        self.violations.retain(|v| v.field != field);
    }

    fn refresh(&mut self) {
        self.missing_fields = FieldName::ALL
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect();
        self.confidence_score = self.aggregate_confidence();
        self.is_complete = self.missing_fields.is_empty()
            && FieldName::ALL
                .into_iter()
                .all(|f| self.field_confidence(f).meets(self.completeness_threshold));
    }

    /// Mean confidence over the attempted fields.
    ///
    /// The product type always counts. Other fields count when present, or
    /// when absent but expected for the detected product type (as zero).
    fn aggregate_confidence(&self) -> Confidence {
        let expected = self
            .product_type()
            .map(|p| p.expected_fields())
            .unwrap_or(&[]);

        let attempted = FieldName::ALL.into_iter().filter(|f| {
            *f == FieldName::ProductType || self.is_present(*f) || expected.contains(f)
        });

        Confidence::mean(attempted.map(|f| self.field_confidence(f)))
    }
}

fn non_empty<T>(field: ExtractedField<T>, is_empty: impl Fn(&T) -> bool) -> ExtractedField<T> {
    if field.value().map_or(false, is_empty) {
        ExtractedField::absent()
    } else {
        field
    }
}
