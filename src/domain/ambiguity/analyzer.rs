//! AmbiguityAnalyzer - proposes clarification requests for uncertain fields.

use std::fmt::Write as _;

use crate::domain::foundation::{FieldName, ProductType, UsageContext};
use crate::domain::query::{ClarificationRequest, ParsedQuery};
use crate::domain::validation::BudgetBand;
use crate::domain::vocabulary::Vocabulary;

/// Budget suggestions offered before the product is known.
const GENERIC_BUDGET_OPTIONS: &[&str] = &["1000 to 5000", "5000 to 20000", "20000 to 100000"];

/// Inspects a query and lists what still needs the user's input.
///
/// Only proposes: it never assigns a value to the query.
#[derive(Debug, Clone, Copy)]
pub struct AmbiguityAnalyzer<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> AmbiguityAnalyzer<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Clarification requests for every absent or low-confidence field.
    ///
    /// Ordered product type, budget, usage, then features, since budget and
    /// feature suggestions depend on the product.
    pub fn analyze(&self, query: &ParsedQuery) -> Vec<ClarificationRequest> {
        FieldName::ALL
            .into_iter()
            .filter(|field| query.needs_clarification(*field))
            .map(|field| self.request_for(query, field))
            .collect()
    }

    /// Fields needing clarification, in request order.
    pub fn ambiguous_fields(query: &ParsedQuery) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| query.needs_clarification(*field))
            .collect()
    }

    fn request_for(&self, query: &ParsedQuery, field: FieldName) -> ClarificationRequest {
        let product = query.product_type();
        let current = query.display_value(field);

        let question = match &current {
            Some(value) => format!(
                "We read your {} as \"{}\". {}",
                field.label().to_lowercase(),
                value,
                Self::question(field, product)
            ),
            None => Self::question(field, product),
        };

        ClarificationRequest::new(field, question)
            .with_current_value(current)
            .with_options(self.options(field, product))
    }

    fn question(field: FieldName, product: Option<ProductType>) -> String {
        match (field, product) {
            (FieldName::ProductType, _) => "What type of product are you looking for?".to_string(),
            (FieldName::PriceRange, Some(p)) => format!("What is your budget for the {}?", p),
            (FieldName::PriceRange, None) => "What is your budget?".to_string(),
            (FieldName::UsageContext, Some(p)) => format!("Where will you mainly use the {}?", p),
            (FieldName::UsageContext, None) => "Where will you mainly use it?".to_string(),
            (FieldName::FeaturePreferences, Some(p)) => {
                format!("Which features matter most in your {}?", p)
            }
            (FieldName::FeaturePreferences, None) => {
                "Which features matter most to you?".to_string()
            }
        }
    }

    fn options(&self, field: FieldName, product: Option<ProductType>) -> Vec<String> {
        match field {
            FieldName::ProductType => ProductType::all()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            FieldName::PriceRange => match product {
                Some(p) => BudgetBand::for_product(p).tier_labels(),
                None => GENERIC_BUDGET_OPTIONS.iter().map(|s| s.to_string()).collect(),
            },
            FieldName::UsageContext => UsageContext::all()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            FieldName::FeaturePreferences => self
                .vocabulary
                .features_for(product)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// A short, multi-line description of what was understood and what is missing.
    pub fn summary(&self, query: &ParsedQuery) -> String {
        let mut out = String::new();
        for field in FieldName::ALL {
            let line = match query.display_value(field) {
                Some(value) => format!(
                    "{}: {} ({})",
                    field.label(),
                    value,
                    query.field_confidence(field)
                ),
                None => format!("{}: not specified", field.label()),
            };
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out, "Overall confidence: {}", query.confidence_score());

        let pending = Self::ambiguous_fields(query);
        if pending.is_empty() {
            out.push_str("Nothing left to clarify");
        } else {
            let labels: Vec<&str> = pending.iter().map(FieldName::label).collect();
            let _ = write!(out, "Needs clarification: {}", labels.join(", "));
        }
        out
    }
}
