//! Integration tests for the normalization pipeline.
//!
//! These tests drive the public API end to end:
//! 1. Extraction of the reference queries
//! 2. Clarification across one or more rounds
//! 3. Resuming a serialized session
//! 4. Forced acceptance and budget warnings

use std::collections::HashMap;

use product_query_normalizer::application::{NormalizedResult, QueryNormalizer};
use product_query_normalizer::config::{NormalizerConfig, ThresholdConfig};
use product_query_normalizer::domain::clarification::{
    ClarificationError, ClarificationSession, ClarificationState, Responses,
};
use product_query_normalizer::domain::foundation::{
    Confidence, ErrorCode, FieldName, ProductType, UsageContext,
};
use product_query_normalizer::domain::validation::RuleWarning;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn normalizer() -> QueryNormalizer {
    QueryNormalizer::default()
}

fn pending_fields(result: &NormalizedResult) -> Vec<FieldName> {
    result
        .pending_clarifications
        .iter()
        .map(|r| r.field_name)
        .collect()
}

fn price_bounds(result: &NormalizedResult) -> (f64, f64) {
    let range = result
        .parsed_query
        .price_range()
        .expect("price range should be present");
    (range.min_price(), range.max_price())
}

// =============================================================================
// Extraction Scenarios
// =============================================================================

#[test]
fn headphones_around_4k_for_gym() {
    let result = normalizer().normalize("Best headphones around 4k for gym", None);
    let query = &result.parsed_query;

    assert_eq!(query.product_type(), Some(ProductType::Headphones));
    assert_eq!(price_bounds(&result), (2800.0, 4000.0));
    assert!(query.usage_context().contains(&UsageContext::Gym));
    assert!(query.feature_preferences().is_empty());
    assert_eq!(query.missing_fields(), &[FieldName::FeaturePreferences]);
    assert!(!query.is_complete());
    assert!(result.is_valid);
    assert_eq!(pending_fields(&result), vec![FieldName::FeaturePreferences]);
}

#[test]
fn gaming_laptop_has_exactly_two_ambiguities() {
    let result = normalizer().normalize("gaming laptop", None);
    let query = &result.parsed_query;

    assert_eq!(query.product_type(), Some(ProductType::Laptop));
    assert!(query.missing_fields().contains(&FieldName::PriceRange));
    assert!(query.missing_fields().contains(&FieldName::FeaturePreferences));
    assert_eq!(normalizer().get_ambiguities("gaming laptop").len(), 2);
    assert_eq!(result.state, ClarificationState::AwaitingResponses);
}

#[test]
fn laptop_for_500_warns_without_invalidating() {
    let result = normalizer().normalize("laptop for 500", None);

    assert_eq!(result.parsed_query.product_type(), Some(ProductType::Laptop));
    assert_eq!(price_bounds(&result), (350.0, 500.0));
    assert!(result.validation_warnings.iter().any(|w| matches!(
        w,
        RuleWarning::BudgetTooLow {
            product: ProductType::Laptop,
            ..
        }
    )));
    assert!(result.validation_errors.is_empty());
    assert!(result.is_valid);
}

#[test]
fn reversed_range_is_a_structural_error() {
    let result = normalizer().normalize("bluetooth speaker 5000 to 2000", None);

    assert!(result.parsed_query.price_range().is_none());
    assert!(result
        .parsed_query
        .missing_fields()
        .contains(&FieldName::PriceRange));
    assert_eq!(result.validation_errors.len(), 1);
    assert!(!result.is_valid);
}

#[test]
fn small_unmarked_numbers_are_not_budgets() {
    for text in ["iphone 13 to 15 pro", "earbuds for 2-3 people", "i want a phone in 2024"] {
        let result = normalizer().normalize(text, None);
        assert!(result.parsed_query.price_range().is_none(), "{}", text);
        assert!(result.validation_warnings.is_empty(), "{}", text);
        assert!(result.is_valid, "{}", text);
    }
}

#[test]
fn overlong_number_is_ignored_not_an_error() {
    let text = format!("laptop {}", "9".repeat(400));
    let result = normalizer().normalize(&text, None);
    assert!(result.parsed_query.price_range().is_none());
    assert!(result.validation_errors.is_empty());
    assert!(result.is_valid);
}

// =============================================================================
// Clarification Rounds
// =============================================================================

#[test]
fn corrected_price_clears_reversed_range_error() {
    let text = "waterproof speaker for outdoor 5000 to 2000";
    let first = normalizer().normalize(text, None);
    assert!(!first.is_valid);
    assert_eq!(pending_fields(&first), vec![FieldName::PriceRange]);

    let responses = Responses::new().with(FieldName::PriceRange, "3000");
    let second = normalizer().normalize(text, Some(&responses));
    assert_eq!(price_bounds(&second), (2100.0, 3000.0));
    assert!(second.validation_errors.is_empty());
    assert!(second.is_valid);
    assert!(second.is_complete());
    assert!(second.is_resolved());
}

#[test]
fn feature_answer_completes_headphone_query() {
    let responses =
        Responses::new().with(FieldName::FeaturePreferences, "waterproof, noise-cancelling");
    let result = normalizer().normalize("Best headphones around 4k for gym", Some(&responses));
    let query = &result.parsed_query;

    let features: Vec<&str> = query.feature_preferences().iter().map(|f| f.as_str()).collect();
    assert_eq!(features, vec!["waterproof", "noise-cancelling"]);
    assert_eq!(
        query.field_confidence(FieldName::FeaturePreferences),
        Confidence::CERTAIN
    );
    assert!(query.missing_fields().is_empty());
    assert!(result.is_complete());
    assert_eq!(result.state, ClarificationState::Resolved);
    assert_eq!(result.clarifications_made.len(), 1);
    assert_eq!(
        result.clarifications_made[0].field_name,
        FieldName::FeaturePreferences
    );
}

#[test]
fn caller_accumulates_responses_across_calls() {
    let n = normalizer();
    let text = "something for gym under 3000";

    let first = n.normalize(text, None);
    assert_eq!(first.parsed_query.product_type(), None);
    assert_eq!(
        pending_fields(&first),
        vec![FieldName::ProductType, FieldName::FeaturePreferences]
    );

    let mut answers = Responses::new().with(FieldName::ProductType, "earbuds");
    let second = n.normalize(text, Some(&answers));
    assert_eq!(second.parsed_query.product_type(), Some(ProductType::Earbuds));
    assert_eq!(pending_fields(&second), vec![FieldName::FeaturePreferences]);

    answers.merge(&Responses::new().with(FieldName::FeaturePreferences, "wireless, bass"));
    let third = n.normalize(text, Some(&answers));
    assert!(third.is_complete());
    assert!(third.parsed_query.has_feature("bass boost"));
    assert_eq!(third.applied_responses, answers);
}

#[test]
fn rejected_answer_keeps_field_open() {
    let responses = Responses::new()
        .with(FieldName::PriceRange, "whatever is cheapest")
        .with(FieldName::FeaturePreferences, "touchscreen");
    let result = normalizer().normalize("gaming laptop", Some(&responses));

    assert_eq!(result.response_errors.len(), 1);
    assert_eq!(result.response_errors[0].field, FieldName::PriceRange);
    assert!(result.parsed_query.has_feature("touchscreen"));
    assert_eq!(pending_fields(&result), vec![FieldName::PriceRange]);
    assert!(result.is_valid);
}

#[test]
fn wire_keyed_responses_are_accepted() {
    let map: HashMap<String, String> = [
        ("price_range".to_string(), "60000 to 90000".to_string()),
        ("feature_preferences".to_string(), "lightweight".to_string()),
    ]
    .into_iter()
    .collect();

    let result = normalizer().normalize_with_map("gaming laptop", map).unwrap();
    assert_eq!(price_bounds(&result), (60000.0, 90000.0));
    assert!(result.is_complete());
}

#[test]
fn unknown_wire_key_is_caller_misuse() {
    let map: HashMap<String, String> =
        [("colour".to_string(), "red".to_string())].into_iter().collect();
    let err = normalizer().normalize_with_map("gaming laptop", map).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownField);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn serialized_session_resumes_where_it_left_off() {
    let n = normalizer();
    let mut session = n.start_session("gaming laptop");
    n.respond(
        &mut session,
        &Responses::new().with(FieldName::PriceRange, "80k"),
    )
    .unwrap();

    let stored = serde_json::to_string(&session).unwrap();
    let mut resumed: ClarificationSession = serde_json::from_str(&stored).unwrap();
    assert_eq!(resumed.state(), ClarificationState::AwaitingResponses);
    assert_eq!(
        resumed.query().price_range().map(|r| r.max_price()),
        Some(80000.0)
    );

    let errors = n
        .respond(
            &mut resumed,
            &Responses::new().with(FieldName::FeaturePreferences, "fast processor"),
        )
        .unwrap();
    let result = n.result_for(&resumed, errors);
    assert!(result.is_resolved());
    assert!(result.is_complete());
    assert_eq!(result.clarifications_made.len(), 2);
}

#[test]
fn resolved_session_refuses_further_responses() {
    let n = normalizer();
    let mut session = n.start_session("waterproof earbuds for gym under 3000");
    assert_eq!(session.state(), ClarificationState::Resolved);

    let err = n
        .respond(&mut session, &Responses::new().with(FieldName::PriceRange, "500"))
        .unwrap_err();
    assert_eq!(err, ClarificationError::AlreadyResolved);
}

#[test]
fn session_and_result_with_violation_survive_json() {
    let n = normalizer();
    let session = n.start_session("speaker 5000 to 2000");
    let stored = serde_json::to_string(&session).unwrap();
    let resumed: ClarificationSession = serde_json::from_str(&stored).unwrap();
    assert_eq!(resumed, session);

    let result = n.result_for(&resumed, Vec::new());
    let json = serde_json::to_string(&result).unwrap();
    let back: NormalizedResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.validation_errors.len(), 1);
}

#[test]
fn tampered_session_fails_to_deserialize() {
    let n = normalizer();
    let session = n.start_session("speaker 2000 to 5000");
    let stored = serde_json::to_string(&session).unwrap();
    let tampered = stored.replace("5000.0", "-5000.0");

    assert!(serde_json::from_str::<ClarificationSession>(&tampered).is_err());
}

// =============================================================================
// Acceptance and Configuration
// =============================================================================

#[test]
fn accepting_resolves_with_open_fields() {
    let result = normalizer().normalize_and_accept("gaming laptop", None);
    assert!(result.is_resolved());
    assert!(!result.is_complete());
    assert!(result.pending_clarifications.is_empty());
    assert_eq!(result.parsed_query.missing_fields().len(), 2);
}

#[test]
fn accepting_never_hides_structural_errors() {
    let result = normalizer().normalize_and_accept("speaker 5000 to 2000", None);
    assert!(!result.is_resolved());
    assert!(!result.is_valid);
}

#[test]
fn stricter_threshold_turns_bare_prices_into_questions() {
    let config = NormalizerConfig {
        thresholds: ThresholdConfig {
            extraction_threshold: 0.75,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = QueryNormalizer::new(&config).normalize("waterproof earbuds for gym 2500", None);

    assert!(result.parsed_query.price_range().is_some());
    assert!(!result.is_complete());
    assert_eq!(pending_fields(&result), vec![FieldName::PriceRange]);
    assert_eq!(
        result.pending_clarifications[0].current_value.as_deref(),
        Some("1750.00 - 2500.00")
    );
}

#[test]
fn result_serializes_with_snake_case_fields() {
    let result = normalizer().normalize("gaming laptop", None);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["state"], "awaiting_responses");
    assert_eq!(json["is_valid"], true);
    assert_eq!(json["parsed_query"]["product_type"]["value"], "laptop");
    assert_eq!(json["pending_clarifications"][0]["field_name"], "price_range");

    let back: NormalizedResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
