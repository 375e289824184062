//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, closed categories, and error types that form
//! the vocabulary of a normalized product query. Every value object here
//! validates its invariants in its only construction path.

mod confidence;
mod errors;
mod feature_preference;
mod field_name;
mod price_range;
mod product_type;
mod state_machine;
mod usage_context;

pub use confidence::Confidence;
pub use errors::{DomainError, ErrorCode, FieldError, ValidationError};
pub use feature_preference::{FeaturePreference, MAX_FEATURE_LENGTH};
pub use field_name::FieldName;
pub use price_range::{round_currency, PriceRange};
pub use product_type::ProductType;
pub use state_machine::StateMachine;
pub use usage_context::UsageContext;
