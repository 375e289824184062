//! Validation - business rules applied after structural construction.
//!
//! Structural invariants are enforced by the value objects themselves. This
//! module adds advisory checks against per-product budget bands and surfaces
//! any structural violations recorded during assembly as errors.

mod budget;
mod validator;

pub use budget::{format_amount, nice_round, BudgetBand};
pub use validator::{BusinessRuleValidator, RuleWarning, ValidationReport};
