//! Domain layer containing the normalization logic and its value objects.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects, enums, errors, and the state machine trait
//! - `vocabulary` - Keyword tables for products, usage contexts, and features
//! - `query` - The parsed query and clarification requests
//! - `extraction` - Raw text to an initial parsed query
//! - `ambiguity` - Which fields still need the user's input
//! - `validation` - Budget band rules
//! - `clarification` - Applying answers across rounds

pub mod ambiguity;
pub mod clarification;
pub mod extraction;
pub mod foundation;
pub mod query;
pub mod validation;
pub mod vocabulary;
