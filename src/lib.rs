//! Product Query Normalizer
//!
//! Converts free-text product search queries into a validated, structured
//! form, flags missing or uncertain information, and drives a turn-based
//! clarification exchange until the query is complete or accepted.

pub mod application;
pub mod config;
pub mod domain;
