//! Ambiguity analysis - deciding what to ask the user next.

mod analyzer;

pub use analyzer::AmbiguityAnalyzer;
