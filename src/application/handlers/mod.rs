//! Command and query handlers.
//!
//! - `normalize_query` - one normalization round, with optional answers
//! - `get_ambiguities` - read-only preview of clarification requests

mod get_ambiguities;
mod normalize_query;

pub use get_ambiguities::{GetAmbiguitiesHandler, GetAmbiguitiesQuery};
pub use normalize_query::{NormalizeQueryCommand, NormalizeQueryHandler};
