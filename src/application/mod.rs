//! Application layer - the normalization pipeline and its entry points.
//!
//! Handlers follow the command/query split: `NormalizeQueryHandler` runs a
//! full round, `GetAmbiguitiesHandler` previews without applying anything.
//! `QueryNormalizer` wraps both behind one facade.

pub mod handlers;
mod normalized_result;
mod normalizer;

pub use handlers::{
    GetAmbiguitiesHandler, GetAmbiguitiesQuery, NormalizeQueryCommand, NormalizeQueryHandler,
};
pub use normalized_result::NormalizedResult;
pub use normalizer::QueryNormalizer;
