//! Clarification - merging user answers into a query across rounds.
//!
//! The exchange is a sequence of independent calls: each carries the session
//! (or the accumulated responses) forward, and nothing blocks waiting for input.

mod errors;
mod parser;
mod responses;
mod session;
mod state;

pub use crate::domain::foundation::FieldError;
pub use errors::ClarificationError;
pub use parser::{ParsedResponse, ResponseParser};
pub use responses::Responses;
pub use session::ClarificationSession;
pub use state::ClarificationState;
