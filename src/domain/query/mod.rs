//! Query module - The structured query and the requests raised about it.

mod clarification_request;
mod extracted_field;
mod parsed_query;

pub use clarification_request::ClarificationRequest;
pub use extracted_field::ExtractedField;
pub use parsed_query::{ParsedQuery, DEFAULT_EXTRACTION_THRESHOLD};
