//! Clarification-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from driving a clarification session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClarificationError {
    /// The session is already resolved and takes no more responses.
    #[error("Clarification is already resolved")]
    AlreadyResolved,

    /// Acceptance was refused because the query holds structural errors.
    #[error("Cannot accept a query with {0} structural error(s)")]
    StructuralErrors(usize),

    /// The session is in a state that does not allow the operation.
    #[error("Invalid state: {0}")]
    InvalidTransition(String),
}

impl ClarificationError {
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        ClarificationError::InvalidTransition(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClarificationError::AlreadyResolved => ErrorCode::AlreadyResolved,
            ClarificationError::StructuralErrors(_) => ErrorCode::ValidationFailed,
            ClarificationError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<DomainError> for ClarificationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AlreadyResolved => ClarificationError::AlreadyResolved,
            _ => ClarificationError::InvalidTransition(err.message),
        }
    }
}

impl From<ClarificationError> for DomainError {
    fn from(err: ClarificationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_error_codes() {
        assert_eq!(
            ClarificationError::AlreadyResolved.code(),
            ErrorCode::AlreadyResolved
        );
        assert_eq!(
            ClarificationError::StructuralErrors(1).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn structural_errors_message_counts() {
        assert_eq!(
            ClarificationError::StructuralErrors(2).to_string(),
            "Cannot accept a query with 2 structural error(s)"
        );
    }

    #[test]
    fn transition_domain_error_converts() {
        let domain = DomainError::new(ErrorCode::InvalidStateTransition, "Cannot go back");
        assert_eq!(
            ClarificationError::from(domain),
            ClarificationError::InvalidTransition("Cannot go back".to_string())
        );
    }
}
