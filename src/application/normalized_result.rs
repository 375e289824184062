//! NormalizedResult - the outcome of one normalization call.

use serde::{Deserialize, Serialize};

use crate::domain::clarification::{
    ClarificationSession, ClarificationState, FieldError, Responses,
};
use crate::domain::foundation::ValidationError;
use crate::domain::query::{ClarificationRequest, ParsedQuery};
use crate::domain::validation::{RuleWarning, ValidationReport};

/// Everything a caller needs to show the user and to run the next round.
///
/// Built fresh on every call. To continue, merge new answers into
/// `applied_responses` and call again with the same text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub parsed_query: ParsedQuery,
    /// Requests answered so far, in answer order.
    pub clarifications_made: Vec<ClarificationRequest>,
    /// False only when `validation_errors` is non-empty.
    pub is_valid: bool,
    pub validation_errors: Vec<ValidationError>,
    pub validation_warnings: Vec<RuleWarning>,
    /// Answers that were rejected this call; their fields stay open.
    pub response_errors: Vec<FieldError>,
    /// Requests still open, in clarification order.
    pub pending_clarifications: Vec<ClarificationRequest>,
    pub applied_responses: Responses,
    pub state: ClarificationState,
}

impl NormalizedResult {
    pub(crate) fn assemble(
        session: &ClarificationSession,
        report: ValidationReport,
        response_errors: Vec<FieldError>,
        pending_clarifications: Vec<ClarificationRequest>,
    ) -> Self {
        Self {
            parsed_query: session.query().clone(),
            clarifications_made: session.clarifications_made().to_vec(),
            is_valid: report.is_valid(),
            validation_errors: report.errors,
            validation_warnings: report.warnings,
            response_errors,
            pending_clarifications,
            applied_responses: session.applied_responses().clone(),
            state: session.state(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.parsed_query.is_complete()
    }

    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Warning texts for display.
    pub fn warning_messages(&self) -> Vec<String> {
        self.validation_warnings.iter().map(ToString::to_string).collect()
    }
}
