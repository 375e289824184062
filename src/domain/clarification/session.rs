//! ClarificationSession - a resumable clarification exchange.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::ambiguity::AmbiguityAnalyzer;
use crate::domain::foundation::StateMachine;
use crate::domain::query::{ClarificationRequest, ParsedQuery};

use super::{ClarificationError, ClarificationState, FieldError, ResponseParser, Responses};

/// The current query plus everything applied to it so far.
///
/// Applying a response batch is the only mutation. The session serializes
/// in full, so a caller can store it between rounds and resume later;
/// deserialization re-validates every value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationSession {
    query: ParsedQuery,
    state: ClarificationState,
    #[serde(default)]
    applied: Responses,
    #[serde(default)]
    clarifications_made: Vec<ClarificationRequest>,
}

impl ClarificationSession {
    /// Starts a session from a freshly extracted query.
    pub fn start(query: ParsedQuery, analyzer: &AmbiguityAnalyzer<'_>) -> Self {
        let next = if analyzer.analyze(&query).is_empty() && !query.has_violations() {
            ClarificationState::Resolved
        } else {
            ClarificationState::AwaitingResponses
        };
        debug!(state = ?next, "clarification session started");
        Self {
            query,
            state: next,
            applied: Responses::new(),
            clarifications_made: Vec::new(),
        }
    }

    pub fn query(&self) -> &ParsedQuery {
        &self.query
    }

    pub fn into_query(self) -> ParsedQuery {
        self.query
    }

    pub fn state(&self) -> ClarificationState {
        self.state
    }

    /// Answers accepted so far, keyed by field.
    pub fn applied_responses(&self) -> &Responses {
        &self.applied
    }

    /// The requests that have been answered, in the order they were answered.
    pub fn clarifications_made(&self) -> &[ClarificationRequest] {
        &self.clarifications_made
    }

    /// Requests still open against the current query.
    pub fn pending(&self, analyzer: &AmbiguityAnalyzer<'_>) -> Vec<ClarificationRequest> {
        if self.state.is_resolved() {
            return Vec::new();
        }
        analyzer.analyze(&self.query)
    }

    /// Applies one batch of responses.
    ///
    /// Answers for fields that are not currently ambiguous are ignored. An
    /// answer that fails to parse or violates an invariant leaves its field
    /// unchanged and is reported as a `FieldError`; the rest of the batch
    /// still applies.
    ///
    /// # Errors
    ///
    /// - `AlreadyResolved` if the session is resolved
    /// - `InvalidTransition` if the session was never started
    pub fn apply_responses(
        &mut self,
        responses: &Responses,
        parser: &ResponseParser<'_>,
        analyzer: &AmbiguityAnalyzer<'_>,
    ) -> Result<Vec<FieldError>, ClarificationError> {
        if self.state.is_resolved() {
            return Err(ClarificationError::AlreadyResolved);
        }
        if !self.state.accepts_responses() {
            return Err(ClarificationError::invalid_transition(format!(
                "{:?} does not accept responses",
                self.state
            )));
        }

        let requests = analyzer.analyze(&self.query);
        let mut errors = Vec::new();

        for (field, answer) in responses.iter() {
            let Some(request) = requests.iter().find(|r| r.field_name == field) else {
                debug!(%field, "ignoring response for a field that is not ambiguous");
                continue;
            };

            match parser.parse(field, answer) {
                Ok(value) => {
                    value.apply_to(&mut self.query);
                    self.applied.insert(field, answer);
                    self.clarifications_made.push(request.clone());
                    debug!(%field, "response applied");
                }
                Err(error) => {
                    warn!(%field, %error, "response rejected");
                    errors.push(FieldError::new(field, error));
                }
            }
        }

        let next = if self.query.is_complete() && !self.query.has_violations() {
            ClarificationState::Resolved
        } else {
            ClarificationState::AwaitingResponses
        };
        self.state = self.state.transition_to(next)?;
        if self.state.is_resolved() {
            info!(rounds = self.clarifications_made.len(), "clarification resolved");
        }

        Ok(errors)
    }

    /// Resolves the session despite missing fields or rule warnings.
    ///
    /// # Errors
    ///
    /// Returns `StructuralErrors` if the query holds structural violations.
    pub fn accept(&mut self) -> Result<(), ClarificationError> {
        let violations = self.query.violations().len();
        if violations > 0 {
            return Err(ClarificationError::StructuralErrors(violations));
        }
        if self.state.is_resolved() {
            return Ok(());
        }
        self.state = self.state.transition_to(ClarificationState::Resolved)?;
        info!(
            missing = ?self.query.missing_fields(),
            "clarification accepted with open fields"
        );
        Ok(())
    }
}
