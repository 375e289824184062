//! Clarification state machine.
//!
//! Defines the lifecycle of a clarification exchange and its valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a clarification exchange.
///
/// - `NeedsExtraction`: query just extracted, not yet analyzed
/// - `AwaitingResponses`: at least one field is ambiguous; responses may be applied
/// - `Resolved`: nothing missing, or acceptance was forced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClarificationState {
    #[default]
    NeedsExtraction,

    AwaitingResponses,

    Resolved,
}

impl ClarificationState {
    /// Returns true if response batches may be applied in this state.
    pub fn accepts_responses(&self) -> bool {
        matches!(self, Self::AwaitingResponses)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl StateMachine for ClarificationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ClarificationState::*;
        matches!(
            (self, target),
            // Analysis found something to ask
            (NeedsExtraction, AwaitingResponses) |
            // Nothing ambiguous after extraction
            (NeedsExtraction, Resolved) |
            // Another round of responses
            (AwaitingResponses, AwaitingResponses) |
            // Everything answered, or acceptance forced
            (AwaitingResponses, Resolved)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ClarificationState::*;
        match self {
            NeedsExtraction => vec![AwaitingResponses, Resolved],
            AwaitingResponses => vec![AwaitingResponses, Resolved],
            Resolved => vec![],
        }
    }
}
