//! NormalizeQueryHandler - Command handler for one normalization round.

use tracing::{debug, warn};

use crate::application::NormalizedResult;
use crate::config::ThresholdConfig;
use crate::domain::ambiguity::AmbiguityAnalyzer;
use crate::domain::clarification::{
    ClarificationError, ClarificationSession, FieldError, ResponseParser, Responses,
};
use crate::domain::extraction::ExtractionEngine;
use crate::domain::validation::BusinessRuleValidator;
use crate::domain::vocabulary::Vocabulary;

/// Command to normalize a query, optionally applying accumulated answers.
#[derive(Debug, Clone, Default)]
pub struct NormalizeQueryCommand {
    pub text: String,
    pub responses: Option<Responses>,
    /// Resolve despite open fields and warnings.
    pub accept: bool,
}

impl NormalizeQueryCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_responses(mut self, responses: Responses) -> Self {
        self.responses = Some(responses);
        self
    }

    pub fn accepting(mut self) -> Self {
        self.accept = true;
        self
    }
}

/// Handler running extract, clarify, validate, and re-analyze.
pub struct NormalizeQueryHandler<'a> {
    vocabulary: &'a Vocabulary,
    thresholds: &'a ThresholdConfig,
}

impl<'a> NormalizeQueryHandler<'a> {
    pub fn new(vocabulary: &'a Vocabulary, thresholds: &'a ThresholdConfig) -> Self {
        Self {
            vocabulary,
            thresholds,
        }
    }

    /// Always returns a result; malformed text and bad answers are reported
    /// inside it rather than as errors.
    pub fn handle(&self, cmd: NormalizeQueryCommand) -> NormalizedResult {
        let analyzer = AmbiguityAnalyzer::new(self.vocabulary);

        // 1. Extract
        let query = ExtractionEngine::new(self.vocabulary, self.thresholds).extract(&cmd.text);
        let mut session = ClarificationSession::start(query, &analyzer);

        // 2. Apply responses
        let response_errors = match cmd.responses {
            Some(responses) if !responses.is_empty() => {
                self.apply(&mut session, &responses, &analyzer)
            }
            _ => Vec::new(),
        };

        // 3. Forced acceptance
        if cmd.accept {
            if let Err(error) = session.accept() {
                warn!(%error, "acceptance refused");
            }
        }

        self.finish(&session, response_errors, &analyzer)
    }

    /// Applies another batch to an existing session.
    pub fn continue_session(
        &self,
        session: &mut ClarificationSession,
        responses: &Responses,
    ) -> Result<Vec<FieldError>, ClarificationError> {
        let analyzer = AmbiguityAnalyzer::new(self.vocabulary);
        let parser = ResponseParser::new(self.vocabulary, self.thresholds);
        session.apply_responses(responses, &parser, &analyzer)
    }

    /// Validates and re-analyzes a session into a result.
    pub fn finish(
        &self,
        session: &ClarificationSession,
        response_errors: Vec<FieldError>,
        analyzer: &AmbiguityAnalyzer<'_>,
    ) -> NormalizedResult {
        let report = BusinessRuleValidator::new(self.thresholds).validate(session.query());
        let pending = session.pending(analyzer);
        debug!(
            state = ?session.state(),
            pending = pending.len(),
            valid = report.is_valid(),
            "query normalized"
        );
        NormalizedResult::assemble(session, report, response_errors, pending)
    }

    fn apply(
        &self,
        session: &mut ClarificationSession,
        responses: &Responses,
        analyzer: &AmbiguityAnalyzer<'_>,
    ) -> Vec<FieldError> {
        let parser = ResponseParser::new(self.vocabulary, self.thresholds);
        match session.apply_responses(responses, &parser, analyzer) {
            Ok(errors) => errors,
            Err(ClarificationError::AlreadyResolved) => {
                debug!("query needed no clarification; responses ignored");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "responses not applied");
                Vec::new()
            }
        }
    }
}
