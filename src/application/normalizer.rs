//! QueryNormalizer - the single entry point composing the pipeline.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::{NormalizerConfig, ThresholdConfig};
use crate::domain::ambiguity::AmbiguityAnalyzer;
use crate::domain::clarification::{ClarificationError, ClarificationSession, FieldError, Responses};
use crate::domain::extraction::ExtractionEngine;
use crate::domain::foundation::DomainError;
use crate::domain::query::{ClarificationRequest, ParsedQuery};
use crate::domain::validation::BusinessRuleValidator;
use crate::domain::vocabulary::Vocabulary;

use super::handlers::{
    GetAmbiguitiesHandler, GetAmbiguitiesQuery, NormalizeQueryCommand, NormalizeQueryHandler,
};
use super::NormalizedResult;

/// Text in, structured query out, with clarification across calls.
///
/// Holds only read-only tables and thresholds, so one instance can serve
/// concurrent callers. Each call is independent: the caller carries the
/// accumulated responses (or a serialized session) between rounds.
///
/// # Example
///
/// ```
/// use product_query_normalizer::application::QueryNormalizer;
/// use product_query_normalizer::domain::clarification::Responses;
/// use product_query_normalizer::domain::foundation::FieldName;
///
/// let normalizer = QueryNormalizer::default();
/// let first = normalizer.normalize("Best headphones around 4k for gym", None);
/// assert_eq!(first.parsed_query.missing_fields(), &[FieldName::FeaturePreferences]);
///
/// let answers = Responses::new().with(FieldName::FeaturePreferences, "waterproof, anc");
/// let second = normalizer.normalize("Best headphones around 4k for gym", Some(&answers));
/// assert!(second.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    vocabulary: Arc<Vocabulary>,
    thresholds: ThresholdConfig,
}

impl QueryNormalizer {
    /// Creates a normalizer with the built-in vocabulary.
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            vocabulary: Arc::new(Vocabulary::standard().clone()),
            thresholds: config.thresholds,
        }
    }

    /// Replaces the keyword tables.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Arc::new(vocabulary);
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Runs one round: extract, apply `responses` if given, validate, and
    /// re-analyze. Never fails; problems are reported inside the result.
    pub fn normalize(&self, text: &str, responses: Option<&Responses>) -> NormalizedResult {
        self.run(NormalizeQueryCommand {
            text: text.to_string(),
            responses: responses.cloned(),
            accept: false,
        })
    }

    /// Like [`normalize`](Self::normalize), then resolves despite open fields
    /// and warnings. Acceptance is refused while structural errors remain.
    pub fn normalize_and_accept(
        &self,
        text: &str,
        responses: Option<&Responses>,
    ) -> NormalizedResult {
        self.run(NormalizeQueryCommand {
            text: text.to_string(),
            responses: responses.cloned(),
            accept: true,
        })
    }

    /// Like [`normalize`](Self::normalize) with responses keyed by wire names.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if a key is not a field name.
    pub fn normalize_with_map(
        &self,
        text: &str,
        responses: HashMap<String, String>,
    ) -> Result<NormalizedResult, DomainError> {
        let responses = Responses::try_from(responses)?;
        Ok(self.normalize(text, Some(&responses)))
    }

    /// Extraction and analysis only.
    pub fn get_ambiguities(&self, text: &str) -> Vec<ClarificationRequest> {
        GetAmbiguitiesHandler::new(&self.vocabulary, &self.thresholds)
            .handle(GetAmbiguitiesQuery::new(text))
    }

    /// Extraction only.
    pub fn extract(&self, text: &str) -> ParsedQuery {
        ExtractionEngine::new(&self.vocabulary, &self.thresholds).extract(text)
    }

    /// Starts a resumable session for callers that keep state between rounds.
    pub fn start_session(&self, text: &str) -> ClarificationSession {
        ClarificationSession::start(self.extract(text), &AmbiguityAnalyzer::new(&self.vocabulary))
    }

    /// Applies one batch of responses to a session.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` once the session is resolved.
    pub fn respond(
        &self,
        session: &mut ClarificationSession,
        responses: &Responses,
    ) -> Result<Vec<FieldError>, ClarificationError> {
        self.handler().continue_session(session, responses)
    }

    /// Builds a result from a session's current state.
    pub fn result_for(
        &self,
        session: &ClarificationSession,
        response_errors: Vec<FieldError>,
    ) -> NormalizedResult {
        self.handler().finish(
            session,
            response_errors,
            &AmbiguityAnalyzer::new(&self.vocabulary),
        )
    }

    /// A human-readable description of how the text was understood.
    pub fn summarize(&self, text: &str) -> String {
        let query = self.extract(text);
        let mut summary = AmbiguityAnalyzer::new(&self.vocabulary).summary(&query);

        let report = BusinessRuleValidator::new(&self.thresholds).validate(&query);
        for error in &report.errors {
            let _ = write!(summary, "\nError: {}", error);
        }
        for warning in &report.warnings {
            let _ = write!(summary, "\nWarning: {}", warning);
        }
        if let Some(product) = query.product_type() {
            if query.price_range().is_none() {
                let _ = write!(
                    summary,
                    "\nTip: {}",
                    BusinessRuleValidator::budget_recommendation(product)
                );
            }
        }
        summary
    }

    fn run(&self, cmd: NormalizeQueryCommand) -> NormalizedResult {
        self.handler().handle(cmd)
    }

    fn handler(&self) -> NormalizeQueryHandler<'_> {
        NormalizeQueryHandler::new(&self.vocabulary, &self.thresholds)
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}
