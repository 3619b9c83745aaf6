use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::content::{flow, keyword_presence, salutation};
use super::delivery::{clarity, speech_rate};
use super::engagement::engagement;
use super::language::{grammar, vocabulary};
use super::result::{round_to, CriterionResult, Diagnostic, RubricCategory, ScoreResult};
use super::text::Transcript;
use crate::collaborators::{CollaboratorError, GrammarChecker, SentimentAnalyzer};
use crate::config::ScoringConfig;

/// What a collaborator returned for one scoring call, tagged with the collaborator's name.
#[derive(Debug, Clone, PartialEq)]
pub struct CollaboratorOutcome<T> {
    pub collaborator: String,
    pub result: Result<T, CollaboratorError>,
}

impl<T> CollaboratorOutcome<T> {
    pub fn ok(collaborator: impl Into<String>, value: T) -> Self {
        Self {
            collaborator: collaborator.into(),
            result: Ok(value),
        }
    }

    pub fn failed(collaborator: impl Into<String>, error: CollaboratorError) -> Self {
        Self {
            collaborator: collaborator.into(),
            result: Err(error),
        }
    }

    fn diagnostic(&self, category: RubricCategory, sub_item: &'static str) -> Option<Diagnostic> {
        self.result.as_ref().err().map(|err| Diagnostic {
            category,
            sub_item,
            collaborator: self.collaborator.clone(),
            message: err.to_string(),
        })
    }
}

/// Aggregator that runs every sub-scorer over one transcript.
///
/// Collaborators are injected once and shared across requests; the scorer itself holds no
/// per-request state.
pub struct RubricScorer<G, S> {
    grammar: Arc<G>,
    sentiment: Arc<S>,
    config: ScoringConfig,
}

impl<G, S> RubricScorer<G, S>
where
    G: GrammarChecker + 'static,
    S: SentimentAnalyzer + 'static,
{
    pub fn new(grammar: Arc<G>, sentiment: Arc<S>, config: ScoringConfig) -> Self {
        Self {
            grammar,
            sentiment,
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a transcript with an optional speaking duration in seconds.
    ///
    /// Only a blank transcript is an error; collaborator failures degrade the result.
    pub async fn score(
        &self,
        text: &str,
        duration_seconds: Option<f64>,
    ) -> Result<ScoreResult, ScoringError> {
        let transcript = Transcript::parse(text)?;
        debug!(
            word_count = transcript.word_count(),
            has_duration = duration_seconds.is_some(),
            "scoring transcript"
        );

        let (grammar, sentiment) = tokio::join!(
            self.grammar_issue_count(&transcript),
            self.positive_probability(&transcript)
        );

        let result = assemble(&transcript, duration_seconds, grammar, sentiment);
        info!(
            overall = result.overall_score,
            degraded = result.degraded,
            "transcript scored"
        );
        Ok(result)
    }

    /// Release collaborator resources. Call once on shutdown.
    pub async fn close(&self) {
        self.grammar.close().await;
        self.sentiment.close().await;
    }

    async fn grammar_issue_count(&self, transcript: &Transcript) -> CollaboratorOutcome<usize> {
        let name = self.grammar.name().to_string();
        if transcript.word_count() == 0 {
            return CollaboratorOutcome::ok(name, 0);
        }

        let result = with_timeout(self.config.grammar_timeout, self.grammar.check(transcript.raw()))
            .await
            .map(|issues| issues.len());
        if let Err(err) = &result {
            warn!(collaborator = %name, error = %err, "grammar check failed; sub-score degraded");
        }

        CollaboratorOutcome {
            collaborator: name,
            result,
        }
    }

    async fn positive_probability(&self, transcript: &Transcript) -> CollaboratorOutcome<f64> {
        let name = self.sentiment.name().to_string();
        let result = with_timeout(
            self.config.sentiment_timeout,
            self.sentiment.polarity(transcript.raw()),
        )
        .await
        .and_then(|polarity| polarity.validate())
        .map(|polarity| polarity.positive);
        if let Err(err) = &result {
            warn!(collaborator = %name, error = %err, "sentiment analysis failed; sub-score degraded");
        }

        CollaboratorOutcome {
            collaborator: name,
            result,
        }
    }
}

async fn with_timeout<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, CollaboratorError>>,
) -> Result<T, CollaboratorError> {
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(CollaboratorError::Timeout(limit)))
}

/// Combine every sub-score into the final result. Pure given the collaborator outcomes.
pub fn assemble(
    transcript: &Transcript,
    duration_seconds: Option<f64>,
    grammar_issues: CollaboratorOutcome<usize>,
    sentiment: CollaboratorOutcome<f64>,
) -> ScoreResult {
    let criteria = vec![
        CriterionResult::from_parts(
            RubricCategory::ContentStructure,
            vec![
                salutation(transcript),
                keyword_presence(transcript),
                flow(transcript),
            ],
        ),
        CriterionResult::from_parts(
            RubricCategory::SpeechRate,
            vec![speech_rate(transcript.word_count(), duration_seconds)],
        ),
        CriterionResult::from_parts(
            RubricCategory::LanguageGrammar,
            vec![
                grammar(transcript, grammar_issues.result.as_ref().copied()),
                vocabulary(transcript),
            ],
        ),
        CriterionResult::from_parts(RubricCategory::Clarity, vec![clarity(transcript)]),
        CriterionResult::from_parts(
            RubricCategory::Engagement,
            vec![engagement(sentiment.result.as_ref().copied())],
        ),
    ];

    let diagnostics: Vec<Diagnostic> = [
        grammar_issues.diagnostic(RubricCategory::LanguageGrammar, "grammar"),
        sentiment.diagnostic(RubricCategory::Engagement, "sentiment"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let total: u16 = criteria
        .iter()
        .map(|criterion| u16::from(criterion.final_score))
        .sum();

    ScoreResult {
        overall_score: round_to(f64::from(total).clamp(0.0, 100.0), 2),
        word_count: transcript.word_count(),
        degraded: !diagnostics.is_empty(),
        diagnostics,
        criteria,
    }
}

/// Hard failure of the scoring entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
