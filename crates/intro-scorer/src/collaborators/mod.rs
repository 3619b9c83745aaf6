//! Contracts for the grammar-checking and sentiment engines the rubric delegates to.
//!
//! Both engines are expensive to construct, so callers build them once at startup and hand
//! them to [`crate::rubric::RubricScorer`] behind an `Arc`. Adapters that hold connections
//! release them in [`GrammarChecker::close`] / [`SentimentAnalyzer::close`].

mod language_tool;
mod vader;

pub use language_tool::LanguageToolClient;
pub use vader::VaderSentimentAnalyzer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One issue flagged by a grammar checker. The rubric only consumes the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    pub rule_id: String,
}

/// Sentiment distribution over negative, neutral and positive classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polarity {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl Polarity {
    const SUM_TOLERANCE: f64 = 0.01;

    /// Components must be finite probabilities summing to 1 (within rounding).
    pub fn validate(self) -> Result<Self, CollaboratorError> {
        let parts = [self.negative, self.neutral, self.positive];
        if parts
            .iter()
            .any(|value| !value.is_finite() || !(0.0..=1.0).contains(value))
        {
            return Err(CollaboratorError::Malformed(format!(
                "polarity components out of range: {self:?}"
            )));
        }

        let total: f64 = parts.iter().sum();
        if (total - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(CollaboratorError::Malformed(format!(
                "polarity components sum to {total:.3}"
            )));
        }

        Ok(self)
    }
}

#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError>;

    fn name(&self) -> &str;

    async fn close(&self) {}
}

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn polarity(&self, text: &str) -> Result<Polarity, CollaboratorError>;

    fn name(&self) -> &str;

    async fn close(&self) {}
}

/// Failure reported by (or on behalf of) an external collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("collaborator returned malformed data: {0}")]
    Malformed(String),
}
