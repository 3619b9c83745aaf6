use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::collaborators::{
    CollaboratorError, GrammarChecker, GrammarIssue, Polarity, SentimentAnalyzer,
};
use crate::config::ScoringConfig;
use crate::rubric::{RubricScorer, Transcript};

pub(super) const ALEX_INTRO: &str = "Hi, my name is Alex, I am 20 years old, I study at university, I love my family, and in my free time I like to paint.";

pub(super) const ORDERED_INTRO: &str = "Good morning everyone. My name is Priya and I am 12 years old. I study in class 7 at Green Valley School. My hobby is painting and my family loves it. Thank you for listening.";

pub(super) fn transcript(text: &str) -> Transcript {
    Transcript::parse(text).expect("transcript is not blank")
}

/// `count` space-separated tokens: `w0 w1 ...` when distinct, otherwise `echo` repeated.
pub(super) fn words(count: usize, distinct: bool) -> String {
    (0..count)
        .map(|index| {
            if distinct {
                format!("w{index}")
            } else {
                "echo".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn test_config() -> ScoringConfig {
    ScoringConfig {
        grammar_timeout: Duration::from_millis(50),
        sentiment_timeout: Duration::from_millis(50),
        ..ScoringConfig::default()
    }
}

#[derive(Default)]
pub(super) struct StaticGrammar {
    pub(super) issues: usize,
    pub(super) calls: AtomicUsize,
    pub(super) closed: AtomicBool,
}

impl StaticGrammar {
    pub(super) fn with_issues(issues: usize) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }
}

#[async_trait]
impl GrammarChecker for StaticGrammar {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..self.issues)
            .map(|index| GrammarIssue {
                message: "Possible agreement error".to_string(),
                offset: index,
                length: 1,
                rule_id: "AGREEMENT".to_string(),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "static-grammar"
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

pub(super) struct FailingGrammar;

#[async_trait]
impl GrammarChecker for FailingGrammar {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "failing-grammar"
    }
}

pub(super) struct HangingGrammar;

#[async_trait]
impl GrammarChecker for HangingGrammar {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        std::future::pending().await
    }

    fn name(&self) -> &str {
        "hanging-grammar"
    }
}

#[derive(Default)]
pub(super) struct StaticSentiment {
    pub(super) positive: f64,
    pub(super) closed: AtomicBool,
}

impl StaticSentiment {
    pub(super) fn positive(positive: f64) -> Self {
        Self {
            positive,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SentimentAnalyzer for StaticSentiment {
    async fn polarity(&self, _text: &str) -> Result<Polarity, CollaboratorError> {
        Ok(Polarity {
            negative: 0.0,
            neutral: 1.0 - self.positive,
            positive: self.positive,
        })
    }

    fn name(&self) -> &str {
        "static-sentiment"
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

pub(super) struct MalformedSentiment;

#[async_trait]
impl SentimentAnalyzer for MalformedSentiment {
    async fn polarity(&self, _text: &str) -> Result<Polarity, CollaboratorError> {
        Ok(Polarity {
            negative: 1.0,
            neutral: 1.0,
            positive: 1.0,
        })
    }

    fn name(&self) -> &str {
        "malformed-sentiment"
    }
}

pub(super) fn scorer<G, S>(grammar: G, sentiment: S) -> RubricScorer<G, S>
where
    G: GrammarChecker + 'static,
    S: SentimentAnalyzer + 'static,
{
    RubricScorer::new(Arc::new(grammar), Arc::new(sentiment), test_config())
}
