use regex::Regex;
use std::sync::LazyLock;

use super::ScoringError;

static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\w+"));

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("rubric pattern {pattern:?} is invalid: {err}"))
}

/// Lower-cased word tokens in reading order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|token| token.as_str().to_string())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}

/// True when any pattern occurs in `lower_text`; stops at the first hit.
pub fn matches_any(lower_text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(lower_text))
}

/// Earliest byte offset of any literal phrase in `lower_text`.
pub fn first_position(lower_text: &str, phrases: &[&str]) -> Option<usize> {
    phrases
        .iter()
        .filter_map(|phrase| lower_text.find(phrase))
        .min()
}

/// Normalized transcript shared by every sub-scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    raw: String,
    lower: String,
    tokens: Vec<String>,
}

impl Transcript {
    /// Rejects empty and whitespace-only input.
    pub fn parse(text: &str) -> Result<Self, ScoringError> {
        if text.trim().is_empty() {
            return Err(ScoringError::InvalidInput {
                reason: "transcript is empty".to_string(),
            });
        }

        Ok(Self {
            raw: text.to_string(),
            lower: text.to_lowercase(),
            tokens: tokenize(text),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}
