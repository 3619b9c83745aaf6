//! Language & Grammar sub-scorers.

use std::collections::HashSet;

use super::result::{round_to, Measurement, SubScore};
use super::tables::{GRAMMAR_BANDS, VOCABULARY_BANDS};
use super::text::Transcript;
use crate::collaborators::CollaboratorError;

pub const GRAMMAR_MAX: u8 = 10;
pub const VOCABULARY_MAX: u8 = 10;

/// `1 − min(errors_per_100 / 10, 1)`.
pub fn grammar_quality(errors_per_100_words: f64) -> f64 {
    1.0 - f64::min(errors_per_100_words / 10.0, 1.0)
}

/// Scores the grammar checker's issue count. A failed check falls to the lowest band.
pub fn grammar(transcript: &Transcript, issues: Result<usize, &CollaboratorError>) -> SubScore {
    let word_count = transcript.word_count();
    if word_count == 0 {
        return SubScore {
            name: "grammar",
            score: Some(0),
            max_score: GRAMMAR_MAX,
            measurement: Measurement::Grammar {
                error_count: Some(0),
                errors_per_100_words: Some(0.0),
                quality: None,
            },
            feedback: "Empty text.".to_string(),
        };
    }

    let error_count = match issues {
        Ok(count) => count,
        Err(err) => {
            return SubScore {
                name: "grammar",
                score: Some(GRAMMAR_BANDS.fallback.score),
                max_score: GRAMMAR_MAX,
                measurement: Measurement::Grammar {
                    error_count: None,
                    errors_per_100_words: None,
                    quality: None,
                },
                feedback: format!("Grammar checker unavailable ({err}); lowest band applied."),
            }
        }
    };

    let errors_per_100 = error_count as f64 * 100.0 / word_count as f64;
    let quality = grammar_quality(errors_per_100);
    let band = GRAMMAR_BANDS.classify(quality);

    SubScore {
        name: "grammar",
        score: Some(band.score),
        max_score: GRAMMAR_MAX,
        measurement: Measurement::Grammar {
            error_count: Some(error_count),
            errors_per_100_words: Some(round_to(errors_per_100, 2)),
            quality: Some(round_to(quality, 2)),
        },
        feedback: format!(
            "Grammar quality: {quality:.2} with {error_count} errors (~{errors_per_100:.2} errors per 100 words)."
        ),
    }
}

/// Type-token ratio: distinct tokens over total tokens.
pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}

pub fn vocabulary(transcript: &Transcript) -> SubScore {
    let tokens = transcript.tokens();
    if tokens.is_empty() {
        return SubScore {
            name: "vocabulary",
            score: Some(0),
            max_score: VOCABULARY_MAX,
            measurement: Measurement::Vocabulary {
                ttr: 0.0,
                distinct_words: 0,
                total_words: 0,
            },
            feedback: "Empty text.".to_string(),
        };
    }

    let distinct_words = tokens.iter().collect::<HashSet<_>>().len();
    let ttr = type_token_ratio(tokens);
    let band = VOCABULARY_BANDS.classify(ttr);

    SubScore {
        name: "vocabulary",
        score: Some(band.score),
        max_score: VOCABULARY_MAX,
        measurement: Measurement::Vocabulary {
            ttr: round_to(ttr, 3),
            distinct_words,
            total_words: tokens.len(),
        },
        feedback: format!(
            "TTR (type-token ratio) = {ttr:.2} ({distinct_words} distinct words out of {}).",
            tokens.len()
        ),
    }
}
