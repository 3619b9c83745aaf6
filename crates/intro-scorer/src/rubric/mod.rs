//! Self-introduction rubric: five categories worth 100 points in total.
//!
//! | Category            | Max | Sub-items                                   |
//! |---------------------|-----|---------------------------------------------|
//! | Content & Structure | 40  | salutation (5), keyword presence (30), flow (5) |
//! | Speech Rate         | 10  | words per minute                            |
//! | Language & Grammar  | 20  | grammar (10), vocabulary (10)               |
//! | Clarity             | 15  | filler-word rate                            |
//! | Engagement          | 15  | positive sentiment                          |
//!
//! Every sub-scorer maps a [`Transcript`] (plus duration or collaborator output) to a
//! [`SubScore`]; [`assemble`] groups them into a [`ScoreResult`].

pub mod bands;
pub mod content;
pub mod delivery;
mod engine;
pub mod engagement;
pub mod language;
mod result;
pub mod router;
pub mod tables;
mod text;

#[cfg(test)]
mod tests;

pub use engine::{assemble, CollaboratorOutcome, RubricScorer, ScoringError};
pub use result::{
    CriterionResult, Diagnostic, FlowPositions, Measurement, RubricCategory, SalutationTier,
    ScoreResult, SubScore,
};
pub use router::{scoring_router, ScoreRequest};
pub use text::{first_position, matches_any, tokenize, word_count, Transcript};
