//! Rubric scoring for self-introduction speech transcripts.
//!
//! The [`rubric`] module holds the deterministic pipeline; [`collaborators`] defines the
//! grammar and sentiment contracts it consumes along with the default adapters.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod rubric;
pub mod telemetry;
