use super::result::{round_to, Measurement, SubScore};
use super::tables::SENTIMENT_BANDS;
use crate::collaborators::CollaboratorError;

pub const ENGAGEMENT_MAX: u8 = 15;

/// Bands the positive-sentiment probability; a failed analysis falls to the lowest band.
pub fn engagement(positive_probability: Result<f64, &CollaboratorError>) -> SubScore {
    match positive_probability {
        Ok(probability) => {
            let band = SENTIMENT_BANDS.classify(probability);
            SubScore {
                name: "sentiment",
                score: Some(band.score),
                max_score: ENGAGEMENT_MAX,
                measurement: Measurement::Sentiment {
                    positive_probability: Some(round_to(probability, 3)),
                },
                feedback: format!("Positive sentiment probability = {probability:.2}."),
            }
        }
        Err(err) => SubScore {
            name: "sentiment",
            score: Some(SENTIMENT_BANDS.fallback.score),
            max_score: ENGAGEMENT_MAX,
            measurement: Measurement::Sentiment {
                positive_probability: None,
            },
            feedback: format!("Sentiment analyzer unavailable ({err}); lowest band applied."),
        },
    }
}
