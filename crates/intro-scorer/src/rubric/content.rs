//! Content & Structure sub-scorers: salutation, keyword presence and flow.

use std::collections::BTreeMap;

use super::result::{FlowPositions, Measurement, SalutationTier, SubScore};
use super::tables::{
    CompiledTopic, EXCELLENT_SALUTATION_PATTERNS, FLOW_ADDITIONAL_DETAILS, FLOW_BASIC_DETAILS,
    FLOW_CLOSING, FLOW_SALUTATION, GOOD_SALUTATION_PATTERNS, GOOD_TO_HAVE_CAP,
    GOOD_TO_HAVE_PATTERNS, GOOD_TO_HAVE_POINTS, MUST_HAVE_CAP, MUST_HAVE_PATTERNS,
    MUST_HAVE_POINTS, NORMAL_SALUTATION_PATTERNS,
};
use super::text::{first_position, matches_any, Transcript};

pub const SALUTATION_MAX: u8 = 5;
pub const KEYWORD_PRESENCE_MAX: u8 = 30;
pub const FLOW_MAX: u8 = 5;

/// Tiers are checked from best to worst; the first tier with a hit wins.
pub fn salutation(transcript: &Transcript) -> SubScore {
    let lower = transcript.lower();
    let tier = if matches_any(lower, &EXCELLENT_SALUTATION_PATTERNS) {
        SalutationTier::Excellent
    } else if matches_any(lower, &GOOD_SALUTATION_PATTERNS) {
        SalutationTier::Good
    } else if matches_any(lower, &NORMAL_SALUTATION_PATTERNS) {
        SalutationTier::Normal
    } else {
        SalutationTier::None
    };

    let feedback = match tier {
        SalutationTier::Excellent => "Excellent salutation (excited/feeling great) detected.",
        SalutationTier::Good => "Good salutation (Good morning/afternoon/evening etc.) detected.",
        SalutationTier::Normal => "Normal salutation (Hi/Hello) detected.",
        SalutationTier::None => "No salutation detected.",
    };

    SubScore {
        name: "salutation",
        score: Some(tier.score()),
        max_score: SALUTATION_MAX,
        measurement: Measurement::Salutation { tier },
        feedback: feedback.to_string(),
    }
}

fn topic_presence(lower: &str, topics: &[CompiledTopic]) -> BTreeMap<&'static str, bool> {
    topics
        .iter()
        .map(|topic| (topic.key, matches_any(lower, &topic.patterns)))
        .collect()
}

fn capped_points(presence: &BTreeMap<&'static str, bool>, points: u8, cap: u8) -> u8 {
    let hits = presence.values().filter(|present| **present).count();
    (hits * usize::from(points)).min(usize::from(cap)) as u8
}

/// Must-have topics earn 4 points each (cap 20), good-to-have topics 2 each (cap 10).
pub fn keyword_presence(transcript: &Transcript) -> SubScore {
    let lower = transcript.lower();
    let must_have_present = topic_presence(lower, &MUST_HAVE_PATTERNS);
    let good_to_have_present = topic_presence(lower, &GOOD_TO_HAVE_PATTERNS);

    let must_score = capped_points(&must_have_present, MUST_HAVE_POINTS, MUST_HAVE_CAP);
    let good_score = capped_points(&good_to_have_present, GOOD_TO_HAVE_POINTS, GOOD_TO_HAVE_CAP);

    let covered = |presence: &BTreeMap<&'static str, bool>| {
        presence.values().filter(|present| **present).count()
    };
    let feedback = format!(
        "{}/{} must-have and {}/{} good-to-have topics covered.",
        covered(&must_have_present),
        must_have_present.len(),
        covered(&good_to_have_present),
        good_to_have_present.len(),
    );

    SubScore {
        name: "keyword_presence",
        score: Some(must_score + good_score),
        max_score: KEYWORD_PRESENCE_MAX,
        measurement: Measurement::KeywordPresence {
            must_have_present,
            good_to_have_present,
        },
        feedback,
    }
}

/// Sections must appear (by first occurrence) as salutation, basic details, additional
/// details, closing. Equal offsets count as ordered.
pub fn flow(transcript: &Transcript) -> SubScore {
    let lower = transcript.lower();
    let positions = FlowPositions {
        salutation: first_position(lower, FLOW_SALUTATION),
        basic_details: first_position(lower, FLOW_BASIC_DETAILS),
        additional_details: first_position(lower, FLOW_ADDITIONAL_DETAILS),
        closing: first_position(lower, FLOW_CLOSING),
    };

    let (score, feedback) = match (
        positions.salutation,
        positions.basic_details,
        positions.additional_details,
        positions.closing,
    ) {
        (Some(salutation), Some(basic), Some(additional), Some(closing)) => {
            if salutation <= basic && basic <= additional && additional <= closing {
                (
                    FLOW_MAX,
                    "Order followed: Salutation → Basic Details → Additional Details → Closing.",
                )
            } else {
                (0, "Order not followed as expected.")
            }
        }
        _ => (0, "Order not clearly followed (some sections missing)."),
    };

    SubScore {
        name: "flow",
        score: Some(score),
        max_score: FLOW_MAX,
        measurement: Measurement::Flow { positions },
        feedback: feedback.to_string(),
    }
}
