//! Delivery sub-scorers: speech rate and filler-word clarity.

use super::result::{round_to, Measurement, SubScore};
use super::tables::{FILLER_RATE_BANDS, FILLER_WORDS, SPEECH_RATE_BANDS};
use super::text::Transcript;

pub const SPEECH_RATE_MAX: u8 = 10;
pub const CLARITY_MAX: u8 = 15;

/// A duration only counts when it is a finite, positive number of seconds.
pub fn usable_duration(duration_seconds: Option<f64>) -> Option<f64> {
    duration_seconds.filter(|seconds| seconds.is_finite() && *seconds > 0.0)
}

pub fn words_per_minute(word_count: usize, duration_seconds: f64) -> f64 {
    word_count as f64 / (duration_seconds / 60.0)
}

/// Unscored (`score == None`) when no usable duration was supplied.
pub fn speech_rate(word_count: usize, duration_seconds: Option<f64>) -> SubScore {
    let Some(seconds) = usable_duration(duration_seconds) else {
        return SubScore {
            name: "speech_rate",
            score: None,
            max_score: SPEECH_RATE_MAX,
            measurement: Measurement::SpeechRate {
                wpm: None,
                band: None,
            },
            feedback: "Duration not provided – speech rate not scored.".to_string(),
        };
    };

    let wpm = words_per_minute(word_count, seconds);
    let band = SPEECH_RATE_BANDS.classify(wpm);
    let range = match band.label {
        "Too fast" => ">161 WPM",
        "Fast" => "141–160 WPM",
        "Ideal" => "111–140 WPM",
        "Slow" => "81–110 WPM",
        _ => "<81 WPM",
    };

    SubScore {
        name: "speech_rate",
        score: Some(band.score),
        max_score: SPEECH_RATE_MAX,
        measurement: Measurement::SpeechRate {
            wpm: Some(round_to(wpm, 2)),
            band: Some(band.label),
        },
        feedback: format!("{} ({range}) at {wpm:.2} WPM.", band.label),
    }
}

/// Counts tokens that equal a filler word; a transcript without words scores zero.
pub fn clarity(transcript: &Transcript) -> SubScore {
    let word_count = transcript.word_count();
    if word_count == 0 {
        return SubScore {
            name: "filler_words",
            score: Some(0),
            max_score: CLARITY_MAX,
            measurement: Measurement::FillerWords {
                filler_count: 0,
                filler_rate_percent: 0.0,
            },
            feedback: "Empty text.".to_string(),
        };
    }

    let filler_count = transcript
        .tokens()
        .iter()
        .filter(|token| FILLER_WORDS.contains(&token.as_str()))
        .count();
    let filler_rate = filler_count as f64 * 100.0 / word_count as f64;
    let band = FILLER_RATE_BANDS.classify(filler_rate);

    SubScore {
        name: "filler_words",
        score: Some(band.score),
        max_score: CLARITY_MAX,
        measurement: Measurement::FillerWords {
            filler_count,
            filler_rate_percent: round_to(filler_rate, 2),
        },
        feedback: format!("{filler_count} filler words (~{filler_rate:.2}% of all words)."),
    }
}
