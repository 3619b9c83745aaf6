//! Rubric configuration data: phrase tables, topic patterns and score bands.
//!
//! Scorer modules only read from here, so thresholds can be audited without following
//! control flow. Regex tables are compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

use super::bands::{Band, BandTable};
use super::text::compile;

/// Single tokens counted against clarity. Multi-word entries never equal a single token,
/// so they do not contribute to the count.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "ok", "hmm", "ah",
];

pub const EXCELLENT_SALUTATIONS: &[&str] = &[
    "i am excited to introduce",
    "feeling great",
    "i'm excited to introduce",
    "i am excited to be here",
];

pub const GOOD_SALUTATIONS: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
    "hi everyone",
];

pub const NORMAL_SALUTATIONS: &[&str] = &[r"\bhi\b", r"\bhello\b"];

/// Rubric topic searched for through alternative patterns.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub key: &'static str,
    pub patterns: &'static [&'static str],
}

pub const MUST_HAVE_TOPICS: &[Topic] = &[
    Topic {
        key: "name",
        patterns: &[r"\bmy name is\b", r"\bi am\b", r"\bthis is\b"],
    },
    Topic {
        key: "age",
        patterns: &[r"\byears old\b", r"\byear old\b", r"\bage\b"],
    },
    Topic {
        key: "school_class",
        patterns: &[
            r"\bschool\b",
            r"\bclass\b",
            r"\bgrade\b",
            r"\bcollege\b",
            r"\buniversity\b",
        ],
    },
    Topic {
        key: "family",
        patterns: &[
            r"\bfamily\b",
            r"\bmother\b",
            r"\bfather\b",
            r"\bparents\b",
            r"\bsister\b",
            r"\bbrother\b",
        ],
    },
    Topic {
        key: "hobbies",
        patterns: &[
            r"\bhobby\b",
            r"\bhobbies\b",
            r"\bi like to\b",
            r"\bi love to\b",
            r"\bin my free time\b",
        ],
    },
];

pub const MUST_HAVE_POINTS: u8 = 4;
pub const MUST_HAVE_CAP: u8 = 20;

pub const GOOD_TO_HAVE_TOPICS: &[Topic] = &[
    Topic {
        key: "about_family",
        patterns: &[r"\bfamily\b", r"\bmother\b", r"\bfather\b", r"\bparents\b"],
    },
    Topic {
        key: "origin_location",
        patterns: &[r"\bi am from\b", r"\bi'm from\b", r"\bwe live in\b", r"\bfrom\b"],
    },
    Topic {
        key: "ambition_goal",
        patterns: &[
            r"\bwant to\b",
            r"\bmy goal\b",
            r"\bmy dream\b",
            r"\baspire\b",
            r"\bambition\b",
        ],
    },
    Topic {
        key: "interesting_fact",
        patterns: &[r"\bfun fact\b", r"\binteresting\b", r"\bunique\b"],
    },
    Topic {
        key: "strengths_achievements",
        patterns: &[
            r"\bstrength\b",
            r"\bstrong in\b",
            r"\bachievement\b",
            r"\bwon\b",
            r"\baward\b",
        ],
    },
];

pub const GOOD_TO_HAVE_POINTS: u8 = 2;
pub const GOOD_TO_HAVE_CAP: u8 = 10;

/// Literal phrases located by first occurrence for the flow check.
pub const FLOW_SALUTATION: &[&str] = &[
    "hi",
    "hello",
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
    "hi everyone",
];
pub const FLOW_BASIC_DETAILS: &[&str] = &[
    "my name is",
    "i am",
    "i'm",
    "years old",
    "school",
    "class",
    "grade",
];
pub const FLOW_ADDITIONAL_DETAILS: &[&str] =
    &["hobby", "hobbies", "fun fact", "goal", "dream", "family"];
pub const FLOW_CLOSING: &[&str] = &["thank you", "thanks for listening", "that's all", "that is all"];

pub static SPEECH_RATE_BANDS: BandTable = BandTable {
    bands: &[
        Band::above(161.0, 2, "Too fast"),
        Band::closed(141.0, 160.0, 6, "Fast"),
        Band::closed(111.0, 140.0, 10, "Ideal"),
        Band::closed(81.0, 110.0, 6, "Slow"),
    ],
    fallback: Band::otherwise(2, "Too slow"),
};

pub static GRAMMAR_BANDS: BandTable = BandTable {
    bands: &[
        Band::above(0.9, 10, "Excellent"),
        Band::closed(0.7, 0.89, 8, "Good"),
        Band::closed(0.5, 0.69, 6, "Fair"),
        Band::closed(0.3, 0.49, 4, "Weak"),
    ],
    fallback: Band::otherwise(2, "Poor"),
};

pub static VOCABULARY_BANDS: BandTable = BandTable {
    bands: &[
        Band::closed(0.9, 1.0, 10, "Excellent"),
        Band::closed(0.7, 0.89, 8, "Good"),
        Band::closed(0.5, 0.69, 6, "Fair"),
        Band::closed(0.3, 0.49, 4, "Weak"),
    ],
    fallback: Band::otherwise(2, "Poor"),
};

pub static FILLER_RATE_BANDS: BandTable = BandTable {
    bands: &[
        Band::closed(0.0, 3.0, 15, "Excellent"),
        Band::closed(4.0, 6.0, 12, "Good"),
        Band::closed(7.0, 9.0, 9, "Fair"),
        Band::closed(10.0, 12.0, 6, "Weak"),
    ],
    fallback: Band::otherwise(3, "Poor"),
};

pub static SENTIMENT_BANDS: BandTable = BandTable {
    bands: &[
        Band::at_least(0.9, 15, "Excellent"),
        Band::closed(0.7, 0.89, 12, "Good"),
        Band::closed(0.5, 0.69, 9, "Fair"),
        Band::closed(0.3, 0.49, 6, "Weak"),
    ],
    fallback: Band::otherwise(3, "Poor"),
};

pub(crate) struct CompiledTopic {
    pub key: &'static str,
    pub patterns: Vec<Regex>,
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|pattern| compile(pattern)).collect()
}

fn compile_literals(phrases: &[&str]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|phrase| compile(&regex::escape(phrase)))
        .collect()
}

fn compile_topics(topics: &[Topic]) -> Vec<CompiledTopic> {
    topics
        .iter()
        .map(|topic| CompiledTopic {
            key: topic.key,
            patterns: compile_all(topic.patterns),
        })
        .collect()
}

pub(crate) static EXCELLENT_SALUTATION_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_literals(EXCELLENT_SALUTATIONS));
pub(crate) static GOOD_SALUTATION_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_literals(GOOD_SALUTATIONS));
pub(crate) static NORMAL_SALUTATION_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(NORMAL_SALUTATIONS));
pub(crate) static MUST_HAVE_PATTERNS: LazyLock<Vec<CompiledTopic>> =
    LazyLock::new(|| compile_topics(MUST_HAVE_TOPICS));
pub(crate) static GOOD_TO_HAVE_PATTERNS: LazyLock<Vec<CompiledTopic>> =
    LazyLock::new(|| compile_topics(GOOD_TO_HAVE_TOPICS));
