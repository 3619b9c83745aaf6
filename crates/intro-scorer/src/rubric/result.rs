use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    ContentStructure,
    SpeechRate,
    LanguageGrammar,
    Clarity,
    Engagement,
}

impl RubricCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ContentStructure,
            Self::SpeechRate,
            Self::LanguageGrammar,
            Self::Clarity,
            Self::Engagement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ContentStructure => "Content & Structure",
            Self::SpeechRate => "Speech Rate",
            Self::LanguageGrammar => "Language & Grammar",
            Self::Clarity => "Clarity",
            Self::Engagement => "Engagement",
        }
    }

    pub const fn max_score(self) -> u8 {
        match self {
            Self::ContentStructure => 40,
            Self::SpeechRate => 10,
            Self::LanguageGrammar => 20,
            Self::Clarity => 15,
            Self::Engagement => 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalutationTier {
    Excellent,
    Good,
    Normal,
    None,
}

impl SalutationTier {
    pub const fn score(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Normal => 2,
            Self::None => 0,
        }
    }
}

/// First-occurrence offsets of each flow section, `None` when the section is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowPositions {
    pub salutation: Option<usize>,
    pub basic_details: Option<usize>,
    pub additional_details: Option<usize>,
    pub closing: Option<usize>,
}

/// Raw quantity a sub-score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    Salutation {
        tier: SalutationTier,
    },
    KeywordPresence {
        must_have_present: BTreeMap<&'static str, bool>,
        good_to_have_present: BTreeMap<&'static str, bool>,
    },
    Flow {
        positions: FlowPositions,
    },
    SpeechRate {
        wpm: Option<f64>,
        band: Option<&'static str>,
    },
    Grammar {
        error_count: Option<usize>,
        errors_per_100_words: Option<f64>,
        quality: Option<f64>,
    },
    Vocabulary {
        ttr: f64,
        distinct_words: usize,
        total_words: usize,
    },
    FillerWords {
        filler_count: usize,
        filler_rate_percent: f64,
    },
    Sentiment {
        positive_probability: Option<f64>,
    },
}

/// Score for one rubric sub-item. `score` is `None` only when the item could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScore {
    pub name: &'static str,
    pub score: Option<u8>,
    pub max_score: u8,
    pub measurement: Measurement,
    pub feedback: String,
}

impl SubScore {
    pub fn points(&self) -> u8 {
        self.score.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub category: RubricCategory,
    pub name: &'static str,
    pub final_score: u8,
    pub max_score: u8,
    pub scored: bool,
    pub subcomponents: Vec<SubScore>,
}

impl CriterionResult {
    /// Final score is the sum of the sub-item points, capped at the category maximum.
    pub fn from_parts(category: RubricCategory, subcomponents: Vec<SubScore>) -> Self {
        let max_score = category.max_score();
        let total: u16 = subcomponents.iter().map(|sub| u16::from(sub.points())).sum();
        debug_assert!(total <= u16::from(max_score), "{category:?} exceeds its maximum");
        let scored = subcomponents.iter().all(|sub| sub.score.is_some());

        Self {
            category,
            name: category.label(),
            final_score: total.min(u16::from(max_score)) as u8,
            max_score,
            scored,
            subcomponents,
        }
    }

    pub fn subcomponent(&self, name: &str) -> Option<&SubScore> {
        self.subcomponents.iter().find(|sub| sub.name == name)
    }
}

/// A sub-item that was scored without its collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: RubricCategory,
    pub sub_item: &'static str,
    pub collaborator: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub word_count: usize,
    pub degraded: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub criteria: Vec<CriterionResult>,
}

impl ScoreResult {
    pub fn criterion(&self, category: RubricCategory) -> Option<&CriterionResult> {
        self.criteria
            .iter()
            .find(|criterion| criterion.category == category)
    }

    pub fn category_score(&self, category: RubricCategory) -> u8 {
        self.criterion(category)
            .map(|criterion| criterion.final_score)
            .unwrap_or(0)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
