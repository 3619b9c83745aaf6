use async_trait::async_trait;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::{CollaboratorError, Polarity, SentimentAnalyzer};

/// In-process VADER sentiment analyzer.
///
/// The lexicon is loaded once by the first construction; the analyzer itself only borrows it,
/// so one instance can be shared across requests.
pub struct VaderSentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderSentimentAnalyzer {
    fn default() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl VaderSentimentAnalyzer {
    pub fn analyze(&self, text: &str) -> Result<Polarity, CollaboratorError> {
        let scores = self.analyzer.polarity_scores(text);
        let component = |key: &str| {
            scores.get(key).copied().ok_or_else(|| {
                CollaboratorError::Malformed(format!("polarity scores missing `{key}`"))
            })
        };

        let polarity = Polarity {
            negative: component("neg")?,
            neutral: component("neu")?,
            positive: component("pos")?,
        };

        // Text without any word tokens yields all zeros.
        if polarity.negative == 0.0 && polarity.neutral == 0.0 && polarity.positive == 0.0 {
            return Ok(Polarity {
                negative: 0.0,
                neutral: 1.0,
                positive: 0.0,
            });
        }

        Ok(polarity)
    }
}

#[async_trait]
impl SentimentAnalyzer for VaderSentimentAnalyzer {
    async fn polarity(&self, text: &str) -> Result<Polarity, CollaboratorError> {
        self.analyze(text)
    }

    fn name(&self) -> &str {
        "vader"
    }
}
