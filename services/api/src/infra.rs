use intro_scorer::collaborators::{LanguageToolClient, VaderSentimentAnalyzer};
use intro_scorer::config::ScoringConfig;
use intro_scorer::error::AppError;
use intro_scorer::rubric::RubricScorer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Scorer = RubricScorer<LanguageToolClient, VaderSentimentAnalyzer>;

/// Build the process-wide collaborators and the scorer that owns them.
pub(crate) fn build_scorer(config: &ScoringConfig) -> Scorer {
    let grammar = LanguageToolClient::new(&config.language_tool_url, config.language.clone());
    RubricScorer::new(
        Arc::new(grammar),
        Arc::new(VaderSentimentAnalyzer::default()),
        config.clone(),
    )
}

/// Interpret a user-supplied duration. Unparsable input leaves speech rate unscored.
pub(crate) fn parse_duration(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<f64>() {
        Ok(seconds) => Some(seconds),
        Err(_) => {
            warn!(
                duration = raw,
                "duration must be a number of seconds; speech rate will not be scored"
            );
            None
        }
    }
}

pub(crate) fn read_transcript(
    file: Option<PathBuf>,
    text: Option<String>,
) -> Result<String, AppError> {
    if let Some(text) = text {
        return Ok(text);
    }

    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
