use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::engine::{RubricScorer, ScoringError};
use crate::collaborators::{GrammarChecker, SentimentAnalyzer};

/// Body accepted by the scoring endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub transcript: String,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

/// Router exposing the scoring entry point.
pub fn scoring_router<G, S>(scorer: Arc<RubricScorer<G, S>>) -> Router
where
    G: GrammarChecker + 'static,
    S: SentimentAnalyzer + 'static,
{
    Router::new()
        .route("/api/v1/score", post(score_handler::<G, S>))
        .with_state(scorer)
}

pub(crate) async fn score_handler<G, S>(
    State(scorer): State<Arc<RubricScorer<G, S>>>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    G: GrammarChecker + 'static,
    S: SentimentAnalyzer + 'static,
{
    match scorer
        .score(&request.transcript, request.duration_seconds)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error @ ScoringError::InvalidInput { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
