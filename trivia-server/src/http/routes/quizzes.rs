//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Question, QuizRequest, QuizRound};

/// `question` is null once every candidate has been asked.
#[derive(Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
    pub success: bool,
}

/// POST /quizzes - one random question not in `previous_questions`
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let round = QuizRound::try_from(req)?;

    let candidates = state
        .store
        .quiz_candidates(round.category, &round.previous)
        .await?;

    let question = candidates.choose(&mut rand::thread_rng()).cloned();
    if question.is_none() {
        tracing::debug!(category = ?round.category, asked = round.previous.len(), "no questions remaining");
    }

    Ok(Json(QuizResponse {
        question,
        success: true,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
