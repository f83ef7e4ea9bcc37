//! Question endpoints: paginated listing, creation, deletion and search

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{
    category_map, CategoryMap, NewQuestion, PageParams, Pagination, Question, SearchTerm,
};

/// Page of questions plus everything the list view needs
#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    #[serde(rename = "current category")]
    pub current_category: Option<i32>,
    pub success: bool,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub total_questions: i64,
}

/// `deleted` echoes the path segment exactly as received.
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

/// GET /questions?page=N - ten questions per page
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = Pagination::from(params);
    if page.is_before_start() {
        return Err(ApiError::NotFound);
    }

    let questions = state.store.list_questions(page).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = state.store.count_questions().await?;
    let categories = state.store.categories().await?;

    Ok(Json(QuestionPageResponse {
        questions,
        total_questions,
        categories: category_map(categories),
        current_category: None,
        success: true,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::from_body(&body)?;

    let created = state.store.insert_question(new).await.map_err(|e| {
        tracing::warn!("insert failed: {}", e);
        ApiError::Unprocessable
    })?;
    let total_questions = state.store.count_questions().await.map_err(|e| {
        tracing::warn!("count after insert failed: {}", e);
        ApiError::Unprocessable
    })?;

    tracing::info!(id = created.id, category = created.category, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        total_questions,
    }))
}

/// DELETE /questions/{id} - malformed and unknown ids are both 422
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id: i32 = raw_id.parse().map_err(|_| ApiError::Unprocessable)?;

    let deleted = state.store.delete_question(id).await.map_err(|e| {
        tracing::warn!(id, "delete failed: {}", e);
        ApiError::Unprocessable
    })?;
    if !deleted {
        return Err(ApiError::Unprocessable);
    }

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: raw_id,
    }))
}

/// POST /questions/search - case-insensitive substring match
///
/// An empty or absent term and an empty result are all 404.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = SearchTerm::parse(req.search_term).ok_or(ApiError::NotFound)?;

    let questions = state.store.search_questions(&term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
