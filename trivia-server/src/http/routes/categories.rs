//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::CategoryId;
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, Question};

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
    pub success: bool,
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// GET /categories - id -> type mapping of every category
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;

    Ok(Json(CategoriesResponse {
        categories: category_map(categories),
        success: true,
    }))
}

/// GET /categories/{category_id}/questions - every question in one category
///
/// An empty category answers 404 like the other listing endpoints.
async fn category_questions(
    State(state): State<Arc<AppState>>,
    CategoryId(category_id): CategoryId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = state
        .store
        .questions_in_category(category_id)
        .await
        .map_err(|e| {
            tracing::warn!(category_id, "category lookup failed: {}", e);
            ApiError::NotFound
        })?;

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(category_questions))
}
