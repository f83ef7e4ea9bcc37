//! Storage seam between the HTTP handlers and the backing database

use async_trait::async_trait;

use crate::models::{Category, CategoryFilter, NewQuestion, Pagination, Question, SearchTerm};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unknown category {0}")]
    UnknownCategory(i32),
}

/// Everything the API needs from storage.
///
/// Implemented by [`PgStore`](super::PgStore) for PostgreSQL and by
/// [`MemoryStore`](super::MemoryStore) for tests and database-less runs.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// Total number of questions.
    async fn count_questions(&self) -> Result<i64, DbError>;

    /// One page of questions ordered by id.
    async fn list_questions(&self, page: Pagination) -> Result<Vec<Question>, DbError>;

    /// Insert a question. Fails with [`DbError::UnknownCategory`] (or the
    /// equivalent foreign-key violation) when the category does not exist.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Delete by id. Returns false when no such question exists.
    async fn delete_question(&self, id: i32) -> Result<bool, DbError>;

    /// Case-insensitive substring search over question text.
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError>;

    /// All questions in one category, ordered by id.
    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Questions a quiz round may draw from: those matching `filter` whose
    /// id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError>;
}
