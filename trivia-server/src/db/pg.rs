//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, QuestionRepo};
use super::{DbError, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Pagination, Question, SearchTerm};

/// [`TriviaStore`] over a connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        QuestionRepo::new(&self.pool).count().await
    }

    async fn list_questions(&self, page: Pagination) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list(page).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool, DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).by_category(category).await
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).unasked(filter, exclude).await
    }
}
