//! Question repository
//!
//! Paging is pushed into SQL (LIMIT/OFFSET ordered by id) with a separate
//! COUNT, so a page request never loads the whole table.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{CategoryFilter, NewQuestion, Pagination, Question, SearchTerm};

/// SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    /// One page of questions ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert and return the stored row.
    ///
    /// A foreign-key violation on `category` becomes [`DbError::UnknownCategory`].
    pub async fn create(&self, new: NewQuestion) -> Result<Question, DbError> {
        let result = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(question) => Ok(question),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(DbError::UnknownCategory(new.category))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete by id, reporting whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Questions matching `filter` whose id is not in `exclude`.
    pub async fn unasked(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let category = match filter {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(id),
        };

        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::INT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
