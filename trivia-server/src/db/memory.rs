//! In-memory store
//!
//! Same contract as the PostgreSQL store, kept in two vectors behind a
//! `RwLock`. Used by the router tests and by `serve --in-memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{seed, DbError, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Pagination, Question, SearchTerm};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// [`TriviaStore`] held entirely in process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store with no categories and no questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the starter dataset.
    pub fn seeded() -> Self {
        let categories = seed::CATEGORIES
            .iter()
            .map(|(id, kind)| Category::new(*id, *kind))
            .collect();
        let questions: Vec<Question> = seed::QUESTIONS
            .iter()
            .zip(1..)
            .map(|((question, answer, category, difficulty), id)| Question {
                id,
                question: (*question).to_owned(),
                answer: (*answer).to_owned(),
                category: *category,
                difficulty: *difficulty,
            })
            .collect();
        let next_question_id = questions.len() as i32 + 1;

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// Store with the given categories and no questions.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions: Vec::new(),
                next_question_id: 1,
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        let tables = self.tables.read().await;
        let mut categories = tables.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn list_questions(&self, page: Pagination) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        Ok(tables
            .questions
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.iter().any(|c| c.id == new.category) {
            return Err(DbError::UnknownCategory(new.category));
        }

        let question = Question {
            id: tables.next_question_id.max(1),
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_question_id = question.id + 1;
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<bool, DbError> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(id) => q.category == id,
            })
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}
