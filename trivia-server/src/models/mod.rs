//! Domain models
//!
//! Request payloads are validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{PageParams, Pagination, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question, SearchTerm};
pub use quiz::{CategoryFilter, QuizRequest, QuizRound, ALL_CATEGORIES};
pub use validation::ValidationError;
