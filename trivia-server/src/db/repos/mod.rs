//! Repository implementations for database access
//!
//! One repository per table, borrowing the pool for the duration of a call.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
