//! trivia-server: HTTP API for trivia questions
//!
//! Serves categories, paginated questions, keyword search and quiz rounds
//! from PostgreSQL (or a seeded in-memory store).

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
