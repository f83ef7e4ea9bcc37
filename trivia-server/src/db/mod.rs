//! Database layer
//!
//! - pool: connection pool management
//! - migrations / seed: schema and starter data
//! - store: the `TriviaStore` trait handlers depend on
//! - repos + pg: PostgreSQL implementation
//! - memory: in-process implementation

pub mod memory;
pub mod migrations;
pub mod pg;
pub mod pool;
pub mod repos;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pg::PgStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use store::{DbError, TriviaStore};

pub use sqlx::PgPool;
