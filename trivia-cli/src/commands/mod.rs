//! Subcommands and the database options they share

pub mod database;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use trivia_server::db::{create_pool_with_options, PgPool, DEFAULT_MAX_CONNECTIONS};

pub use database::{run_migrate, run_seed, MigrateArgs, SeedArgs};
pub use serve::{run_serve, ServeArgs};

/// Connection options shared by every command that talks to PostgreSQL
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (falls back to DATABASE_URL, also read from .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
