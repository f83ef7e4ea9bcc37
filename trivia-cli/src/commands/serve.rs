//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against a seeded in-memory
//! store with `--in-memory`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::migrations;
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Serve the starter dataset from memory; database options are ignored
    #[arg(long)]
    pub in_memory: bool,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    if args.in_memory {
        tracing::warn!("Serving in-memory store; changes are lost on shutdown");
        return run_server(MemoryStore::seeded(), config)
            .await
            .context("Server error");
    }

    let pool = args.database.connect().await?;
    if !args.skip_migrations {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    tracing::info!("Starting trivia server on {}", args.bind);
    run_server(PgStore::new(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
