//! trivia CLI - runs and provisions the trivia API
//!
//! - `serve`: HTTP API (PostgreSQL or `--in-memory`)
//! - `migrate`: create the schema
//! - `seed`: load the starter dataset into empty tables

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "trivia", version, about = "Trivia questions API server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Create the trivia tables if they do not exist
    Migrate(commands::MigrateArgs),
    /// Load the starter categories and questions into empty tables
    Seed(commands::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; explicit env vars still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}
