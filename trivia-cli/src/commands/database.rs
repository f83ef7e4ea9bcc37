//! Schema and seed-data commands

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{migrations, seed};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the trivia tables
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    println!("Schema is up to date");
    Ok(())
}

/// Create the tables if needed, then fill empty ones with the starter dataset
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let (categories, questions) = seed::run(&pool).await.context("Failed to seed data")?;
    if categories == 0 && questions == 0 {
        println!("Tables already populated; nothing inserted");
    } else {
        println!("Inserted {categories} categories and {questions} questions");
    }
    Ok(())
}
