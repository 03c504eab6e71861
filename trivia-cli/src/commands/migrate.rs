//! Database migration command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

use crate::config::TriviaConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Also insert the default categories (Science, Art, ...)
    #[arg(long)]
    pub seed: bool,

    /// Config file path [default: ~/.trivia/config.toml]
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Create the schema, optionally seeding categories
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = TriviaConfig::load(args.config.as_deref())?;
    let database_url = config
        .database_url(args.database_url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, ~/.trivia/.env or config.toml")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if args.seed {
        let inserted = migrations::seed_default_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        println!("Schema ready, {} categories added", inserted);
    } else {
        println!("Schema ready");
    }

    Ok(())
}
