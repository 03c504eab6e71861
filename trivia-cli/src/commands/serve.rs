//! HTTP server command
//!
//! Runs the trivia API over PostgreSQL, or over an in-memory store with
//! `--memory`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_core::{MemoryStore, QueryService, QuestionStore};
use trivia_server::db::{create_pool_with_options, migrations, PgQuestionStore};
use trivia_server::run_server;

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to [default: 127.0.0.1:3030]
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum database connections [default: 5]
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Serve from an in-memory store seeded with the default categories
    /// (takes priority over any database URL)
    #[arg(long)]
    pub memory: bool,

    /// Config file path [default: ~/.trivia/config.toml]
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = TriviaConfig::load(args.config.as_deref())?;
    let server_config = config.server_config(args.bind, args.cors_permissive, args.timeout);

    let store: Arc<dyn QuestionStore> = if args.memory {
        if args.database_url.is_some() {
            tracing::debug!("--memory given, ignoring DATABASE_URL");
        }
        tracing::warn!("Using in-memory store - questions are lost on shutdown");
        Arc::new(MemoryStore::with_default_categories())
    } else {
        let database_url = config.database_url(args.database_url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, ~/.trivia/.env or config.toml",
        )?;

        let pool = create_pool_with_options(&database_url, config.max_connections(args.max_connections))
            .await
            .context("Failed to create database pool")?;
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgQuestionStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", server_config.bind_addr);
    run_server(QueryService::new(store), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
