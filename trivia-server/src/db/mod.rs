//! Database layer - connection pool, migrations and the PostgreSQL store
//!
//! - Connection pool (max 5 connections by default)
//! - Idempotent `CREATE TABLE IF NOT EXISTS` migrations
//! - Rely on DB constraints (foreign key on category), no check-then-insert

pub mod migrations;
pub mod pool;
pub mod store;

pub use pool::{create_pool, create_pool_with_options};
pub use store::PgQuestionStore;
