//! trivia-server: HTTP API for the trivia service
//!
//! Serves question listings, search, creation/deletion and quiz play over
//! a [`trivia_core::QueryService`]. Persistence is PostgreSQL via sqlx
//! ([`db::PgQuestionStore`]) or any other [`trivia_core::QuestionStore`].

pub mod db;
pub mod http;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
