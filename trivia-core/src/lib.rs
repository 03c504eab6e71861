//! trivia-core: question listing and quiz selection
//!
//! The [`QueryService`] sits between the HTTP layer and a [`QuestionStore`].
//! It owns the only decision logic in the service:
//! - fixed-size pagination over ordered question listings
//! - non-repeating random quiz selection
//!
//! Stores are injected, so the same service runs over PostgreSQL in
//! production and over [`MemoryStore`] in tests.

pub mod error;
pub mod models;
pub mod quiz;
pub mod service;
pub mod store;

pub use error::{Result, ServiceError, StoreError};
pub use models::{
    paginate, Category, NewQuestion, Page, PageRequest, PaginationParams, Question, QuestionDraft,
    QuestionView, ValidationError, QUESTIONS_PER_PAGE,
};
pub use quiz::{select_quiz_question, CategorySelector, QuizOutcome};
pub use service::{
    CategoryListing, CategoryQuestions, CreatedQuestion, QueryService, QuestionListing,
    SearchResults,
};
pub use store::{memory::DEFAULT_CATEGORIES, MemoryStore, QuestionStore};
