//! Question store contract
//!
//! The query service only talks to persistence through [`QuestionStore`].
//! Implementations:
//! - [`MemoryStore`] here, for tests and database-less runs
//! - the PostgreSQL store in trivia-server

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question};

pub use memory::MemoryStore;

#[async_trait]
pub trait QuestionStore: Send + Sync + 'static {
    /// All categories, ordered by label.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions in one category, ordered by id.
    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case. Ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Insert a question; the store assigns the id.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question. Returns false if no such question existed.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;
}
