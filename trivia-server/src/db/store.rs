//! PostgreSQL question store
//!
//! Referential integrity is left to the `questions.category` foreign key;
//! a violation comes back as [`StoreError::Rejected`].

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use trivia_core::{Category, NewQuestion, Question, QuestionStore, StoreError};

/// Category row from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    label: String,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Self {
            id: r.id,
            label: r.label,
        }
    }
}

/// Question row from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Self {
            id: r.id,
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

/// Question store backed by a PgPool
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::backend(e.to_string())
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, type FROM categories ORDER BY type")
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        Ok(row.map(Category::from))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => StoreError::rejected(
                "insert question",
                format!("category {} does not exist", question.category),
            ),
            sqlx::Error::Database(db) if db.is_check_violation() => {
                StoreError::rejected("insert question", db.message().to_string())
            }
            other => backend(other),
        })?;

        Ok(row.into())
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn store() -> PgQuestionStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_default_categories(&pool)
            .await
            .expect("seed failed");
        PgQuestionStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_search_delete_roundtrip() {
        let store = store().await;
        let category = store.list_categories().await.unwrap()[0].id;

        let created = store
            .insert_question(NewQuestion {
                question: "Which element has the symbol Zz_100%?".into(),
                answer: "none".into(),
                category,
                difficulty: 3,
            })
            .await
            .unwrap();

        let hits = store.search_questions("zz_100%").await.unwrap();
        assert!(hits.iter().any(|q| q.id == created.id));

        assert!(store.delete_question(created.id).await.unwrap());
        assert!(!store.delete_question(created.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_with_unknown_category_is_rejected() {
        let store = store().await;
        let err = store
            .insert_question(NewQuestion {
                question: "orphan".into(),
                answer: "none".into(),
                category: i64::MAX,
                difficulty: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected { .. }));
    }
}
