//! Schema migrations for the trivia tables

use sqlx::PgPool;

use trivia_core::DEFAULT_CATEGORIES;

/// Create tables and indexes if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the default categories, skipping any that already exist.
///
/// Returns the number of categories actually inserted.
pub async fn seed_default_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for label in DEFAULT_CATEGORIES {
        let result = sqlx::query("INSERT INTO categories (type) VALUES ($1) ON CONFLICT (type) DO NOTHING")
            .bind(label)
            .execute(pool)
            .await?;
        inserted += result.rows_affected();
    }

    tracing::info!(inserted, "Default categories seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_and_seed_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first migration run");
        run(&pool).await.expect("second migration run");

        seed_default_categories(&pool).await.expect("first seed");
        let again = seed_default_categories(&pool).await.expect("second seed");
        assert_eq!(again, 0);
    }
}
