//! Schema setup for users, spaces, and reviews
//!
//! Every statement is idempotent, so this runs on each server start.

use sqlx::PgPool;

use super::repos::DbError;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "spaces",
        r#"
        CREATE TABLE IF NOT EXISTS spaces (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            tags TEXT NOT NULL,
            photo_url TEXT NOT NULL,
            location_data TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            user_id BIGINT NOT NULL REFERENCES users(id),
            space_id BIGINT NOT NULL REFERENCES spaces(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "idx_spaces_created_at",
        "CREATE INDEX IF NOT EXISTS idx_spaces_created_at ON spaces (created_at DESC, id DESC)",
    ),
    (
        "idx_reviews_space",
        "CREATE INDEX IF NOT EXISTS idx_reviews_space ON reviews (space_id, created_at DESC)",
    ),
];

/// Create any missing tables and indexes.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    for &(name, sql) in STATEMENTS {
        sqlx::query(sql).execute(pool).await?;
        tracing::debug!(object = name, "schema object ensured");
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
