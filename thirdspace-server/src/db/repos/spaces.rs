//! Space repository
//!
//! - create: INSERT returning the generated id
//! - list: every space, newest first (id breaks timestamp ties)
//! - get: single row or NotFound

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewSpace;

/// Space record from database
#[derive(Debug, Clone, FromRow)]
pub struct Space {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub photo_url: String,
    pub location_data: String,
    pub created_at: DateTime<Utc>,
}

/// Space repository
pub struct SpaceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SpaceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a space, returning its id.
    pub async fn create(&self, space: &NewSpace) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO spaces (name, description, tags, photo_url, location_data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&space.name)
        .bind(&space.description)
        .bind(&space.tags)
        .bind(&space.photo_url)
        .bind(&space.location_data)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert("space", e))?;

        Ok(id)
    }

    /// List all spaces, newest first. No pagination.
    pub async fn list(&self) -> Result<Vec<Space>, DbError> {
        let spaces = sqlx::query_as::<_, Space>(
            r#"
            SELECT id, name, description, tags, photo_url, location_data, created_at
            FROM spaces
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(spaces)
    }

    /// Get a single space by id.
    pub async fn get(&self, id: i64) -> Result<Space, DbError> {
        sqlx::query_as::<_, Space>(
            r#"
            SELECT id, name, description, tags, photo_url, location_data, created_at
            FROM spaces
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "space",
            id: id.to_string(),
        })
    }

    /// Whether a space with this id exists.
    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM spaces WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }
}
