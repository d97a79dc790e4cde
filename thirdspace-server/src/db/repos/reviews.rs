//! Review repository
//!
//! References to users and spaces are enforced by foreign keys, so a
//! dangling id comes back as `DbError::InvalidReference`.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{DbError, SpaceRepo};
use crate::models::NewReview;

/// Review record from database
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub user_id: i64,
    pub space_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a review, returning its id.
    pub async fn create(&self, review: &NewReview) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO reviews (title, description, rating, user_id, space_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&review.title)
        .bind(&review.description)
        .bind(review.rating.get())
        .bind(review.user_id)
        .bind(review.space_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert("review", e))?;

        Ok(id)
    }

    /// List reviews for one space, newest first.
    ///
    /// Returns NotFound when the space itself does not exist, so an empty
    /// list always means "no reviews yet".
    pub async fn list_for_space(&self, space_id: i64) -> Result<Vec<Review>, DbError> {
        if !SpaceRepo::new(self.pool).exists(space_id).await? {
            return Err(DbError::NotFound {
                resource: "space",
                id: space_id.to_string(),
            });
        }

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, title, description, rating, user_id, space_id, created_at
            FROM reviews
            WHERE space_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(space_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }
}
