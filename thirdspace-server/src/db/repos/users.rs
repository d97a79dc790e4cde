//! User repository
//!
//! - create: plain INSERT; the UNIQUE email constraint decides duplicates
//! - find_by_email: single lookup backing `/user/login`

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewUser;

/// Generated columns returned by a user insert
#[derive(Debug, Clone, FromRow)]
pub struct CreatedUser {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user.
    ///
    /// A duplicate email surfaces as `DbError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> Result<CreatedUser, DbError> {
        sqlx::query_as::<_, CreatedUser>(
            r#"
            INSERT INTO users (email, username)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
        )
        .bind(user.email())
        .bind(user.username())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert("user", e))
    }

    /// Look up a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: email.to_owned(),
        })
    }
}
