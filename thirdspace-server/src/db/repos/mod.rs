//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues one statement per call.
//! Constraint violations are classified here so handlers never inspect
//! driver errors.

pub mod users;
pub mod spaces;
pub mod reviews;

use sqlx::error::ErrorKind;

pub use users::{CreatedUser, User, UserRepo};
pub use spaces::{Space, SpaceRepo};
pub use reviews::{Review, ReviewRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Unique constraint rejected the row
    #[error("{resource} conflicts with an existing record ({constraint})")]
    Conflict {
        resource: &'static str,
        constraint: String,
    },

    /// Foreign key points at a row that does not exist
    #[error("{resource} references a missing record ({constraint})")]
    InvalidReference {
        resource: &'static str,
        constraint: String,
    },

    /// Check or not-null constraint rejected the row
    #[error("{resource} violates constraint ({constraint})")]
    Constraint {
        resource: &'static str,
        constraint: String,
    },
}

impl DbError {
    /// Classify an error raised by an INSERT into `resource`.
    pub fn from_insert(resource: &'static str, err: sqlx::Error) -> Self {
        let (kind, constraint) = match &err {
            sqlx::Error::Database(db_err) => (
                db_err.kind(),
                db_err.constraint().unwrap_or("unnamed").to_owned(),
            ),
            _ => return Self::Sqlx(err),
        };

        match kind {
            ErrorKind::UniqueViolation => Self::Conflict {
                resource,
                constraint,
            },
            ErrorKind::ForeignKeyViolation => Self::InvalidReference {
                resource,
                constraint,
            },
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => Self::Constraint {
                resource,
                constraint,
            },
            _ => Self::Sqlx(err),
        }
    }
}
