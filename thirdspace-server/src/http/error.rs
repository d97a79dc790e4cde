//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Database detail is logged and never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Message returned for every unexpected failure
const INTERNAL_MESSAGE: &str = "an internal error occurred";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violated (400)
    Conflict { resource: &'static str },

    /// Referenced user or space does not exist (400)
    InvalidReference { resource: &'static str },

    /// Check or not-null constraint violated (400)
    Constraint { resource: &'static str },

    /// Database error (500, logged)
    Database(DbError),

    /// Dependency unreachable (503)
    Unavailable { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Conflict { .. }
            | Self::InvalidReference { .. }
            | Self::Constraint { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (kind, message) = match &self {
            Self::Validation(e) => ("validation_error", e.to_string()),
            Self::NotFound { resource, id } => {
                ("not_found", format!("{} '{}' not found", resource, id))
            }
            Self::Conflict { resource } => ("conflict", format!("{} already exists", resource)),
            Self::InvalidReference { resource } => (
                "invalid_reference",
                format!("{} references a user or space that does not exist", resource),
            ),
            Self::Constraint { resource } => (
                "constraint_violation",
                format!("{} violates a data constraint", resource),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "Database error");
                ("internal_error", INTERNAL_MESSAGE.to_owned())
            }
            Self::Unavailable { message } => {
                tracing::warn!(reason = %message, "Service unavailable");
                ("unavailable", message.clone())
            }
        };

        // `detail` carries the same text under the key existing clients read
        let body = json!({
            "error": kind,
            "message": message,
            "detail": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict {
                resource,
                constraint,
            } => {
                tracing::info!(resource, constraint = %constraint, "insert rejected: duplicate");
                Self::Conflict { resource }
            }
            DbError::InvalidReference {
                resource,
                constraint,
            } => {
                tracing::info!(resource, constraint = %constraint, "insert rejected: dangling reference");
                Self::InvalidReference { resource }
            }
            DbError::Constraint {
                resource,
                constraint,
            } => {
                tracing::info!(resource, constraint = %constraint, "insert rejected: constraint");
                Self::Constraint { resource }
            }
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}
