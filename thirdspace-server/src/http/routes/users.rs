//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CreatedUser, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{normalize_email, NewUser};

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
}

/// Generated fields of a new user
#[derive(Serialize)]
pub struct CreatedUserBody {
    pub id: i64,
    pub created_at: String,
}

impl From<CreatedUser> for CreatedUserBody {
    fn from(u: CreatedUser) -> Self {
        Self {
            id: u.id,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub user: CreatedUserBody,
}

/// Login (lookup by email) request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// User response
#[derive(Serialize)]
pub struct UserBody {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: String,
}

impl From<User> for UserBody {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserBody,
}

/// POST /user/new - register a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let user = NewUser::new(req.email, req.username)?;
    let created = UserRepo::new(&state.pool).create(&user).await?;
    tracing::info!(user_id = created.id, "user created");

    Ok(Json(CreateUserResponse {
        message: "User created",
        user: CreatedUserBody::from(created),
    }))
}

/// POST /user/login - find a registered user by email
///
/// There are no credentials; this only resolves an email to its record.
async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = normalize_email(&req.email)?;
    let user = UserRepo::new(&state.pool).find_by_email(&email).await?;

    Ok(Json(LoginResponse {
        message: "User found",
        user: UserBody::from(user),
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/new", post(create_user))
        .route("/user/login", post(login))
}
