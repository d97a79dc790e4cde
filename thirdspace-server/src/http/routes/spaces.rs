//! Space endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Space, SpaceRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::NewSpace;

/// Create space request
#[derive(Deserialize)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub photo_url: String,
    pub location_data: String,
}

/// Space response
#[derive(Serialize)]
pub struct SpaceBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub photo_url: String,
    pub location_data: String,
    pub created_at: String,
}

impl From<Space> for SpaceBody {
    fn from(s: Space) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            tags: s.tags,
            photo_url: s.photo_url,
            location_data: s.location_data,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct CreateSpaceResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Serialize)]
pub struct SpaceListResponse {
    pub spaces: Vec<SpaceBody>,
}

#[derive(Serialize)]
pub struct SpaceResponse {
    pub space: SpaceBody,
}

/// POST /third_space/new - list a new space
async fn create_space(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateSpaceRequest>,
) -> Result<Json<CreateSpaceResponse>, ApiError> {
    let space = NewSpace::new(
        req.name,
        req.description,
        req.tags,
        req.photo_url,
        req.location_data,
    )?;
    let id = SpaceRepo::new(&state.pool).create(&space).await?;
    tracing::info!(space_id = id, "space created");

    Ok(Json(CreateSpaceResponse {
        message: "Space created",
        id,
    }))
}

/// GET /third_space/ - all spaces, newest first
async fn list_spaces(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SpaceListResponse>, ApiError> {
    let spaces = SpaceRepo::new(&state.pool).list().await?;

    Ok(Json(SpaceListResponse {
        spaces: spaces.into_iter().map(SpaceBody::from).collect(),
    }))
}

/// GET /third_space/{id} - a single space
async fn get_space(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<SpaceResponse>, ApiError> {
    let space = SpaceRepo::new(&state.pool).get(id).await?;
    Ok(Json(SpaceResponse {
        space: SpaceBody::from(space),
    }))
}

/// Space routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/third_space", get(list_spaces))
        .route("/third_space/", get(list_spaces))
        .route("/third_space/new", post(create_space))
        .route("/third_space/{id}", get(get_space))
}
