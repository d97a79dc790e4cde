//! Review endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Review, ReviewRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::NewReview;

/// Create review request
///
/// Numeric fields are typed, so a string or fractional rating is rejected
/// while decoding the body.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub title: String,
    pub description: String,
    pub rating: i64,
    pub user_id: i64,
    pub space_id: i64,
}

#[derive(Serialize)]
pub struct CreateReviewResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Review response
#[derive(Serialize)]
pub struct ReviewBody {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub user_id: i64,
    pub space_id: i64,
    pub created_at: String,
}

impl From<Review> for ReviewBody {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            rating: r.rating,
            user_id: r.user_id,
            space_id: r.space_id,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewBody>,
}

/// POST /third_space/new_review - review a space
async fn create_review(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateReviewRequest>,
) -> Result<Json<CreateReviewResponse>, ApiError> {
    let review = NewReview::new(
        req.title,
        req.description,
        req.rating,
        req.user_id,
        req.space_id,
    )?;
    let id = ReviewRepo::new(&state.pool).create(&review).await?;
    tracing::info!(
        review_id = id,
        space_id = review.space_id,
        user_id = review.user_id,
        "review created"
    );

    Ok(Json(CreateReviewResponse {
        message: "Review created",
        id,
    }))
}

/// GET /third_space/{id}/reviews - reviews of one space, newest first
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ValidId(space_id): ValidId,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let reviews = ReviewRepo::new(&state.pool).list_for_space(space_id).await?;

    Ok(Json(ReviewListResponse {
        reviews: reviews.into_iter().map(ReviewBody::from).collect(),
    }))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/third_space/new_review", post(create_review))
        .route("/third_space/{id}/reviews", get(list_reviews))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_must_be_numeric() {
        let json = r#"{"title":"t","description":"d","rating":"five","user_id":1,"space_id":1}"#;
        assert!(serde_json::from_str::<CreateReviewRequest>(json).is_err());

        let json = r#"{"title":"t","description":"d","rating":4.5,"user_id":1,"space_id":1}"#;
        assert!(serde_json::from_str::<CreateReviewRequest>(json).is_err());
    }

    #[test]
    fn deserialize_review_request() {
        let json = r#"{"title":"Cozy","description":"Nice","rating":4,"user_id":2,"space_id":9}"#;
        let req: CreateReviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.rating, 4);
        assert_eq!((req.user_id, req.space_id), (2, 9));
    }
}
