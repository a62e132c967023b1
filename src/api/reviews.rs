use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use crate::models::social::{NewReview, Review};
use crate::CineaClient;

#[derive(Debug, Deserialize)]
struct ReviewListResponse {
    reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
struct ReviewResponse {
    review: Review,
}

// GET /reviews/movie/{id}
pub async fn for_movie(client: &CineaClient, movie_id: &str) -> Result<Vec<Review>, ApiError> {
    let resp: ReviewListResponse = client
        .http
        .get(&format!("/reviews/movie/{}", movie_id))
        .await?;
    Ok(resp.reviews)
}

// POST /reviews/add — validated before the request leaves
pub async fn add(client: &CineaClient, review: &NewReview) -> Result<Review, ApiError> {
    client.session.require_user()?;
    review.validate().map_err(|e| ApiError::Status {
        status: 400,
        message: e.to_string(),
    })?;

    let resp: ReviewResponse = client.http.post("/reviews/add", review).await?;
    Ok(resp.review)
}

// DELETE /reviews/{id}
pub async fn delete(client: &CineaClient, review_id: &str) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .delete(&format!("/reviews/{}", review_id))
        .await?;
    Ok(())
}
