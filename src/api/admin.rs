use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{Booking, Movie};
use crate::CineaClient;

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpsert {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BookingsQuery {
    page: u32,
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    movie: Movie,
}

#[derive(Debug, Deserialize)]
struct BookingListResponse {
    bookings: Vec<Booking>,
}

// POST /admin/movies — role-gated before the request leaves
pub async fn upsert_movie(client: &CineaClient, movie: &MovieUpsert) -> Result<Movie, ApiError> {
    client.session.require_admin()?;
    movie.validate().map_err(|e| ApiError::Status {
        status: 400,
        message: e.to_string(),
    })?;

    let resp: MovieResponse = client.http.post("/admin/movies", movie).await?;
    Ok(resp.movie)
}

// DELETE /admin/movies/{id}
pub async fn delete_movie(client: &CineaClient, movie_id: &str) -> Result<(), ApiError> {
    client.session.require_admin()?;
    let _: serde_json::Value = client
        .http
        .delete(&format!("/admin/movies/{}", movie_id))
        .await?;
    Ok(())
}

// GET /admin/bookings
pub async fn list_bookings(client: &CineaClient, page: u32) -> Result<Vec<Booking>, ApiError> {
    client.session.require_admin()?;
    let resp: BookingListResponse = client
        .http
        .get_query("/admin/bookings", &BookingsQuery { page })
        .await?;
    Ok(resp.bookings)
}
