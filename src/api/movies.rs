use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::Movie;
use crate::CineaClient;

#[derive(Debug, Default, Serialize)]
pub struct MovieQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    movies: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    movie: Movie,
}

// GET /movies
pub async fn list(client: &CineaClient, query: &MovieQuery) -> Result<Vec<Movie>, ApiError> {
    let resp: MovieListResponse = client.http.get_query("/movies", query).await?;
    Ok(resp.movies)
}

// GET /movies/{id}
pub async fn get(client: &CineaClient, movie_id: &str) -> Result<Movie, ApiError> {
    let resp: MovieResponse = client.http.get(&format!("/movies/{}", movie_id)).await?;
    Ok(resp.movie)
}

// GET /movies?query= — used behind the search debouncer
pub async fn search(client: &CineaClient, text: &str) -> Result<Vec<Movie>, ApiError> {
    list(
        client,
        &MovieQuery {
            query: Some(text.to_string()),
            ..Default::default()
        },
    )
    .await
}
