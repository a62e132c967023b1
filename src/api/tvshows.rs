use serde::Deserialize;

use crate::error::ApiError;
use crate::models::TvShow;
use crate::CineaClient;

use super::movies::MovieQuery;

#[derive(Debug, Deserialize)]
struct TvShowListResponse {
    shows: Vec<TvShow>,
}

#[derive(Debug, Deserialize)]
struct TvShowResponse {
    show: TvShow,
}

// GET /tvshows
pub async fn list(client: &CineaClient, query: &MovieQuery) -> Result<Vec<TvShow>, ApiError> {
    let resp: TvShowListResponse = client.http.get_query("/tvshows", query).await?;
    Ok(resp.shows)
}

// GET /tvshows/{id}
pub async fn get(client: &CineaClient, show_id: &str) -> Result<TvShow, ApiError> {
    let resp: TvShowResponse = client.http.get(&format!("/tvshows/{}", show_id)).await?;
    Ok(resp.show)
}

pub async fn search(client: &CineaClient, text: &str) -> Result<Vec<TvShow>, ApiError> {
    list(
        client,
        &MovieQuery {
            query: Some(text.to_string()),
            ..Default::default()
        },
    )
    .await
}
