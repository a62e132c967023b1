use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::models::Movie;
use crate::CineaClient;

use super::movies;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub user_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeed {
    #[serde(default)]
    recommended: Vec<String>,
    #[serde(default)]
    trending: Vec<String>,
    #[serde(default)]
    friends_activity: Vec<Activity>,
}

#[derive(Debug)]
pub struct HomeFeed {
    pub recommended: Vec<Movie>,
    pub trending: Vec<Movie>,
    pub friends_activity: Vec<Activity>,
}

/// GET /home/feed plus per-movie enrichment. The feed endpoint returns
/// ids; each id is resolved concurrently and an item whose lookup fails is
/// dropped rather than surfacing an error.
pub async fn feed(client: &CineaClient) -> Result<HomeFeed, ApiError> {
    let raw: RawFeed = client.http.get("/home/feed").await?;

    let recommended = enrich(client, raw.recommended).await;
    let trending = enrich(client, raw.trending).await;

    Ok(HomeFeed {
        recommended,
        trending,
        friends_activity: raw.friends_activity,
    })
}

async fn enrich(client: &CineaClient, ids: Vec<String>) -> Vec<Movie> {
    let fetches = ids.iter().map(|id| movies::get(client, id));
    join_all(fetches)
        .await
        .into_iter()
        .zip(ids.iter())
        .filter_map(|(result, id)| match result {
            Ok(movie) => Some(movie),
            Err(e) => {
                debug!("dropping feed item {}: {}", id, e);
                None
            }
        })
        .collect()
}
