use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::social::WatchlistEntry;
use crate::CineaClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddRequest<'a> {
    media_id: &'a str,
    media_type: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletedRequest {
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct WatchlistResponse {
    watchlist: Vec<WatchlistEntry>,
}

// GET /watchlist
pub async fn list(client: &CineaClient) -> Result<Vec<WatchlistEntry>, ApiError> {
    client.session.require_user()?;
    let resp: WatchlistResponse = client.http.get("/watchlist").await?;
    Ok(resp.watchlist)
}

// POST /watchlist/add
pub async fn add(
    client: &CineaClient,
    media_id: &str,
    media_type: &str,
) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .post(
            "/watchlist/add",
            &AddRequest {
                media_id,
                media_type,
            },
        )
        .await?;
    Ok(())
}

// DELETE /watchlist/{id}
pub async fn remove(client: &CineaClient, media_id: &str) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .delete(&format!("/watchlist/{}", media_id))
        .await?;
    Ok(())
}

/// PATCH /watchlist/{id}/completed — the watch-progress marking.
pub async fn set_completed(
    client: &CineaClient,
    media_id: &str,
    completed: bool,
) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .patch(
            &format!("/watchlist/{}/completed", media_id),
            &CompletedRequest { completed },
        )
        .await?;
    Ok(())
}
