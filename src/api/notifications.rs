use serde::Deserialize;

use crate::error::ApiError;
use crate::models::social::Notification;
use crate::CineaClient;

#[derive(Debug, Deserialize)]
struct NotificationListResponse {
    notifications: Vec<Notification>,
}

// GET /notifications
pub async fn list(client: &CineaClient) -> Result<Vec<Notification>, ApiError> {
    client.session.require_user()?;
    let resp: NotificationListResponse = client.http.get("/notifications").await?;
    Ok(resp.notifications)
}

// PATCH /notifications/{id}/read
pub async fn mark_read(client: &CineaClient, notification_id: &str) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .patch(
            &format!("/notifications/{}/read", notification_id),
            &serde_json::json!({}),
        )
        .await?;
    Ok(())
}

// PATCH /notifications/read-all
pub async fn mark_all_read(client: &CineaClient) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .patch("/notifications/read-all", &serde_json::json!({}))
        .await?;
    Ok(())
}
