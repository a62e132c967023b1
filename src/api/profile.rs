use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::social::Review;
use crate::models::User;
use crate::CineaClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user: User,
    #[serde(default)]
    pub is_following: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
struct AvatarRequest {
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

// GET /profile/{id}
pub async fn get(client: &CineaClient, user_id: &str) -> Result<Profile, ApiError> {
    client.http.get(&format!("/profile/{}", user_id)).await
}

/// POST /profile/{id}/follow — the session copy of `following` is updated
/// in place so the UI reflects the follow without a refetch.
pub async fn follow(client: &CineaClient, user_id: &str) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .post(
            &format!("/profile/{}/follow", user_id),
            &serde_json::json!({}),
        )
        .await?;

    let followed = user_id.to_string();
    client.session.update(|user| {
        if !user.following.contains(&followed) {
            user.following.push(followed.clone());
        }
    });
    Ok(())
}

// POST /profile/{id}/unfollow
pub async fn unfollow(client: &CineaClient, user_id: &str) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .post(
            &format!("/profile/{}/unfollow", user_id),
            &serde_json::json!({}),
        )
        .await?;

    client.session.update(|user| {
        user.following.retain(|id| id != user_id);
    });
    Ok(())
}

/// POST /profile/avatar — the image goes up as a base64 data URL, the way
/// the original page submitted file inputs.
pub async fn update_avatar(
    client: &CineaClient,
    image: &[u8],
    mime: &str,
) -> Result<User, ApiError> {
    client.session.require_user()?;
    let data_url = format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(image)
    );

    let resp: UserResponse = client
        .http
        .post("/profile/avatar", &AvatarRequest { avatar: data_url })
        .await?;

    let avatar = resp.user.avatar.clone();
    client.session.update(|user| user.avatar = avatar.clone());
    Ok(resp.user)
}
