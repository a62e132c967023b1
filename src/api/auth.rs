use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;
use crate::models::User;
use crate::CineaClient;

#[derive(Debug, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 60))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    user: User,
}

// POST /auth/register
pub async fn register(client: &CineaClient, req: &RegisterRequest) -> Result<User, ApiError> {
    req.validate().map_err(|e| ApiError::Status {
        status: 400,
        message: e.to_string(),
    })?;

    let resp: AuthResponse = client.http.post("/auth/register", req).await?;
    client.session.set(resp.user.clone());
    Ok(resp.user)
}

// POST /auth/login — the session cookie rides back on the response
pub async fn login(client: &CineaClient, req: &LoginRequest) -> Result<User, ApiError> {
    let resp: AuthResponse = client.http.post("/auth/login", req).await?;
    client.session.set(resp.user.clone());
    Ok(resp.user)
}

/// GET /auth/check — the session-check call made once at app start. A
/// failure here just means "not logged in"; it is never surfaced.
pub async fn check(client: &CineaClient) -> Option<User> {
    match client.http.get::<AuthResponse>("/auth/check").await {
        Ok(resp) => {
            client.session.set(resp.user.clone());
            Some(resp.user)
        }
        Err(e) => {
            debug!("session check failed: {}", e);
            None
        }
    }
}

/// POST /auth/logout — the local session is cleared even when the server
/// call fails, so protected routes start redirecting immediately.
pub async fn logout(client: &CineaClient) -> Result<(), ApiError> {
    let result = client
        .http
        .post_empty::<serde_json::Value>("/auth/logout")
        .await;
    client.session.clear();
    result.map(|_| ())
}
