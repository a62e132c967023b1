use serde::Deserialize;

// Fallback shown when the response body carries no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("authentication required")]
    AuthRequired,

    #[error("checkout error: {0}")]
    Checkout(String),
}

// Best-effort shape of backend error bodies
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Builds a status error from a non-success response, extracting the
    /// message from the body when one is present.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        if status.as_u16() == 401 {
            return ApiError::AuthRequired;
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            Err(_) => GENERIC_ERROR_MESSAGE.to_string(),
        };

        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// The string surfaced to the user as a transient alert.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::AuthRequired => "Please log in to continue".to_string(),
            ApiError::Checkout(msg) => msg.clone(),
            ApiError::Transport(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::AuthRequired => Some(401),
            _ => None,
        }
    }
}
