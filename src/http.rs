//! http.rs
//!
//! The single configured HTTP client every API call goes through.
//!
//! Policy, applied uniformly:
//! 1.  Credentials ride on a cookie store, set by the login call.
//! 2.  Requests time out after `api.timeout_secs` (15s by default).
//! 3.  Transport errors and 5xx responses are retried up to
//!     `retry.max_retries` times with linearly increasing backoff
//!     (1s, then 2s). 4xx responses are never retried.
//!
//! Booking creation is the one non-idempotent call that rides this retry
//! policy, so it goes through `post_idempotent` which attaches an
//! `Idempotency-Key` header the server can deduplicate on.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{ApiConfig, RetryConfig};
use crate::error::ApiError;

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
    max_retries: u32,
    backoff_base: Duration,
}

impl HttpClient {
    pub fn from_config(api: &ApiConfig, retry: &RetryConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            inner: reqwest::Client::builder()
                .cookie_store(true)
                .timeout(Duration::from_secs(api.timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            max_retries: retry.max_retries,
            backoff_base: Duration::from_secs(retry.backoff_base_secs),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_with_retry(self.inner.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let qs = serde_urlencoded::to_string(query).unwrap_or_default();
        let url = if qs.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), qs)
        };
        let response = self.send_with_retry(self.inner.get(url)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.inner.post(self.url(path)).json(body);
        let response = self.send_with_retry(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST with an `Idempotency-Key` header, for calls that create
    /// server-side records and must survive the retry policy unduplicated.
    pub async fn post_idempotent<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let key = uuid::Uuid::new_v4().to_string();
        let request = self
            .inner
            .post(self.url(path))
            .header("Idempotency-Key", &key)
            .json(body);
        debug!("POST {} idempotency_key={}", path, key);
        let response = self.send_with_retry(request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_with_retry(self.inner.post(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.inner.patch(self.url(path)).json(body);
        let response = self.send_with_retry(request).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .send_with_retry(self.inner.delete(self.url(path)))
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// Sends a request through the retry policy and maps non-success
    /// statuses to `ApiError`.
    async fn send_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = request;
        let mut attempt: u32 = 0;

        loop {
            // Bodies are buffered JSON, so the builder is clonable; a
            // non-clonable (streaming) request is sent once, unretried.
            let (current, rest) = match request.try_clone() {
                Some(clone) => (clone, Some(request)),
                None => (request, None),
            };

            let result = current.send().await;
            let retryable = match &result {
                Ok(response) => response.status().is_server_error(),
                Err(_) => true,
            };

            if retryable && attempt < self.max_retries {
                if let Some(original) = rest {
                    request = original;
                    attempt += 1;
                    let delay = self.backoff_base * attempt;
                    match &result {
                        Ok(response) => warn!(
                            "retrying after {} (attempt {}/{}, backoff {:?})",
                            response.status(),
                            attempt,
                            self.max_retries,
                            delay
                        ),
                        Err(e) => warn!(
                            "retrying after network error (attempt {}/{}, backoff {:?}): {}",
                            attempt, self.max_retries, delay, e
                        ),
                    }
                    sleep(delay).await;
                    continue;
                }
            }

            return match result {
                Ok(response) if response.status().is_success() => Ok(response),
                Ok(response) => Err(ApiError::from_response(response).await),
                Err(e) => Err(ApiError::Transport(e)),
            };
        }
    }
}
