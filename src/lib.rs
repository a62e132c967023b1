pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod metadata;
pub mod models;
pub mod services;
pub mod session;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::ApiError;

// Shared state for the whole client
pub struct CineaClient {
    pub http: http::HttpClient,
    pub session: session::Session,
    pub prefs: session::Preferences,
    pub metadata: metadata::MetadataClient,
    pub config: config::Config,
}

impl CineaClient {
    pub fn new(config: config::Config) -> Arc<Self> {
        let http = http::HttpClient::from_config(&config.api, &config.retry);
        let metadata = metadata::MetadataClient::from_config(&config.metadata);
        let prefs = session::Preferences::with_city(config.app.preferred_city.clone());

        Arc::new(Self {
            http,
            session: session::Session::new(),
            prefs,
            metadata,
            config,
        })
    }

    /// The session-check call made once at app start. Returns the logged-in
    /// user, or None when there is no live session (including when the call
    /// itself fails — the app just starts logged out).
    pub async fn bootstrap(self: &Arc<Self>) -> Option<models::User> {
        api::auth::check(self).await
    }
}

/// Tracing setup for an application shell embedding the client.
pub fn init_tracing(rust_log: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
