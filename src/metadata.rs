use crate::config::MetadataConfig;

/// Shown when a title has no poster or the metadata lookup failed.
pub const PLACEHOLDER_POSTER: &str = "/assets/poster-placeholder.png";

/// URL builder for the third-party image host. Lookup failures are locally
/// recoverable: callers fall back to the placeholder instead of erroring.
#[derive(Clone)]
pub struct MetadataClient {
    api_key: String,
    image_base_url: String,
}

impl MetadataClient {
    pub fn from_config(config: &MetadataConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn poster_url(&self, poster_path: Option<&str>, size: &str) -> String {
        match poster_path {
            Some(path) => format!(
                "{}/{}/{}?api_key={}",
                self.image_base_url,
                size,
                path.trim_start_matches('/'),
                self.api_key
            ),
            None => PLACEHOLDER_POSTER.to_string(),
        }
    }

    pub fn backdrop_url(&self, backdrop_path: Option<&str>) -> String {
        self.poster_url(backdrop_path, "original")
    }
}
