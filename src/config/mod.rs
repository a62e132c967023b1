use serde::Deserialize;
use std::env;

// Top-level configuration container for the client
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub retry: RetryConfig,
    pub metadata: MetadataConfig,
    pub payment: PaymentConfig,
}

// Application-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    pub preferred_city: Option<String>,
}

// Backend API settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

// Retry policy for the shared HTTP client
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub backoff_base_secs: u64,
}

// Third-party movie metadata provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    pub api_key: String,
    pub image_base_url: String,
}

// Checkout widget settings
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub checkout_key: String,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinea_client=debug".to_string()),
                preferred_city: env::var("CINEA_PREFERRED_CITY").ok(),
            },
            api: ApiConfig {
                base_url: env::var("CINEA_API_URL").expect("CINEA_API_URL must be set"),
                timeout_secs: env::var("CINEA_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .expect("CINEA_API_TIMEOUT_SECS must be a valid number"),
            },
            retry: RetryConfig {
                max_retries: env::var("CINEA_MAX_RETRIES")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .expect("CINEA_MAX_RETRIES must be a valid number"),
                backoff_base_secs: env::var("CINEA_RETRY_BACKOFF_SECS")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()
                    .expect("CINEA_RETRY_BACKOFF_SECS must be a valid number"),
            },
            metadata: MetadataConfig {
                api_key: env::var("CINEA_METADATA_KEY").expect("CINEA_METADATA_KEY must be set"),
                image_base_url: env::var("CINEA_IMAGE_BASE_URL")
                    .unwrap_or_else(|_| "https://image.tmdb.org/t/p".to_string()),
            },
            payment: PaymentConfig {
                checkout_key: env::var("CINEA_CHECKOUT_KEY")
                    .unwrap_or_else(|_| "rzp_test_cinea".to_string()),
                currency: env::var("CINEA_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
            },
        }
    }
}
