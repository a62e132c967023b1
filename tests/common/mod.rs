#![allow(dead_code)]

use std::sync::Arc;

use cinea_client::config::{ApiConfig, AppConfig, Config, MetadataConfig, PaymentConfig, RetryConfig};
use cinea_client::models::{Role, User};
use cinea_client::CineaClient;
use wiremock::MockServer;

/// Config pointed at a mock server, with zero backoff so retry tests run
/// instantly. Retry counts match production defaults.
pub fn test_config(base_url: &str) -> Config {
    Config {
        app: AppConfig {
            rust_log: "cinea_client=debug".to_string(),
            preferred_city: Some("Lyon".to_string()),
        },
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 15,
        },
        retry: RetryConfig {
            max_retries: 2,
            backoff_base_secs: 0,
        },
        metadata: MetadataConfig {
            api_key: "test-key".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
        },
        payment: PaymentConfig {
            checkout_key: "rzp_test_cinea".to_string(),
            currency: "INR".to_string(),
        },
    }
}

pub fn test_client(server: &MockServer) -> Arc<CineaClient> {
    CineaClient::new(test_config(&server.uri()))
}

pub fn sample_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        avatar: None,
        role: Role::User,
        followers: vec![],
        following: vec![],
    }
}

pub fn show_json() -> serde_json::Value {
    serde_json::json!({
        "show": {
            "showId": "s1",
            "movieId": "m1",
            "theatre": { "_id": "t1", "name": "Grand", "city": "Lyon" },
            "date": "2026-03-14",
            "time": "19:30",
            "seatLayout": [
                { "row": "A", "seats": 12, "price": 250 },
                { "row": "B", "seats": 12, "price": 180 }
            ],
            "bookedSeats": ["A1", "A2"],
            "lockedSeats": ["B3"]
        }
    })
}

pub fn availability_json() -> serde_json::Value {
    serde_json::json!({
        "bookedSeats": ["A1", "A2"],
        "lockedSeats": ["B3"]
    })
}

pub fn order_json() -> serde_json::Value {
    serde_json::json!({
        "order": {
            "orderId": "order_9",
            "bookingId": "b9",
            "amount": 430,
            "currency": "INR",
            "key": "rzp_test_cinea"
        }
    })
}

pub fn booking_json() -> serde_json::Value {
    serde_json::json!({
        "booking": {
            "bookingId": "b9",
            "movieId": "m1",
            "showId": "s1",
            "seats": ["A7", "B7"],
            "status": "confirmed",
            "amount": 430
        }
    })
}
