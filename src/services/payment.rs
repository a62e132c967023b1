//! Bridge to the third-party checkout widget.
//!
//! The widget is external: the client hands it a configured order and gets
//! back exactly one terminal outcome. Success carries the provider's
//! signature fields, which are forwarded verbatim to the verify endpoint;
//! failure and dismissal are both treated as abandonment.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::{PaymentOrder, User};

/// Everything the widget needs to open: the order descriptor, the public
/// checkout key and prefill fields for the logged-in user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    pub key: String,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub prefill_name: Option<String>,
    pub prefill_email: Option<String>,
    pub token: String,
}

/// Terminal outcome reported by the widget's callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Success {
        payment_id: String,
        signature: String,
    },
    Failed {
        reason: String,
    },
    Dismissed,
}

/// Abstraction over the widget so the flow can be driven in tests.
pub trait CheckoutGateway {
    fn open(
        &self,
        config: &CheckoutConfig,
    ) -> impl std::future::Future<Output = CheckoutOutcome> + Send;
}

/// Checksum the widget is configured with, tying the order fields to the
/// checkout key.
pub fn order_token(order: &PaymentOrder, checkout_key: &str) -> String {
    let token_string = format!(
        "{}{}{}{}",
        order.order_id, order.amount, order.currency, checkout_key
    );
    let mut hasher = Sha256::new();
    hasher.update(token_string.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn checkout_config(
    order: &PaymentOrder,
    checkout_key: &str,
    description: String,
    user: Option<&User>,
) -> CheckoutConfig {
    CheckoutConfig {
        key: checkout_key.to_string(),
        order_id: order.order_id.clone(),
        amount: order.amount,
        currency: order.currency.clone(),
        name: "Cinea".to_string(),
        description,
        prefill_name: user.map(|u| u.name.clone()),
        prefill_email: user.map(|u| u.email.clone()),
        token: order_token(order, checkout_key),
    }
}
