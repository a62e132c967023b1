use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seat::SeatId;

/// A finalized (or in-flight) seat purchase record. Created server-side;
/// the client holds only ids and display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: String,
    pub movie_id: String,
    pub show_id: String,
    pub seats: Vec<SeatId>,
    pub status: String,
    pub amount: i64,
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub theatre_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
}

/// The payment order descriptor returned by booking creation. It is carried
/// in navigation state only — a rebuild of the flow loses it and falls back
/// to seat selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    pub booking_id: String,
    pub amount: i64,
    pub currency: String,
    pub key: String,
}
