use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Booking, PaymentOrder, SeatId};
use crate::CineaClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockSeatsRequest<'a> {
    pub show_id: &'a str,
    pub seats: &'a [SeatId],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest<'a> {
    pub show_id: &'a str,
    pub movie_id: &'a str,
    pub seats: &'a [SeatId],
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
struct CreateBookingResponse {
    order: PaymentOrder,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest<'a> {
    pub order_id: &'a str,
    pub payment_id: &'a str,
    pub signature: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyPaymentResponse {
    booking: Booking,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FailPaymentRequest<'a> {
    order_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct BookingListResponse {
    bookings: Vec<Booking>,
}

#[derive(Debug, Deserialize)]
struct BookingResponse {
    booking: Booking,
}

/// POST /booking/lock-seats — best-effort temporary hold on the selected
/// set before the booking record is created.
pub async fn lock_seats(
    client: &CineaClient,
    show_id: &str,
    seats: &[SeatId],
) -> Result<(), ApiError> {
    client.session.require_user()?;
    let _: serde_json::Value = client
        .http
        .post("/booking/lock-seats", &LockSeatsRequest { show_id, seats })
        .await?;
    Ok(())
}

/// POST /booking/create — returns the payment order descriptor. Carries an
/// idempotency key so the retry policy cannot double-create the booking.
pub async fn create(
    client: &CineaClient,
    req: &CreateBookingRequest<'_>,
) -> Result<PaymentOrder, ApiError> {
    client.session.require_user()?;
    let resp: CreateBookingResponse = client.http.post_idempotent("/booking/create", req).await?;
    Ok(resp.order)
}

// POST /booking/verify — forwards the provider's signature fields
pub async fn verify(
    client: &CineaClient,
    req: &VerifyPaymentRequest<'_>,
) -> Result<Booking, ApiError> {
    let resp: VerifyPaymentResponse = client.http.post("/booking/verify", req).await?;
    Ok(resp.booking)
}

/// POST /booking/fail — tells the server the checkout was abandoned so it
/// can release its seat lock.
pub async fn fail(client: &CineaClient, order_id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .http
        .post("/booking/fail", &FailPaymentRequest { order_id })
        .await?;
    Ok(())
}

// GET /booking/{id} — the ticket page fetch
pub async fn ticket(client: &CineaClient, booking_id: &str) -> Result<Booking, ApiError> {
    client.session.require_user()?;
    let resp: BookingResponse = client
        .http
        .get(&format!("/booking/{}", booking_id))
        .await?;
    Ok(resp.booking)
}

// GET /booking/me
pub async fn mine(client: &CineaClient) -> Result<Vec<Booking>, ApiError> {
    client.session.require_user()?;
    let resp: BookingListResponse = client.http.get("/booking/me").await?;
    Ok(resp.bookings)
}
