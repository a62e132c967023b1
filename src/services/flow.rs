//! flow.rs
//!
//! The booking flow, page by page:
//!
//! 1.  `SelectingSeats` — layout fetched once, seats toggled locally.
//! 2.  `confirm()` — lock the selected seats, create the booking, carry the
//!     returned payment order into `AwaitingPayment`. Failure of either
//!     call refreshes availability and stays on seat selection.
//! 3.  Checkout — the widget reports one outcome. Success verifies the
//!     signature server-side and lands on the ticket; failure or dismissal
//!     posts the `fail` notification exactly once (releasing the server's
//!     lock) and returns to seat selection.
//!
//! The payment order lives in memory only, the analog of router navigation
//! state: a rebuilt flow cannot reach the payment page and `resume()` falls
//! back to seat selection.

use std::sync::Arc;
use tracing::{info, warn};

use crate::api::{booking, shows};
use crate::error::ApiError;
use crate::models::{PaymentOrder, SeatId, Show};
use crate::CineaClient;

use super::payment::{checkout_config, CheckoutConfig, CheckoutGateway, CheckoutOutcome};
use super::selection::{SeatSelection, Toggle};

#[derive(Debug, Clone)]
pub enum FlowState {
    SelectingSeats,
    AwaitingPayment { order: PaymentOrder },
    Booked { booking_id: String },
}

/// Where the UI should be after a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    SeatSelection,
    Payment,
    Ticket(String),
}

pub struct BookingFlow {
    client: Arc<CineaClient>,
    show: Show,
    pub selection: SeatSelection,
    state: FlowState,
    confirming: bool,
    fail_notified: bool,
    alert: Option<String>,
}

impl BookingFlow {
    /// Fetches the show (layout plus current availability) once and starts
    /// at seat selection.
    pub async fn load(client: Arc<CineaClient>, show_id: &str) -> Result<Self, ApiError> {
        let show = shows::get(&client, show_id).await?;
        let selection = SeatSelection::from_show(&show);
        Ok(Self {
            client,
            show,
            selection,
            state: FlowState::SelectingSeats,
            confirming: false,
            fail_notified: false,
            alert: None,
        })
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn toggle(&mut self, seat: &SeatId) -> Toggle {
        self.selection.toggle(seat)
    }

    /// Transient alert semantics: reading the alert consumes it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// The confirm button: lock the seats, create the booking, move to the
    /// payment page. Duplicate submissions are ignored while one is in
    /// flight.
    pub async fn confirm(&mut self) -> Route {
        if self.confirming {
            return self.current_route();
        }
        if self.client.session.require_user().is_err() {
            self.alert = Some("Please log in to continue".to_string());
            return Route::Login;
        }
        if self.selection.is_empty() {
            self.alert = Some("Select at least one seat".to_string());
            return Route::SeatSelection;
        }

        self.confirming = true;
        let seats = self.selection.selected();

        // 1) temporary server-side hold on the chosen seats
        if let Err(e) = booking::lock_seats(&self.client, &self.show.show_id, &seats).await {
            warn!("seat lock failed: {}", e);
            self.fail_on_selection(e).await;
            return Route::SeatSelection;
        }

        // 2) booking record + payment order descriptor
        let request = booking::CreateBookingRequest {
            show_id: &self.show.show_id,
            movie_id: &self.show.movie_id,
            seats: &seats,
            amount: self.selection.total_amount(),
        };
        match booking::create(&self.client, &request).await {
            Ok(order) => {
                info!(
                    "booking {} created, order {} for {} seat(s)",
                    order.booking_id,
                    order.order_id,
                    seats.len()
                );
                self.state = FlowState::AwaitingPayment { order };
                self.fail_notified = false;
                self.confirming = false;
                Route::Payment
            }
            Err(e) => {
                // The hold is left to expire server-side; the client only
                // refreshes what it can see.
                warn!("booking create failed: {}", e);
                self.fail_on_selection(e).await;
                Route::SeatSelection
            }
        }
    }

    /// Widget configuration for the current order, or None outside
    /// `AwaitingPayment`.
    pub fn checkout(&self) -> Option<CheckoutConfig> {
        let FlowState::AwaitingPayment { order } = &self.state else {
            return None;
        };
        let description = format!(
            "{} — {} seat(s), {} {}",
            self.show.theatre.name,
            self.selection.count(),
            self.show.date,
            self.show.time
        );
        let user = self.client.session.current();
        Some(checkout_config(
            order,
            &self.client.config.payment.checkout_key,
            description,
            user.as_ref(),
        ))
    }

    /// Opens the checkout widget and routes on its outcome.
    pub async fn launch_checkout<G: CheckoutGateway>(&mut self, gateway: &G) -> Route {
        let Some(config) = self.checkout() else {
            return self.resume().await;
        };
        let outcome = gateway.open(&config).await;
        self.finish_payment(outcome).await
    }

    /// Applies the widget's terminal outcome.
    pub async fn finish_payment(&mut self, outcome: CheckoutOutcome) -> Route {
        let order = match &self.state {
            FlowState::AwaitingPayment { order } => order.clone(),
            _ => return self.current_route(),
        };

        match outcome {
            CheckoutOutcome::Success {
                payment_id,
                signature,
            } => {
                let request = booking::VerifyPaymentRequest {
                    order_id: &order.order_id,
                    payment_id: &payment_id,
                    signature: &signature,
                };
                match booking::verify(&self.client, &request).await {
                    Ok(confirmed) => {
                        info!("booking {} verified", confirmed.booking_id);
                        self.state = FlowState::Booked {
                            booking_id: confirmed.booking_id.clone(),
                        };
                        Route::Ticket(confirmed.booking_id)
                    }
                    Err(e) => {
                        warn!("payment verification failed: {}", e);
                        self.alert = Some(e.message());
                        self.back_to_selection().await;
                        Route::SeatSelection
                    }
                }
            }
            CheckoutOutcome::Failed { reason } => {
                self.alert = Some(reason);
                self.abandon(&order).await;
                Route::SeatSelection
            }
            CheckoutOutcome::Dismissed => {
                self.alert = Some("Payment was cancelled".to_string());
                self.abandon(&order).await;
                Route::SeatSelection
            }
        }
    }

    /// A rebuilt flow loses the in-memory order: anything short of a
    /// finished booking resumes at seat selection with fresh availability.
    pub async fn resume(&mut self) -> Route {
        match &self.state {
            FlowState::Booked { booking_id } => Route::Ticket(booking_id.clone()),
            FlowState::AwaitingPayment { .. } | FlowState::SelectingSeats => {
                self.state = FlowState::SelectingSeats;
                self.refresh_availability().await;
                Route::SeatSelection
            }
        }
    }

    fn current_route(&self) -> Route {
        match &self.state {
            FlowState::SelectingSeats => Route::SeatSelection,
            FlowState::AwaitingPayment { .. } => Route::Payment,
            FlowState::Booked { booking_id } => Route::Ticket(booking_id.clone()),
        }
    }

    async fn fail_on_selection(&mut self, e: ApiError) {
        self.alert = Some(e.message());
        self.refresh_availability().await;
        self.confirming = false;
    }

    /// Abandonment path: one `fail` notification so the server releases its
    /// lock, then back to seat selection.
    async fn abandon(&mut self, order: &PaymentOrder) {
        if !self.fail_notified {
            self.fail_notified = true;
            if let Err(e) = booking::fail(&self.client, &order.order_id).await {
                // The server-side lock falls back to TTL expiry.
                warn!("failed-payment notification not delivered: {}", e);
            }
        }
        self.back_to_selection().await;
    }

    async fn back_to_selection(&mut self) {
        self.state = FlowState::SelectingSeats;
        self.refresh_availability().await;
    }

    async fn refresh_availability(&mut self) {
        match shows::availability(&self.client, &self.show.show_id).await {
            Ok(availability) => self.selection.refresh(availability),
            Err(e) => warn!("availability refresh failed: {}", e),
        }
    }
}
