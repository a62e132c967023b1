mod common;

use cinea_client::models::SeatId;
use cinea_client::services::flow::{BookingFlow, FlowState, Route};
use cinea_client::services::payment::{CheckoutConfig, CheckoutGateway, CheckoutOutcome};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Widget double that reports a scripted outcome.
struct ScriptedGateway(CheckoutOutcome);

impl CheckoutGateway for ScriptedGateway {
    async fn open(&self, _config: &CheckoutConfig) -> CheckoutOutcome {
        self.0.clone()
    }
}

async fn flow_with_selection(server: &MockServer) -> BookingFlow {
    let client = common::test_client(server);
    client.session.set(common::sample_user());

    Mock::given(method("GET"))
        .and(path("/shows/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::show_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shows/s1/seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::availability_json()))
        .mount(server)
        .await;

    let mut flow = BookingFlow::load(client, "s1").await.expect("show loads");
    flow.toggle(&SeatId::from("A7"));
    flow.toggle(&SeatId::from("B7"));
    flow
}

#[tokio::test]
async fn failed_seat_lock_stays_on_selection_with_refreshed_availability() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "Seat already locked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let route = flow.confirm().await;

    assert_eq!(route, Route::SeatSelection);
    assert!(matches!(flow.state(), FlowState::SelectingSeats));
    assert_eq!(flow.take_alert().as_deref(), Some("Seat already locked"));
    // availability was re-fetched: GET /shows/s1/seats once
    let requests = server.received_requests().await.unwrap();
    let refreshes = requests
        .iter()
        .filter(|r| r.url.path() == "/shows/s1/seats")
        .count();
    assert_eq!(refreshes, 1);
}

#[tokio::test]
async fn failed_booking_create_stays_on_selection() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "Show is sold out"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let route = flow.confirm().await;

    assert_eq!(route, Route::SeatSelection);
    assert!(matches!(flow.state(), FlowState::SelectingSeats));
    assert_eq!(flow.take_alert().as_deref(), Some("Show is sold out"));
    assert!(flow.checkout().is_none());
}

#[tokio::test]
async fn confirm_reaches_payment_with_idempotency_key() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/create"))
        .and(header_exists("Idempotency-Key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::order_json()))
        .expect(1)
        .mount(&server)
        .await;

    let route = flow.confirm().await;

    assert_eq!(route, Route::Payment);
    let checkout = flow.checkout().expect("checkout config available");
    assert_eq!(checkout.order_id, "order_9");
    assert_eq!(checkout.amount, 430);
    assert_eq!(checkout.prefill_email.as_deref(), Some("ada@example.com"));
    server.verify().await;
}

#[tokio::test]
async fn dismissal_posts_exactly_one_fail_and_returns_to_selection() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::order_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/fail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(flow.confirm().await, Route::Payment);

    let gateway = ScriptedGateway(CheckoutOutcome::Dismissed);
    let route = flow.launch_checkout(&gateway).await;
    assert_eq!(route, Route::SeatSelection);
    assert!(matches!(flow.state(), FlowState::SelectingSeats));

    // A stray second callback must not produce a second fail notification.
    let route = flow.finish_payment(CheckoutOutcome::Dismissed).await;
    assert_eq!(route, Route::SeatSelection);

    server.verify().await;
}

#[tokio::test]
async fn successful_payment_verifies_and_lands_on_ticket() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::order_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::booking_json()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(flow.confirm().await, Route::Payment);

    let gateway = ScriptedGateway(CheckoutOutcome::Success {
        payment_id: "pay_1".to_string(),
        signature: "sig_1".to_string(),
    });
    let route = flow.launch_checkout(&gateway).await;

    assert_eq!(route, Route::Ticket("b9".to_string()));
    assert!(matches!(flow.state(), FlowState::Booked { .. }));
    server.verify().await;
}

#[tokio::test]
async fn resume_from_awaiting_payment_falls_back_to_selection() {
    let server = MockServer::start().await;
    let mut flow = flow_with_selection(&server).await;

    Mock::given(method("POST"))
        .and(path("/booking/lock-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/booking/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::order_json()))
        .mount(&server)
        .await;

    assert_eq!(flow.confirm().await, Route::Payment);

    // The refresh analogy: the order descriptor is gone, so the flow lands
    // back on seat selection rather than a blank payment page.
    assert_eq!(flow.resume().await, Route::SeatSelection);
    assert!(matches!(flow.state(), FlowState::SelectingSeats));
    assert!(flow.checkout().is_none());
}

#[tokio::test]
async fn confirm_without_login_redirects_to_login() {
    let server = MockServer::start().await;
    let client = common::test_client(&server);

    Mock::given(method("GET"))
        .and(path("/shows/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::show_json()))
        .mount(&server)
        .await;

    let mut flow = BookingFlow::load(client, "s1").await.expect("show loads");
    flow.toggle(&SeatId::from("A7"));

    assert_eq!(flow.confirm().await, Route::Login);
    assert!(matches!(flow.state(), FlowState::SelectingSeats));
}
