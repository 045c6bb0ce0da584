//! Integration tests for the geolocation-gated submission flow, driven
//! through the assembled widget.

use attendance_clock::infrastructure::mocks::{MockGateway, MockLocator};
use attendance_clock::{
    AttendanceWidget, ClockAction, Coordinates, LocateError, SubmitError, SubmitOutcome,
};
use std::sync::Arc;

fn widget_with(
    locator: Arc<MockLocator>,
    gateway: Arc<MockGateway>,
) -> AttendanceWidget {
    AttendanceWidget::builder()
        .with_start_attribute(Some("2026-08-29T09:00:00Z"))
        .with_locator(locator)
        .with_gateway(gateway)
        .build()
        .unwrap()
}

#[tokio::test]
async fn successful_clock_in_requests_reload() {
    let locator = Arc::new(MockLocator::returning(Coordinates::new(40.4237, -86.9212)));
    let gateway = Arc::new(MockGateway::respond_with("success", None));
    let widget = widget_with(locator.clone(), gateway.clone());

    let outcome = widget.submit(ClockAction::In).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Reload);

    // Exactly one POST, carrying the action string and numeric coordinates
    let requests = gateway.clock_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action.as_str(), "in");
    assert_eq!(requests[0].lat, 40.4237);
    assert_eq!(requests[0].lng, -86.9212);
    assert_eq!(locator.call_count(), 1);
}

#[tokio::test]
async fn action_is_derived_from_button_label() {
    let locator = Arc::new(MockLocator::returning(Coordinates::new(0.0, 0.0)));
    let gateway = Arc::new(MockGateway::respond_with("success", None));
    let widget = widget_with(locator, gateway.clone());

    widget.submit_for_label("Clock-In").await.unwrap();
    widget.submit_for_label("Clock Out").await.unwrap();

    let actions: Vec<&str> = gateway
        .clock_requests()
        .iter()
        .map(|r| r.action.as_str())
        .collect();
    assert_eq!(actions, vec!["in", "out"]);
}

#[tokio::test]
async fn denied_location_aborts_before_the_network() {
    let locator = Arc::new(MockLocator::denying());
    let gateway = Arc::new(MockGateway::respond_with("success", None));
    let widget = widget_with(locator, gateway.clone());

    let error = widget.submit(ClockAction::In).await.unwrap_err();
    assert!(matches!(error, SubmitError::Location(LocateError::Denied)));
    assert!(error.to_string().contains("Location access is required"));
    assert!(gateway.clock_requests().is_empty());
}

#[tokio::test]
async fn unsupported_geolocation_aborts_before_the_network() {
    let locator = Arc::new(MockLocator::unsupported());
    let gateway = Arc::new(MockGateway::respond_with("success", None));
    let widget = widget_with(locator, gateway.clone());

    let error = widget.submit(ClockAction::Out).await.unwrap_err();
    assert!(matches!(
        error,
        SubmitError::Location(LocateError::Unsupported)
    ));
    assert!(gateway.clock_requests().is_empty());
}

#[tokio::test]
async fn server_rejection_surfaces_the_message_without_reload() {
    let locator = Arc::new(MockLocator::returning(Coordinates::new(0.0, 0.0)));
    let gateway = Arc::new(MockGateway::respond_with(
        "error",
        Some("Already clocked out"),
    ));
    let widget = widget_with(locator, gateway);

    let error = widget.submit(ClockAction::Out).await.unwrap_err();
    match &error {
        SubmitError::Rejected { message } => assert_eq!(message, "Already clocked out"),
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert!(error.to_string().contains("Already clocked out"));
}

#[tokio::test]
async fn transport_failure_is_a_generic_transient_error() {
    let locator = Arc::new(MockLocator::returning(Coordinates::new(0.0, 0.0)));
    let gateway = Arc::new(MockGateway::failing());
    let widget = widget_with(locator, gateway);

    let error = widget.submit(ClockAction::In).await.unwrap_err();
    assert!(matches!(error, SubmitError::Transport(_)));
    assert!(error.to_string().contains("Something went wrong"));
}

#[tokio::test]
async fn overlapping_submissions_are_not_guarded() {
    // Two clicks before the first resolves simply issue two requests.
    let locator = Arc::new(MockLocator::returning(Coordinates::new(1.0, 1.0)));
    let gateway = Arc::new(MockGateway::respond_with("success", None));
    let widget = widget_with(locator, gateway.clone());

    let (a, b) = tokio::join!(
        widget.submit(ClockAction::Out),
        widget.submit(ClockAction::Out)
    );
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(gateway.clock_requests().len(), 2);
}
