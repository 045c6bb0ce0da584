//! Integration tests for the reqwest gateway against a local HTTP server.
//!
//! The server mimics the attendance backend's two endpoints: it records the
//! CSRF header and JSON body of every POST, accepts `in` actions, and
//! rejects `out` actions with a message.

use attendance_clock::{
    AttendanceGateway, ClockAction, ClockRequest, Coordinates, HttpAttendanceGateway, TrackPing,
};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct SeenRequest {
    csrf: Option<String>,
    body: Value,
}

type Seen = Arc<Mutex<Vec<SeenRequest>>>;

fn record(seen: &Seen, headers: &HeaderMap, body: Value) {
    let csrf = headers
        .get("X-CSRFToken")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().unwrap().push(SeenRequest { csrf, body });
}

async fn clock_handler(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&seen, &headers, body.clone());
    if body["action"] == "in" {
        Json(json!({"status": "success"}))
    } else {
        Json(json!({"status": "error", "message": "Already clocked out"}))
    }
}

async fn track_handler(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&seen, &headers, body);
    Json(json!({"status": "logged"}))
}

async fn spawn_server() -> (SocketAddr, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/attendance/ajax-clock/", post(clock_handler))
        .route("/attendance/auto-clock-log/", post(track_handler))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, seen)
}

#[tokio::test]
async fn clock_post_carries_csrf_header_and_payload() {
    let (addr, seen) = spawn_server().await;
    let gateway = HttpAttendanceGateway::new(format!("http://{addr}"), "test-csrf-token");

    let request = ClockRequest::new(ClockAction::In, Coordinates::new(40.4237, -86.9212));
    let response = gateway.clock(&request).await.unwrap();
    assert!(response.is_success());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].csrf.as_deref(), Some("test-csrf-token"));
    assert_eq!(
        seen[0].body,
        json!({"action": "in", "lat": 40.4237, "lng": -86.9212})
    );
}

#[tokio::test]
async fn rejected_clock_action_returns_the_server_message() {
    let (addr, _seen) = spawn_server().await;
    let gateway = HttpAttendanceGateway::new(format!("http://{addr}"), "token");

    let request = ClockRequest::new(ClockAction::Out, Coordinates::new(0.0, 0.0));
    let response = gateway.clock(&request).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.message.as_deref(), Some("Already clocked out"));
}

#[tokio::test]
async fn track_post_uses_the_long_coordinate_names() {
    let (addr, seen) = spawn_server().await;
    let gateway = HttpAttendanceGateway::new(format!("http://{addr}"), "token");

    let ping = TrackPing::from(Coordinates::new(1.25, -2.5));
    let response = gateway.track(&ping).await.unwrap();
    assert_eq!(response.status, "logged");

    // The CSRF header travels on the track POST too, not just the clock one
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].csrf.as_deref(), Some("token"));
    assert_eq!(seen[0].body, json!({"latitude": 1.25, "longitude": -2.5}));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop a listener to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpAttendanceGateway::new(format!("http://{addr}"), "token");
    let request = ClockRequest::new(ClockAction::In, Coordinates::new(0.0, 0.0));
    assert!(gateway.clock(&request).await.is_err());
}
