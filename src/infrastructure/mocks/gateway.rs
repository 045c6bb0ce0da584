//! Mock attendance gateway for testing.

use crate::application::ports::{AttendanceGateway, GatewayError};
use crate::domain::payload::{ClockRequest, ClockResponse, TrackPing};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock gateway that records requests and answers with a scripted response.
#[derive(Debug)]
pub struct MockGateway {
    response: Option<ClockResponse>,
    clock_requests: Mutex<Vec<ClockRequest>>,
    track_pings: Mutex<Vec<TrackPing>>,
    track_attempts: AtomicUsize,
}

impl MockGateway {
    /// Gateway that answers every request with the given status/message.
    pub fn respond_with(status: &str, message: Option<&str>) -> Self {
        Self {
            response: Some(ClockResponse {
                status: status.to_string(),
                message: message.map(str::to_string),
            }),
            clock_requests: Mutex::new(Vec::new()),
            track_pings: Mutex::new(Vec::new()),
            track_attempts: AtomicUsize::new(0),
        }
    }

    /// Gateway that fails every request at the transport level.
    pub fn failing() -> Self {
        Self {
            response: None,
            clock_requests: Mutex::new(Vec::new()),
            track_pings: Mutex::new(Vec::new()),
            track_attempts: AtomicUsize::new(0),
        }
    }

    /// Clock requests received so far.
    pub fn clock_requests(&self) -> Vec<ClockRequest> {
        self.clock_requests
            .lock()
            .expect("MockGateway mutex poisoned")
            .clone()
    }

    /// Track pings received so far (successful transport only).
    pub fn track_pings(&self) -> Vec<TrackPing> {
        self.track_pings
            .lock()
            .expect("MockGateway mutex poisoned")
            .clone()
    }

    /// Track attempts, including ones that failed at the transport level.
    pub fn track_attempts(&self) -> usize {
        self.track_attempts.load(Ordering::SeqCst)
    }

    fn scripted_response(&self) -> Result<ClockResponse, GatewayError> {
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(GatewayError::Transport("connection refused".into())),
        }
    }
}

#[async_trait]
impl AttendanceGateway for MockGateway {
    async fn clock(&self, request: &ClockRequest) -> Result<ClockResponse, GatewayError> {
        self.clock_requests
            .lock()
            .expect("MockGateway mutex poisoned")
            .push(*request);
        self.scripted_response()
    }

    async fn track(&self, ping: &TrackPing) -> Result<ClockResponse, GatewayError> {
        self.track_attempts.fetch_add(1, Ordering::SeqCst);
        let response = self.scripted_response()?;
        self.track_pings
            .lock()
            .expect("MockGateway mutex poisoned")
            .push(*ping);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::{ClockAction, Coordinates};

    #[tokio::test]
    async fn test_records_clock_requests() {
        let gateway = MockGateway::respond_with("success", None);
        let request = ClockRequest::new(ClockAction::In, Coordinates::new(1.0, 2.0));

        let response = gateway.clock(&request).await.unwrap();
        assert!(response.is_success());
        assert_eq!(gateway.clock_requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_failing_gateway() {
        let gateway = MockGateway::failing();
        let ping = TrackPing {
            latitude: 0.0,
            longitude: 0.0,
        };

        assert!(gateway.track(&ping).await.is_err());
        assert_eq!(gateway.track_attempts(), 1);
        assert!(gateway.track_pings().is_empty());
    }
}
