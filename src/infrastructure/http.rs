//! HTTP gateway for the attendance server.
//!
//! Both endpoints take a JSON POST with the CSRF token in the `X-CSRFToken`
//! header and answer with a `{status, message}` JSON body. The server may
//! pair a rejection with a non-2xx status code; the body is authoritative
//! either way, so the adapter parses it regardless of the status line.

use crate::application::ports::{AttendanceGateway, GatewayError};
use crate::domain::payload::{ClockRequest, ClockResponse, TrackPing};
use async_trait::async_trait;
use serde::Serialize;

/// Endpoint for clock-in/clock-out actions.
const CLOCK_ENDPOINT: &str = "/attendance/ajax-clock/";

/// Endpoint for background auto-track pings.
const TRACK_ENDPOINT: &str = "/attendance/auto-clock-log/";

/// Header carrying the CSRF token read from the page.
const CSRF_HEADER: &str = "X-CSRFToken";

/// `AttendanceGateway` implementation over reqwest.
#[derive(Debug, Clone)]
pub struct HttpAttendanceGateway {
    client: reqwest::Client,
    base_url: String,
    csrf_token: String,
}

impl HttpAttendanceGateway {
    /// Create a gateway for the given server.
    ///
    /// `base_url` is the server origin (no trailing path); `csrf_token` is
    /// the token value read from the page's hidden form field.
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, csrf_token)
    }

    /// Create a gateway with a preconfigured reqwest client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        csrf_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: csrf_token.into(),
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<ClockResponse, GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.into()))?;

        response
            .json::<ClockResponse>()
            .await
            .map_err(|e| GatewayError::Transport(e.into()))
    }
}

#[async_trait]
impl AttendanceGateway for HttpAttendanceGateway {
    async fn clock(&self, request: &ClockRequest) -> Result<ClockResponse, GatewayError> {
        self.post_json(CLOCK_ENDPOINT, request).await
    }

    async fn track(&self, ping: &TrackPing) -> Result<ClockResponse, GatewayError> {
        self.post_json(TRACK_ENDPOINT, ping).await
    }
}
