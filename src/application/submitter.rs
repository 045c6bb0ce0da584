//! Clock-in/clock-out submission flow.
//!
//! One click runs: acquire coordinates, POST the action, map the response.
//! The server is the source of truth for the new state, so a success is
//! reported as a reload request rather than any client-side patching.
//!
//! Overlapping submissions are possible if the user clicks again before the
//! first request resolves; that race is accepted, not guarded.

use crate::application::ports::{AttendanceGateway, GatewayError, LocateError, Locator};
use crate::domain::payload::{ClockAction, ClockRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Fallback message when the server rejects without an explanation.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// What the shell should do after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Reload the page; the server re-renders the new state
    Reload,
}

/// Why a submission did not succeed.
///
/// All three branches surface as a transient user-visible message; none is
/// fatal to the page.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Coordinates could not be acquired; no network call was made
    #[error("Location access is required for attendance.")]
    Location(#[from] LocateError),
    /// The request never reached the server or produced no usable response
    #[error("{GENERIC_FAILURE}")]
    Transport(#[from] GatewayError),
    /// The server processed the request and said no
    #[error("Error: {message}")]
    Rejected {
        /// Server-provided reason, or a generic fallback
        message: String,
    },
}

/// Runs the geolocation-gated submission pipeline.
#[derive(Clone)]
pub struct ClockSubmitter {
    locator: Arc<dyn Locator>,
    gateway: Arc<dyn AttendanceGateway>,
}

impl ClockSubmitter {
    pub fn new(locator: Arc<dyn Locator>, gateway: Arc<dyn AttendanceGateway>) -> Self {
        Self { locator, gateway }
    }

    /// Submit a clock action.
    ///
    /// Location failure aborts before any network call. A non-success
    /// response becomes [`SubmitError::Rejected`] carrying the server's
    /// message.
    pub async fn submit(&self, action: ClockAction) -> Result<SubmitOutcome, SubmitError> {
        let coordinates = self.locator.locate().await.map_err(|e| {
            warn!(error = %e, action = action.as_str(), "location acquisition failed");
            e
        })?;

        let request = ClockRequest::new(action, coordinates);
        let response = self.gateway.clock(&request).await.map_err(|e| {
            warn!(error = %e, action = action.as_str(), "clock request failed");
            e
        })?;

        if response.is_success() {
            info!(action = action.as_str(), "clock action accepted");
            Ok(SubmitOutcome::Reload)
        } else {
            let message = response
                .message
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            warn!(action = action.as_str(), message = %message, "clock action rejected");
            Err(SubmitError::Rejected { message })
        }
    }
}
