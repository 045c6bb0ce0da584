//! Wire payload shapes for the clock and auto-track endpoints.
//!
//! Both endpoints take a JSON POST body and answer with a status/message
//! pair. The CSRF token is not part of the body; it travels as a request
//! header (see the HTTP gateway adapter).

use serde::{Deserialize, Serialize};

/// Response status value that triggers a page reload.
const STATUS_SUCCESS: &str = "success";

/// Geographic coordinates acquired from the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The user-intended clock action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    /// Derive the action from the rendered clock button label.
    ///
    /// A label containing `Clock-In` means the user is clocked out and the
    /// click clocks them in; any other label clocks them out.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Clock-In") {
            ClockAction::In
        } else {
            ClockAction::Out
        }
    }

    /// The wire string for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::In => "in",
            ClockAction::Out => "out",
        }
    }
}

/// Body of the clock-in/clock-out POST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockRequest {
    pub action: ClockAction,
    pub lat: f64,
    pub lng: f64,
}

impl ClockRequest {
    pub fn new(action: ClockAction, coordinates: Coordinates) -> Self {
        Self {
            action,
            lat: coordinates.latitude,
            lng: coordinates.longitude,
        }
    }
}

/// Body of the hourly auto-track POST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPing {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for TrackPing {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Server response to either POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ClockResponse {
    /// Whether the server accepted the action (the shell should reload).
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
