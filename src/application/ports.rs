//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the
//! application layer needs. Infrastructure adapters implement these ports.

use crate::domain::payload::{ClockRequest, ClockResponse, Coordinates, TrackPing};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use thiserror::Error;

/// Port for obtaining current wall-clock time.
///
/// This abstraction allows the application layer to work with time without
/// depending on the system clock. Infrastructure provides concrete
/// implementations (SystemClock, MockClock). Wall clock rather than a
/// monotonic clock: the clock-in timestamp comes from the server, and skew
/// between the two must surface as negative elapsed time.
pub trait Clock: Send + Sync + Debug {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Error acquiring device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The user denied the location request
    #[error("location access denied")]
    Denied,
    /// No location capability is available on this device
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Port for acquiring the device's current geographic coordinates.
///
/// Acquisition is asynchronous and not cancellable; a denial or missing
/// capability is an expected outcome, not a fault.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Acquire the current coordinates.
    async fn locate(&self) -> Result<Coordinates, LocateError>;
}

/// Transport-level failure talking to the attendance server.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a usable response
    #[error("transport failure: {0}")]
    Transport(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Port for the attendance server's two POST endpoints.
#[async_trait]
pub trait AttendanceGateway: Send + Sync {
    /// Submit a clock-in/clock-out action.
    async fn clock(&self, request: &ClockRequest) -> Result<ClockResponse, GatewayError>;

    /// Submit a background auto-track ping.
    async fn track(&self, ping: &TrackPing) -> Result<ClockResponse, GatewayError>;
}
