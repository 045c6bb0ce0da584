//! Background auto-tracking for clocked-in sessions.
//!
//! While a session loads clocked in, a background task pings the server with
//! the current coordinates on a fixed interval. Results are logged and never
//! surface to the user; a failed ping changes nothing and the next interval
//! tries again.

use crate::application::ports::{AttendanceGateway, Locator};
use crate::domain::payload::TrackPing;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

/// Error returned when tracker configuration validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerConfigError {
    /// Tracking interval must be greater than zero
    ZeroInterval,
}

impl std::fmt::Display for TrackerConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerConfigError::ZeroInterval => {
                write!(f, "tracking interval must be greater than 0")
            }
        }
    }
}

impl std::error::Error for TrackerConfigError {}

/// Error returned when tracker shutdown fails.
#[derive(Debug)]
pub enum ShutdownError {
    /// The background task panicked or was cancelled before acknowledging
    TaskFailed(tokio::task::JoinError),
}

impl std::fmt::Display for ShutdownError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownError::TaskFailed(e) => write!(f, "tracker task failed: {}", e),
        }
    }
}

impl std::error::Error for ShutdownError {}

/// Configuration for background tracking.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// How often to ping the server
    pub interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3600),
        }
    }
}

impl TrackerConfig {
    /// Create a tracker config with the specified interval.
    ///
    /// # Errors
    /// Returns `TrackerConfigError::ZeroInterval` if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, TrackerConfigError> {
        if interval.is_zero() {
            return Err(TrackerConfigError::ZeroInterval);
        }
        Ok(Self { interval })
    }
}

/// Handle for a running tracker task.
pub struct TrackerHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl TrackerHandle {
    /// Signal the task to stop and wait for it to finish.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        // Receiver dropped means the task already exited; nothing to signal.
        let _ = self.shutdown_tx.send(true);
        self.join.await.map_err(ShutdownError::TaskFailed)
    }

    /// Abort the task without waiting.
    pub fn abort(&self) {
        self.join.abort();
    }
}

/// Sends periodic background location pings while clocked in.
pub struct AutoTracker {
    locator: Arc<dyn Locator>,
    gateway: Arc<dyn AttendanceGateway>,
    config: TrackerConfig,
}

impl AutoTracker {
    /// Create a new tracker.
    pub fn new(
        locator: Arc<dyn Locator>,
        gateway: Arc<dyn AttendanceGateway>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            locator,
            gateway,
            config,
        }
    }

    /// Get the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Locate and ping once, logging the outcome.
    pub async fn ping(&self) {
        let coordinates = match self.locator.locate().await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                warn!(error = %e, "auto-track location failed");
                return;
            }
        };

        let ping = TrackPing::from(coordinates);
        match self.gateway.track(&ping).await {
            Ok(response) => {
                debug!(status = %response.status, "auto-track ping logged");
            }
            Err(e) => {
                warn!(error = %e, "auto-track ping failed");
            }
        }
    }

    /// Start pinging in a background task.
    ///
    /// The first ping fires one full interval after start, setInterval-style,
    /// not immediately. Use the returned handle to stop the task.
    pub fn start(self) -> TrackerHandle {
        info!(interval_secs = self.config.interval.as_secs(), "starting hourly tracker");
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            let mut ticker = interval(self.config.interval);
            // The first tick of a tokio interval completes immediately;
            // consume it so the initial ping waits a full period.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.ping().await;
                    }
                    _ = shutdown_rx.changed() => {
                        debug!("tracker shutting down");
                        break;
                    }
                }
            }
        });

        TrackerHandle { shutdown_tx, join }
    }
}
