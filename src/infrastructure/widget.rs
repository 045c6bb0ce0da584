//! Widget assembly.
//!
//! `AttendanceWidget` wires the timer, submitter, and tracker into the
//! single surface a UI shell talks to. Construction goes through a builder
//! that validates the configuration up front.

use crate::application::{
    ports::{AttendanceGateway, Clock, Locator},
    submitter::{ClockSubmitter, SubmitError, SubmitOutcome},
    timer::{AttendanceTimer, TickFrame},
    tracker::{AutoTracker, TrackerConfig, TrackerHandle},
};
use crate::domain::payload::ClockAction;
use crate::domain::session::ClockSession;
use crate::infrastructure::clock::SystemClock;
use std::sync::Arc;
use std::time::Duration;

/// Error returned when building an AttendanceWidget fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No locator was provided
    MissingLocator,
    /// No gateway was provided
    MissingGateway,
    /// Tracking interval must be greater than zero
    ZeroTrackInterval,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingLocator => write!(f, "a locator is required"),
            BuildError::MissingGateway => write!(f, "a gateway is required"),
            BuildError::ZeroTrackInterval => {
                write!(f, "tracking interval must be greater than 0")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Builder for constructing an `AttendanceWidget`.
pub struct AttendanceWidgetBuilder {
    session: ClockSession,
    clock: Option<Arc<dyn Clock>>,
    locator: Option<Arc<dyn Locator>>,
    gateway: Option<Arc<dyn AttendanceGateway>>,
    track_interval: Duration,
}

impl AttendanceWidgetBuilder {
    fn new() -> Self {
        Self {
            session: ClockSession::clocked_out(),
            clock: None,
            locator: None,
            gateway: None,
            track_interval: TrackerConfig::default().interval,
        }
    }

    /// Set the session from the server-rendered start-time attribute.
    pub fn with_start_attribute(mut self, attribute: Option<&str>) -> Self {
        self.session = ClockSession::from_attribute(attribute);
        self
    }

    /// Set the session directly.
    pub fn with_session(mut self, session: ClockSession) -> Self {
        self.session = session;
        self
    }

    /// Use a custom clock. Defaults to [`SystemClock`].
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the location source. Required.
    pub fn with_locator(mut self, locator: Arc<dyn Locator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Set the attendance gateway. Required.
    pub fn with_gateway(mut self, gateway: Arc<dyn AttendanceGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Override the auto-tracking interval. Defaults to one hour.
    pub fn with_track_interval(mut self, interval: Duration) -> Self {
        self.track_interval = interval;
        self
    }

    /// Build the widget.
    ///
    /// # Errors
    /// Returns a [`BuildError`] if a required port is missing or the
    /// tracking interval is zero.
    pub fn build(self) -> Result<AttendanceWidget, BuildError> {
        let locator = self.locator.ok_or(BuildError::MissingLocator)?;
        let gateway = self.gateway.ok_or(BuildError::MissingGateway)?;
        let tracker_config =
            TrackerConfig::new(self.track_interval).map_err(|_| BuildError::ZeroTrackInterval)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()) as Arc<dyn Clock>);

        Ok(AttendanceWidget {
            timer: AttendanceTimer::new(self.session, clock),
            submitter: ClockSubmitter::new(Arc::clone(&locator), Arc::clone(&gateway)),
            locator,
            gateway,
            tracker_config,
        })
    }
}

/// The assembled attendance clock widget.
///
/// Owns the tick state and the submission pipeline, and spawns the
/// background tracker for sessions that load clocked in.
pub struct AttendanceWidget {
    timer: AttendanceTimer,
    submitter: ClockSubmitter,
    locator: Arc<dyn Locator>,
    gateway: Arc<dyn AttendanceGateway>,
    tracker_config: TrackerConfig,
}

impl AttendanceWidget {
    /// Start building a widget.
    pub fn builder() -> AttendanceWidgetBuilder {
        AttendanceWidgetBuilder::new()
    }

    /// Produce the display frame for the current instant.
    ///
    /// Drive this once per second.
    pub fn tick(&mut self) -> TickFrame {
        self.timer.tick()
    }

    /// Whether the widget's session is clocked in.
    pub fn is_clocked_in(&self) -> bool {
        self.timer.session().is_clocked_in()
    }

    /// Submit a clock action (user click).
    pub async fn submit(&self, action: ClockAction) -> Result<SubmitOutcome, SubmitError> {
        self.submitter.submit(action).await
    }

    /// Submit with the action derived from the rendered button label.
    pub async fn submit_for_label(&self, label: &str) -> Result<SubmitOutcome, SubmitError> {
        self.submit(ClockAction::from_label(label)).await
    }

    /// Start background auto-tracking.
    ///
    /// Returns `None` when the session is clocked out; tracking only runs
    /// for sessions that loaded clocked in.
    pub fn start_tracking(&self) -> Option<TrackerHandle> {
        if !self.is_clocked_in() {
            return None;
        }
        let tracker = AutoTracker::new(
            Arc::clone(&self.locator),
            Arc::clone(&self.gateway),
            self.tracker_config.clone(),
        );
        Some(tracker.start())
    }
}
