//! # attendance-clock
//!
//! Client-side attendance clock engine: a live clocked-in stopwatch with
//! threshold-triggered display effects, and a geolocation-gated
//! clock-in/clock-out submission flow.
//!
//! The crate is the state and decision layer behind a thin UI shell. The
//! shell drives a 1 Hz tick loop, displays the frames this crate produces,
//! and forwards the clock button click; everything else (elapsed-time math,
//! threshold policy, the one-shot notification latch, payload shapes, and
//! error classification) lives here, where it can be tested without a live
//! timer or a real network.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use attendance_clock::{
//!     AttendanceWidget, ClockAction, Coordinates, FixedLocator, HttpAttendanceGateway,
//! };
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpAttendanceGateway::new("https://hr.example.com", "csrf-token-from-page");
//! let locator = FixedLocator::new(Coordinates::new(40.4237, -86.9212));
//!
//! let mut widget = AttendanceWidget::builder()
//!     .with_start_attribute(Some("2026-08-29T09:00:00Z"))
//!     .with_locator(Arc::new(locator))
//!     .with_gateway(Arc::new(gateway))
//!     .build()?;
//!
//! // Drive the display once per second.
//! let frame = widget.tick();
//! println!("{}", frame.text); // "HH:MM:SS"
//!
//! // On a button click, submit with the action derived from the label.
//! let action = ClockAction::from_label("Clock Out");
//! let _outcome = widget.submit(action).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Tick behavior
//!
//! Each tick compares the wall clock against the server-supplied clock-in
//! timestamp and produces a [`TickFrame`]:
//!
//! - No session (clocked out) or negative elapsed time (clock skew): the
//!   frame reads `00:00:00` in the default style.
//! - Otherwise the frame shows zero-padded `HH:MM:SS` with unbounded hours.
//! - At 9 hours the frame switches to [`TimerStyle::Overdue`]. This is
//!   re-evaluated every tick, so the style drops again if a later tick lands
//!   below the threshold.
//! - At 9.5 hours the frame carries a one-shot alert message. The alert
//!   appears in exactly one frame per timer lifetime, no matter how many
//!   ticks follow.
//!
//! ## Submission flow
//!
//! [`ClockSubmitter`] runs the click-to-reload pipeline: acquire coordinates
//! through the [`Locator`] port, POST the action plus coordinates through the
//! [`AttendanceGateway`] port, and map the response to either
//! [`SubmitOutcome::Reload`] or a [`SubmitError`]. The three failure branches
//! (location denied, transport failure, server rejection) are one tagged
//! error type. A denied location aborts before any network call.
//!
//! ## Auto-tracking
//!
//! While the session loads clocked in, [`AutoTracker`] pings the server with
//! the current coordinates on a fixed interval (one hour by default) from a
//! background tokio task. Results are logged via `tracing` and never surface
//! to the user.
//!
//! ## Testing
//!
//! Mock adapters ([`MockClock`](infrastructure::mocks::MockClock),
//! [`MockLocator`](infrastructure::mocks::MockLocator),
//! [`MockGateway`](infrastructure::mocks::MockGateway)) are available with the
//! `test-helpers` feature:
//!
//! ```toml
//! [dev-dependencies]
//! attendance-clock = { version = "*", features = ["test-helpers"] }
//! ```

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    payload::{ClockAction, ClockRequest, ClockResponse, Coordinates, TrackPing},
    session::ClockSession,
    tick::{
        evaluate_tick, format_elapsed, TickDecision, TimerStyle, NOTIFY_MESSAGE,
        NOTIFY_THRESHOLD_SECS, OVERDUE_THRESHOLD_SECS,
    },
};

pub use application::{
    ports::{AttendanceGateway, Clock, GatewayError, LocateError, Locator},
    submitter::{ClockSubmitter, SubmitError, SubmitOutcome},
    timer::{AttendanceTimer, TickFrame},
    tracker::{AutoTracker, ShutdownError, TrackerConfig, TrackerConfigError, TrackerHandle},
};

pub use infrastructure::{
    clock::SystemClock,
    http::HttpAttendanceGateway,
    locator::FixedLocator,
    widget::{AttendanceWidget, AttendanceWidgetBuilder, BuildError},
};
