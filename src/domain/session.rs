//! Clocked-in session state.
//!
//! A session is sourced from a server-rendered start-time attribute. The
//! crate never mutates it: a successful clock action asks the shell to
//! reload, and the server re-renders the attribute.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

/// Fallback format for start-time attributes rendered without a timezone
/// (e.g. `2026-08-29 09:00:00`). Interpreted as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current clock-in session, if any.
///
/// Present when the user is clocked in, absent otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSession {
    start_time: Option<DateTime<Utc>>,
}

impl ClockSession {
    /// Session with a known clock-in time.
    pub fn clocked_in(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start_time),
        }
    }

    /// Session with no clock-in time (clocked out).
    pub fn clocked_out() -> Self {
        Self { start_time: None }
    }

    /// Parse a session from the server-rendered start-time attribute.
    ///
    /// Accepts RFC 3339 timestamps and the naive `YYYY-MM-DD HH:MM:SS`
    /// form. An unparseable attribute is logged and treated as clocked out;
    /// the display stays usable either way.
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        let Some(raw) = attribute else {
            return Self::clocked_out();
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::clocked_out();
        }

        if let Ok(parsed) = raw.parse::<DateTime<Utc>>() {
            return Self::clocked_in(parsed);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
            return Self::clocked_in(Utc.from_utc_datetime(&naive));
        }

        warn!(attribute = raw, "unparseable start-time attribute, treating as clocked out");
        Self::clocked_out()
    }

    /// Whether a clock-in time is present.
    pub fn is_clocked_in(&self) -> bool {
        self.start_time.is_some()
    }

    /// The clock-in time, if present.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Signed seconds elapsed since clock-in at `now`.
    ///
    /// Returns `None` when clocked out. Negative values mean the server
    /// clock is ahead of the local clock.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        self.start_time.map(|start| (now - start).num_seconds())
    }
}
