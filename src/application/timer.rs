//! The attendance timer: per-tick display state.
//!
//! The timer owns the notification latch and the clock port. The caller
//! drives it once per second and displays the frame it returns; the timer
//! itself schedules nothing.

use crate::application::ports::Clock;
use crate::domain::session::ClockSession;
use crate::domain::tick::{evaluate_tick, TimerStyle, NOTIFY_MESSAGE};
use std::sync::Arc;

/// One rendered frame of the stopwatch display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickFrame {
    /// Display text, `HH:MM:SS`
    pub text: String,
    /// Style to render the text in
    pub style: TimerStyle,
    /// One-shot alert to surface to the user, at most once per timer lifetime
    pub alert: Option<&'static str>,
}

/// Elapsed-time display driven by an external 1 Hz tick.
///
/// # Example
/// ```
/// use attendance_clock::{AttendanceTimer, ClockSession, SystemClock, TimerStyle};
/// use std::sync::Arc;
///
/// let mut timer = AttendanceTimer::new(ClockSession::clocked_out(), Arc::new(SystemClock::new()));
/// let frame = timer.tick();
/// assert_eq!(frame.text, "00:00:00");
/// assert_eq!(frame.style, TimerStyle::Default);
/// assert!(frame.alert.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceTimer {
    session: ClockSession,
    clock: Arc<dyn Clock>,
    notified: bool,
}

impl AttendanceTimer {
    /// Create a timer over a session.
    pub fn new(session: ClockSession, clock: Arc<dyn Clock>) -> Self {
        Self {
            session,
            clock,
            notified: false,
        }
    }

    /// The session this timer displays.
    pub fn session(&self) -> &ClockSession {
        &self.session
    }

    /// Whether the one-time notification has fired.
    pub fn notified(&self) -> bool {
        self.notified
    }

    /// Produce the frame for the current instant.
    ///
    /// The notification latch is set on the first frame that carries an
    /// alert and never clears afterwards, so the alert appears in at most
    /// one frame per timer lifetime.
    pub fn tick(&mut self) -> TickFrame {
        let now = self.clock.now();
        let Some(elapsed) = self.session.elapsed_seconds(now) else {
            return TickFrame {
                text: "00:00:00".to_string(),
                style: TimerStyle::Default,
                alert: None,
            };
        };

        let decision = evaluate_tick(elapsed, self.notified);
        if decision.notify {
            self.notified = true;
        }

        TickFrame {
            text: decision.text,
            style: decision.style,
            alert: decision.notify.then_some(NOTIFY_MESSAGE),
        }
    }
}
