//! Mock clock for testing.

use crate::application::ports::Clock;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Mock clock for testing.
///
/// Allows tests to control time progression explicitly, enabling
/// deterministic testing of elapsed-time rendering and thresholds.
///
/// # Examples
///
/// ```
/// use attendance_clock::infrastructure::mocks::MockClock;
/// use attendance_clock::Clock;
/// use chrono::{Duration, Utc};
///
/// let start = Utc::now();
/// let clock = MockClock::new(start);
///
/// // Time starts at the specified instant
/// assert_eq!(clock.now(), start);
///
/// // Advance time explicitly (negative durations move it backwards)
/// clock.advance(Duration::seconds(10));
/// assert_eq!(clock.now(), start + Duration::seconds(10));
///
/// // Or set to a specific time
/// let new_time = start + Duration::seconds(100);
/// clock.set(new_time);
/// assert_eq!(clock.now(), new_time);
/// ```
///
/// # Thread Safety
///
/// `MockClock` is thread-safe and can be cloned to share across threads.
/// All clones share the same underlying time value.
#[derive(Debug, Clone)]
pub struct MockClock {
    current_time: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific time.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *time += duration;
    }

    /// Set the clock to a specific time.
    pub fn set(&self, time: DateTime<Utc>) {
        let mut current = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *current = time;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
    }
}
