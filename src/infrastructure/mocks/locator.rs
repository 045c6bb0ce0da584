//! Mock location source for testing.

use crate::application::ports::{LocateError, Locator};
use crate::domain::payload::Coordinates;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock locator with a scripted outcome.
///
/// Records how many times `locate` was called, so tests can assert that a
/// denied location short-circuits the submission flow.
#[derive(Debug)]
pub struct MockLocator {
    outcome: Mutex<Result<Coordinates, LocateError>>,
    calls: AtomicUsize,
}

impl MockLocator {
    /// Locator that always succeeds with the given coordinates.
    pub fn returning(coordinates: Coordinates) -> Self {
        Self {
            outcome: Mutex::new(Ok(coordinates)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Locator that always reports a denied location request.
    pub fn denying() -> Self {
        Self {
            outcome: Mutex::new(Err(LocateError::Denied)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Locator that always reports geolocation as unsupported.
    pub fn unsupported() -> Self {
        Self {
            outcome: Mutex::new(Err(LocateError::Unsupported)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Change the scripted outcome.
    pub fn set_outcome(&self, outcome: Result<Coordinates, LocateError>) {
        *self.outcome.lock().expect("MockLocator mutex poisoned") = outcome;
    }

    /// How many times `locate` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Locator for MockLocator {
    async fn locate(&self) -> Result<Coordinates, LocateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.outcome.lock().expect("MockLocator mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_outcomes() {
        let locator = MockLocator::returning(Coordinates::new(1.0, 2.0));
        assert!(locator.locate().await.is_ok());

        locator.set_outcome(Err(LocateError::Denied));
        assert_eq!(locator.locate().await.unwrap_err(), LocateError::Denied);

        assert_eq!(locator.call_count(), 2);
    }
}
