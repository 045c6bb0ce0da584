//! Location source adapters.
//!
//! The production adapter here serves fixed-position deployments (kiosk or
//! terminal stations whose coordinates are known at configuration time).
//! Per-device geolocation stays behind the `Locator` port; see `MockLocator`
//! in `crate::infrastructure::mocks` for the scripted test double.

use crate::application::ports::{LocateError, Locator};
use crate::domain::payload::Coordinates;
use async_trait::async_trait;

/// Locator that always reports the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    coordinates: Coordinates,
}

impl FixedLocator {
    /// Create a locator pinned to the given coordinates.
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, LocateError> {
        Ok(self.coordinates)
    }
}
