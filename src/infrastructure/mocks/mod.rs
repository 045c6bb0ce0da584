//! Mock implementations for testing.
//!
//! This module provides test doubles for infrastructure adapters,
//! enabling controlled testing of application logic.

pub mod clock;
pub mod gateway;
pub mod locator;

pub use clock::MockClock;
pub use gateway::MockGateway;
pub use locator::MockLocator;
