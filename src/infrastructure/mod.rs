//! Infrastructure layer - external adapters and integrations.
//!
//! This layer provides adapters for:
//! - Clock abstraction (system time vs mock)
//! - Location sources (fixed station coordinates vs mock)
//! - The attendance server's HTTP endpoints (reqwest)
//! - Widget assembly (builder tying timer, submitter, and tracker together)

pub mod clock;
pub mod http;
pub mod locator;
pub mod widget;

/// Mock implementations for testing.
///
/// This module is only available when the `test-helpers` feature is enabled,
/// or during test builds. It provides controllable test doubles for the
/// clock, locator, and gateway ports.
///
/// To use these mocks in integration tests, add to your `Cargo.toml`:
/// ```toml
/// [dev-dependencies]
/// attendance-clock = { version = "*", features = ["test-helpers"] }
/// ```
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
