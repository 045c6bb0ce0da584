//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic and manages runtime behavior:
//! - Attendance timer (tick loop state and the notification latch)
//! - Clock submitter (location acquisition + network submission)
//! - Auto-tracker (hourly background location pings)
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod ports;
pub mod submitter;
pub mod timer;
pub mod tracker;
