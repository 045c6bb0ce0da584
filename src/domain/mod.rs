//! Domain layer - pure business logic with no external dependencies.
//!
//! This layer contains the core concepts and invariants of the attendance
//! clock:
//! - Clocked-in session state and elapsed-time math
//! - Tick evaluation (display text, overdue style, notification threshold)
//! - Wire payload shapes for the clock and auto-track endpoints
//!
//! All types in this layer are pure and easily testable.

pub mod payload;
pub mod session;
pub mod tick;
