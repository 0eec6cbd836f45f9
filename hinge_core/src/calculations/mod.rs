//! # Hinge Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - an input record (JSON-serializable)
//! - a result record (JSON-serializable)
//! - `calculate(...)` - a pure function from input to result
//!
//! ## Available Calculations
//!
//! - [`boring`] - Cup boring values (K, A, L, C) and hinge count for one door

pub mod boring;

// Re-export commonly used types
pub use boring::{calculate, calculate_with, BoringResult, BoringWarning, DoorSpec};
