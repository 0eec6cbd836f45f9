//! # hinge_core - Cabinet Hinge Boring Engine
//!
//! `hinge_core` answers the questions a cabinet shop looks up in a hinge
//! catalogue: for a door of thickness T and a chosen boring distance K, what
//! are the clearances A and L, how thick can the door moulding be (C), and
//! how many hinges does the door need?
//!
//! ## Design Philosophy
//!
//! - **Data, not subclasses**: every hinge series is a [`HingeSeries`] value;
//!   behaviour is shared
//! - **Explicit catalogue**: keys and aliases live in a [`SeriesCatalogue`]
//!   value, no import-time registration
//! - **Advisory**: calculations never fail on odd input; they return a result
//!   with ordered warnings
//! - **JSON-First**: inputs, results, series and errors all serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use hinge_core::{calculate, DoorSpec, SeriesCatalogue};
//!
//! let series = SeriesCatalogue::standard().resolve("100").unwrap();
//! let result = calculate(&series, &DoorSpec::new(18.0).with_k(4.0));
//!
//! assert_eq!(result.a_mm, Some(1.3));
//! assert_eq!(result.recommended_hinge_count, Some(2));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The boring calculation pipeline
//! - [`catalogue`] - Series registry and the built-in Salice data
//! - [`series`] - Hinge series record and its rules
//! - [`tables`] - A/L lookup tables and C derivation
//! - [`selector`] - Automatic series choice by door thickness
//! - [`settings`] - Calculator configuration
//! - [`units`] - Millimetre wrapper and table-key rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalogue;
pub mod errors;
pub mod selector;
pub mod series;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with, BoringResult, BoringWarning, DoorSpec};
pub use catalogue::SeriesCatalogue;
pub use errors::{HingeError, HingeResult};
pub use selector::{resolve_request, select_for_thickness, SeriesRequest};
pub use series::{HeightBracket, HingeSeries};
pub use settings::{load_settings, CalcSettings};
pub use tables::BoringTables;
pub use units::{Millimetres, TableRounding};
