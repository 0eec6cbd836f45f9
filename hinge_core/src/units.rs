//! # Unit Types
//!
//! Lightweight wrappers for the millimetre values that flow through a boring
//! calculation. Catalogue tables are indexed by whole millimetres, so the
//! interesting part here is how a continuous measurement becomes a table key.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::units::{Millimetres, TableRounding};
//!
//! let thickness = Millimetres(18.4);
//! assert_eq!(thickness.table_key(TableRounding::HalfEven), 18);
//! assert_eq!(Millimetres(18.5).table_key(TableRounding::HalfEven), 18);
//! assert_eq!(Millimetres(18.5).table_key(TableRounding::HalfAwayFromZero), 19);
//! ```

use serde::{Deserialize, Serialize};

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl Millimetres {
    /// Round to the integer millimetre key used by boring tables.
    ///
    /// Negative and non-finite values have no table row and map to 0,
    /// which no catalogue populates.
    pub fn table_key(self, rounding: TableRounding) -> u32 {
        let rounded = rounding.apply(self.0);
        if rounded.is_finite() && rounded >= 0.0 {
            rounded.min(u32::MAX as f64) as u32
        } else {
            0
        }
    }
}

/// How continuous millimetre inputs map onto integer table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRounding {
    /// Nearest millimetre, ties to the even neighbour (18.5 -> 18, 19.5 -> 20)
    #[default]
    HalfEven,
    /// Nearest millimetre, ties away from zero (18.5 -> 19)
    HalfAwayFromZero,
    /// Always round down
    Floor,
    /// Always round up
    Ceil,
}

impl TableRounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            TableRounding::HalfEven => value.round_ties_even(),
            TableRounding::HalfAwayFromZero => value.round(),
            TableRounding::Floor => value.floor(),
            TableRounding::Ceil => value.ceil(),
        }
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            TableRounding::HalfEven => "nearest (ties to even)",
            TableRounding::HalfAwayFromZero => "nearest (ties away from zero)",
            TableRounding::Floor => "round down",
            TableRounding::Ceil => "round up",
        }
    }
}
