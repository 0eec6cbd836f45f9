//! # Boring Tables
//!
//! Catalogue lookup data for a hinge series: A and L clearances indexed by
//! door thickness T and boring distance K (both whole millimetres), plus the
//! constant used to derive the maximum moulding thickness C.
//!
//! ```text
//! A[T][K] -> inner clearance (mm)
//! L[T][K] -> outer clearance (mm)
//! C(T, K)  = c_offset + K + A[T][K]
//! ```
//!
//! Tables are sparse. A missing cell is "no catalogue data", not an error.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::tables::BoringTables;
//!
//! let tables = BoringTables::new(20.5)
//!     .with_a_row(18, &[(3, 1.4), (4, 1.3)])
//!     .with_l_row(18, &[(3, 0.0), (4, 0.9)]);
//!
//! assert_eq!(tables.get_a(18, 4), Some(1.3));
//! assert!((tables.get_c(18, 4).unwrap() - 25.8).abs() < 1e-9);
//! assert_eq!(tables.get_l(19, 4), None);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One table: thickness_mm -> (k_mm -> value_mm)
pub type ClearanceTable = BTreeMap<u32, BTreeMap<u32, f64>>;

/// A/L lookup tables and the C derivation constant for one hinge series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoringTables {
    /// Inner clearance A by thickness then K
    pub a_table: ClearanceTable,

    /// Outer clearance L by thickness then K
    pub l_table: ClearanceTable,

    /// Constant term in `C = c_offset + K + A`
    pub c_offset: f64,
}

impl BoringTables {
    /// Create empty tables with the given C offset.
    pub fn new(c_offset: f64) -> Self {
        BoringTables {
            a_table: BTreeMap::new(),
            l_table: BTreeMap::new(),
            c_offset,
        }
    }

    /// Add (or replace) one thickness row of the A table.
    pub fn with_a_row(mut self, thickness_mm: u32, cells: &[(u32, f64)]) -> Self {
        self.a_table.insert(thickness_mm, cells.iter().copied().collect());
        self
    }

    /// Add (or replace) one thickness row of the L table.
    pub fn with_l_row(mut self, thickness_mm: u32, cells: &[(u32, f64)]) -> Self {
        self.l_table.insert(thickness_mm, cells.iter().copied().collect());
        self
    }

    /// Inner clearance A, or `None` when the catalogue has no cell.
    pub fn get_a(&self, thickness_mm: u32, k_mm: u32) -> Option<f64> {
        lookup(&self.a_table, thickness_mm, k_mm)
    }

    /// Outer clearance L, or `None` when the catalogue has no cell.
    pub fn get_l(&self, thickness_mm: u32, k_mm: u32) -> Option<f64> {
        lookup(&self.l_table, thickness_mm, k_mm)
    }

    /// Maximum moulding thickness C. Defined only where A is.
    pub fn get_c(&self, thickness_mm: u32, k_mm: u32) -> Option<f64> {
        self.get_a(thickness_mm, k_mm)
            .map(|a| self.c_offset + k_mm as f64 + a)
    }
}

fn lookup(table: &ClearanceTable, thickness_mm: u32, k_mm: u32) -> Option<f64> {
    table.get(&thickness_mm)?.get(&k_mm).copied()
}
