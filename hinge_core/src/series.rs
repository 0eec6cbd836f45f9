//! # Hinge Series
//!
//! A hinge series is a catalogue entry: physical limits (door thickness,
//! boring distance, opening angle), the boring tables and an optional
//! height-to-hinge-count curve. Every series shares the same behaviour, so a
//! series is plain data; the concrete product lines live in
//! [`crate::catalogue`].
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::catalogue::salice;
//!
//! let series = salice::silentia_100();
//! assert!(series.supports_thickness(18.0));
//! assert_eq!(series.clamp_k(7.5), 6.0);
//! assert_eq!(series.recommend_hinge_count(Some(1200.0), None), Some(3));
//! ```

use serde::{Deserialize, Serialize};

use crate::tables::BoringTables;

/// One step of the height curve: doors up to `max_height_mm` get `hinge_count` hinges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightBracket {
    pub max_height_mm: f64,
    pub hinge_count: u32,
}

impl HeightBracket {
    pub const fn new(max_height_mm: f64, hinge_count: u32) -> Self {
        HeightBracket {
            max_height_mm,
            hinge_count,
        }
    }
}

/// A hinge product line with its catalogue limits and tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeSeries {
    /// Stable machine key (e.g. "salice_silentia_100")
    pub code: String,

    /// Human label for presentation
    pub display_name: String,

    /// Rated maximum opening angle in degrees
    pub opening_angle_deg: f64,

    /// Thinnest supported door (inclusive)
    pub min_door_thickness_mm: f64,

    /// Thickest supported door (inclusive); `None` means unbounded
    pub max_door_thickness_mm: Option<f64>,

    /// Boring distance K bounds (inclusive)
    pub min_k_mm: f64,
    pub max_k_mm: f64,

    /// Descriptive only, not used in calculation
    pub cup_diameter_mm: f64,
    pub cup_depth_mm: f64,

    /// A/L tables and the C offset
    pub tables: BoringTables,

    /// Height curve, ascending by `max_height_mm`. Empty means no recommendation.
    #[serde(default)]
    pub hinge_count_by_height: Vec<HeightBracket>,
}

impl HingeSeries {
    /// True iff `thickness_mm` lies inside the supported range, bounds inclusive.
    pub fn supports_thickness(&self, thickness_mm: f64) -> bool {
        thickness_mm >= self.min_door_thickness_mm
            && self
                .max_door_thickness_mm
                .map_or(true, |max| thickness_mm <= max)
    }

    /// Bound K into `[min_k_mm, max_k_mm]`.
    pub fn clamp_k(&self, k_mm: f64) -> f64 {
        k_mm.max(self.min_k_mm).min(self.max_k_mm)
    }

    /// K used when the caller does not ask for one.
    pub fn default_k(&self) -> f64 {
        self.min_k_mm
    }

    /// Recommended hinge count from the height curve.
    ///
    /// Returns the count of the first bracket whose threshold is at least
    /// `door_height_mm`; taller doors get the last bracket's count. `None`
    /// when the series has no curve or no height is given. Weight is accepted
    /// for weight-dependent curves but no current series uses it.
    pub fn recommend_hinge_count(
        &self,
        door_height_mm: Option<f64>,
        _door_weight_kg: Option<f64>,
    ) -> Option<u32> {
        let height = door_height_mm?;
        let last = self.hinge_count_by_height.last()?;
        let count = self
            .hinge_count_by_height
            .iter()
            .find(|bracket| height <= bracket.max_height_mm)
            .map_or(last.hinge_count, |bracket| bracket.hinge_count);
        Some(count)
    }

    /// Shortest configured bracket; the height reported when the caller gives none.
    pub fn default_height_mm(&self) -> Option<f64> {
        self.hinge_count_by_height
            .iter()
            .map(|bracket| bracket.max_height_mm)
            .reduce(f64::min)
    }

    /// Centre of the thickness window, or the minimum when unbounded above.
    pub fn thickness_midpoint(&self) -> f64 {
        match self.max_door_thickness_mm {
            Some(max) => (self.min_door_thickness_mm + max) / 2.0,
            None => self.min_door_thickness_mm,
        }
    }

    /// Thickness window for display, e.g. "14-20 mm" or "≥ 19 mm".
    pub fn thickness_range_label(&self) -> String {
        match self.max_door_thickness_mm {
            Some(max) => format!("{}-{} mm", self.min_door_thickness_mm, max),
            None => format!("≥ {} mm", self.min_door_thickness_mm),
        }
    }

    /// K window for display, e.g. "3-6 mm".
    pub fn k_range_label(&self) -> String {
        format!("{}-{} mm", self.min_k_mm, self.max_k_mm)
    }
}
