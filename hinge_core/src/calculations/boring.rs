//! # Hinge Boring Calculation
//!
//! Turns a door description into catalogue boring values for one series:
//! boring distance K, clearances A and L, maximum moulding thickness C and a
//! recommended hinge count.
//!
//! The calculation is advisory. Nothing here fails: an out-of-range door, a
//! clamped K or a missing table cell each add a [`BoringWarning`] to an
//! otherwise normal result, in the order they were found.
//!
//! ## Pipeline
//!
//! 1. Thickness check against the series window (warn, continue)
//! 2. K resolution: series default when absent, clamped otherwise
//! 3. A/L/C lookup at the rounded (T, K) table keys
//! 4. Effective height: caller's height, else the shortest curve bracket
//! 5. Hinge count from the height curve
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::catalogue::SeriesCatalogue;
//! use hinge_core::calculations::boring::{calculate, DoorSpec};
//!
//! let series = SeriesCatalogue::standard().resolve("100").unwrap();
//! let door = DoorSpec::new(18.0).with_height(1200.0).with_k(4.0);
//!
//! let result = calculate(&series, &door);
//! assert_eq!(result.a_mm, Some(1.3));
//! assert_eq!(result.l_mm, Some(0.9));
//! assert_eq!(result.recommended_hinge_count, Some(3));
//! assert!(result.warnings.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::series::HingeSeries;
use crate::units::{Millimetres, TableRounding};

/// Door parameters for a boring calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness_mm": 18.0,
///   "height_mm": 1200.0,
///   "weight_kg": null,
///   "desired_k_mm": 4.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSpec {
    /// Door thickness T in millimetres
    pub thickness_mm: f64,

    /// Door height in millimetres; defaults to the series' shortest bracket
    #[serde(default)]
    pub height_mm: Option<f64>,

    /// Door weight in kilograms (reserved for weight-dependent curves)
    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Requested boring distance K; defaults to the series default
    #[serde(default)]
    pub desired_k_mm: Option<f64>,
}

impl DoorSpec {
    /// A door with only its thickness known.
    pub fn new(thickness_mm: f64) -> Self {
        DoorSpec {
            thickness_mm,
            height_mm: None,
            weight_kg: None,
            desired_k_mm: None,
        }
    }

    pub fn with_height(mut self, height_mm: f64) -> Self {
        self.height_mm = Some(height_mm);
        self
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_k(mut self, desired_k_mm: f64) -> Self {
        self.desired_k_mm = Some(desired_k_mm);
        self
    }
}

/// Advisory conditions found while calculating.
///
/// `Display` gives the message shown to shop staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BoringWarning {
    /// Door thickness outside the series window
    ThicknessOutOfRange {
        series: String,
        thickness_mm: f64,
        supported: String,
    },

    /// No K requested; the series default was used
    DefaultK { k_mm: f64 },

    /// Requested K was outside the series range
    KClamped {
        requested_mm: f64,
        min_k_mm: f64,
        max_k_mm: f64,
        clamped_mm: f64,
    },

    /// Catalogue has no A/L cell at the rounded keys
    MissingTableEntry { thickness_key: u32, k_key: u32 },

    /// Series has no height curve and the caller gave no height
    HeightRequired { series: String },
}

impl std::fmt::Display for BoringWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoringWarning::ThicknessOutOfRange { series, thickness_mm, supported } => write!(
                f,
                "Door thickness {}mm is outside the supported range ({}) for series '{}'.",
                thickness_mm, supported, series
            ),
            BoringWarning::DefaultK { k_mm } => {
                write!(f, "No desired K provided; using series default K = {}mm.", k_mm)
            }
            BoringWarning::KClamped { requested_mm, min_k_mm, max_k_mm, clamped_mm } => write!(
                f,
                "Desired K={}mm was clamped to valid range [{}, {}] -> {}mm.",
                requested_mm, min_k_mm, max_k_mm, clamped_mm
            ),
            BoringWarning::MissingTableEntry { thickness_key, k_key } => write!(
                f,
                "No A/L table entry for T={}mm and K={}mm. You may need to extend the tables for this series.",
                thickness_key, k_key
            ),
            BoringWarning::HeightRequired { series } => write!(
                f,
                "Series '{}' has no hinge-count curve; enter the door height to get a hinge count.",
                series
            ),
        }
    }
}

/// Output of a boring calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoringResult {
    /// Code of the series the values come from
    pub series_code: String,

    /// Door thickness as given
    pub thickness_mm: f64,

    /// Effective door height: caller's value or the shortest curve bracket.
    /// Absent only for a series without a height curve when no height was given.
    pub height_mm: Option<f64>,

    /// Boring distance K actually used
    pub k_mm: f64,

    /// Inner clearance A
    pub a_mm: Option<f64>,

    /// Outer clearance L
    pub l_mm: Option<f64>,

    /// Maximum moulding thickness C
    pub c_mm: Option<f64>,

    /// Hinges per door from the height curve
    pub recommended_hinge_count: Option<u32>,

    /// Advisory warnings in the order they were raised
    pub warnings: Vec<BoringWarning>,
}

impl BoringResult {
    /// Warning messages in order, for presentation.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True when A, L and C all came from the catalogue.
    pub fn is_complete(&self) -> bool {
        self.a_mm.is_some() && self.l_mm.is_some() && self.c_mm.is_some()
    }
}

/// Run the boring calculation with the default table rounding.
pub fn calculate(series: &HingeSeries, door: &DoorSpec) -> BoringResult {
    calculate_with(series, door, TableRounding::default())
}

/// Run the boring calculation, mapping T and K to table keys with `rounding`.
pub fn calculate_with(series: &HingeSeries, door: &DoorSpec, rounding: TableRounding) -> BoringResult {
    let mut warnings = Vec::new();
    debug!(series = %series.code, thickness_mm = door.thickness_mm, "calculating boring");

    if !series.supports_thickness(door.thickness_mm) {
        raise(
            &mut warnings,
            BoringWarning::ThicknessOutOfRange {
                series: series.display_name.clone(),
                thickness_mm: door.thickness_mm,
                supported: series.thickness_range_label(),
            },
        );
    }

    let k_mm = match door.desired_k_mm {
        None => {
            let k_mm = series.default_k();
            raise(&mut warnings, BoringWarning::DefaultK { k_mm });
            k_mm
        }
        Some(requested_mm) => {
            let clamped_mm = series.clamp_k(requested_mm);
            if clamped_mm != requested_mm {
                raise(
                    &mut warnings,
                    BoringWarning::KClamped {
                        requested_mm,
                        min_k_mm: series.min_k_mm,
                        max_k_mm: series.max_k_mm,
                        clamped_mm,
                    },
                );
            }
            clamped_mm
        }
    };

    let thickness_key = Millimetres(door.thickness_mm).table_key(rounding);
    let k_key = Millimetres(k_mm).table_key(rounding);
    let a_mm = series.tables.get_a(thickness_key, k_key);
    let l_mm = series.tables.get_l(thickness_key, k_key);
    let c_mm = series.tables.get_c(thickness_key, k_key);
    debug!(thickness_key, k_key, ?a_mm, ?l_mm, ?c_mm, "table lookup");

    if a_mm.is_none() || l_mm.is_none() {
        raise(&mut warnings, BoringWarning::MissingTableEntry { thickness_key, k_key });
    }

    let height_mm = door.height_mm.or_else(|| series.default_height_mm());
    if height_mm.is_none() {
        raise(
            &mut warnings,
            BoringWarning::HeightRequired {
                series: series.display_name.clone(),
            },
        );
    }

    let recommended_hinge_count = series.recommend_hinge_count(height_mm, door.weight_kg);

    BoringResult {
        series_code: series.code.clone(),
        thickness_mm: door.thickness_mm,
        height_mm,
        k_mm,
        a_mm,
        l_mm,
        c_mm,
        recommended_hinge_count,
        warnings,
    }
}

fn raise(warnings: &mut Vec<BoringWarning>, warning: BoringWarning) {
    warn!(%warning, "boring calculation warning");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::salice;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be present");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_clean_calculation() {
        let series = salice::silentia_100();
        let door = DoorSpec::new(18.0).with_height(1200.0).with_k(4.0);
        let result = calculate(&series, &door);

        assert_eq!(result.series_code, salice::SILENTIA_100);
        assert_eq!(result.k_mm, 4.0);
        assert_eq!(result.a_mm, Some(1.3));
        assert_eq!(result.l_mm, Some(0.9));
        assert_close(result.c_mm, 25.8);
        assert_eq!(result.height_mm, Some(1200.0));
        assert_eq!(result.recommended_hinge_count, Some(3));
        assert!(!result.has_warnings());
        assert!(result.is_complete());
    }

    #[test]
    fn test_default_k_warns_and_still_looks_up() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(18.0).with_height(900.0));

        assert_eq!(result.k_mm, 3.0);
        assert_eq!(result.warnings, vec![BoringWarning::DefaultK { k_mm: 3.0 }]);
        assert!(result.warning_messages()[0].contains("K = 3mm"));
        assert_eq!(result.a_mm, Some(1.4));
        assert_eq!(result.l_mm, Some(0.0));
    }

    #[test]
    fn test_k_clamped_high_and_low() {
        let series = salice::silentia_100();

        let high = calculate(&series, &DoorSpec::new(18.0).with_height(900.0).with_k(8.0));
        assert_eq!(high.k_mm, 6.0);
        assert_eq!(
            high.warnings,
            vec![BoringWarning::KClamped { requested_mm: 8.0, min_k_mm: 3.0, max_k_mm: 6.0, clamped_mm: 6.0 }]
        );
        assert!(high.warning_messages()[0].contains("[3, 6] -> 6mm"));

        let low = calculate(&series, &DoorSpec::new(18.0).with_height(900.0).with_k(1.0));
        assert_eq!(low.k_mm, 3.0);
        assert_eq!(low.warnings.len(), 1);
    }

    #[test]
    fn test_k_inside_range_is_silent() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(18.0).with_height(900.0).with_k(6.0));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_out_of_range_thickness_continues() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(22.0).with_height(900.0).with_k(4.0));

        assert_eq!(result.warnings.len(), 2);
        assert!(matches!(result.warnings[0], BoringWarning::ThicknessOutOfRange { .. }));
        assert_eq!(
            result.warnings[1],
            BoringWarning::MissingTableEntry { thickness_key: 22, k_key: 4 }
        );
        assert!(result.warning_messages()[0].contains("22mm"));
        assert_eq!(result.recommended_hinge_count, Some(2));
    }

    #[test]
    fn test_missing_entry_single_warning_no_synthesis() {
        // 14 mm is supported but the table starts at 15
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(14.0).with_height(900.0).with_k(3.0));

        assert_eq!(result.a_mm, None);
        assert_eq!(result.l_mm, None);
        assert_eq!(result.c_mm, None);
        let missing: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| matches!(w, BoringWarning::MissingTableEntry { .. }))
            .collect();
        assert_eq!(missing.len(), 1);
        assert!(result.warning_messages()[0].contains("T=14mm and K=3mm"));
    }

    #[test]
    fn test_warning_order() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(30.0));
        assert!(matches!(result.warnings[0], BoringWarning::ThicknessOutOfRange { .. }));
        assert!(matches!(result.warnings[1], BoringWarning::DefaultK { .. }));
        assert!(matches!(result.warnings[2], BoringWarning::MissingTableEntry { .. }));
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_height_backfill_does_not_touch_input() {
        let series = salice::silentia_100();
        let door = DoorSpec::new(18.0).with_k(4.0);
        let result = calculate(&series, &door);

        assert_eq!(result.height_mm, Some(1000.0));
        assert_eq!(result.recommended_hinge_count, Some(2));
        assert_eq!(door.height_mm, None);
    }

    #[test]
    fn test_series_without_curve() {
        let mut series = salice::silentia_100();
        series.hinge_count_by_height.clear();

        let without_height = calculate(&series, &DoorSpec::new(18.0).with_k(4.0));
        assert_eq!(without_height.height_mm, None);
        assert_eq!(without_height.recommended_hinge_count, None);
        assert!(matches!(without_height.warnings.last(), Some(BoringWarning::HeightRequired { .. })));

        let with_height = calculate(&series, &DoorSpec::new(18.0).with_k(4.0).with_height(1200.0));
        assert_eq!(with_height.height_mm, Some(1200.0));
        assert_eq!(with_height.recommended_hinge_count, None);
        assert!(with_height.warnings.is_empty());
    }

    #[test]
    fn test_rounding_selects_table_row() {
        let series = salice::silentia_100();
        let door = DoorSpec::new(17.5).with_height(900.0).with_k(4.0);

        // Ties to even: 17.5 -> 18
        assert_eq!(calculate(&series, &door).a_mm, Some(1.3));
        assert_eq!(calculate_with(&series, &door, TableRounding::Floor).a_mm, Some(1.2));
        assert_eq!(calculate_with(&series, &door, TableRounding::HalfAwayFromZero).a_mm, Some(1.3));
    }

    #[test]
    fn test_fractional_k_rounds_for_lookup_but_is_reported_as_given() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(18.0).with_height(900.0).with_k(4.4));
        assert_eq!(result.k_mm, 4.4);
        assert_eq!(result.a_mm, Some(1.3));
        // C uses the table key K, not the raw K
        assert_close(result.c_mm, 25.8);
    }

    #[test]
    fn test_repeat_calculation_is_identical() {
        let series = salice::silentia_200_94();
        let door = DoorSpec::new(22.0).with_weight(9.0);
        let first = serde_json::to_string(&calculate(&series, &door)).unwrap();
        let second = serde_json::to_string(&calculate(&series, &door)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serialization() {
        let series = salice::silentia_100();
        let result = calculate(&series, &DoorSpec::new(18.0));
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("recommended_hinge_count"));
        assert!(json.contains("\"kind\": \"DefaultK\""));

        let roundtrip: BoringResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_door_spec_json_defaults() {
        let door: DoorSpec = serde_json::from_str(r#"{ "thickness_mm": 19.0 }"#).unwrap();
        assert_eq!(door, DoorSpec::new(19.0));
    }
}
