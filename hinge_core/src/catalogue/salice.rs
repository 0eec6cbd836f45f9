//! Salice Silentia+ series data (boring tables and hinge-count curves).

use crate::series::{HeightBracket, HingeSeries};
use crate::tables::BoringTables;

/// Canonical key of the thin-door 105° series
pub const SILENTIA_100: &str = "salice_silentia_100";

/// Canonical key of the standard-door 94° series
pub const SILENTIA_200_94: &str = "salice_silentia_200_94";

/// Salice Silentia+ 100 series (105°), doors 14-20 mm.
pub fn silentia_100() -> HingeSeries {
    let tables = BoringTables::new(20.5)
        .with_a_row(15, &[(3, 1.0), (4, 0.9), (5, 0.9), (6, 0.9)])
        .with_a_row(16, &[(3, 1.0), (4, 1.0), (5, 1.0), (6, 1.0)])
        .with_a_row(17, &[(3, 1.2), (4, 1.2), (5, 1.1), (6, 1.1)])
        .with_a_row(18, &[(3, 1.4), (4, 1.3), (5, 1.2), (6, 1.2)])
        .with_a_row(19, &[(3, 1.6), (4, 1.5), (5, 1.5), (6, 1.4)])
        .with_a_row(20, &[(3, 1.9), (4, 1.8), (5, 1.8), (6, 1.7)])
        .with_l_row(15, &[(3, 0.0), (4, 0.4), (5, 1.0), (6, 1.6)])
        .with_l_row(16, &[(3, 0.0), (4, 0.6), (5, 1.0), (6, 1.8)])
        .with_l_row(17, &[(3, 0.0), (4, 0.7), (5, 1.2), (6, 2.0)])
        .with_l_row(18, &[(3, 0.0), (4, 0.9), (5, 1.8), (6, 2.1)])
        .with_l_row(19, &[(3, 0.1), (4, 1.1), (5, 2.0), (6, 2.3)])
        .with_l_row(20, &[(3, 0.3), (4, 1.2), (5, 2.0), (6, 2.5)]);

    HingeSeries {
        code: SILENTIA_100.to_string(),
        display_name: "Salice Silentia+ 100 series (e.g. 105°)".to_string(),
        opening_angle_deg: 105.0,
        min_door_thickness_mm: 14.0,
        max_door_thickness_mm: Some(20.0),
        min_k_mm: 3.0,
        max_k_mm: 6.0,
        cup_diameter_mm: 35.0,
        cup_depth_mm: 12.0,
        tables,
        hinge_count_by_height: vec![
            HeightBracket::new(1000.0, 2),
            HeightBracket::new(1500.0, 3),
            HeightBracket::new(2200.0, 4),
            HeightBracket::new(2800.0, 5),
        ],
    }
}

/// Salice Silentia+ 200 series, 94° version, doors 19-35 mm.
///
/// Only the limits are catalogued. The A/L tables and the height curve are
/// empty, so every lookup reports a missing table entry and a door without an
/// explicit height gets no hinge count.
pub fn silentia_200_94() -> HingeSeries {
    HingeSeries {
        code: SILENTIA_200_94.to_string(),
        display_name: "Salice Silentia+ 200 series (94°)".to_string(),
        opening_angle_deg: 94.0,
        min_door_thickness_mm: 19.0,
        max_door_thickness_mm: Some(35.0),
        min_k_mm: 3.0,
        max_k_mm: 9.0,
        cup_diameter_mm: 35.0,
        cup_depth_mm: 12.0,
        tables: BoringTables::default(),
        hinge_count_by_height: Vec::new(),
    }
}
