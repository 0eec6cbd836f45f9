//! # Automatic Series Selection
//!
//! Picks a series when the caller only knows the door thickness. Candidates
//! must support the thickness (and reach the requested opening angle, if
//! any); among those, the series whose thickness window is centred closest to
//! the door wins. Ties go to the earlier-registered series.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::catalogue::SeriesCatalogue;
//! use hinge_core::selector::select_for_thickness;
//!
//! let catalogue = SeriesCatalogue::standard();
//! let series = select_for_thickness(&catalogue, 18.0, None).unwrap();
//! assert_eq!(series.code, "salice_silentia_100");
//!
//! let thick = select_for_thickness(&catalogue, 28.0, None).unwrap();
//! assert_eq!(thick.code, "salice_silentia_200_94");
//! ```

use tracing::debug;

use crate::catalogue::SeriesCatalogue;
use crate::errors::{HingeError, HingeResult};
use crate::series::HingeSeries;

/// Best registered series for `thickness_mm`, optionally requiring a minimum opening angle.
pub fn select_for_thickness(
    catalogue: &SeriesCatalogue,
    thickness_mm: f64,
    min_opening_angle_deg: Option<f64>,
) -> HingeResult<HingeSeries> {
    if catalogue.is_empty() {
        return Err(HingeError::EmptyCatalogue);
    }

    let mut best: Option<(f64, HingeSeries)> = None;
    for series in catalogue.instantiate_all() {
        if !series.supports_thickness(thickness_mm) {
            debug!(code = %series.code, thickness_mm, "series rejected: thickness out of range");
            continue;
        }
        if let Some(min_angle) = min_opening_angle_deg {
            if series.opening_angle_deg < min_angle {
                debug!(code = %series.code, min_angle, "series rejected: opening angle too small");
                continue;
            }
        }

        let distance = (series.thickness_midpoint() - thickness_mm).abs();
        debug!(code = %series.code, distance, "series candidate");
        // Strict comparison keeps the first-registered series on ties
        if best.as_ref().map_or(true, |(best_distance, _)| distance < *best_distance) {
            best = Some((distance, series));
        }
    }

    match best {
        Some((_, series)) => {
            debug!(code = %series.code, thickness_mm, "selected hinge series");
            Ok(series)
        }
        None => Err(HingeError::no_matching_series(thickness_mm, min_opening_angle_deg)),
    }
}

/// How the caller wants the series chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesRequest<'a> {
    /// A catalogue key or alias
    Key(&'a str),
    /// Best match for the door thickness
    Automatic { min_opening_angle_deg: Option<f64> },
}

/// Resolve a [`SeriesRequest`] against `catalogue` for a door of `thickness_mm`.
pub fn resolve_request(
    catalogue: &SeriesCatalogue,
    request: SeriesRequest<'_>,
    thickness_mm: f64,
) -> HingeResult<HingeSeries> {
    match request {
        SeriesRequest::Key(key) => catalogue.resolve(key),
        SeriesRequest::Automatic { min_opening_angle_deg } => {
            select_for_thickness(catalogue, thickness_mm, min_opening_angle_deg)
        }
    }
}
