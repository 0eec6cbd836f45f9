//! # Calculator Settings
//!
//! Shop-level defaults for the calculator: how measurements round onto table
//! keys, which series to use when none is named, and a default minimum
//! opening angle for automatic selection. Settings are JSON; every field is
//! optional in the file.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::settings::CalcSettings;
//! use hinge_core::units::TableRounding;
//!
//! let settings: CalcSettings = serde_json::from_str(r#"{ "rounding": "floor" }"#).unwrap();
//! assert_eq!(settings.rounding, TableRounding::Floor);
//! assert_eq!(settings.default_series, None);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{HingeError, HingeResult};
use crate::units::TableRounding;

/// Calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcSettings {
    /// Mapping from continuous T and K to integer table keys
    pub rounding: TableRounding,

    /// Series key used when the caller names none (instead of automatic selection)
    pub default_series: Option<String>,

    /// Minimum opening angle applied to automatic selection
    pub min_opening_angle_deg: Option<f64>,
}

impl CalcSettings {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> HingeResult<()> {
        if let Some(key) = &self.default_series {
            if key.trim().is_empty() {
                return Err(HingeError::invalid_input(
                    "default_series",
                    key.clone(),
                    "Series key must not be blank",
                ));
            }
        }
        if let Some(angle) = self.min_opening_angle_deg {
            if !(angle > 0.0 && angle <= 360.0) {
                return Err(HingeError::invalid_input(
                    "min_opening_angle_deg",
                    angle.to_string(),
                    "Opening angle must be between 0 and 360 degrees",
                ));
            }
        }
        Ok(())
    }
}

/// Load and validate settings from a JSON file.
pub fn load_settings(path: &Path) -> HingeResult<CalcSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| HingeError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: CalcSettings =
        serde_json::from_str(&contents).map_err(|e| HingeError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    settings.validate()?;

    info!(path = %path.display(), rounding = ?settings.rounding, "loaded calculator settings");
    Ok(settings)
}
