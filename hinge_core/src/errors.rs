//! # Error Types
//!
//! Structured error types for hinge_core. Only catalogue resolution, automatic
//! series selection and settings loading can fail; the boring calculation
//! itself reports irregular input as warnings on the result instead.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::errors::{HingeError, HingeResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> HingeResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(HingeError::invalid_input(
//!             "thickness_mm",
//!             thickness_mm.to_string(),
//!             "Door thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hinge_core operations
pub type HingeResult<T> = Result<T, HingeError>;

/// Structured error type for catalogue and configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HingeError {
    /// Series key is not registered in the catalogue
    #[error("Unknown hinge series '{key}'. Available: [{}]", .available.join(", "))]
    UnknownSeries { key: String, available: Vec<String> },

    /// No registered series satisfies the automatic selection constraints
    #[error("No hinge series supports a door thickness of {thickness_mm} mm{}", angle_clause(.min_opening_angle_deg))]
    NoMatchingSeries {
        thickness_mm: f64,
        min_opening_angle_deg: Option<f64>,
    },

    /// Automatic selection was requested against an empty catalogue
    #[error("No hinge series registered")]
    EmptyCatalogue,

    /// An input value is invalid (not a number, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

fn angle_clause(min_opening_angle_deg: &Option<f64>) -> String {
    match min_opening_angle_deg {
        Some(angle) => format!(" with an opening angle of at least {}°", angle),
        None => String::new(),
    }
}

impl HingeError {
    /// Create an UnknownSeries error
    pub fn unknown_series(key: impl Into<String>, available: Vec<String>) -> Self {
        HingeError::UnknownSeries {
            key: key.into(),
            available,
        }
    }

    /// Create a NoMatchingSeries error
    pub fn no_matching_series(thickness_mm: f64, min_opening_angle_deg: Option<f64>) -> Self {
        HingeError::NoMatchingSeries {
            thickness_mm,
            min_opening_angle_deg,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        HingeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        HingeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HingeError::UnknownSeries { .. } => "UNKNOWN_SERIES",
            HingeError::NoMatchingSeries { .. } => "NO_MATCHING_SERIES",
            HingeError::EmptyCatalogue => "EMPTY_CATALOGUE",
            HingeError::InvalidInput { .. } => "INVALID_INPUT",
            HingeError::FileError { .. } => "FILE_ERROR",
            HingeError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for HingeError {
    fn from(err: serde_json::Error) -> Self {
        HingeError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = HingeError::unknown_series("300", vec!["100".to_string()]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownSeries"));
        let roundtrip: HingeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unknown_series_lists_keys() {
        let error = HingeError::unknown_series(
            "300",
            vec!["100".to_string(), "200-94".to_string()],
        );
        let msg = error.to_string();
        assert!(msg.contains("'300'"));
        assert!(msg.contains("100, 200-94"));
    }

    #[test]
    fn test_no_match_mentions_angle_only_when_given() {
        let plain = HingeError::no_matching_series(50.0, None).to_string();
        assert!(plain.contains("50 mm"));
        assert!(!plain.contains("opening angle"));

        let with_angle = HingeError::no_matching_series(18.0, Some(155.0)).to_string();
        assert!(with_angle.contains("18 mm"));
        assert!(with_angle.contains("155°"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HingeError::EmptyCatalogue.error_code(), "EMPTY_CATALOGUE");
        assert_eq!(
            HingeError::no_matching_series(5.0, None).error_code(),
            "NO_MATCHING_SERIES"
        );
    }
}
