//! Error types for sight reduction and fix computation

use thiserror::Error;

/// Result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;

/// Failures raised by LOP reduction and fix solving
///
/// Every error is fatal to the operation that raised it; the state the
/// operation would have written is left as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    /// Body designator is not one of the nine supported values
    #[error("invalid body designator '{designator}'")]
    InvalidBody { designator: String },

    /// Star name is not in the navigational star catalog
    #[error("unknown navigational star '{name}'")]
    UnknownStar { name: String },

    /// Fix solve requested with the wrong number of LOPs or sight selections
    #[error("fix needs {required} LOPs with one sight selected each: {reason}")]
    FixConfiguration { required: String, reason: String },

    /// The LOPs do not share a common assumed position
    #[error(
        "assumed positions differ by {delta_lat_arcmin:.2}' lat / {delta_lon_arcmin:.2}' lon \
         (tolerance {tolerance_arcmin:.2}')"
    )]
    AssumedPositionMismatch {
        delta_lat_arcmin: f64,
        delta_lon_arcmin: f64,
        tolerance_arcmin: f64,
    },

    /// The ephemeris collaborator could not produce a position
    #[error("ephemeris '{source_name}' unavailable for {body}: {details}")]
    EphemerisUnavailable {
        source_name: String,
        body: String,
        details: String,
    },

    /// LOPs are too close to parallel for a usable intersection
    #[error("ill-conditioned fix: LOPs cross at {crossing_angle_deg:.3}° (minimum {minimum_deg:.3}°)")]
    IllConditionedFix {
        crossing_angle_deg: f64,
        minimum_deg: f64,
    },

    /// Height of eye is negative or not a number
    #[error("height of eye must be zero or more metres, got {height_of_eye_m}")]
    InvalidHeightOfEye { height_of_eye_m: f64 },

    /// Sight selection index out of range
    #[error("sight index {index} out of range ({available} sights)")]
    InvalidSightIndex { index: usize, available: usize },

    /// Malformed sight session input
    #[error("invalid session: {reason}")]
    Session { reason: String },
}

impl NavError {
    pub(crate) fn two_lops(reason: impl Into<String>) -> Self {
        NavError::FixConfiguration {
            required: "exactly 2".to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn min_lops(minimum: usize, reason: impl Into<String>) -> Self {
        NavError::FixConfiguration {
            required: format!("at least {}", minimum),
            reason: reason.into(),
        }
    }
}
