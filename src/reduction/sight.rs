//! A single sextant observation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::observer::utc_now_seconds;
use crate::core::Angle;

/// Whether the observed position lies toward or away from the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptDirection {
    Toward,
    Away,
}

impl fmt::Display for InterceptDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterceptDirection::Toward => write!(f, "T"),
            InterceptDirection::Away => write!(f, "A"),
        }
    }
}

/// One shot of a body: sextant altitude at a UT, plus the reduced values
///
/// `ha`, `hc`, `intercept_nm`, `run_intercept_nm` and `azimuth` stay zero
/// until the owning line of position is reduced.
#[derive(Debug, Clone, PartialEq)]
pub struct Sight {
    /// Sextant altitude
    pub hs: Angle,
    /// Apparent altitude, corrected for index error and dip
    pub ha: Angle,
    pub ut: NaiveDateTime,
    /// Computed altitude for the observed limb
    pub hc: Angle,
    /// Intercept (nm), positive toward the body
    pub intercept_nm: f64,
    /// Intercept advanced or retired to the fix time
    pub run_intercept_nm: f64,
    pub azimuth: Angle,
}

impl Sight {
    pub fn new(hs_deg: f64, ut: NaiveDateTime) -> Self {
        Self {
            hs: Angle::new(hs_deg),
            ha: Angle::default(),
            ut,
            hc: Angle::default(),
            intercept_nm: 0.0,
            run_intercept_nm: 0.0,
            azimuth: Angle::default(),
        }
    }

    /// Sight taken now, UT truncated to whole seconds
    pub fn now(hs_deg: f64) -> Self {
        Self::new(hs_deg, utc_now_seconds())
    }

    pub fn direction(&self) -> InterceptDirection {
        if self.intercept_nm >= 0.0 {
            InterceptDirection::Toward
        } else {
            InterceptDirection::Away
        }
    }
}
