//! Running fixes from lines of position
//!
//! A [`Fix`] owns the lines of position, the vessel's course and speed made
//! good, and the fix time. Each LOP's selected sight is carried to the fix
//! time with the run-corrected intercept before the lines are crossed.

pub mod least_squares;
pub mod two_lop;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{
    norm_degrees, Angle, NavResult, DEFAULT_AP_TOLERANCE_ARCMIN, DEFAULT_MIN_CROSSING_ANGLE_DEG,
};
use crate::ephemeris::Ephemeris;
use crate::reduction::observer::utc_now_seconds;
use crate::reduction::{LineOfPosition, Sight, VesselRun};

/// Solver tolerances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Largest lat or lon difference between assumed positions (arc-minutes)
    pub ap_tolerance_arcmin: f64,
    /// Smallest accepted angle between two LOPs (degrees)
    pub min_crossing_angle_deg: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            ap_tolerance_arcmin: DEFAULT_AP_TOLERANCE_ARCMIN,
            min_crossing_angle_deg: DEFAULT_MIN_CROSSING_ANGLE_DEG,
        }
    }
}

/// Fix geometry grade, from the angle at which the LOPs cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixQuality {
    /// Crossing angle of 60° or more
    Excellent,
    /// 30° to 60°
    Good,
    /// 15° to 30°
    Acceptable,
    /// Below 15°
    Poor,
    /// LOPs parallel or crossing angle undefined
    Degenerate,
}

impl FixQuality {
    pub fn from_crossing_angle(crossing_angle_deg: f64) -> Self {
        if !crossing_angle_deg.is_finite() || crossing_angle_deg <= 0.0 {
            FixQuality::Degenerate
        } else if crossing_angle_deg >= 60.0 {
            FixQuality::Excellent
        } else if crossing_angle_deg >= 30.0 {
            FixQuality::Good
        } else if crossing_angle_deg >= 15.0 {
            FixQuality::Acceptable
        } else {
            FixQuality::Poor
        }
    }

    pub fn is_acceptable(&self) -> bool {
        matches!(
            self,
            FixQuality::Excellent | FixQuality::Good | FixQuality::Acceptable
        )
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FixQuality::Excellent => "excellent",
            FixQuality::Good => "good",
            FixQuality::Acceptable => "acceptable",
            FixQuality::Poor => "poor",
            FixQuality::Degenerate => "degenerate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixMethod {
    TwoLop,
    LeastSquares,
}

impl fmt::Display for FixMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixMethod::TwoLop => write!(f, "two-LOP plane trigonometry"),
            FixMethod::LeastSquares => write!(f, "least squares"),
        }
    }
}

/// Result of a fix computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixSolution {
    pub method: FixMethod,
    pub ut: NaiveDateTime,
    pub latitude: Angle,
    pub longitude: Angle,
    /// Assumed position the fix was plotted from
    pub assumed_latitude: Angle,
    pub assumed_longitude: Angle,
    /// Distance from the assumed position (nm)
    pub distance_nm: f64,
    /// True bearing from the assumed position
    pub bearing: Angle,
    /// Best angle between any two of the LOPs (degrees, 0-90)
    pub crossing_angle_deg: f64,
    pub quality: FixQuality,
    pub lop_count: usize,
    /// RMS distance of the fix from its LOPs (nm); zero for two LOPs
    pub rms_residual_nm: f64,
}

/// A running fix: vessel run, fix time and the LOPs crossed for it
#[derive(Debug, Clone)]
pub struct Fix {
    /// Speed over ground (kn)
    pub speed_kn: f64,
    /// Course over ground (true)
    pub course: Angle,
    pub ut: NaiveDateTime,
    pub latitude: Angle,
    pub longitude: Angle,
    pub lops: Vec<LineOfPosition>,
    pub solver: SolverSettings,
}

impl Fix {
    pub fn new(speed_kn: f64, course_deg: f64, ut: NaiveDateTime) -> Self {
        Self {
            speed_kn,
            course: Angle::new(course_deg),
            ut,
            latitude: Angle::default(),
            longitude: Angle::default(),
            lops: Vec::new(),
            solver: SolverSettings::default(),
        }
    }

    /// Fix for the current UT, truncated to whole seconds
    pub fn now(speed_kn: f64, course_deg: f64) -> Self {
        Self::new(speed_kn, course_deg, utc_now_seconds())
    }

    pub fn with_position(mut self, lat_deg: f64, lon_deg: f64) -> Self {
        self.latitude = Angle::new(lat_deg);
        self.longitude = Angle::new(lon_deg);
        self
    }

    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Append a line of position and return its index
    pub fn add_lop(&mut self, lop: LineOfPosition) -> usize {
        self.lops.push(lop);
        self.lops.len() - 1
    }

    pub fn with_lop(mut self, lop: LineOfPosition) -> Self {
        self.add_lop(lop);
        self
    }

    /// Course, speed and time used to carry intercepts to this fix
    pub fn run(&self) -> VesselRun {
        VesselRun {
            course: self.course,
            speed_kn: self.speed_kn,
            ut: self.ut,
        }
    }

    /// Reduce every LOP against `ephemeris` with this fix's run
    pub fn reduce_lops(&mut self, ephemeris: &dyn Ephemeris) -> NavResult<()> {
        let run = self.run();
        for lop in &mut self.lops {
            lop.reduce(ephemeris, &run)?;
        }
        Ok(())
    }

    /// Selected sight of every LOP, in LOP order
    fn selected_sights(&self) -> Vec<Option<(&LineOfPosition, &Sight)>> {
        self.lops
            .iter()
            .map(|lop| lop.selected_sight().map(|sight| (lop, sight)))
            .collect()
    }

    fn solution(
        &self,
        method: FixMethod,
        assumed: (Angle, Angle),
        offset_nm: (f64, f64),
        crossing_angle_deg: f64,
        rms_residual_nm: f64,
    ) -> FixSolution {
        let (ap_lat, ap_lon) = assumed;
        let (north, east) = offset_nm;
        let (latitude, longitude) = offset_position(ap_lat, ap_lon, north, east);
        FixSolution {
            method,
            ut: self.ut,
            latitude,
            longitude,
            assumed_latitude: ap_lat,
            assumed_longitude: ap_lon,
            distance_nm: north.hypot(east),
            bearing: Angle::new(norm_degrees(east.atan2(north).to_degrees())),
            crossing_angle_deg,
            quality: FixQuality::from_crossing_angle(crossing_angle_deg),
            lop_count: self.lops.len(),
            rms_residual_nm,
        }
    }
}

/// Angle between two LOPs with the given azimuths, folded into 0-90°
pub fn crossing_angle(azimuth_a: Angle, azimuth_b: Angle) -> f64 {
    (azimuth_a.radians() - azimuth_b.radians())
        .sin()
        .abs()
        .min(1.0)
        .asin()
        .to_degrees()
}

/// Position `north`/`east` nautical miles from an assumed position
///
/// Departure is converted to longitude at the assumed latitude.
pub fn offset_position(ap_lat: Angle, ap_lon: Angle, north_nm: f64, east_nm: f64) -> (Angle, Angle) {
    let delta_lat = (north_nm / 60.0).to_radians();
    let delta_lon = (east_nm / ap_lat.radians().cos() / 60.0).to_radians();
    (
        Angle::from_radians(ap_lat.radians() + delta_lat),
        Angle::from_radians(ap_lon.radians() + delta_lon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_quality_grades() {
        assert_eq!(FixQuality::from_crossing_angle(72.85), FixQuality::Excellent);
        assert_eq!(FixQuality::from_crossing_angle(45.0), FixQuality::Good);
        assert_eq!(FixQuality::from_crossing_angle(20.0), FixQuality::Acceptable);
        assert_eq!(FixQuality::from_crossing_angle(5.0), FixQuality::Poor);
        assert_eq!(FixQuality::from_crossing_angle(0.0), FixQuality::Degenerate);
        assert_eq!(FixQuality::from_crossing_angle(f64::NAN), FixQuality::Degenerate);
        assert!(FixQuality::Acceptable.is_acceptable());
        assert!(!FixQuality::Poor.is_acceptable());
    }

    #[test]
    fn test_crossing_angle() {
        assert!((crossing_angle(Angle::new(306.0), Angle::new(198.0)) - 72.0).abs() < 1e-9);
        assert!((crossing_angle(Angle::new(10.0), Angle::new(190.0))).abs() < 1e-9);
        assert!((crossing_angle(Angle::new(0.0), Angle::new(90.0)) - 90.0).abs() < 1e-9);
        assert!((crossing_angle(Angle::new(0.0), Angle::new(135.0)) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_position() {
        let (lat, lon) = offset_position(Angle::new(60.0), Angle::new(10.0), 60.0, 30.0);
        assert!((lat.degrees() - 61.0).abs() < 1e-12);
        assert!((lon.degrees() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_run_from_fix() {
        let ut = NaiveDate::from_ymd_opt(2012, 4, 14)
            .unwrap()
            .and_hms_opt(1, 42, 0)
            .unwrap();
        let fix = Fix::new(5.5, 260.0, ut).with_position(-8.2, -105.3);
        let run = fix.run();
        assert_eq!(run.speed_kn, 5.5);
        assert!((run.course.degrees() - 260.0).abs() < 1e-12);
        assert_eq!(run.ut, ut);
        assert!((fix.latitude.degrees() + 8.2).abs() < 1e-12);
        assert_eq!(fix.solver, SolverSettings::default());
    }
}
