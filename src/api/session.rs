//! Sight sessions read from JSON
//!
//! A session holds everything needed to work a running fix: the fix time
//! and vessel run, the lines of position with their sights, and the
//! tabulated ephemeris values for each sight.
//!
//! ```json
//! {
//!   "fix": { "ut": "2012-04-14T01:42:00", "course": 260.0, "speed": 5.5 },
//!   "lops": [
//!     { "body": "Venus", "latitude": -8.233333333, "longitude": -105.35,
//!       "sights": [ { "hs": 29.11666667, "ut": "2012-04-14T01:24:29" } ],
//!       "selected": 0 }
//!   ],
//!   "ephemeris": [
//!     { "body": "Venus", "ut": "2012-04-14T01:24:29",
//!       "altitude": 29.192177286215557, "azimuth": 306.04014953 }
//!   ]
//! }
//! ```

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{NavError, NavResult};
use crate::ephemeris::{TabulatedEphemeris, TabulatedRow};
use crate::fix::Fix;
use crate::reduction::{LineOfPosition, Observer, Sight};
use crate::utils::NavConfig;

/// Fix time and vessel run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixEntry {
    pub ut: NaiveDateTime,
    /// Course over ground (degrees true)
    pub course: f64,
    /// Speed over ground (kn)
    pub speed: f64,
    /// Dead-reckoning position, if known
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightEntry {
    /// Sextant altitude (degrees)
    pub hs: f64,
    pub ut: NaiveDateTime,
}

/// One line of position; unset observer fields come from the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LopEntry {
    /// Body designator, e.g. `Sun LL` or `star`
    pub body: String,
    #[serde(default)]
    pub star: Option<String>,
    /// Assumed latitude (degrees, south negative)
    pub latitude: f64,
    /// Assumed longitude (degrees, west negative)
    pub longitude: f64,
    #[serde(default)]
    pub height_of_eye_m: Option<f64>,
    #[serde(default)]
    pub index_error_arcmin: Option<f64>,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub pressure_mbar: Option<f64>,
    pub sights: Vec<SightEntry>,
    /// Index of the sight used for the fix
    #[serde(default)]
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightSession {
    pub fix: FixEntry,
    pub lops: Vec<LopEntry>,
    #[serde(default)]
    pub ephemeris: Vec<TabulatedRow>,
}

impl SightSession {
    pub fn from_json(json: &str) -> NavResult<Self> {
        serde_json::from_str(json).map_err(|e| NavError::Session {
            reason: e.to_string(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NavError::Session {
            reason: format!("failed to read '{}': {}", path.display(), e),
        })?;
        Self::from_json(&content)
    }

    /// Build the fix and its ephemeris; LOPs are not reduced yet
    pub fn build(&self, config: &NavConfig) -> NavResult<(Fix, TabulatedEphemeris)> {
        if self.lops.is_empty() {
            return Err(NavError::Session {
                reason: "session has no lines of position".to_string(),
            });
        }

        let mut fix = Fix::new(self.fix.speed, self.fix.course, self.fix.ut).with_solver(config.solver);
        if let (Some(lat), Some(lon)) = (self.fix.latitude, self.fix.longitude) {
            fix = fix.with_position(lat, lon);
        }

        for entry in &self.lops {
            fix.add_lop(entry.build(config)?);
        }

        let ephemeris = TabulatedEphemeris::from_rows("session", &self.ephemeris)?;
        debug!(
            "session: {} LOPs, {} tabulated positions",
            fix.lops.len(),
            ephemeris.len()
        );
        Ok((fix, ephemeris))
    }
}

impl LopEntry {
    fn build(&self, config: &NavConfig) -> NavResult<LineOfPosition> {
        let defaults = &config.observer;
        let observer = Observer::new(self.latitude, self.longitude)
            .with_height_of_eye(self.height_of_eye_m.unwrap_or(defaults.height_of_eye_m))?
            .with_index_error(self.index_error_arcmin.unwrap_or(defaults.index_error_arcmin))
            .with_elevation(self.elevation_m.unwrap_or(defaults.elevation_m))
            .with_weather(
                self.temperature_c.unwrap_or(defaults.temperature_c),
                self.pressure_mbar.unwrap_or(defaults.pressure_mbar),
            );

        let mut lop = LineOfPosition::from_designator(&self.body, self.star.as_deref(), observer)?;
        for sight in &self.sights {
            lop.add_sight(Sight::new(sight.hs, sight.ut));
        }
        if let Some(index) = self.selected {
            lop.select_sight(index)?;
        }
        Ok(lop)
    }
}
