//! Ephemeris backed by tabulated positions

use std::collections::HashMap;

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{ApparentPosition, Ephemeris, EphemerisQuery};
use crate::core::{EphemerisTarget, NavError, NavResult};

/// One tabulated position as it appears in a session file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulatedRow {
    /// `Sun`, `Moon`, a planet or a catalog star name
    pub body: String,
    pub ut: NaiveDateTime,
    /// Apparent altitude of the center (degrees)
    pub altitude: f64,
    /// Azimuth (degrees)
    pub azimuth: f64,
    /// Angular radius (degrees), Sun and Moon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// Declination (degrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declination: Option<f64>,
    /// Sidereal hour angle (degrees), stars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<f64>,
}

/// Positions keyed by body and UT
///
/// Values are returned as tabulated; the observer fields of a query are not
/// used, so a table is only valid for the assumed position it was worked for.
#[derive(Debug, Clone, Default)]
pub struct TabulatedEphemeris {
    name: String,
    entries: HashMap<(&'static str, NaiveDateTime), ApparentPosition>,
}

impl TabulatedEphemeris {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a table from session rows; unknown body names are rejected
    pub fn from_rows(name: impl Into<String>, rows: &[TabulatedRow]) -> NavResult<Self> {
        let mut table = Self::new(name);
        for row in rows {
            table.add_row(row)?;
        }
        Ok(table)
    }

    pub fn add_row(&mut self, row: &TabulatedRow) -> NavResult<()> {
        let target = EphemerisTarget::from_name(&row.body)?;
        let mut position = ApparentPosition::new(row.altitude, row.azimuth);
        if let Some(radius) = row.radius {
            position = position.with_radius(radius);
        }
        if let Some(magnitude) = row.magnitude {
            position = position.with_magnitude(magnitude);
        }
        if let Some(declination) = row.declination {
            position = position.with_declination(declination);
        }
        if let Some(sha) = row.sha {
            position = position.with_sha(sha);
        }
        self.insert(target, row.ut, position);
        Ok(())
    }

    /// Insert or replace the position of `target` at `ut`
    pub fn insert(&mut self, target: EphemerisTarget, ut: NaiveDateTime, position: ApparentPosition) {
        self.entries.insert((target.name(), ut), position);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Ephemeris for TabulatedEphemeris {
    fn name(&self) -> &str {
        &self.name
    }

    fn topocentric(&self, query: &EphemerisQuery) -> NavResult<ApparentPosition> {
        let key = (query.target.name(), query.ut);
        match self.entries.get(&key) {
            Some(position) => Ok(position.clone()),
            None => {
                debug!("{}: no entry for {} at {}", self.name, query.target, query.ut);
                Err(NavError::EphemerisUnavailable {
                    source_name: self.name.clone(),
                    body: query.target.name().to_string(),
                    details: format!("no tabulated position at {}", query.ut),
                })
            }
        }
    }
}
