//! Ephemeris collaborator contract
//!
//! Sight reduction needs the apparent topocentric altitude and azimuth of a
//! body for an observer at a given UT. How that position is produced is left
//! to an [`Ephemeris`] implementation. [`TabulatedEphemeris`] serves values
//! read from an almanac or a session file; [`StarRoutedEphemeris`] sends star
//! queries to one backend and everything else to another.

pub mod tabulated;

use chrono::NaiveDateTime;
use log::trace;

use crate::core::{Angle, EphemerisTarget, NavResult};
use crate::reduction::Observer;

pub use tabulated::{TabulatedEphemeris, TabulatedRow};

/// Everything an ephemeris needs to place a body in the observer's sky
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisQuery {
    pub target: EphemerisTarget,
    pub ut: NaiveDateTime,
    pub latitude: Angle,
    pub longitude: Angle,
    pub elevation_m: f64,
    pub temperature_c: f64,
    pub pressure_mbar: f64,
}

impl EphemerisQuery {
    /// Query for `target` at the observer's position and clock
    pub fn for_observer(target: EphemerisTarget, observer: &Observer) -> Self {
        Self {
            target,
            ut: observer.date,
            latitude: observer.latitude,
            longitude: observer.longitude,
            elevation_m: observer.elevation_m,
            temperature_c: observer.temperature_c,
            pressure_mbar: observer.pressure_mbar,
        }
    }
}

/// Apparent topocentric position, refraction included
#[derive(Debug, Clone, PartialEq)]
pub struct ApparentPosition {
    /// Altitude of the body's center
    pub altitude: Angle,
    /// True azimuth
    pub azimuth: Angle,
    /// Topocentric angular radius, Sun and Moon only
    pub radius: Option<Angle>,
    pub magnitude: Option<f64>,
    pub declination: Option<Angle>,
    pub sha: Option<Angle>,
}

impl ApparentPosition {
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude: Angle::new(altitude_deg),
            azimuth: Angle::new(azimuth_deg),
            radius: None,
            magnitude: None,
            declination: None,
            sha: None,
        }
    }

    pub fn with_radius(mut self, radius_deg: f64) -> Self {
        self.radius = Some(Angle::new(radius_deg));
        self
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_declination(mut self, declination_deg: f64) -> Self {
        self.declination = Some(Angle::new(declination_deg));
        self
    }

    /// Sidereal hour angle, stars only
    pub fn with_sha(mut self, sha_deg: f64) -> Self {
        self.sha = Some(Angle::new(sha_deg));
        self
    }
}

/// Source of apparent topocentric positions
pub trait Ephemeris {
    /// Name used in logs and error reports
    fn name(&self) -> &str;

    /// Apparent position of `query.target` for the queried observer and UT
    fn topocentric(&self, query: &EphemerisQuery) -> NavResult<ApparentPosition>;
}

/// Routes star queries to a dedicated backend
pub struct StarRoutedEphemeris {
    name: String,
    bodies: Box<dyn Ephemeris>,
    stars: Box<dyn Ephemeris>,
}

impl StarRoutedEphemeris {
    pub fn new(bodies: Box<dyn Ephemeris>, stars: Box<dyn Ephemeris>) -> Self {
        let name = format!("{}+{}", bodies.name(), stars.name());
        Self { name, bodies, stars }
    }
}

impl Ephemeris for StarRoutedEphemeris {
    fn name(&self) -> &str {
        &self.name
    }

    fn topocentric(&self, query: &EphemerisQuery) -> NavResult<ApparentPosition> {
        let backend = if query.target.is_star() {
            &self.stars
        } else {
            &self.bodies
        };
        trace!("{}: routing {} to {}", self.name, query.target, backend.name());
        backend.topocentric(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NavError;
    use chrono::NaiveDate;

    fn ut() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2012, 4, 14)
            .unwrap()
            .and_hms_opt(1, 29, 21)
            .unwrap()
    }

    #[test]
    fn test_query_for_observer() {
        let mut observer = Observer::new(-8.25, -105.35).with_weather(27.0, 1005.0);
        observer.date = ut();
        let query = EphemerisQuery::for_observer(EphemerisTarget::Sun, &observer);
        assert_eq!(query.ut, ut());
        assert_eq!(query.temperature_c, 27.0);
        assert_eq!(query.pressure_mbar, 1005.0);
        assert!((query.latitude.degrees() + 8.25).abs() < 1e-12);
    }

    #[test]
    fn test_star_routing() {
        let mut planets = TabulatedEphemeris::new("planets");
        planets.insert(EphemerisTarget::from_name("Venus").unwrap(), ut(), ApparentPosition::new(29.0, 306.0));
        let mut stars = TabulatedEphemeris::new("stars");
        stars.insert(EphemerisTarget::from_name("Canopus").unwrap(), ut(), ApparentPosition::new(41.5, 198.9));

        let routed = StarRoutedEphemeris::new(Box::new(planets), Box::new(stars));
        assert_eq!(routed.name(), "planets+stars");

        let mut observer = Observer::new(-8.25, -105.35);
        observer.date = ut();

        let venus = EphemerisQuery::for_observer(EphemerisTarget::from_name("Venus").unwrap(), &observer);
        assert!((routed.topocentric(&venus).unwrap().altitude.degrees() - 29.0).abs() < 1e-12);

        let canopus = EphemerisQuery::for_observer(EphemerisTarget::from_name("Canopus").unwrap(), &observer);
        assert!((routed.topocentric(&canopus).unwrap().azimuth.degrees() - 198.9).abs() < 1e-12);

        let sun = EphemerisQuery::for_observer(EphemerisTarget::Sun, &observer);
        match routed.topocentric(&sun) {
            Err(NavError::EphemerisUnavailable { source_name, .. }) => assert_eq!(source_name, "planets"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
