//! Line of position: one body, one assumed position, one or more sights

use chrono::NaiveDateTime;
use log::debug;

use super::observer::Observer;
use super::sight::Sight;
use crate::core::{Angle, Body, NavError, NavResult, ARCMIN_PER_DEGREE};
use crate::ephemeris::{Ephemeris, EphemerisQuery};

/// Vessel movement used to carry intercepts to the fix time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselRun {
    /// Course over ground (true)
    pub course: Angle,
    /// Speed over ground (kn)
    pub speed_kn: f64,
    /// Time of the fix (UT)
    pub ut: NaiveDateTime,
}

impl VesselRun {
    pub fn new(speed_kn: f64, course_deg: f64, ut: NaiveDateTime) -> Self {
        Self {
            course: Angle::new(course_deg),
            speed_kn,
            ut,
        }
    }

    /// Signed hours from `ut` to the fix time
    pub fn hours_since(&self, ut: NaiveDateTime) -> f64 {
        (self.ut - ut).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Intercept advanced (or retired) from `sight_ut` to the fix time
    pub fn advance(&self, intercept_nm: f64, azimuth: Angle, sight_ut: NaiveDateTime) -> f64 {
        let made_good = self.speed_kn * self.hours_since(sight_ut);
        intercept_nm + (self.course.radians() - azimuth.radians()).cos() * made_good
    }
}

/// Sights of one body worked from a single assumed position
#[derive(Debug, Clone)]
pub struct LineOfPosition {
    body: Body,
    observer: Observer,
    sights: Vec<Sight>,
    selected: Option<usize>,
}

impl LineOfPosition {
    pub fn new(body: Body, observer: Observer) -> Self {
        Self {
            body,
            observer,
            sights: Vec::new(),
            selected: None,
        }
    }

    /// Build from a body designator such as `Sun LL` or `star`
    pub fn from_designator(
        designator: &str,
        star_name: Option<&str>,
        observer: Observer,
    ) -> NavResult<Self> {
        Ok(Self::new(Body::parse(designator, star_name)?, observer))
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut Observer {
        &mut self.observer
    }

    pub fn sights(&self) -> &[Sight] {
        &self.sights
    }

    /// Append a sight and return its index
    pub fn add_sight(&mut self, sight: Sight) -> usize {
        self.sights.push(sight);
        self.sights.len() - 1
    }

    pub fn with_sight(mut self, sight: Sight) -> Self {
        self.add_sight(sight);
        self
    }

    /// Recompute dip, then Ha = Hs + index error + dip for every sight
    pub fn compute_apparent_altitudes(&mut self) {
        self.observer.calc_dip();
        for sight in &mut self.sights {
            sight.ha = apparent_altitude(&self.observer, sight.hs);
        }
    }

    /// Reduce every sight against `ephemeris`
    ///
    /// Sets Ha, Hc, azimuth, intercept and run-corrected intercept. If any
    /// sight fails, no sight is changed.
    pub fn reduce(&mut self, ephemeris: &dyn Ephemeris, run: &VesselRun) -> NavResult<()> {
        let mut observer = self.observer.clone();
        observer.calc_dip();
        let target = self.body.target();

        let mut reduced = Vec::with_capacity(self.sights.len());
        for sight in &self.sights {
            let mut sight = sight.clone();
            sight.ha = apparent_altitude(&observer, sight.hs);

            observer.date = sight.ut;
            let position = ephemeris.topocentric(&EphemerisQuery::for_observer(target, &observer))?;

            let mut hc = position.altitude.degrees();
            if let Some(limb) = self.body.limb() {
                let radius = position.radius.ok_or_else(|| NavError::EphemerisUnavailable {
                    source_name: ephemeris.name().to_string(),
                    body: target.name().to_string(),
                    details: "no angular radius for limb correction".to_string(),
                })?;
                hc += limb.radius_factor() * radius.degrees();
            }

            sight.hc = Angle::new(hc);
            sight.azimuth = position.azimuth;
            sight.intercept_nm = (sight.ha.degrees() - hc) * ARCMIN_PER_DEGREE;
            sight.run_intercept_nm = run.advance(sight.intercept_nm, sight.azimuth, sight.ut);

            debug!(
                "{} at {}: Ha {:.4} Hc {:.4} Ic {:.2}nm (run {:.2}nm) Az {:.1}",
                self.body,
                sight.ut,
                sight.ha.degrees(),
                hc,
                sight.intercept_nm,
                sight.run_intercept_nm,
                sight.azimuth.degrees()
            );
            reduced.push(sight);
        }

        self.observer = observer;
        self.sights = reduced;
        Ok(())
    }

    /// Choose the sight used when this LOP enters a fix
    pub fn select_sight(&mut self, index: usize) -> NavResult<()> {
        if index >= self.sights.len() {
            return Err(NavError::InvalidSightIndex {
                index,
                available: self.sights.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_sight(&self) -> Option<&Sight> {
        self.selected.and_then(|index| self.sights.get(index))
    }
}

fn apparent_altitude(observer: &Observer, hs: Angle) -> Angle {
    Angle::new(hs.degrees() + observer.index_error.degrees() + observer.dip().degrees())
}
