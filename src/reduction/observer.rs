//! Assumed position and observing conditions

use chrono::{NaiveDateTime, Timelike, Utc};

use crate::core::{
    Angle, DegMin, NavError, NavResult, DEFAULT_PRESSURE_MBAR, DEFAULT_TEMPERATURE_C,
    DIP_COEFFICIENT,
};

/// Observer at an assumed position
///
/// Latitude is positive north, longitude positive east. The index error is
/// entered in arc-minutes and kept as an [`Angle`]. Dip is derived from the
/// height of eye on construction; after changing the height of eye call
/// [`Observer::calc_dip`] to bring it up to date.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    pub latitude: Angle,
    pub longitude: Angle,
    /// Elevation above sea level (m)
    pub elevation_m: f64,
    height_of_eye_m: f64,
    pub index_error: Angle,
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Air pressure (mbar)
    pub pressure_mbar: f64,
    dip: Angle,
    /// Observer clock (UT)
    pub date: NaiveDateTime,
}

impl Observer {
    /// Observer at `lat_deg`/`lon_deg` with sea-level defaults
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        let mut observer = Self {
            latitude: Angle::new(lat_deg),
            longitude: Angle::new(lon_deg),
            elevation_m: 0.0,
            height_of_eye_m: 0.0,
            index_error: Angle::default(),
            temperature_c: DEFAULT_TEMPERATURE_C,
            pressure_mbar: DEFAULT_PRESSURE_MBAR,
            dip: Angle::default(),
            date: utc_now_seconds(),
        };
        observer.calc_dip();
        observer
    }

    /// Set the height of eye and derive dip from it
    pub fn with_height_of_eye(mut self, height_of_eye_m: f64) -> NavResult<Self> {
        self.set_height_of_eye(height_of_eye_m)?;
        self.calc_dip();
        Ok(self)
    }

    /// Index correction in arc-minutes, added to every sextant altitude
    pub fn with_index_error(mut self, index_error_arcmin: f64) -> Self {
        self.index_error = Angle::from_arcmin(index_error_arcmin);
        self
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }

    pub fn with_weather(mut self, temperature_c: f64, pressure_mbar: f64) -> Self {
        self.temperature_c = temperature_c;
        self.pressure_mbar = pressure_mbar;
        self
    }

    pub fn height_of_eye(&self) -> f64 {
        self.height_of_eye_m
    }

    /// Change the height of eye without touching the stored dip
    ///
    /// Negative or non-finite heights are rejected and leave the observer
    /// unchanged.
    pub fn set_height_of_eye(&mut self, height_of_eye_m: f64) -> NavResult<()> {
        if !height_of_eye_m.is_finite() || height_of_eye_m < 0.0 {
            return Err(NavError::InvalidHeightOfEye { height_of_eye_m });
        }
        self.height_of_eye_m = height_of_eye_m;
        Ok(())
    }

    /// Recompute dip from the height of eye; returns dip in radians
    pub fn calc_dip(&mut self) -> f64 {
        self.dip
            .set_degrees(-(DIP_COEFFICIENT * self.height_of_eye_m.sqrt()));
        self.dip.radians()
    }

    pub fn dip(&self) -> Angle {
        self.dip
    }

    pub fn lat_deg(&self) -> f64 {
        self.latitude.degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.longitude.degrees()
    }

    pub fn lat_tuple(&self) -> DegMin {
        self.latitude.deg_min()
    }

    pub fn lon_tuple(&self) -> DegMin {
        self.longitude.deg_min()
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Current UT truncated to whole seconds
pub(crate) fn utc_now_seconds() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sign;

    #[test]
    fn test_observer_defaults() {
        let observer = Observer::new(-8.233333333, -105.35);
        assert_eq!(observer.temperature_c, 20.0);
        assert_eq!(observer.pressure_mbar, 1010.0);
        assert_eq!(observer.elevation_m, 0.0);
        assert_eq!(observer.dip().degrees(), 0.0);
        assert_eq!(observer.date.nanosecond(), 0);

        let lat = observer.lat_tuple();
        assert_eq!(lat.degrees, 8);
        assert!((lat.minutes - 14.0).abs() < 1e-6);
        assert_eq!(lat.sign, Sign::Negative);

        let lon = observer.lon_tuple();
        assert_eq!(lon.degrees, 105);
        assert!((lon.minutes - 21.0).abs() < 1e-9);
        assert!((observer.lon_deg() + 105.35).abs() < 1e-12);
    }

    #[test]
    fn test_dip_from_height_of_eye() {
        let observer = Observer::new(0.0, 0.0).with_height_of_eye(1.8).unwrap();
        let expected = -0.0293 * 1.8_f64.sqrt();
        assert!((observer.dip().degrees() - expected).abs() < 1e-12);
        assert!((observer.dip().radians() - expected.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_dip_monotonic() {
        let mut observer = Observer::new(0.0, 0.0);
        assert_eq!(observer.calc_dip(), 0.0);

        let mut previous = 0.0;
        for height in [0.5, 1.0, 2.0, 5.0, 10.0, 30.0] {
            observer.set_height_of_eye(height).unwrap();
            let dip = observer.calc_dip();
            assert!(dip < previous, "dip not decreasing at {} m", height);
            previous = dip;
        }
    }

    #[test]
    fn test_set_height_of_eye_keeps_dip() {
        let mut observer = Observer::new(0.0, 0.0).with_height_of_eye(4.0).unwrap();
        let before = observer.dip().degrees();
        observer.set_height_of_eye(16.0).unwrap();
        assert_eq!(observer.dip().degrees(), before);
        observer.calc_dip();
        assert!((observer.dip().degrees() + 0.0293 * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_height_of_eye_rejected() {
        assert!(matches!(
            Observer::new(0.0, 0.0).with_height_of_eye(-0.5),
            Err(NavError::InvalidHeightOfEye { .. })
        ));

        let mut observer = Observer::new(0.0, 0.0).with_height_of_eye(2.0).unwrap();
        let dip = observer.dip().degrees();
        assert!(observer.set_height_of_eye(-1.0).is_err());
        assert!(observer.set_height_of_eye(f64::NAN).is_err());
        assert_eq!(observer.height_of_eye(), 2.0);
        observer.calc_dip();
        assert_eq!(observer.dip().degrees(), dip);
    }

    #[test]
    fn test_index_error_in_arcmin() {
        let observer = Observer::new(0.0, 0.0).with_index_error(3.6);
        assert!((observer.index_error.degrees() - 0.06).abs() < 1e-12);
    }
}
