//! Lat/lon aware angle type
//!
//! An [`Angle`] keeps three representations of the same value in step:
//! decimal degrees (canonical), radians, and a whole-degrees/minutes/sign
//! tuple used by almanac-style displays. Every setter reduces the value by
//! integer multiples of a full turn before the other two forms are derived.
//! The reduction truncates toward zero, so the sign survives:
//! `Angle::new(-742.5)` holds `-22.5°`, not `337.5°`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use super::constants::MOON_SD_HP_RATIO;

const FULL_TURN_DEG: f64 = 360.0;
const FULL_TURN_RAD: f64 = 2.0 * PI;

/// Sign of an angle, stored apart from the unsigned degree/minute pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign of `value`; zero (including `-0.0`) counts as positive
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// `+1.0` or `-1.0`
    pub fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    fn symbol(self, kind: SignKind) -> char {
        match (kind, self) {
            (SignKind::Latitude, Sign::Positive) => 'N',
            (SignKind::Latitude, Sign::Negative) => 'S',
            (SignKind::Longitude, Sign::Positive) => 'E',
            (SignKind::Longitude, Sign::Negative) => 'W',
            (SignKind::Generic, Sign::Positive) => '+',
            (SignKind::Generic, Sign::Negative) => '-',
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SignKind {
    Latitude,
    Longitude,
    Generic,
}

/// Whole degrees, minutes with decimal fraction, and sign
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegMin {
    pub degrees: u32,
    pub minutes: f64,
    pub sign: Sign,
}

impl DegMin {
    fn split(decimal_degrees: f64) -> Self {
        let abs = decimal_degrees.abs();
        let whole = abs.trunc();
        Self {
            degrees: whole as u32,
            minutes: (abs - whole) * 60.0,
            sign: Sign::of(decimal_degrees),
        }
    }

    /// Signed decimal degrees represented by this tuple
    pub fn to_degrees(&self) -> f64 {
        (self.degrees as f64 + self.minutes / 60.0) * self.sign.factor()
    }
}

/// Angle with synchronized decimal degree, radian and degree/minute forms
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle {
    degrees: f64,
    radians: f64,
    deg_min: DegMin,
}

impl Angle {
    /// Angle from decimal degrees
    pub fn new(degrees: f64) -> Self {
        let mut angle = Self::zero();
        angle.set_degrees(degrees);
        angle
    }

    /// Angle from radians
    pub fn from_radians(radians: f64) -> Self {
        let mut angle = Self::zero();
        angle.set_radians(radians);
        angle
    }

    /// Angle from whole degrees, minutes and sign
    pub fn from_deg_min(degrees: u32, minutes: f64, sign: Sign) -> Self {
        let mut angle = Self::zero();
        angle.set_deg_min(degrees, minutes, sign);
        angle
    }

    /// Angle from arc-minutes
    pub fn from_arcmin(arcmin: f64) -> Self {
        Self::new(arcmin / 60.0)
    }

    fn zero() -> Self {
        Self {
            degrees: 0.0,
            radians: 0.0,
            deg_min: DegMin {
                degrees: 0,
                minutes: 0.0,
                sign: Sign::Positive,
            },
        }
    }

    /// Decimal degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn deg_min(&self) -> DegMin {
        self.deg_min
    }

    /// Value in arc-minutes
    pub fn arcmin(&self) -> f64 {
        self.degrees * 60.0
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        let degrees = reduce_turns(degrees, FULL_TURN_DEG);
        self.degrees = degrees;
        self.radians = degrees.to_radians();
        self.deg_min = DegMin::split(degrees);
    }

    pub fn set_radians(&mut self, radians: f64) {
        let radians = reduce_turns(radians, FULL_TURN_RAD);
        self.radians = radians;
        self.degrees = radians.to_degrees();
        self.deg_min = DegMin::split(self.degrees);
    }

    /// Set from a degree/minute/sign tuple; minutes past 60 carry into degrees
    pub fn set_deg_min(&mut self, degrees: u32, minutes: f64, sign: Sign) {
        let decimal = DegMin {
            degrees,
            minutes,
            sign,
        }
        .to_degrees();
        self.set_degrees(decimal);
    }

    /// Latitude string, e.g. `N 20 34.5`
    pub fn lat_str(&self) -> String {
        format!(
            "{} {:02} {:04.1}",
            self.deg_min.sign.symbol(SignKind::Latitude),
            self.deg_min.degrees,
            self.deg_min.minutes
        )
    }

    /// Latitude rounded to whole degrees, e.g. `N30`
    pub fn lat_str_deg(&self) -> String {
        format!(
            "{}{:02}",
            self.deg_min.sign.symbol(SignKind::Latitude),
            self.degrees.abs().round() as i64
        )
    }

    /// Longitude string, e.g. `E 178 34.5`
    pub fn lon_str(&self) -> String {
        format!(
            "{} {:03} {:04.1}",
            self.deg_min.sign.symbol(SignKind::Longitude),
            self.deg_min.degrees,
            self.deg_min.minutes
        )
    }

    /// Longitude rounded to whole degrees, e.g. `W023`
    pub fn lon_str_deg(&self) -> String {
        format!(
            "{}{:03}",
            self.deg_min.sign.symbol(SignKind::Longitude),
            self.degrees.abs().round() as i64
        )
    }

    /// Unsigned string, e.g. `178 34.5`
    pub fn abs_str(&self) -> String {
        format!("{} {:04.1}", self.deg_min.degrees, self.deg_min.minutes)
    }

    /// Explicitly signed string, e.g. `-178 34.5`
    pub fn sign_str(&self) -> String {
        format!(
            "{}{} {:04.1}",
            self.deg_min.sign.symbol(SignKind::Generic),
            self.deg_min.degrees,
            self.deg_min.minutes
        )
    }

    /// Rounded whole degrees, right aligned in three columns
    pub fn int_str(&self) -> String {
        format!("{:3}", self.degrees.round() as i64)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Angle::new(degrees)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.degrees
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.degrees.partial_cmp(&other.degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign_str())
    }
}

/// Remove whole turns, truncating toward zero
fn reduce_turns(value: f64, turn: f64) -> f64 {
    if value.abs() >= turn {
        value - (value / turn).trunc() * turn
    } else {
        value
    }
}

/// Degrees reduced into `[0, 360)`; unlike [`Angle`] this drops the sign
pub fn norm_degrees(degrees: f64) -> f64 {
    FULL_TURN_DEG * (degrees / FULL_TURN_DEG - (degrees / FULL_TURN_DEG).floor())
}

/// Sidereal hour angle for a right ascension given in radians
pub fn sha_from_ra(ra_rad: f64) -> Angle {
    Angle::new(FULL_TURN_DEG - ra_rad.to_degrees())
}

/// Horizontal parallax of the Moon (degrees) from its semidiameter (degrees)
pub fn horizontal_parallax_moon(semidiameter_deg: f64) -> f64 {
    semidiameter_deg / MOON_SD_HP_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_reduction_preserves_sign() {
        let a = Angle::new(-742.5);
        let b = Angle::new(192.4);

        assert!(close(a.degrees(), -22.5));
        assert!(close(b.degrees(), 192.4));
        assert!(close(a.radians(), -0.39269908169872414));
        assert!(close(b.radians(), 3.3580134808370903));

        let dm = a.deg_min();
        assert_eq!(dm.degrees, 22);
        assert!(close(dm.minutes, 30.0));
        assert_eq!(dm.sign, Sign::Negative);

        let dm = b.deg_min();
        assert_eq!(dm.degrees, 192);
        assert!(close(dm.minutes, 24.0));
        assert_eq!(dm.sign, Sign::Positive);
    }

    #[test]
    fn test_full_turns_removed() {
        assert!(close(Angle::new(720.0).degrees(), 0.0));
        assert!(close(Angle::new(365.0).degrees(), 5.0));
        assert!(close(Angle::new(-365.0).degrees(), -5.0));
        assert!(close(Angle::from_radians(5.0 * PI).radians(), PI));
        for x in [-1000.25, -359.9, 0.0, 12.5, 359.999, 1081.0] {
            let a = Angle::new(x);
            assert!(a.degrees().abs() < 360.0, "{} not reduced", x);
        }
    }

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(Angle::new(0.0).deg_min().sign, Sign::Positive);
        assert_eq!(Angle::new(-0.0).deg_min().sign, Sign::Positive);
        assert_eq!(Angle::new(-360.0).deg_min().sign, Sign::Positive);
        assert_eq!(Angle::from_radians(0.0).deg_min().sign, Sign::Positive);
    }

    #[test]
    fn test_format_helpers() {
        let a = Angle::new(-742.5);
        let b = Angle::new(192.4);

        assert_eq!(a.lat_str(), "S 22 30.0");
        assert_eq!(b.lat_str(), "N 192 24.0");
        assert_eq!(a.lat_str_deg(), "S23");
        assert_eq!(b.lat_str_deg(), "N192");
        assert_eq!(a.lon_str(), "W 022 30.0");
        assert_eq!(b.lon_str(), "E 192 24.0");
        assert_eq!(a.abs_str(), "22 30.0");
        assert_eq!(b.abs_str(), "192 24.0");
        assert_eq!(a.sign_str(), "-22 30.0");
        assert_eq!(b.sign_str(), "+192 24.0");
        assert_eq!(a.int_str(), "-23");
        assert_eq!(b.int_str(), "192");

        assert_eq!(Angle::new(180.0).lon_str(), "E 180 00.0");
        assert_eq!(Angle::new(20.575).lat_str(), "N 20 34.5");
        assert_eq!(Angle::new(5.2).int_str(), "  5");
    }

    #[test]
    fn test_setters_resync() {
        let mut a = Angle::new(-742.5);
        a.set_degrees(a.degrees() + 45.0);
        assert!(close(a.degrees(), 22.5));
        assert!(close(a.radians(), 0.39269908169872414));
        assert_eq!(a.deg_min().degrees, 22);
        assert!(close(a.deg_min().minutes, 30.0));
        assert_eq!(a.deg_min().sign, Sign::Positive);

        let mut b = Angle::new(192.4);
        b.set_radians(b.radians() - 0.3);
        assert!(close(b.radians(), 3.0580134808370903));
        assert!(close(b.degrees(), 175.21126614607533));
        assert_eq!(b.deg_min().degrees, 175);
        assert!((b.deg_min().minutes - 12.675968764519894).abs() < 1e-7);
    }

    #[test]
    fn test_deg_min_round_trip() {
        let original = Angle::from_deg_min(105, 21.0, Sign::Negative);
        assert!(close(original.degrees(), -105.35));

        let again = Angle::new(original.degrees());
        let dm = again.deg_min();
        assert_eq!(dm.degrees, 105);
        assert!((dm.minutes - 21.0).abs() < 1e-9);
        assert_eq!(dm.sign, Sign::Negative);

        let from_rad = Angle::from_radians(original.radians());
        assert!((from_rad.deg_min().minutes - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_deg_min_overflow_reduced() {
        let a = Angle::from_deg_min(359, 120.0, Sign::Positive);
        assert!(close(a.degrees(), 1.0));
        let b = Angle::from_deg_min(400, 0.0, Sign::Positive);
        assert!(close(b.degrees(), 40.0));
    }

    #[test]
    fn test_serde_as_degrees() {
        let a = Angle::new(-8.25);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "-8.25");
        let back: Angle = serde_json::from_str("372.5").unwrap();
        assert!(close(back.degrees(), 12.5));
    }

    #[test]
    fn test_almanac_helpers() {
        assert!(close(norm_degrees(-370.0), 350.0));
        assert!(close(norm_degrees(725.0), 5.0));
        assert!(close(sha_from_ra(PI / 2.0).degrees(), 270.0));
        assert!(close(horizontal_parallax_moon(0.2724), 1.0));
    }
}
