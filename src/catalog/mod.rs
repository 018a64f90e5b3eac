//! Navigational star catalog
//!
//! Resolves star names and almanac numbers to catalog entries. Lookups are
//! exact on the catalog spelling (`"Rigil Kentaurus"`, `"Al Na'ir"`).

pub mod stars;

use crate::core::{sha_from_ra, Angle, NavError, NavResult};

pub use stars::NAV_STARS;

/// One navigational star
#[derive(Debug, Clone, PartialEq)]
pub struct NavStar {
    /// Nautical Almanac star number (1-57, Polaris is 58)
    pub number: u8,
    pub name: &'static str,
    pub spectral_class: &'static str,
    /// J2000 right ascension (hours)
    pub ra_hours: f64,
    /// J2000 declination (degrees)
    pub dec_deg: f64,
    pub pm_ra_mas_yr: f64,
    pub pm_dec_mas_yr: f64,
    /// Visual magnitude
    pub magnitude: f64,
}

impl NavStar {
    /// J2000 right ascension as an angle
    pub fn right_ascension(&self) -> Angle {
        Angle::new(self.ra_hours * 15.0)
    }

    /// J2000 declination
    pub fn declination(&self) -> Angle {
        Angle::new(self.dec_deg)
    }

    /// J2000 sidereal hour angle
    pub fn sha(&self) -> Angle {
        sha_from_ra(self.right_ascension().radians())
    }
}

/// Look up a star by name
pub fn nav_star(name: &str) -> NavResult<&'static NavStar> {
    NAV_STARS
        .iter()
        .find(|star| star.name == name)
        .ok_or_else(|| NavError::UnknownStar {
            name: name.to_string(),
        })
}

/// Almanac number for a star name, if the star is in the catalog
pub fn star_number(name: &str) -> Option<u8> {
    nav_star(name).ok().map(|star| star.number)
}

/// Star name for an almanac number (1-58)
pub fn star_name(number: u8) -> Option<&'static str> {
    NAV_STARS
        .iter()
        .find(|star| star.number == number)
        .map(|star| star.name)
}

/// All catalog names in alphabetical order
pub fn star_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = NAV_STARS.iter().map(|star| star.name).collect();
    names.sort_unstable();
    names
}
