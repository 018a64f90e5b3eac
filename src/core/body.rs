//! Observed bodies and ephemeris targets

use std::fmt;

use super::error::{NavError, NavResult};
use crate::catalog::{nav_star, NavStar};

/// Limb of the Sun or Moon brought down to the horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limb {
    Lower,
    Upper,
}

impl Limb {
    /// `+1.0` for the upper limb, `-1.0` for the lower limb
    pub fn radius_factor(self) -> f64 {
        match self {
            Limb::Upper => 1.0,
            Limb::Lower => -1.0,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Limb::Lower => "LL",
            Limb::Upper => "UL",
        }
    }
}

/// Navigational planets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub fn name(self) -> &'static str {
        match self {
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }
}

/// Body sighted for one line of position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    Sun(Limb),
    Moon(Limb),
    Planet(Planet),
    Star(&'static NavStar),
}

impl Body {
    /// Parse one of the designators `Sun LL`, `Sun UL`, `Moon LL`, `Moon UL`,
    /// `Venus`, `Mars`, `Jupiter`, `Saturn` or `star`. A `star` designator
    /// needs a catalog star name.
    pub fn parse(designator: &str, star_name: Option<&str>) -> NavResult<Self> {
        let body = match designator.trim() {
            "Sun LL" => Body::Sun(Limb::Lower),
            "Sun UL" => Body::Sun(Limb::Upper),
            "Moon LL" => Body::Moon(Limb::Lower),
            "Moon UL" => Body::Moon(Limb::Upper),
            "Venus" => Body::Planet(Planet::Venus),
            "Mars" => Body::Planet(Planet::Mars),
            "Jupiter" => Body::Planet(Planet::Jupiter),
            "Saturn" => Body::Planet(Planet::Saturn),
            "star" => Body::star(star_name.unwrap_or_default())?,
            other => {
                return Err(NavError::InvalidBody {
                    designator: other.to_string(),
                })
            }
        };
        Ok(body)
    }

    /// Star body resolved against the navigational catalog
    pub fn star(name: &str) -> NavResult<Self> {
        nav_star(name).map(Body::Star)
    }

    /// Designator as accepted by [`Body::parse`]
    pub fn designator(&self) -> String {
        match self {
            Body::Sun(limb) => format!("Sun {}", limb.code()),
            Body::Moon(limb) => format!("Moon {}", limb.code()),
            Body::Planet(planet) => planet.name().to_string(),
            Body::Star(_) => "star".to_string(),
        }
    }

    pub fn star_name(&self) -> Option<&'static str> {
        match self {
            Body::Star(star) => Some(star.name),
            _ => None,
        }
    }

    pub fn limb(&self) -> Option<Limb> {
        match self {
            Body::Sun(limb) | Body::Moon(limb) => Some(*limb),
            _ => None,
        }
    }

    /// What the ephemeris must be asked for
    pub fn target(&self) -> EphemerisTarget {
        match self {
            Body::Sun(_) => EphemerisTarget::Sun,
            Body::Moon(_) => EphemerisTarget::Moon,
            Body::Planet(planet) => EphemerisTarget::Planet(*planet),
            Body::Star(star) => EphemerisTarget::Star(star),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Star(star) => write!(f, "{}", star.name),
            other => write!(f, "{}", other.designator()),
        }
    }
}

/// Body as seen by the ephemeris, without limb qualifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EphemerisTarget {
    Sun,
    Moon,
    Planet(Planet),
    Star(&'static NavStar),
}

impl EphemerisTarget {
    /// Resolve `Sun`, `Moon`, a planet name or a catalog star name
    pub fn from_name(name: &str) -> NavResult<Self> {
        let target = match name.trim() {
            "Sun" => EphemerisTarget::Sun,
            "Moon" => EphemerisTarget::Moon,
            "Venus" => EphemerisTarget::Planet(Planet::Venus),
            "Mars" => EphemerisTarget::Planet(Planet::Mars),
            "Jupiter" => EphemerisTarget::Planet(Planet::Jupiter),
            "Saturn" => EphemerisTarget::Planet(Planet::Saturn),
            star => EphemerisTarget::Star(nav_star(star)?),
        };
        Ok(target)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EphemerisTarget::Sun => "Sun",
            EphemerisTarget::Moon => "Moon",
            EphemerisTarget::Planet(planet) => planet.name(),
            EphemerisTarget::Star(star) => star.name,
        }
    }

    /// Sun and Moon report an angular radius
    pub fn has_disk(&self) -> bool {
        matches!(self, EphemerisTarget::Sun | EphemerisTarget::Moon)
    }

    pub fn is_star(&self) -> bool {
        matches!(self, EphemerisTarget::Star(_))
    }
}

impl fmt::Display for EphemerisTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_designators() {
        let designators = [
            "Sun LL", "Sun UL", "Moon LL", "Moon UL", "Venus", "Mars", "Jupiter", "Saturn",
        ];
        for designator in designators {
            let body = Body::parse(designator, None).unwrap();
            assert_eq!(body.designator(), designator);
        }

        let star = Body::parse("star", Some("Canopus")).unwrap();
        assert_eq!(star.designator(), "star");
        assert_eq!(star.star_name(), Some("Canopus"));
        assert_eq!(star.to_string(), "Canopus");
    }

    #[test]
    fn test_invalid_designator() {
        let err = Body::parse("Pluto", None).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidBody {
                designator: "Pluto".to_string()
            }
        );
        assert!(Body::parse("Sun", None).is_err());
        assert!(Body::parse("sun LL", None).is_err());
    }

    #[test]
    fn test_star_needs_catalog_name() {
        assert!(matches!(
            Body::parse("star", Some("Vulcan")),
            Err(NavError::UnknownStar { .. })
        ));
        assert!(matches!(
            Body::parse("star", None),
            Err(NavError::UnknownStar { .. })
        ));
    }

    #[test]
    fn test_limbs_and_targets() {
        let sun_ul = Body::parse("Sun UL", None).unwrap();
        assert_eq!(sun_ul.limb(), Some(Limb::Upper));
        assert_eq!(sun_ul.target(), EphemerisTarget::Sun);
        assert!(sun_ul.target().has_disk());

        let moon_ll = Body::parse("Moon LL", None).unwrap();
        assert_eq!(moon_ll.limb().map(Limb::radius_factor), Some(-1.0));

        let venus = Body::parse("Venus", None).unwrap();
        assert_eq!(venus.limb(), None);
        assert_eq!(venus.target().name(), "Venus");
        assert!(!venus.target().has_disk());
    }

    #[test]
    fn test_target_from_name() {
        assert_eq!(EphemerisTarget::from_name("Moon").unwrap(), EphemerisTarget::Moon);
        let target = EphemerisTarget::from_name("Rigil Kentaurus").unwrap();
        assert!(target.is_star());
        assert_eq!(target.name(), "Rigil Kentaurus");
        assert!(EphemerisTarget::from_name("Sun LL").is_err());
    }
}
