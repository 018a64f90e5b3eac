//! Celestial navigation sight reduction
//!
//! Reduces sextant sights of the Sun, Moon, navigational planets and stars
//! to lines of position, carries them to a common fix time with the
//! vessel's course and speed, and crosses them into a running fix.

pub mod api;
pub mod catalog;
pub mod core;
pub mod ephemeris;
pub mod fix;
pub mod reduction;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Angle, Body, EphemerisTarget, Limb, NavError, NavResult, Planet};
pub use api::{ReductionReport, SightSession};
pub use catalog::NavStar;
pub use ephemeris::{ApparentPosition, Ephemeris, EphemerisQuery, StarRoutedEphemeris, TabulatedEphemeris};
pub use fix::{Fix, FixMethod, FixQuality, FixSolution, SolverSettings};
pub use reduction::{InterceptDirection, LineOfPosition, Observer, Sight, VesselRun};
pub use utils::{ConfigurationManager, NavConfig, OutputFormat};
