//! Navigational constants

/// Dip of the sea horizon per square root of height of eye (degrees per √m)
pub const DIP_COEFFICIENT: f64 = 0.0293;

/// Arc-minutes in one degree; one arc-minute of great circle is one nautical mile
pub const ARCMIN_PER_DEGREE: f64 = 60.0;

/// Ratio of the Moon's semidiameter to its horizontal parallax
pub const MOON_SD_HP_RATIO: f64 = 0.2724;

/// Default air temperature for refraction (°C)
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// Default air pressure for refraction (mbar)
pub const DEFAULT_PRESSURE_MBAR: f64 = 1010.0;

/// Maximum distance between two assumed positions sharing a plot (arc-minutes)
pub const DEFAULT_AP_TOLERANCE_ARCMIN: f64 = 0.1;

/// Smallest azimuth difference accepted between two LOPs (degrees)
pub const DEFAULT_MIN_CROSSING_ANGLE_DEG: f64 = 1.0;
