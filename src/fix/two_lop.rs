//! Two-LOP running fix on the plane tangent at the assumed position

use log::{info, warn};

use super::{crossing_angle, Fix, FixMethod, FixSolution};
use crate::core::{NavError, NavResult, ARCMIN_PER_DEGREE};

/// Offset (north, east) in nm of the crossing of two LOPs from their
/// common assumed position
///
/// Each LOP is the line `cos(z)·north + sin(z)·east = i`, with intercepts
/// in nm toward the body and azimuths in radians. The determinant is
/// `sin(z1 - z2)`, so callers reject near-parallel pairs first.
pub fn intersect(i1: f64, z1: f64, i2: f64, z2: f64) -> (f64, f64) {
    let det = (z1 - z2).sin();
    let north = (i2 * z1.sin() - i1 * z2.sin()) / det;
    let east = (i1 * z2.cos() - i2 * z1.cos()) / det;
    (north, east)
}

impl Fix {
    /// Cross exactly two LOPs, one selected sight each
    ///
    /// Both LOPs must be worked from the same assumed position. On success
    /// the fix latitude and longitude are overwritten; on failure they are
    /// left as they were.
    pub fn solve_two_lop_fix(&mut self) -> NavResult<FixSolution> {
        if self.lops.len() != 2 {
            return Err(NavError::two_lops(format!("found {} LOPs", self.lops.len())));
        }

        let selected = self.selected_sights();
        let mut pairs = Vec::with_capacity(2);
        for (index, entry) in selected.into_iter().enumerate() {
            match entry {
                Some(pair) => pairs.push(pair),
                None => {
                    return Err(NavError::two_lops(format!(
                        "LOP {} ({}) has no sight selected",
                        index + 1,
                        self.lops[index].body()
                    )))
                }
            }
        }

        let (lop_a, sight_a) = pairs[0];
        let (lop_b, sight_b) = pairs[1];

        let tolerance = self.solver.ap_tolerance_arcmin;
        let delta_lat = (lop_a.observer().lat_deg() - lop_b.observer().lat_deg()).abs() * ARCMIN_PER_DEGREE;
        let delta_lon = (lop_a.observer().lon_deg() - lop_b.observer().lon_deg()).abs() * ARCMIN_PER_DEGREE;
        if delta_lat > tolerance || delta_lon > tolerance {
            warn!(
                "two-LOP fix rejected: assumed positions {:.2}'/{:.2}' apart",
                delta_lat, delta_lon
            );
            return Err(NavError::AssumedPositionMismatch {
                delta_lat_arcmin: delta_lat,
                delta_lon_arcmin: delta_lon,
                tolerance_arcmin: tolerance,
            });
        }

        // LOP 1 has the strictly greater azimuth
        let ((lop_1, sight_1), (_, sight_2)) = if sight_a.azimuth.degrees() > sight_b.azimuth.degrees() {
            ((lop_a, sight_a), (lop_b, sight_b))
        } else {
            ((lop_b, sight_b), (lop_a, sight_a))
        };

        let crossing = crossing_angle(sight_1.azimuth, sight_2.azimuth);
        if crossing < self.solver.min_crossing_angle_deg {
            warn!(
                "two-LOP fix rejected: {} and {} cross at {:.3}°",
                lop_a.body(),
                lop_b.body(),
                crossing
            );
            return Err(NavError::IllConditionedFix {
                crossing_angle_deg: crossing,
                minimum_deg: self.solver.min_crossing_angle_deg,
            });
        }

        let offset = intersect(
            sight_1.run_intercept_nm,
            sight_1.azimuth.radians(),
            sight_2.run_intercept_nm,
            sight_2.azimuth.radians(),
        );
        let assumed = (lop_1.observer().latitude, lop_1.observer().longitude);
        let solution = self.solution(FixMethod::TwoLop, assumed, offset, crossing, 0.0);

        info!(
            "fix {} {} at {} ({:.1}nm {:.0}° from AP, {})",
            solution.latitude.lat_str(),
            solution.longitude.lon_str(),
            solution.ut,
            solution.distance_nm,
            solution.bearing.degrees(),
            solution.quality
        );

        self.latitude = solution.latitude;
        self.longitude = solution.longitude;
        Ok(solution)
    }
}
