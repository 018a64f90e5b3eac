//! Least-squares fix from two or more LOPs
//!
//! Each LOP is the line `cos(Z)·north + sin(Z)·east = I` in a plane centred
//! on the first LOP's assumed position. LOPs worked from other assumed
//! positions are shifted into that plane before the normal equations are
//! solved.

use log::{info, warn};
use nalgebra::{DMatrix, DVector};

use super::{crossing_angle, Fix, FixMethod, FixSolution};
use crate::core::{NavError, NavResult};

impl Fix {
    /// Best-fit position through every LOP's selected sight
    ///
    /// Updates the fix latitude and longitude on success.
    pub fn solve_least_squares_fix(&mut self) -> NavResult<FixSolution> {
        if self.lops.len() < 2 {
            return Err(NavError::min_lops(2, format!("found {} LOPs", self.lops.len())));
        }

        let mut pairs = Vec::with_capacity(self.lops.len());
        for (index, entry) in self.selected_sights().into_iter().enumerate() {
            let pair = entry.ok_or_else(|| {
                NavError::min_lops(
                    2,
                    format!("LOP {} ({}) has no sight selected", index + 1, self.lops[index].body()),
                )
            })?;
            pairs.push(pair);
        }

        let reference = pairs[0].0.observer();
        let (ref_lat, ref_lon) = (reference.latitude, reference.longitude);
        let cos_lat = ref_lat.radians().cos();

        let n = pairs.len();
        let mut a_matrix = DMatrix::<f64>::zeros(n, 2);
        let mut d_vector = DVector::<f64>::zeros(n);
        for (row, (lop, sight)) in pairs.iter().enumerate() {
            let z = sight.azimuth.radians();
            let north = (lop.observer().lat_deg() - ref_lat.degrees()) * 60.0;
            let east = (lop.observer().lon_deg() - ref_lon.degrees()) * 60.0 * cos_lat;

            a_matrix[(row, 0)] = z.cos();
            a_matrix[(row, 1)] = z.sin();
            d_vector[row] = sight.run_intercept_nm + z.cos() * north + z.sin() * east;
        }

        let mut crossing: f64 = 0.0;
        for (i, (_, first)) in pairs.iter().enumerate() {
            for (_, second) in pairs.iter().skip(i + 1) {
                crossing = crossing.max(crossing_angle(first.azimuth, second.azimuth));
            }
        }

        let ill_conditioned = NavError::IllConditionedFix {
            crossing_angle_deg: crossing,
            minimum_deg: self.solver.min_crossing_angle_deg,
        };
        if crossing < self.solver.min_crossing_angle_deg {
            warn!("least-squares fix rejected: best LOP crossing {:.3}°", crossing);
            return Err(ill_conditioned);
        }

        // Normal equations: (A^T A) x = A^T d
        let a_transpose = a_matrix.transpose();
        let ata = &a_transpose * &a_matrix;
        let atd = &a_transpose * &d_vector;
        let solution = match ata.try_inverse() {
            Some(inverse) => inverse * atd,
            None => {
                warn!("least-squares fix rejected: singular normal matrix");
                return Err(ill_conditioned);
            }
        };

        let residuals = &a_matrix * &solution - &d_vector;
        let rms = (residuals.norm_squared() / n as f64).sqrt();

        let fix = self.solution(
            FixMethod::LeastSquares,
            (ref_lat, ref_lon),
            (solution[0], solution[1]),
            crossing,
            rms,
        );
        info!(
            "least-squares fix {} {} from {} LOPs, rms {:.2}nm ({})",
            fix.latitude.lat_str(),
            fix.longitude.lon_str(),
            n,
            rms,
            fix.quality
        );

        self.latitude = fix.latitude;
        self.longitude = fix.longitude;
        Ok(fix)
    }
}
