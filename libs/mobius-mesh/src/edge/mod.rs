//! # Edge Length
//!
//! Arc length of the strip boundary, traced at `v = +w/2`.
//!
//! The boundary curve is recomputed from the parametric equations rather
//! than read from the mesh's last row. Its coordinates are differentiated
//! against the sampled `u` values and the summed speed is scaled by
//! `du = 2π/n`, the same step the area integral uses.
//!
//! Only this one pass over `u ∈ [0, 2π]` is measured. The rim reached at
//! `v = -w/2` is not added.

use std::f64::consts::TAU;

use config::constants::MIN_RESOLUTION;
use tracing::debug;

use crate::diff::gradient_along;
use crate::mesh::mobius_point;

/// Estimates the length of the strip boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeLengthEstimator;

impl EdgeLengthEstimator {
    /// Sums the boundary speed `|r'(u)|` over `u_sequence` and scales by `2π/n`.
    ///
    /// A `resolution` or `u_sequence` below two samples has no spacing to
    /// differentiate over and yields `0.0`.
    ///
    /// # Examples
    /// ```
    /// use mobius_mesh::EdgeLengthEstimator;
    /// use mobius_mesh::grid::u_samples;
    ///
    /// // A very thin strip's edge is almost the center circle
    /// let u = u_samples(1000);
    /// let length = EdgeLengthEstimator::estimate(2.0, 0.0001, &u, 1000);
    /// assert!((length - 4.0 * std::f64::consts::PI).abs() < 0.01);
    /// ```
    pub fn estimate(center_radius: f64, strip_width: f64, u_sequence: &[f64], resolution: usize) -> f64 {
        if resolution < MIN_RESOLUTION || u_sequence.len() < MIN_RESOLUTION {
            return 0.0;
        }
        let half_width = strip_width / 2.0;
        let curve: Vec<_> = u_sequence
            .iter()
            .map(|&u| mobius_point(center_radius, u, half_width))
            .collect();

        let xs: Vec<f64> = curve.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = curve.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = curve.iter().map(|p| p.z).collect();

        let dx = gradient_along(&xs, u_sequence);
        let dy = gradient_along(&ys, u_sequence);
        let dz = gradient_along(&zs, u_sequence);

        let speed_sum: f64 = dx
            .iter()
            .zip(&dy)
            .zip(&dz)
            .map(|((x, y), z)| (x * x + y * y + z * z).sqrt())
            .sum();

        let du = TAU / resolution as f64;
        let length = speed_sum * du;
        debug!(resolution, du, length, "estimated edge length");
        length
    }
}

#[cfg(test)]
mod tests;
