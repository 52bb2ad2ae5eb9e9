//! # Surface Mesh
//!
//! Samples the Möbius strip's parametric equations on the `n x n` parameter
//! grid.
//!
//! ```text
//! X(u, v) = (R + v cos(u/2)) cos(u)
//! Y(u, v) = (R + v cos(u/2)) sin(u)
//! Z(u, v) = v sin(u/2)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mobius_mesh::MeshGenerator;
//!
//! let mesh = MeshGenerator::generate(1.0, 0.4, 50).unwrap();
//! assert_eq!(mesh.x().shape(), (50, 50));
//! ```

use glam::DVec3;
use rayon::prelude::*;
use tracing::debug;

use crate::error::MobiusResult;
use crate::grid::{ParameterGrid, ScalarGrid};
use crate::params::ShapeParameters;

/// Evaluates the strip surface at parameter `(u, v)`.
///
/// # Examples
/// ```
/// use mobius_mesh::mesh::mobius_point;
///
/// // u = 0 lies on the +X axis at distance R + v
/// let p = mobius_point(2.0, 0.0, 0.5);
/// assert_eq!(p.x, 2.5);
/// assert_eq!(p.z, 0.0);
/// ```
#[inline]
pub fn mobius_point(center_radius: f64, u: f64, v: f64) -> DVec3 {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let radial = center_radius + v * cos_half;
    DVec3::new(radial * cos_u, radial * sin_u, v * sin_half)
}

// =============================================================================
// SURFACE MESH
// =============================================================================

/// Three `n x n` coordinate grids sampled from one parameter set.
///
/// Built once by [`MeshGenerator`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    params: ShapeParameters,
    grid: ParameterGrid,
    x: ScalarGrid,
    y: ScalarGrid,
    z: ScalarGrid,
}

impl SurfaceMesh {
    /// Parameters the mesh was generated from.
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Sampled `u`/`v` sequences and integration steps.
    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// X coordinates, indexed `[v][u]`.
    pub fn x(&self) -> &ScalarGrid {
        &self.x
    }

    /// Y coordinates, indexed `[v][u]`.
    pub fn y(&self) -> &ScalarGrid {
        &self.y
    }

    /// Z coordinates, indexed `[v][u]`.
    pub fn z(&self) -> &ScalarGrid {
        &self.z
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.x.rows()
    }

    /// Number of sampled points (`n²`).
    pub fn point_count(&self) -> usize {
        self.x.as_slice().len()
    }

    /// Point at row `i` (`v` index) and column `j` (`u` index).
    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        DVec3::new(self.x.get(i, j), self.y.get(i, j), self.z.get(i, j))
    }

    /// Axis-aligned bounds of all sampled points as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let init = (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY));
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .fold(init, |(min, max), ((&x, &y), &z)| {
                let p = DVec3::new(x, y, z);
                (min.min(p), max.max(p))
            })
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Builds [`SurfaceMesh`] values from shape parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshGenerator;

impl MeshGenerator {
    /// Validates `(R, w, n)` and samples the surface.
    ///
    /// Fails with `InvalidParameter` before any sampling when `R <= 0`,
    /// `w <= 0` or `n < 2`.
    pub fn generate(center_radius: f64, strip_width: f64, resolution: usize) -> MobiusResult<SurfaceMesh> {
        let params = ShapeParameters::new(center_radius, strip_width, resolution)?;
        Ok(Self::from_params(&params))
    }

    /// Samples the surface for already validated parameters.
    pub fn from_params(params: &ShapeParameters) -> SurfaceMesh {
        let grid = ParameterGrid::new(params);
        let n = grid.resolution();
        let r = params.center_radius();

        let rows: Vec<Vec<DVec3>> = grid
            .v()
            .par_iter()
            .map(|&v| grid.u().iter().map(|&u| mobius_point(r, u, v)).collect())
            .collect();

        let mut x = Vec::with_capacity(n * n);
        let mut y = Vec::with_capacity(n * n);
        let mut z = Vec::with_capacity(n * n);
        for p in rows.iter().flatten() {
            x.push(p.x);
            y.push(p.y);
            z.push(p.z);
        }

        debug!(
            center_radius = r,
            strip_width = params.strip_width(),
            resolution = n,
            points = n * n,
            "generated surface mesh"
        );

        SurfaceMesh {
            params: *params,
            grid,
            x: ScalarGrid::from_parts(n, n, x),
            y: ScalarGrid::from_parts(n, n, y),
            z: ScalarGrid::from_parts(n, n, z),
        }
    }
}
