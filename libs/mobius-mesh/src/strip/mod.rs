//! The Möbius strip model: parameters plus the mesh sampled from them.

use std::fmt;

use config::constants::{ShapeConfig, OUTPUT_PRECISION};
use serde::Serialize;

use crate::area::SurfaceAreaEstimator;
use crate::edge::EdgeLengthEstimator;
use crate::error::MobiusResult;
use crate::mesh::{MeshGenerator, SurfaceMesh};
use crate::params::ShapeParameters;

/// A Möbius strip whose mesh is sampled once, at construction.
///
/// Metrics are recomputed from the stored mesh on every call; nothing is
/// cached, and nothing about the strip can change after construction.
///
/// # Examples
/// ```
/// use mobius_mesh::MobiusStrip;
///
/// let strip = MobiusStrip::new(1.0, 0.4, 300).unwrap();
/// assert_eq!(format!("{:.4}", strip.surface_area()), "2.5342");
/// assert_eq!(format!("{:.4}", strip.edge_length()), "6.3147");
/// ```
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: ShapeParameters,
    mesh: SurfaceMesh,
}

impl MobiusStrip {
    /// Validates `(R, w, n)` and samples the mesh.
    pub fn new(center_radius: f64, strip_width: f64, resolution: usize) -> MobiusResult<Self> {
        let params = ShapeParameters::new(center_radius, strip_width, resolution)?;
        Ok(Self::from_params(params))
    }

    /// Builds the strip from validated parameters.
    pub fn from_params(params: ShapeParameters) -> Self {
        let mesh = MeshGenerator::from_params(&params);
        Self { params, mesh }
    }

    /// Builds the strip from a configuration snapshot.
    pub fn from_config(cfg: ShapeConfig) -> Self {
        Self::from_params(ShapeParameters::from_config(cfg))
    }

    /// Shape parameters.
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Sampled surface.
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Approximate surface area.
    pub fn surface_area(&self) -> f64 {
        let grid = self.mesh.grid();
        SurfaceAreaEstimator::estimate(&self.mesh, grid.du(), grid.dv())
    }

    /// Approximate length of the boundary traced at `v = +w/2`.
    pub fn edge_length(&self) -> f64 {
        EdgeLengthEstimator::estimate(
            self.params.center_radius(),
            self.params.strip_width(),
            self.mesh.grid().u(),
            self.params.resolution(),
        )
    }

    /// Both metrics together with the parameters that produced them.
    pub fn summary(&self) -> StripSummary {
        StripSummary {
            params: self.params,
            surface_area: self.surface_area(),
            edge_length: self.edge_length(),
        }
    }
}

impl Default for MobiusStrip {
    fn default() -> Self {
        Self::from_params(ShapeParameters::default())
    }
}

/// Derived metrics of one strip.
///
/// `Display` prints the two result lines at fixed precision.
///
/// # Examples
/// ```
/// use mobius_mesh::MobiusStrip;
///
/// let text = MobiusStrip::new(1.0, 0.4, 300).unwrap().summary().to_string();
/// assert_eq!(text, "Surface Area: 2.5342\nEdge Length: 6.3147");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripSummary {
    /// Parameters the metrics were computed from.
    pub params: ShapeParameters,
    /// Approximate surface area.
    pub surface_area: f64,
    /// Approximate boundary length.
    pub edge_length: f64,
}

impl fmt::Display for StripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Surface Area: {:.*}", OUTPUT_PRECISION, self.surface_area)?;
        write!(f, "Edge Length: {:.*}", OUTPUT_PRECISION, self.edge_length)
    }
}

#[cfg(test)]
mod tests;
