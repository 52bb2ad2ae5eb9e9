//! # Rendering
//!
//! Presentation of a [`SurfaceMesh`] as a static 3D surface plot.
//!
//! Rendering only reads the coordinate grids. Nothing here feeds back into
//! the area or edge computations.
//!
//! ## Structure
//!
//! - [`Renderer`] - Consumer interface for sampled meshes
//! - [`Camera`] - Orthographic view from a fixed elevation and azimuth
//! - [`svg::SvgRenderer`] - Colormapped, wire-edged SVG plot
//! - [`colormap`] - Viridis colormap

pub mod colormap;
pub mod svg;

use config::constants::{PLOT_AZIMUTH_DEG, PLOT_ELEVATION_DEG};
use glam::{DVec2, DVec3};

use crate::error::MobiusResult;
use crate::mesh::SurfaceMesh;

pub use svg::SvgRenderer;

/// Something that presents a sampled mesh.
pub trait Renderer {
    /// Presents the mesh, e.g. by writing a plot to disk.
    fn render(&self, mesh: &SurfaceMesh) -> MobiusResult<()>;
}

/// Orthographic camera looking at the origin.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use mobius_mesh::render::Camera;
///
/// // Looking straight down the -Z axis, screen axes align with X and Y
/// let camera = Camera::new(90.0, -90.0);
/// let (screen, _) = camera.project(DVec3::new(1.0, 2.0, 3.0));
/// assert!((screen.x - 1.0).abs() < 1e-12);
/// assert!((screen.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    right: DVec3,
    up: DVec3,
    toward_viewer: DVec3,
}

impl Camera {
    /// Camera at `elevation_deg` above the XY plane and `azimuth_deg` around Z.
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (sin_e, cos_e) = elevation_deg.to_radians().sin_cos();
        let (sin_a, cos_a) = azimuth_deg.to_radians().sin_cos();
        Self {
            right: DVec3::new(-sin_a, cos_a, 0.0),
            up: DVec3::new(-sin_e * cos_a, -sin_e * sin_a, cos_e),
            toward_viewer: DVec3::new(cos_e * cos_a, cos_e * sin_a, sin_e),
        }
    }

    /// Projects a point to screen coordinates (y up) and its depth.
    ///
    /// Larger depth is closer to the viewer.
    pub fn project(&self, point: DVec3) -> (DVec2, f64) {
        (
            DVec2::new(point.dot(self.right), point.dot(self.up)),
            point.dot(self.toward_viewer),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(PLOT_ELEVATION_DEG, PLOT_AZIMUTH_DEG)
    }
}
