//! # SVG Renderer
//!
//! Static surface plot of a sampled mesh. Grid cells are projected through a
//! [`Camera`], painted back to front, filled from the viridis colormap by
//! their mean Z, and outlined with thin wire edges.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use config::constants::{
    DEFAULT_PLOT_PATH, PLOT_HEIGHT, PLOT_MAX_CELLS_PER_AXIS, PLOT_WIDTH, PLOT_WIRE_WIDTH,
};
use glam::DVec2;
use tracing::info;

use super::colormap::{viridis, Color};
use super::{Camera, Renderer};
use crate::error::{MobiusError, MobiusResult};
use crate::mesh::SurfaceMesh;

/// Blank border kept around the plot, in pixels.
const MARGIN: f64 = 24.0;

/// SVG surface plot writer.
///
/// # Examples
/// ```
/// use mobius_mesh::render::SvgRenderer;
/// use mobius_mesh::MeshGenerator;
///
/// let mesh = MeshGenerator::generate(1.0, 0.4, 20).unwrap();
/// let svg = SvgRenderer::default().to_svg(&mesh).unwrap();
/// assert!(svg.starts_with("<?xml"));
/// assert_eq!(svg.matches("<polygon").count(), 19 * 19);
/// ```
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    camera: Camera,
    max_cells: usize,
    output: PathBuf,
}

/// One projected grid cell.
struct Face {
    corners: [DVec2; 4],
    depth: f64,
    height: f64,
}

impl SvgRenderer {
    /// Creates a renderer writing a `width x height` plot to `output`.
    pub fn new(width: u32, height: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            camera: Camera::default(),
            max_cells: PLOT_MAX_CELLS_PER_AXIS,
            output: output.into(),
        }
    }

    /// Replaces the camera.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Caps the number of cells drawn per axis; denser grids are strided.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells.max(1);
        self
    }

    /// Path the plot is written to by [`Renderer::render`].
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Builds the SVG document for `mesh`.
    pub fn to_svg(&self, mesh: &SurfaceMesh) -> MobiusResult<String> {
        let faces = self.project_faces(mesh);
        if faces.is_empty() {
            return Err(MobiusError::Render("mesh has no cells to draw".to_string()));
        }
        self.write_document(mesh, &faces)
            .map_err(|e| MobiusError::Render(e.to_string()))
    }

    /// Grid indices kept along one axis: every `stride`-th sample plus the last.
    fn sample_indices(&self, n: usize) -> Vec<usize> {
        if n < 2 {
            return Vec::new();
        }
        let stride = (n - 1).div_ceil(self.max_cells).max(1);
        let mut indices: Vec<usize> = (0..n).step_by(stride).collect();
        if indices.last() != Some(&(n - 1)) {
            indices.push(n - 1);
        }
        indices
    }

    fn project_faces(&self, mesh: &SurfaceMesh) -> Vec<Face> {
        let indices = self.sample_indices(mesh.resolution());
        let mut faces = Vec::with_capacity(indices.len().saturating_sub(1).pow(2));

        for rows in indices.windows(2) {
            for cols in indices.windows(2) {
                let points = [
                    mesh.point(rows[0], cols[0]),
                    mesh.point(rows[0], cols[1]),
                    mesh.point(rows[1], cols[1]),
                    mesh.point(rows[1], cols[0]),
                ];
                let projected = points.map(|p| self.camera.project(p));
                faces.push(Face {
                    corners: projected.map(|(screen, _)| screen),
                    depth: projected.iter().map(|(_, d)| d).sum::<f64>() / 4.0,
                    height: points.iter().map(|p| p.z).sum::<f64>() / 4.0,
                });
            }
        }

        // Painter's algorithm: farthest first
        faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        faces
    }

    fn write_document(&self, mesh: &SurfaceMesh, faces: &[Face]) -> Result<String, std::fmt::Error> {
        let (min, max) = faces
            .iter()
            .flat_map(|f| f.corners)
            .fold((DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            });
        let extent = (max - min).max(DVec2::splat(f64::EPSILON));
        let (width, height) = (self.width as f64, self.height as f64);
        let scale = ((width - 2.0 * MARGIN) / extent.x).min((height - 2.0 * MARGIN) / extent.y);
        let center = (min + max) / 2.0;
        let to_screen = |p: DVec2| {
            (
                width / 2.0 + (p.x - center.x) * scale,
                height / 2.0 - (p.y - center.y) * scale,
            )
        };

        let (z_min, z_max) = faces
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| (lo.min(f.height), hi.max(f.height)));
        let z_span = z_max - z_min;

        let params = mesh.params();
        let mut svg = String::with_capacity(faces.len() * 160);
        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(
            svg,
            "<title>Mobius strip R={} w={} n={}</title>",
            params.center_radius(),
            params.strip_width(),
            params.resolution()
        )?;
        writeln!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            Color::BACKGROUND.to_hex()
        )?;
        writeln!(
            svg,
            r#"<g stroke="{}" stroke-width="{}" stroke-linejoin="round">"#,
            Color::WIRE.to_hex(),
            PLOT_WIRE_WIDTH
        )?;

        for face in faces {
            let t = if z_span > 0.0 { (face.height - z_min) / z_span } else { 0.5 };
            svg.push_str(r#"  <polygon points=""#);
            for (k, corner) in face.corners.iter().enumerate() {
                let (x, y) = to_screen(*corner);
                if k > 0 {
                    svg.push(' ');
                }
                write!(svg, "{x:.2},{y:.2}")?;
            }
            writeln!(svg, r#"" fill="{}"/>"#, viridis(t).to_hex())?;
        }

        writeln!(svg, "</g>")?;
        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(PLOT_WIDTH, PLOT_HEIGHT, DEFAULT_PLOT_PATH)
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, mesh: &SurfaceMesh) -> MobiusResult<()> {
        let svg = self.to_svg(mesh)?;
        std::fs::write(&self.output, svg)?;
        info!(path = %self.output.display(), "wrote surface plot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshGenerator;

    #[test]
    fn test_sample_indices_cover_both_ends() {
        let renderer = SvgRenderer::default().with_max_cells(10);
        assert_eq!(renderer.sample_indices(5), vec![0, 1, 2, 3, 4]);

        let strided = renderer.sample_indices(300);
        assert_eq!(strided.first(), Some(&0));
        assert_eq!(strided.last(), Some(&299));
        assert!(strided.len() - 1 <= 11);
    }

    #[test]
    fn test_dense_mesh_is_strided() {
        let mesh = MeshGenerator::generate(1.0, 0.4, 300).unwrap();
        let svg = SvgRenderer::default().to_svg(&mesh).unwrap();
        let cells = svg.matches("<polygon").count();
        assert!(cells <= (PLOT_MAX_CELLS_PER_AXIS + 1).pow(2));
        assert!(cells >= PLOT_MAX_CELLS_PER_AXIS.pow(2) / 4);
    }

    #[test]
    fn test_uses_colormap_and_wire_edges() {
        let mesh = MeshGenerator::generate(1.0, 0.4, 30).unwrap();
        let svg = SvgRenderer::default().to_svg(&mesh).unwrap();
        assert!(svg.contains(r##"stroke="#000000""##));
        // Lowest and highest cells take the two ends of the colormap
        assert!(svg.contains(&viridis(0.0).to_hex()));
        assert!(svg.contains(&viridis(1.0).to_hex()));
        assert!(svg.contains("<title>Mobius strip R=1 w=0.4 n=30</title>"));
    }

    #[test]
    fn test_points_stay_on_canvas() {
        let mesh = MeshGenerator::generate(2.0, 1.0, 25).unwrap();
        let svg = SvgRenderer::new(400, 300, "unused.svg").to_svg(&mesh).unwrap();
        for attr in svg.split(r#"points=""#).skip(1) {
            let coords = attr.split('"').next().unwrap();
            for pair in coords.split(' ') {
                let (x, y) = pair.split_once(',').unwrap();
                let (x, y): (f64, f64) = (x.parse().unwrap(), y.parse().unwrap());
                assert!((0.0..=400.0).contains(&x), "x = {x}");
                assert!((0.0..=300.0).contains(&y), "y = {y}");
            }
        }
    }

    #[test]
    fn test_custom_camera_changes_projection() {
        let mesh = MeshGenerator::generate(1.0, 0.4, 12).unwrap();
        let default_view = SvgRenderer::default().to_svg(&mesh).unwrap();
        let top_down = SvgRenderer::default()
            .with_camera(Camera::new(90.0, -90.0))
            .to_svg(&mesh)
            .unwrap();

        assert_ne!(default_view, top_down);
        assert_eq!(top_down.matches("<polygon").count(), 11 * 11);
    }

    #[test]
    fn test_output_path_defaults_to_plot_path() {
        assert_eq!(SvgRenderer::default().output(), Path::new(DEFAULT_PLOT_PATH));
        assert_eq!(SvgRenderer::new(10, 10, "a/b.svg").output(), Path::new("a/b.svg"));
    }

    #[test]
    fn test_render_writes_file() {
        let path = std::env::temp_dir().join(format!("mobius_render_{}.svg", std::process::id()));
        let mesh = MeshGenerator::generate(1.0, 0.4, 12).unwrap();
        let renderer = SvgRenderer::new(200, 150, &path);
        renderer.render(&mesh).unwrap();
        assert_eq!(renderer.output(), path.as_path());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.trim_end().ends_with("</svg>"));
        std::fs::remove_file(&path).unwrap();
    }
}
