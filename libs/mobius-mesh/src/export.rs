//! Mesh buffer export for external viewers.
//!
//! This module triangulates the sampled grid into flat, GPU-friendly buffers
//! using `f32` precision, and serializes them as JSON.

use glam::DVec3;
use serde::Serialize;

use crate::error::MobiusResult;
use crate::mesh::SurfaceMesh;

/// Triangulated mesh buffers suitable for GPU rendering.
///
/// Vertex `k` is grid point `(k / n, k % n)`; each grid cell contributes two
/// triangles.
///
/// # Examples
/// ```
/// use mobius_mesh::MeshGenerator;
///
/// let mesh = MeshGenerator::generate(1.0, 0.4, 4).unwrap();
/// let buffers = mesh.to_mesh_buffers();
///
/// assert_eq!(buffers.vertex_count(), 16);
/// assert_eq!(buffers.triangle_count(), 2 * 3 * 3);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,

    /// Unit vertex normals as flat array [nx, ny, nz, ...].
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Serializes the buffers as a JSON object with `vertices`, `indices`
    /// and `normals` arrays.
    pub fn to_json(&self) -> MobiusResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl SurfaceMesh {
    /// Triangulates the grid into GPU-friendly buffers.
    ///
    /// Normals are the normalized sum of the adjacent face normals. The grid
    /// is not glued at the `u = 0 / 2π` seam, so the strip's one-sidedness
    /// shows up as opposing normals on the two seam columns.
    pub fn to_mesh_buffers(&self) -> MeshBuffers {
        let n = self.resolution();
        let mut buffers = MeshBuffers::new();

        let positions: Vec<DVec3> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.point(i, j))
            .collect();

        for p in &positions {
            buffers.vertices.extend([p.x as f32, p.y as f32, p.z as f32]);
        }

        let mut accumulated = vec![DVec3::ZERO; positions.len()];
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 {
                let v00 = i * n + j;
                let v01 = v00 + 1;
                let v10 = v00 + n;
                let v11 = v10 + 1;

                for tri in [[v00, v01, v11], [v00, v11, v10]] {
                    let [a, b, c] = tri.map(|k| positions[k]);
                    let face_normal = (b - a).cross(c - a);
                    for k in tri {
                        accumulated[k] += face_normal;
                        buffers.indices.push(k as u32);
                    }
                }
            }
        }

        for normal in accumulated {
            let unit = normal.normalize_or_zero();
            buffers.normals.extend([unit.x as f32, unit.y as f32, unit.z as f32]);
        }

        buffers
    }
}
