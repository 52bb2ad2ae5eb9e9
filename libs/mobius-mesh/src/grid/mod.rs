//! # Parameter Grid
//!
//! Uniform sampling of the `(u, v)` parameter domain and the row-major
//! scalar grid used to hold one coordinate per sample.
//!
//! ## Orientation
//!
//! Grids are indexed `[i][j]` with `i` the `v` index (row) and `j` the `u`
//! index (column). Partial derivatives along [`Axis::U`] therefore run across
//! a row, and along [`Axis::V`] down a column.

use std::f64::consts::TAU;

use crate::params::ShapeParameters;

// =============================================================================
// SAMPLING
// =============================================================================

/// Returns `count` endpoint-inclusive, uniformly spaced samples of `[start, end]`.
///
/// The first and last samples equal `start` and `end` exactly.
///
/// # Examples
/// ```
/// use mobius_mesh::grid::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            let span = end - start;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + span * (i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Samples `[-half, half]` so that mirrored samples are exact negatives.
///
/// Sample `i` and sample `count - 1 - i` satisfy `a == -b` bit for bit, which
/// keeps the strip's `Z(u, -v) = -Z(u, v)` identity exact on the mesh.
///
/// # Examples
/// ```
/// use mobius_mesh::grid::symmetric_span;
///
/// let v = symmetric_span(0.2, 4);
/// assert_eq!(v[0], -0.2);
/// assert_eq!(v[3], 0.2);
/// assert_eq!(v[1], -v[2]);
/// ```
pub fn symmetric_span(half: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let offset = 2.0 * i as f64 - last;
                    half * (offset / last)
                })
                .collect()
        }
    }
}

// =============================================================================
// PARAMETER GRID
// =============================================================================

/// Axis of a [`ScalarGrid`] along which a derivative is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Across a row: the `u` direction (column index `j`).
    U,
    /// Down a column: the `v` direction (row index `i`).
    V,
}

/// Sampled `u` and `v` sequences of a strip, plus the integration steps.
///
/// # Examples
/// ```
/// use mobius_mesh::{ParameterGrid, ShapeParameters};
///
/// let params = ShapeParameters::new(1.0, 0.4, 4).unwrap();
/// let grid = ParameterGrid::new(&params);
/// assert_eq!(grid.u().len(), 4);
/// assert_eq!(grid.v()[0], -0.2);
/// assert_eq!(grid.dv(), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    u: Vec<f64>,
    v: Vec<f64>,
    du: f64,
    dv: f64,
}

impl ParameterGrid {
    /// Samples both parameter axes for the given shape.
    pub fn new(params: &ShapeParameters) -> Self {
        let n = params.resolution();
        Self {
            u: u_samples(n),
            v: symmetric_span(params.half_width(), n),
            du: TAU / n as f64,
            dv: params.strip_width() / n as f64,
        }
    }

    /// Samples of `u` over `[0, 2π]`, strictly increasing.
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Samples of `v` over `[-w/2, w/2]`, strictly increasing.
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Integration step along `u`: `2π / n`.
    ///
    /// This is the span divided by the sample count, not by the number of
    /// intervals between samples.
    pub fn du(&self) -> f64 {
        self.du
    }

    /// Integration step along `v`: `w / n`.
    pub fn dv(&self) -> f64 {
        self.dv
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.u.len()
    }
}

/// Endpoint-inclusive samples of `u` over `[0, 2π]`.
pub fn u_samples(count: usize) -> Vec<f64> {
    linspace(0.0, TAU, count)
}

// =============================================================================
// SCALAR GRID
// =============================================================================

/// Row-major `rows x cols` grid of `f64` values.
///
/// # Examples
/// ```
/// use mobius_mesh::grid::ScalarGrid;
///
/// let grid = ScalarGrid::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
/// assert_eq!(grid.get(1, 2), 12.0);
/// assert_eq!(grid.row(0), &[0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Builds a grid by evaluating `f(i, j)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows (`v` samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`u` samples).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates rows in order.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Copies column `j` out of the grid.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.rows).map(|i| self.get(i, j)).collect()
    }

    /// Row-major backing storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests;
