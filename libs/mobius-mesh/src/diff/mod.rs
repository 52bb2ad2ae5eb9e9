//! # Finite Differences
//!
//! Central-difference derivatives of sampled sequences and grids.
//!
//! Interior samples use `(f[k+1] - f[k-1]) / 2`, the two end samples use the
//! one-sided differences `f[1] - f[0]` and `f[m-1] - f[m-2]`. Sequences are
//! never treated as periodic, so the ends carry first-order error.

use crate::grid::{Axis, ScalarGrid};

/// Index-space differences: the change per sample, not per unit parameter.
///
/// Sequences shorter than two samples have no defined difference and yield
/// zeros.
///
/// # Examples
/// ```
/// use mobius_mesh::diff::index_gradient;
///
/// let d = index_gradient(&[0.0, 1.0, 4.0, 9.0]);
/// assert_eq!(d, vec![1.0, 2.0, 4.0, 5.0]);
/// ```
pub fn index_gradient(values: &[f64]) -> Vec<f64> {
    let m = values.len();
    if m < 2 {
        return vec![0.0; m];
    }
    (0..m)
        .map(|k| match k {
            0 => values[1] - values[0],
            k if k == m - 1 => values[m - 1] - values[m - 2],
            k => (values[k + 1] - values[k - 1]) / 2.0,
        })
        .collect()
}

/// Derivative per unit parameter for samples taken at a fixed `step`.
///
/// # Examples
/// ```
/// use mobius_mesh::diff::gradient;
///
/// let d = gradient(&[0.0, 1.0, 2.0], 0.5);
/// assert_eq!(d, vec![2.0, 2.0, 2.0]);
/// ```
pub fn gradient(values: &[f64], step: f64) -> Vec<f64> {
    index_gradient(values).into_iter().map(|d| d / step).collect()
}

/// Derivative of `values` with respect to the sample coordinates `coords`.
///
/// Interior samples divide by `coords[k+1] - coords[k-1]`, the ends by the
/// adjacent coordinate gap, so the result is a per-unit-coordinate rate.
/// Both slices must have the same length.
pub(crate) fn gradient_along(values: &[f64], coords: &[f64]) -> Vec<f64> {
    debug_assert_eq!(values.len(), coords.len());
    let m = values.len();
    if m < 2 {
        return vec![0.0; m];
    }
    (0..m)
        .map(|k| match k {
            0 => (values[1] - values[0]) / (coords[1] - coords[0]),
            k if k == m - 1 => (values[m - 1] - values[m - 2]) / (coords[m - 1] - coords[m - 2]),
            k => (values[k + 1] - values[k - 1]) / (coords[k + 1] - coords[k - 1]),
        })
        .collect()
}

/// Partial derivative of a grid along `axis`, divided by `step`.
///
/// # Examples
/// ```
/// use mobius_mesh::diff::grid_gradient;
/// use mobius_mesh::grid::{Axis, ScalarGrid};
///
/// // f(i, j) = 3j + i
/// let f = ScalarGrid::from_fn(3, 4, |i, j| 3.0 * j as f64 + i as f64);
/// let fu = grid_gradient(&f, Axis::U, 1.0);
/// let fv = grid_gradient(&f, Axis::V, 0.5);
/// assert!(fu.as_slice().iter().all(|&d| d == 3.0));
/// assert!(fv.as_slice().iter().all(|&d| d == 2.0));
/// ```
pub fn grid_gradient(grid: &ScalarGrid, axis: Axis, step: f64) -> ScalarGrid {
    let (rows, cols) = grid.shape();
    let mut data = vec![0.0; rows * cols];
    match axis {
        Axis::U => {
            for (i, row) in grid.row_iter().enumerate() {
                let d = gradient(row, step);
                data[i * cols..(i + 1) * cols].copy_from_slice(&d);
            }
        }
        Axis::V => {
            for j in 0..cols {
                for (i, d) in gradient(&grid.column(j), step).into_iter().enumerate() {
                    data[i * cols + j] = d;
                }
            }
        }
    }
    ScalarGrid::from_parts(rows, cols, data)
}
