//! Parameter grid tests.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_linspace_endpoints_exact() {
    let u = u_samples(7);
    assert_eq!(u.len(), 7);
    assert_eq!(u[0], 0.0);
    assert_eq!(u[6], TAU);
}

#[test]
fn test_linspace_uniform_spacing() {
    let u = u_samples(201);
    let step = TAU / 200.0;
    for pair in u.windows(2) {
        assert!(pair[1] > pair[0]);
        assert_relative_eq!(pair[1] - pair[0], step, max_relative = 1e-9);
    }
}

#[test]
fn test_symmetric_span_is_exactly_mirrored() {
    for n in [2, 3, 10, 201, 300] {
        let v = symmetric_span(0.2, n);
        assert_eq!(v[0], -0.2);
        assert_eq!(v[n - 1], 0.2);
        for i in 0..n {
            assert_eq!(v[i], -v[n - 1 - i], "n={n}, i={i}");
        }
        assert!(v.windows(2).all(|p| p[1] > p[0]));
    }
}

#[test]
fn test_odd_count_has_zero_center() {
    let v = symmetric_span(0.5, 5);
    assert_eq!(v[2], 0.0);
}

#[test]
fn test_steps_divide_span_by_count() {
    let params = ShapeParameters::new(1.0, 0.4, 300).unwrap();
    let grid = ParameterGrid::new(&params);
    assert_eq!(grid.resolution(), 300);
    assert_relative_eq!(grid.du(), TAU / 300.0);
    assert_relative_eq!(grid.dv(), 0.4 / 300.0);
}

#[test]
fn test_scalar_grid_layout() {
    let grid = ScalarGrid::from_fn(3, 2, |i, j| (i * 2 + j) as f64);
    assert_eq!(grid.shape(), (3, 2));
    assert_eq!(grid.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(grid.column(1), vec![1.0, 3.0, 5.0]);
    assert_eq!(grid.row_iter().count(), 3);
}
