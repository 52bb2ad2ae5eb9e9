//! Edge length estimator tests.

use super::*;
use crate::grid::u_samples;
use approx::assert_relative_eq;

fn edge(r: f64, w: f64, n: usize) -> f64 {
    EdgeLengthEstimator::estimate(r, w, &u_samples(n), n)
}

#[test]
fn test_edge_is_non_negative() {
    for (r, w, n) in [(1.0, 0.4, 2), (1.0, 0.4, 3), (0.5, 2.0, 17), (3.0, 0.01, 64)] {
        assert!(edge(r, w, n) >= 0.0);
    }
}

#[test]
fn test_thin_strip_converges_to_circle() {
    let length = edge(2.0, 0.0001, 1000);
    assert!((length - 2.0 * TAU).abs() < 0.01, "length = {length}");
}

#[test]
fn test_thin_strip_error_shrinks_with_resolution() {
    let target = TAU;
    let coarse = (edge(1.0, 0.001, 50) - target).abs();
    let fine = (edge(1.0, 0.001, 400) - target).abs();
    assert!(fine < coarse);
    assert!(fine < 1e-3);
}

#[test]
fn test_regression_baseline() {
    assert_relative_eq!(edge(1.0, 0.4, 300), 6.314697063, epsilon = 1e-8);
    assert_relative_eq!(edge(1.0, 0.2, 200), 6.290034667, epsilon = 1e-8);
}

#[test]
fn test_two_samples_measure_the_twist_chord() {
    // u = 0 and u = 2π land on opposite rims, w apart along X
    assert_relative_eq!(edge(1.0, 0.4, 2), 0.4, epsilon = 1e-12);
}

#[test]
fn test_does_not_double_count_the_rim() {
    // One pass at v = +w/2 is measured; the full rim would be about twice this
    let length = edge(1.0, 0.4, 300);
    assert!(length < 1.1 * TAU);
}

#[test]
fn test_degenerate_sampling_yields_zero() {
    assert_eq!(EdgeLengthEstimator::estimate(1.0, 0.4, &[], 0), 0.0);
    assert_eq!(EdgeLengthEstimator::estimate(1.0, 0.4, &u_samples(10), 0), 0.0);
    assert_eq!(EdgeLengthEstimator::estimate(1.0, 0.4, &u_samples(1), 1), 0.0);
}
