use std::f64::consts::TAU;

use mobius_mesh::{MeshGenerator, MobiusError, MobiusStrip};

#[test]
fn metrics_are_non_negative_across_parameters() {
    for r in [0.5, 1.0, 3.0] {
        for w in [0.01, 0.4, 1.5] {
            for n in [2, 3, 10, 64] {
                let strip = MobiusStrip::new(r, w, n).unwrap();
                assert!(strip.surface_area() >= 0.0, "R={r} w={w} n={n}");
                assert!(strip.edge_length() >= 0.0, "R={r} w={w} n={n}");
            }
        }
    }
}

#[test]
fn thin_strip_edge_matches_circumference() {
    let strip = MobiusStrip::new(2.0, 0.0001, 1000).unwrap();
    assert!((strip.edge_length() - TAU * 2.0).abs() < 0.01);
    assert_eq!(format!("{:.4}", TAU * 2.0), "12.5664");
}

#[test]
fn area_estimates_converge() {
    let areas: Vec<f64> = [50, 100, 200, 400]
        .iter()
        .map(|&n| MobiusStrip::new(1.0, 0.4, n).unwrap().surface_area())
        .collect();
    let deltas: Vec<f64> = areas.windows(2).map(|p| (p[1] - p[0]).abs()).collect();
    assert!(deltas.windows(2).all(|p| p[1] < p[0]), "{deltas:?}");
}

#[test]
fn z_is_odd_in_v_for_any_resolution() {
    for n in [2, 5, 64, 99] {
        let mesh = MeshGenerator::generate(1.0, 0.4, n).unwrap();
        let v = mesh.grid().v();
        for i in 0..n {
            assert_eq!(v[i], -v[n - 1 - i]);
            for j in 0..n {
                assert_eq!(mesh.z().get(i, j), -mesh.z().get(n - 1 - i, j));
            }
        }
    }
}

#[test]
fn resolution_below_two_is_rejected() {
    for n in [0, 1] {
        match MobiusStrip::new(1.0, 0.4, n) {
            Err(MobiusError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "n");
                assert_eq!(value, n.to_string());
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}

#[test]
fn mesh_buffers_follow_the_grid() {
    let strip = MobiusStrip::new(1.0, 0.4, 25).unwrap();
    let buffers = strip.mesh().to_mesh_buffers();
    assert_eq!(buffers.vertex_count(), strip.mesh().point_count());
    assert_eq!(buffers.vertices[0], strip.mesh().x().get(0, 0) as f32);
}
