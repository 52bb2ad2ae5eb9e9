//! Strip model tests.

use super::*;
use crate::MobiusError;

#[test]
fn test_default_strip_uses_default_parameters() {
    let strip = MobiusStrip::default();
    assert_eq!(*strip.params(), ShapeParameters::default());
    assert_eq!(strip.mesh().resolution(), 200);
}

#[test]
fn test_default_strip_baseline() {
    let summary = MobiusStrip::default().summary();
    assert_eq!(format!("{:.4}", summary.surface_area), "1.2696");
    assert_eq!(format!("{:.4}", summary.edge_length), "6.2900");
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        MobiusStrip::new(1.0, 0.4, 1),
        Err(MobiusError::InvalidParameter { name: "n", .. })
    ));
    assert!(matches!(
        MobiusStrip::new(-2.0, 0.4, 10),
        Err(MobiusError::InvalidParameter { name: "R", .. })
    ));
}

#[test]
fn test_queries_are_repeatable() {
    let strip = MobiusStrip::new(1.0, 0.3, 80).unwrap();
    let first = (strip.surface_area(), strip.edge_length());
    // Order of calls does not matter
    let edge = strip.edge_length();
    let area = strip.surface_area();
    assert_eq!((area, edge), first);
}

#[test]
fn test_from_config_matches_new() {
    let from_cfg = MobiusStrip::from_config(ShapeConfig::demo());
    let direct = MobiusStrip::new(1.0, 0.4, 300).unwrap();
    assert_eq!(from_cfg.summary(), direct.summary());
}

#[test]
fn test_summary_display_has_four_decimals() {
    let text = MobiusStrip::new(2.0, 0.5, 40).unwrap().summary().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Surface Area: "));
    assert!(lines[1].starts_with("Edge Length: "));
    for line in lines {
        let value = line.rsplit(' ').next().unwrap();
        assert_eq!(value.split('.').nth(1).map(str::len), Some(4), "{line}");
    }
}

#[test]
fn test_summary_serializes() {
    let summary = MobiusStrip::new(1.0, 0.4, 20).unwrap().summary();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["params"]["resolution"], 20);
    assert!(json["surface_area"].as_f64().unwrap() > 0.0);
}
