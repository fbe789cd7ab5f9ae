#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = DiagramConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, DiagramConfig::default());
    assert_eq!(cfg.tolerances.side_equality, 5.0);
    assert_eq!(cfg.tolerances.obtuse_threshold_deg, 92.0);
    assert_eq!(cfg.bounds, CanvasBounds { min: 10.0, max: 390.0 });
    assert_eq!(cfg.hinge.snap_threshold, 15.0);
}

#[test]
fn overrides_are_parsed() {
    let cfg = DiagramConfig::from_lookup(lookup(&[
        (ENV_SIDE_TOLERANCE, "2.5"),
        (ENV_RIGHT_ANGLE_BAND, " 1 "),
        (ENV_CANVAS_MIN, "0"),
        (ENV_CANVAS_MAX, "400"),
        (ENV_SNAP_THRESHOLD, "8"),
        (ENV_ARM_MAX, "260"),
    ]))
    .unwrap();
    assert_eq!(cfg.tolerances.side_equality, 2.5);
    assert_eq!(cfg.tolerances.right_angle_band_deg, 1.0);
    assert_eq!(cfg.bounds, CanvasBounds { min: 0.0, max: 400.0 });
    assert_eq!(cfg.hinge.snap_threshold, 8.0);
    assert_eq!(cfg.hinge.arm_max, 260.0);
}

#[test]
fn malformed_number_is_an_error() {
    let err = DiagramConfig::from_lookup(lookup(&[(ENV_SNAP_THRESHOLD, "tight")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: ENV_SNAP_THRESHOLD, value: "tight".into() });
}

#[test]
fn non_positive_tolerance_is_rejected() {
    let err = DiagramConfig::from_lookup(lookup(&[(ENV_SIDE_TOLERANCE, "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { var: ENV_SIDE_TOLERANCE, .. }));
}

#[test]
fn infinite_value_is_rejected() {
    let err = DiagramConfig::from_lookup(lookup(&[(ENV_CANVAS_MAX, "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { var: ENV_CANVAS_MAX, .. }));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = DiagramConfig::from_lookup(lookup(&[(ENV_ARM_MIN, "250")])).unwrap_err();
    assert!(matches!(err, ConfigError::InconsistentBounds { min_var: ENV_ARM_MIN, .. }));
    assert!(err.to_string().contains("TRIGON_ARM_MAX"));
}
