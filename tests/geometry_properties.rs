//! Property tests for elbow placement and working measurement resolution

use pretty_assertions::assert_eq;

use sleevies::geometry::DEFAULT_ELBOW_RATIO;
use sleevies::{
    compute_elbow_position, resolve_working_measurement, DiagramConfig, DiagramGeometry,
    MeasurementField, MeasurementSet, UnitSystem,
};

const SHOULDER_X: f64 = 92.0;
const WRIST_X: f64 = 8.0;

fn fallback() -> f64 {
    compute_elbow_position(None, None, SHOULDER_X, WRIST_X).x
}

#[test]
fn test_valid_ratio_lies_between_anchors() {
    let wrist_lengths = [0.5, 10.0, 24.0, 61.0, 200.0];
    for wrist in wrist_lengths {
        // Sweep elbow lengths in (0, wrist)
        for step in 1..100 {
            let elbow = wrist * f64::from(step) / 100.0;
            let pos = compute_elbow_position(Some(elbow), Some(wrist), SHOULDER_X, WRIST_X);
            assert!(!pos.used_fallback, "{} / {}", elbow, wrist);
            assert!(
                pos.x > WRIST_X && pos.x < SHOULDER_X,
                "{} / {} placed at {}",
                elbow,
                wrist,
                pos.x
            );
        }
    }
}

#[test]
fn test_invalid_inputs_match_default_ratio() {
    let expected = SHOULDER_X - (SHOULDER_X - WRIST_X) * DEFAULT_ELBOW_RATIO;
    assert_eq!(fallback(), expected);

    let cases = [
        (Some(13.0), Some(0.0)),
        (Some(13.0), Some(-1.0)),
        (None, Some(24.0)),
        (Some(24.1), Some(24.0)),
        (Some(100.0), Some(24.0)),
    ];
    for (elbow, wrist) in cases {
        let pos = compute_elbow_position(elbow, wrist, SHOULDER_X, WRIST_X);
        assert!(pos.used_fallback, "{:?} / {:?}", elbow, wrist);
        assert_eq!(pos.x, expected);
    }
}

#[test]
fn test_defaults_without_input() {
    let cases = [
        (UnitSystem::Inches, "13", "24"),
        (UnitSystem::Centimeters, "33", "61"),
    ];
    for (unit, elbow, wrist) in cases {
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToElbow, unit),
            elbow
        );
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToWrist, unit),
            wrist
        );
    }
}

#[test]
fn test_thirteen_over_twenty_four() {
    let mut set = MeasurementSet::new(UnitSystem::Inches);
    set.set_raw(MeasurementField::ShoulderToElbow, "13");
    set.set_raw(MeasurementField::ShoulderToWrist, "24");

    let config = DiagramConfig::default();
    let geometry = DiagramGeometry::compute(&set, &config);

    let ratio = 13.0 / 24.0;
    assert!((ratio - 0.5417_f64).abs() < 1e-4);
    assert!(!geometry.elbow.used_fallback);
    assert_eq!(geometry.elbow.ratio, ratio);
    assert_eq!(geometry.elbow.x, config.shoulder_x() - config.arm_length() * ratio);
}

#[test]
fn test_thirty_over_twenty_four_falls_back() {
    let mut set = MeasurementSet::new(UnitSystem::Inches);
    set.set_raw(MeasurementField::ShoulderToElbow, "30");
    set.set_raw(MeasurementField::ShoulderToWrist, "24");

    let geometry = DiagramGeometry::compute(&set, &DiagramConfig::default());
    assert!(geometry.elbow.used_fallback);
    assert_eq!(geometry.elbow.ratio, 0.6);
    assert_eq!(geometry.elbow.x, fallback());
}

#[test]
fn test_geometry_depends_only_on_inputs() {
    let config = DiagramConfig::default();
    let a = DiagramGeometry::from_working("14", "25", UnitSystem::Inches, &config);
    let b = DiagramGeometry::from_working("14", "25", UnitSystem::Inches, &config);
    assert_eq!(a, b);
}

#[test]
fn test_custom_canvas_anchors() {
    let config = DiagramConfig::new()
        .with_canvas_size(200.0, 100.0)
        .with_anchor_margin(20.0);
    let geometry = DiagramGeometry::from_working("12", "24", UnitSystem::Inches, &config);
    assert_eq!(geometry.shoulder_x, 180.0);
    assert_eq!(geometry.wrist_x, 20.0);
    assert_eq!(geometry.elbow.x, 100.0);
}
