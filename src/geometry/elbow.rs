//! Proportional elbow placement

/// Ratio used whenever the measured proportion is unusable
pub const DEFAULT_ELBOW_RATIO: f64 = 0.6;

/// Result of placing the elbow marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElbowPosition {
    /// Elbow x-coordinate in the same space as the anchors
    pub x: f64,
    /// Shoulder-to-elbow over shoulder-to-wrist ratio actually applied
    pub ratio: f64,
    /// True when the default ratio replaced the measured one
    pub used_fallback: bool,
}

/// Measured elbow ratio, if it passes the placement gate
///
/// Both lengths must be present, the wrist length positive, and the ratio
/// finite with `0 < ratio <= 1`.
pub fn elbow_ratio(shoulder_to_elbow: Option<f64>, shoulder_to_wrist: Option<f64>) -> Option<f64> {
    let (elbow, wrist) = (shoulder_to_elbow?, shoulder_to_wrist?);
    if !(wrist > 0.0) {
        return None;
    }
    let ratio = elbow / wrist;
    (ratio.is_finite() && ratio > 0.0 && ratio <= 1.0).then_some(ratio)
}

/// Place the elbow between the shoulder and wrist anchors
///
/// `x = shoulder_x - (shoulder_x - wrist_x) * ratio`. When the measured ratio
/// fails the gate the default ratio is applied to the same formula instead.
pub fn compute_elbow_position(
    shoulder_to_elbow: Option<f64>,
    shoulder_to_wrist: Option<f64>,
    shoulder_x: f64,
    wrist_x: f64,
) -> ElbowPosition {
    let arm_length = shoulder_x - wrist_x;

    if let Some(ratio) = elbow_ratio(shoulder_to_elbow, shoulder_to_wrist) {
        let x = shoulder_x - arm_length * ratio;
        if x.is_finite() {
            return ElbowPosition {
                x,
                ratio,
                used_fallback: false,
            };
        }
    }

    tracing::debug!(
        ?shoulder_to_elbow,
        ?shoulder_to_wrist,
        "elbow ratio out of range, using default"
    );
    ElbowPosition {
        x: shoulder_x - arm_length * DEFAULT_ELBOW_RATIO,
        ratio: DEFAULT_ELBOW_RATIO,
        used_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOULDER_X: f64 = 92.0;
    const WRIST_X: f64 = 8.0;

    fn fallback_x() -> f64 {
        SHOULDER_X - (SHOULDER_X - WRIST_X) * DEFAULT_ELBOW_RATIO
    }

    #[test]
    fn test_measured_ratio() {
        let pos = compute_elbow_position(Some(13.0), Some(24.0), SHOULDER_X, WRIST_X);
        assert!(!pos.used_fallback);
        assert_eq!(pos.ratio, 13.0 / 24.0);
        assert_eq!(pos.x, SHOULDER_X - 84.0 * (13.0 / 24.0));
    }

    #[test]
    fn test_position_strictly_between_anchors() {
        for (elbow, wrist) in [(0.1, 24.0), (6.0, 24.0), (13.0, 24.0), (23.9, 24.0), (33.0, 61.0)] {
            let pos = compute_elbow_position(Some(elbow), Some(wrist), SHOULDER_X, WRIST_X);
            assert!(!pos.used_fallback);
            assert!(pos.x > WRIST_X && pos.x < SHOULDER_X, "x = {}", pos.x);
        }
    }

    #[test]
    fn test_equal_lengths_land_on_wrist() {
        let pos = compute_elbow_position(Some(24.0), Some(24.0), SHOULDER_X, WRIST_X);
        assert!(!pos.used_fallback);
        assert_eq!(pos.x, WRIST_X);
    }

    #[test]
    fn test_elbow_longer_than_arm_falls_back() {
        let pos = compute_elbow_position(Some(30.0), Some(24.0), SHOULDER_X, WRIST_X);
        assert!(pos.used_fallback);
        assert_eq!(pos.ratio, 0.6);
        assert_eq!(pos.x, fallback_x());
    }

    #[test]
    fn test_missing_inputs_fall_back() {
        let cases = [
            (None, Some(24.0)),
            (Some(13.0), None),
            (None, None),
        ];
        for (elbow, wrist) in cases {
            let pos = compute_elbow_position(elbow, wrist, SHOULDER_X, WRIST_X);
            assert!(pos.used_fallback);
            assert_eq!(pos.x, fallback_x());
        }
    }

    #[test]
    fn test_non_positive_lengths_fall_back() {
        let cases = [
            (Some(13.0), Some(0.0)),
            (Some(13.0), Some(-24.0)),
            (Some(0.0), Some(24.0)),
            (Some(-13.0), Some(24.0)),
            (Some(-13.0), Some(-24.0)),
        ];
        for (elbow, wrist) in cases {
            let pos = compute_elbow_position(elbow, wrist, SHOULDER_X, WRIST_X);
            assert!(pos.used_fallback, "{:?} / {:?}", elbow, wrist);
            assert_eq!(pos.x, fallback_x());
        }
    }

    #[test]
    fn test_nan_falls_back() {
        let pos = compute_elbow_position(Some(f64::NAN), Some(24.0), SHOULDER_X, WRIST_X);
        assert!(pos.used_fallback);
        let pos = compute_elbow_position(Some(13.0), Some(f64::NAN), SHOULDER_X, WRIST_X);
        assert!(pos.used_fallback);
    }

    #[test]
    fn test_fallback_on_other_anchors() {
        let pos = compute_elbow_position(None, None, 100.0, 0.0);
        assert!(pos.used_fallback);
        assert_eq!(pos.ratio, DEFAULT_ELBOW_RATIO);
        assert_eq!(pos.x, 40.0);
    }

    #[test]
    fn test_elbow_ratio_gate() {
        assert_eq!(elbow_ratio(Some(12.0), Some(24.0)), Some(0.5));
        assert_eq!(elbow_ratio(Some(24.0), Some(24.0)), Some(1.0));
        assert_eq!(elbow_ratio(Some(25.0), Some(24.0)), None);
        assert_eq!(elbow_ratio(Some(0.0), Some(24.0)), None);
    }
}
