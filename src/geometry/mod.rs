//! Arm diagram geometry
//!
//! Turns the working shoulder-to-elbow and shoulder-to-wrist measurements of
//! a session into marker positions on a fixed, normalized canvas. Nothing is
//! cached: the geometry is recomputed from the measurement set every time.

pub mod config;
pub mod elbow;

pub use config::DiagramConfig;
pub use elbow::{compute_elbow_position, ElbowPosition, DEFAULT_ELBOW_RATIO};

use crate::measurement::{parse_measurement, MeasurementField, MeasurementSet, UnitSystem};

/// An axis-aligned rectangle in the diagram coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Annotation for one measured span of the arm
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLabel {
    /// Working value as entered (or defaulted), e.g. "13"
    pub value: String,
    pub unit: UnitSystem,
}

impl SpanLabel {
    /// Display text, e.g. "13 inches"
    pub fn text(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

/// Derived, read-only geometry of the arm schematic
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub shoulder_x: f64,
    pub wrist_x: f64,
    pub elbow: ElbowPosition,
    /// The drawn arm between wrist and shoulder
    pub arm: BoundingBox,
    pub shoulder_to_elbow: SpanLabel,
    pub shoulder_to_wrist: SpanLabel,
}

impl DiagramGeometry {
    /// Compute the diagram for the working measurements of a set
    pub fn compute(set: &MeasurementSet, config: &DiagramConfig) -> Self {
        let unit = set.unit();
        let elbow_text = set.working(MeasurementField::ShoulderToElbow);
        let wrist_text = set.working(MeasurementField::ShoulderToWrist);
        Self::from_working(&elbow_text, &wrist_text, unit, config)
    }

    /// Compute the diagram from working measurement text
    pub fn from_working(
        shoulder_to_elbow: &str,
        shoulder_to_wrist: &str,
        unit: UnitSystem,
        config: &DiagramConfig,
    ) -> Self {
        let shoulder_x = config.shoulder_x();
        let wrist_x = config.wrist_x();

        let elbow = compute_elbow_position(
            parse_measurement(shoulder_to_elbow, unit).map(|m| m.value),
            parse_measurement(shoulder_to_wrist, unit).map(|m| m.value),
            shoulder_x,
            wrist_x,
        );

        let arm = BoundingBox::new(
            wrist_x,
            config.arm_center_y() - config.arm_width / 2.0,
            config.arm_length(),
            config.arm_width,
        );

        Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            shoulder_x,
            wrist_x,
            elbow,
            arm,
            shoulder_to_elbow: SpanLabel {
                value: shoulder_to_elbow.trim().to_string(),
                unit,
            },
            shoulder_to_wrist: SpanLabel {
                value: shoulder_to_wrist.trim().to_string(),
                unit,
            },
        }
    }

    pub fn elbow_x(&self) -> f64 {
        self.elbow.x
    }

    pub fn arm_center_y(&self) -> f64 {
        self.arm.y + self.arm.height / 2.0
    }
}
