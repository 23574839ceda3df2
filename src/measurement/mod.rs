//! Body measurements entered in the wizard
//!
//! Raw input is always text. This module turns that text into unit-tagged
//! numbers, keeps the per-session set of entered fields, and supplies the
//! canonical defaults the diagram falls back to before anything is typed.

pub mod defaults;
pub mod set;

pub use defaults::resolve_working_measurement;
pub use set::MeasurementSet;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit system applied to every measurement of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Inches,
    #[serde(alias = "cm")]
    Centimeters,
}

impl UnitSystem {
    /// Short label printed next to a value ("13 inches", "33 cm")
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Inches => "inches",
            UnitSystem::Centimeters => "cm",
        }
    }

    /// The other unit system
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Inches => UnitSystem::Centimeters,
            UnitSystem::Centimeters => UnitSystem::Inches,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named body measurements collected across the wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeasurementField {
    ShoulderToElbow,
    ShoulderToWrist,
    Bust,
    SleeveCapWidth,
    SleeveCapHeight,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 5] = [
        MeasurementField::ShoulderToElbow,
        MeasurementField::ShoulderToWrist,
        MeasurementField::Bust,
        MeasurementField::SleeveCapWidth,
        MeasurementField::SleeveCapHeight,
    ];

    /// Human-readable field title
    pub fn title(&self) -> &'static str {
        match self {
            MeasurementField::ShoulderToElbow => "Shoulder to Elbow",
            MeasurementField::ShoulderToWrist => "Shoulder to Wrist",
            MeasurementField::Bust => "Bust",
            MeasurementField::SleeveCapWidth => "Sleeve Cap Width",
            MeasurementField::SleeveCapHeight => "Sleeve Cap Height",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A parsed measurement in a given unit system
///
/// The value is always finite. Zero and negative values can exist here; the
/// consumers (diagram, sleeve cap, ease) decide whether they are usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: UnitSystem,
}

impl Measurement {
    pub fn new(value: f64, unit: UnitSystem) -> Self {
        Self { value, unit }
    }

    /// True for the only values that make sense as a body length
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Parse free text from a form field into a measurement
///
/// Returns `None` ("unset") for empty input, for anything that is not a
/// decimal number, and for non-finite values. Parsing never fails loudly.
pub fn parse_measurement(raw: &str, unit: UnitSystem) -> Option<Measurement> {
    parse_number(raw).map(|value| Measurement::new(value, unit))
}

/// Parse a finite decimal number, ignoring surrounding whitespace
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str accepts "inf" and "NaN"; those are not measurements
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
