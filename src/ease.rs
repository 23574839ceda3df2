//! Ease, negative ease and seam allowance
//!
//! Ease bands are fixed presentational ranges per unit system. Stretch
//! garments instead carry a negative-ease percentage, which must lie in
//! `0..=50`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::{parse_number, UnitSystem};

/// Largest accepted negative-ease percentage
pub const MAX_NEGATIVE_EASE_PERCENT: f64 = 50.0;

/// Errors that can occur when resolving ease
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EaseError {
    #[error("stretch ease needs a negative ease percentage")]
    MissingNegativeEase,

    #[error("negative ease {percent}% is outside 0-50%")]
    NegativeEaseOutOfRange { percent: f64 },
}

/// Ease option selected in the customization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EaseChoice {
    Fitted,
    #[default]
    Regular,
    Loose,
    Stretch,
}

/// The ease selection as held by a session
///
/// The negative-ease percentage survives switching to another choice and back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EaseSelection {
    pub choice: EaseChoice,
    pub negative_ease_percent: Option<f64>,
}

impl EaseSelection {
    pub fn new(choice: EaseChoice) -> Self {
        Self {
            choice,
            negative_ease_percent: None,
        }
    }

    pub fn set_choice(&mut self, choice: EaseChoice) {
        self.choice = choice;
    }

    /// Apply an edit to the negative-ease field
    ///
    /// Blank text clears it, numeric text replaces it, anything else is
    /// rejected (`false`) and the previous value kept.
    pub fn set_negative_ease_raw(&mut self, raw: &str) -> bool {
        if raw.trim().is_empty() {
            self.negative_ease_percent = None;
            return true;
        }
        match parse_number(raw) {
            Some(percent) => {
                // "-0" is stored as zero
                self.negative_ease_percent = Some(percent + 0.0);
                true
            }
            None => {
                tracing::debug!(raw, "rejected non-numeric negative ease");
                false
            }
        }
    }

    /// The spec currently in effect
    pub fn spec(&self) -> EaseSpec {
        match self.choice {
            EaseChoice::Fitted => EaseSpec::Fitted,
            EaseChoice::Regular => EaseSpec::Regular,
            EaseChoice::Loose => EaseSpec::Loose,
            EaseChoice::Stretch => EaseSpec::Stretch {
                negative_ease_percent: self.negative_ease_percent,
            },
        }
    }
}

/// Ease requested for the garment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EaseSpec {
    Fitted,
    Regular,
    Loose,
    Stretch { negative_ease_percent: Option<f64> },
}

/// A positive-ease range in the session's unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseBand {
    pub min: f64,
    pub max: f64,
    pub unit: UnitSystem,
}

impl fmt::Display for EaseBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} {}", self.min, self.max, self.unit)
    }
}

fn band(choice: EaseChoice, unit: UnitSystem) -> Option<EaseBand> {
    let (min, max) = match (choice, unit) {
        (EaseChoice::Fitted, UnitSystem::Inches) => (0.0, 1.0),
        (EaseChoice::Regular, UnitSystem::Inches) => (1.0, 2.0),
        (EaseChoice::Loose, UnitSystem::Inches) => (2.0, 3.0),
        (EaseChoice::Fitted, UnitSystem::Centimeters) => (0.0, 2.5),
        (EaseChoice::Regular, UnitSystem::Centimeters) => (2.5, 5.0),
        (EaseChoice::Loose, UnitSystem::Centimeters) => (5.0, 7.5),
        (EaseChoice::Stretch, _) => return None,
    };
    Some(EaseBand { min, max, unit })
}

/// Resolved ease, ready to show or to apply to a body measurement
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveEase {
    Positive { choice: EaseChoice, band: EaseBand },
    Negative { percent: f64 },
}

impl EffectiveEase {
    /// Description such as "Regular (1–2 inches)"
    pub fn description(&self) -> String {
        match self {
            EffectiveEase::Positive { choice, band } => {
                let name = match choice {
                    EaseChoice::Fitted => "Fitted",
                    EaseChoice::Regular => "Regular",
                    EaseChoice::Loose => "Loose",
                    EaseChoice::Stretch => "Stretch",
                };
                format!("{} ({})", name, band)
            }
            EffectiveEase::Negative { percent } => {
                format!("Stretch ({}% negative ease)", percent)
            }
        }
    }

    /// Finished garment circumference range for a body circumference
    ///
    /// Positive ease adds the band; negative ease scales the body down by the
    /// percentage, giving a single value for both ends.
    pub fn finished_circumference(&self, body: f64) -> (f64, f64) {
        match self {
            EffectiveEase::Positive { band, .. } => (body + band.min, body + band.max),
            EffectiveEase::Negative { percent } => {
                let finished = body * (1.0 - percent / 100.0);
                (finished, finished)
            }
        }
    }
}

impl fmt::Display for EffectiveEase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Resolve an ease spec in a unit system
pub fn resolve_ease(spec: &EaseSpec, unit: UnitSystem) -> Result<EffectiveEase, EaseError> {
    let choice = match *spec {
        EaseSpec::Fitted => EaseChoice::Fitted,
        EaseSpec::Regular => EaseChoice::Regular,
        EaseSpec::Loose => EaseChoice::Loose,
        EaseSpec::Stretch {
            negative_ease_percent,
        } => {
            let percent = negative_ease_percent.ok_or(EaseError::MissingNegativeEase)?;
            if !(0.0..=MAX_NEGATIVE_EASE_PERCENT).contains(&percent) {
                return Err(EaseError::NegativeEaseOutOfRange { percent });
            }
            return Ok(EffectiveEase::Negative {
                percent: percent + 0.0,
            });
        }
    };

    match band(choice, unit) {
        Some(band) => Ok(EffectiveEase::Positive { choice, band }),
        None => Err(EaseError::MissingNegativeEase),
    }
}

/// Seam allowance options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeamAllowance {
    #[default]
    ThreeEighthsInch,
    HalfInch,
    FiveEighthsInch,
}

impl SeamAllowance {
    pub const ALL: [SeamAllowance; 3] = [
        SeamAllowance::ThreeEighthsInch,
        SeamAllowance::HalfInch,
        SeamAllowance::FiveEighthsInch,
    ];

    /// Allowance width in inches
    pub fn inches(&self) -> f64 {
        match self {
            SeamAllowance::ThreeEighthsInch => 0.375,
            SeamAllowance::HalfInch => 0.5,
            SeamAllowance::FiveEighthsInch => 0.625,
        }
    }

    /// Allowance width in a unit system
    pub fn in_unit(&self, unit: UnitSystem) -> f64 {
        match unit {
            UnitSystem::Inches => self.inches(),
            UnitSystem::Centimeters => self.inches() * 2.54,
        }
    }

    /// Option label: "3/8 inch", or the rounded metric width
    pub fn label(&self, unit: UnitSystem) -> String {
        match unit {
            UnitSystem::Inches => match self {
                SeamAllowance::ThreeEighthsInch => "3/8 inch".to_string(),
                SeamAllowance::HalfInch => "1/2 inch".to_string(),
                SeamAllowance::FiveEighthsInch => "5/8 inch".to_string(),
            },
            UnitSystem::Centimeters => format!("{:.1} cm", self.in_unit(unit)),
        }
    }
}

/// Finishing options of the customization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Finishing {
    #[serde(default)]
    pub seam_allowance: SeamAllowance,
    #[serde(default)]
    pub cutting_layout_guide: bool,
}
