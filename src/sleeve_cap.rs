//! Sleeve cap mode resolution
//!
//! The sleeve cap is either derived from the bust measurement or entered by
//! hand as a width and a height. Resolution is pure so the step gate can call
//! it on every edit.

use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, MeasurementField, MeasurementSet};

/// Which way the sleeve cap dimensions are supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SleeveCapMode {
    /// Derive from the bust measurement (recommended)
    #[default]
    #[serde(alias = "bust")]
    FromBust,
    /// Enter width and height manually
    Manual,
}

/// The active sleeve cap inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SleeveCapSpec {
    FromBust {
        bust: Option<Measurement>,
    },
    Manual {
        width: Option<Measurement>,
        height: Option<Measurement>,
    },
}

impl SleeveCapSpec {
    /// Build the spec for `mode` from a measurement set
    ///
    /// Fields of the inactive mode stay in the set untouched.
    pub fn from_set(mode: SleeveCapMode, set: &MeasurementSet) -> Self {
        match mode {
            SleeveCapMode::FromBust => SleeveCapSpec::FromBust {
                bust: set.get(MeasurementField::Bust),
            },
            SleeveCapMode::Manual => SleeveCapSpec::Manual {
                width: set.get(MeasurementField::SleeveCapWidth),
                height: set.get(MeasurementField::SleeveCapHeight),
            },
        }
    }

    pub fn mode(&self) -> SleeveCapMode {
        match self {
            SleeveCapSpec::FromBust { .. } => SleeveCapMode::FromBust,
            SleeveCapSpec::Manual { .. } => SleeveCapMode::Manual,
        }
    }
}

/// Concrete sleeve cap size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleeveCapDimensions {
    pub width: Measurement,
    pub height: Measurement,
}

/// Outcome of resolving a [`SleeveCapSpec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SleeveCapResolution {
    /// Width and height were both entered
    Manual(SleeveCapDimensions),
    /// A bust measurement is available for derivation
    FromBust(Measurement),
    /// Required inputs are missing
    Incomplete,
}

impl SleeveCapResolution {
    pub fn is_complete(&self) -> bool {
        !matches!(self, SleeveCapResolution::Incomplete)
    }

    /// Concrete dimensions, using `derivation` for the bust variant
    pub fn dimensions(&self, derivation: &dyn SleeveCapDerivation) -> Option<SleeveCapDimensions> {
        match self {
            SleeveCapResolution::Manual(dims) => Some(*dims),
            SleeveCapResolution::FromBust(bust) => derivation.derive(*bust),
            SleeveCapResolution::Incomplete => None,
        }
    }
}

/// Strategy turning a bust measurement into sleeve cap dimensions
pub trait SleeveCapDerivation {
    fn derive(&self, bust: Measurement) -> Option<SleeveCapDimensions>;
}

/// Derivation that never produces dimensions
///
/// No bust-to-sleeve-cap drafting rule is defined yet; callers plug their own
/// [`SleeveCapDerivation`] in when one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Underived;

impl SleeveCapDerivation for Underived {
    fn derive(&self, _bust: Measurement) -> Option<SleeveCapDimensions> {
        None
    }
}

/// Resolve the active sleeve cap inputs
pub fn resolve_sleeve_cap(spec: &SleeveCapSpec) -> SleeveCapResolution {
    match *spec {
        SleeveCapSpec::FromBust { bust: Some(bust) } => SleeveCapResolution::FromBust(bust),
        SleeveCapSpec::Manual {
            width: Some(width),
            height: Some(height),
        } => SleeveCapResolution::Manual(SleeveCapDimensions { width, height }),
        _ => SleeveCapResolution::Incomplete,
    }
}
