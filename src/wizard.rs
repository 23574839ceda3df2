//! Wizard session state and step gating
//!
//! A [`WizardSession`] owns everything one pass through the wizard collects.
//! It only exposes field-level setters; moving between steps is left to the
//! caller, which asks [`WizardSession::is_step_complete`] whether "Next" may
//! be enabled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ease::{resolve_ease, EaseChoice, EaseError, EaseSelection, EffectiveEase, Finishing, SeamAllowance};
use crate::geometry::{DiagramConfig, DiagramGeometry};
use crate::measurement::{MeasurementField, MeasurementSet, UnitSystem};
use crate::sleeve_cap::{resolve_sleeve_cap, SleeveCapMode, SleeveCapResolution, SleeveCapSpec};

/// Sleeve styles offered in the first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    BasicSleeve,
    PuffSleeve,
    BellSleeve,
    CapSleeve,
}

impl PatternType {
    pub const ALL: [PatternType; 4] = [
        PatternType::BasicSleeve,
        PatternType::PuffSleeve,
        PatternType::BellSleeve,
        PatternType::CapSleeve,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternType::BasicSleeve => "Basic Sleeve",
            PatternType::PuffSleeve => "Puff Sleeve",
            PatternType::BellSleeve => "Bell Sleeve",
            PatternType::CapSleeve => "Cap Sleeve",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternType::BasicSleeve => "Classic fitted sleeve pattern",
            PatternType::PuffSleeve => "Voluminous romantic sleeve",
            PatternType::BellSleeve => "Flared from elbow down",
            PatternType::CapSleeve => "Short, shoulder-covering sleeve",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    PatternType,
    ArmMeasurements,
    SleeveCap,
    Customization,
    Generate,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::PatternType,
        WizardStep::ArmMeasurements,
        WizardStep::SleeveCap,
        WizardStep::Customization,
        WizardStep::Generate,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PatternType => "Pattern Type",
            WizardStep::ArmMeasurements => "Measurements",
            WizardStep::SleeveCap => "Sleeve Cap",
            WizardStep::Customization => "Customization",
            WizardStep::Generate => "Generate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::PatternType => "Choose what you want to create",
            WizardStep::ArmMeasurements => "Enter your measurements",
            WizardStep::SleeveCap => "Set your sleeve cap dimensions",
            WizardStep::Customization => "Customize your pattern",
            WizardStep::Generate => "Create your pattern",
        }
    }

    /// One-based position shown in the progress display
    pub fn number(&self) -> usize {
        *self as usize + 1
    }
}

/// Everything collected during one pass through the wizard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardSession {
    pattern: Option<PatternType>,
    measurements: MeasurementSet,
    sleeve_cap_mode: SleeveCapMode,
    ease: EaseSelection,
    finishing: Finishing,
}

impl WizardSession {
    /// Start an empty session in `unit`
    pub fn new(unit: UnitSystem) -> Self {
        Self {
            measurements: MeasurementSet::new(unit),
            ..Self::default()
        }
    }

    pub fn unit(&self) -> UnitSystem {
        self.measurements.unit()
    }

    /// Switch units; entered numbers are kept as typed
    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.measurements.set_unit(unit);
    }

    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit().toggled());
    }

    pub fn pattern(&self) -> Option<PatternType> {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: PatternType) {
        self.pattern = Some(pattern);
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    /// Apply a measurement field edit, see [`MeasurementSet::set_raw`]
    pub fn set_measurement(&mut self, field: MeasurementField, raw: &str) -> bool {
        self.measurements.set_raw(field, raw)
    }

    pub fn sleeve_cap_mode(&self) -> SleeveCapMode {
        self.sleeve_cap_mode
    }

    pub fn set_sleeve_cap_mode(&mut self, mode: SleeveCapMode) {
        self.sleeve_cap_mode = mode;
    }

    pub fn sleeve_cap_spec(&self) -> SleeveCapSpec {
        SleeveCapSpec::from_set(self.sleeve_cap_mode, &self.measurements)
    }

    pub fn ease(&self) -> &EaseSelection {
        &self.ease
    }

    pub fn set_ease_choice(&mut self, choice: EaseChoice) {
        self.ease.set_choice(choice);
    }

    pub fn set_negative_ease(&mut self, raw: &str) -> bool {
        self.ease.set_negative_ease_raw(raw)
    }

    pub fn finishing(&self) -> Finishing {
        self.finishing
    }

    pub fn set_seam_allowance(&mut self, allowance: SeamAllowance) {
        self.finishing.seam_allowance = allowance;
    }

    pub fn set_cutting_layout_guide(&mut self, enabled: bool) {
        self.finishing.cutting_layout_guide = enabled;
    }

    /// Resolve the ease in effect for the current unit system
    pub fn effective_ease(&self) -> Result<EffectiveEase, EaseError> {
        resolve_ease(&self.ease.spec(), self.unit())
    }

    pub fn sleeve_cap(&self) -> SleeveCapResolution {
        resolve_sleeve_cap(&self.sleeve_cap_spec())
    }

    /// Whether the wizard may advance past `step`
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::PatternType => self.pattern.is_some(),
            WizardStep::ArmMeasurements => {
                self.measurements.is_set(MeasurementField::ShoulderToElbow)
                    && self.measurements.is_set(MeasurementField::ShoulderToWrist)
            }
            WizardStep::SleeveCap => self.sleeve_cap().is_complete(),
            WizardStep::Customization => self.effective_ease().is_ok(),
            WizardStep::Generate => false,
        }
    }

    /// First step that still blocks advancing, if any
    pub fn first_incomplete_step(&self) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|step| *step != WizardStep::Generate)
            .find(|step| !self.is_step_complete(*step))
    }

    /// Arm diagram for the working measurements
    pub fn diagram(&self, config: &DiagramConfig) -> DiagramGeometry {
        DiagramGeometry::compute(&self.measurements, config)
    }

    /// Collect the derived pattern parameters
    pub fn summary(&self, config: &DiagramConfig) -> PatternSummary {
        PatternSummary {
            unit: self.unit(),
            pattern: self.pattern,
            diagram: self.diagram(config),
            sleeve_cap: self.sleeve_cap(),
            ease: self.effective_ease(),
            finishing: self.finishing,
            steps: WizardStep::ALL
                .into_iter()
                .map(|step| (step, self.is_step_complete(step)))
                .collect(),
        }
    }
}

/// Derived parameters of a session, as consumed by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSummary {
    pub unit: UnitSystem,
    pub pattern: Option<PatternType>,
    pub diagram: DiagramGeometry,
    pub sleeve_cap: SleeveCapResolution,
    pub ease: Result<EffectiveEase, EaseError>,
    pub finishing: Finishing,
    pub steps: Vec<(WizardStep, bool)>,
}

impl fmt::Display for PatternSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = self.pattern.map(|p| p.name()).unwrap_or("(none)");
        writeln!(f, "Pattern: {}", pattern)?;
        writeln!(f, "Units: {}", self.unit)?;
        writeln!(
            f,
            "Arm: shoulder to elbow {}, shoulder to wrist {}",
            self.diagram.shoulder_to_elbow.text(),
            self.diagram.shoulder_to_wrist.text()
        )?;
        let source = if self.diagram.elbow.used_fallback {
            "default"
        } else {
            "measured"
        };
        writeln!(
            f,
            "Elbow: x={:.2} ratio={:.4} ({})",
            self.diagram.elbow.x, self.diagram.elbow.ratio, source
        )?;
        match &self.sleeve_cap {
            SleeveCapResolution::Manual(dims) => writeln!(
                f,
                "Sleeve cap: width {}, height {}",
                dims.width, dims.height
            )?,
            SleeveCapResolution::FromBust(bust) => {
                writeln!(f, "Sleeve cap: from bust {}", bust)?
            }
            SleeveCapResolution::Incomplete => writeln!(f, "Sleeve cap: incomplete")?,
        }
        match &self.ease {
            Ok(ease) => writeln!(f, "Ease: {}", ease)?,
            Err(e) => writeln!(f, "Ease: invalid ({})", e)?,
        }
        writeln!(
            f,
            "Seam allowance: {}",
            self.finishing.seam_allowance.label(self.unit)
        )?;
        writeln!(
            f,
            "Cutting layout guide: {}",
            if self.finishing.cutting_layout_guide { "yes" } else { "no" }
        )?;
        for (step, complete) in &self.steps {
            writeln!(
                f,
                "Step {} {}: {}",
                step.number(),
                step.title(),
                if *complete { "complete" } else { "incomplete" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_blocks_every_step() {
        let session = WizardSession::new(UnitSystem::Inches);
        assert!(!session.is_step_complete(WizardStep::PatternType));
        assert!(!session.is_step_complete(WizardStep::ArmMeasurements));
        assert!(!session.is_step_complete(WizardStep::SleeveCap));
        // Regular ease is selected by default
        assert!(session.is_step_complete(WizardStep::Customization));
        assert_eq!(session.first_incomplete_step(), Some(WizardStep::PatternType));
    }

    #[test]
    fn test_arm_step_enables_after_both_measurements() {
        let mut session = WizardSession::new(UnitSystem::Inches);
        session.set_measurement(MeasurementField::ShoulderToElbow, "13");
        assert!(!session.is_step_complete(WizardStep::ArmMeasurements));
        session.set_measurement(MeasurementField::ShoulderToWrist, "24");
        assert!(session.is_step_complete(WizardStep::ArmMeasurements));
    }

    #[test]
    fn test_sleeve_cap_gate_follows_mode() {
        let mut session = WizardSession::new(UnitSystem::Inches);
        session.set_measurement(MeasurementField::Bust, "36");
        assert!(session.is_step_complete(WizardStep::SleeveCap));

        session.set_sleeve_cap_mode(SleeveCapMode::Manual);
        assert!(!session.is_step_complete(WizardStep::SleeveCap));
        session.set_measurement(MeasurementField::SleeveCapWidth, "14");
        session.set_measurement(MeasurementField::SleeveCapHeight, "5");
        assert!(session.is_step_complete(WizardStep::SleeveCap));

        session.set_sleeve_cap_mode(SleeveCapMode::FromBust);
        assert_eq!(session.measurements().raw(MeasurementField::Bust), Some("36"));
    }

    #[test]
    fn test_customization_gate_with_stretch() {
        let mut session = WizardSession::new(UnitSystem::Inches);
        session.set_ease_choice(EaseChoice::Stretch);
        assert!(!session.is_step_complete(WizardStep::Customization));
        session.set_negative_ease("60");
        assert!(!session.is_step_complete(WizardStep::Customization));
        session.set_negative_ease("25");
        assert!(session.is_step_complete(WizardStep::Customization));
    }

    #[test]
    fn test_generate_never_completes() {
        let mut session = WizardSession::new(UnitSystem::Inches);
        session.set_pattern(PatternType::BellSleeve);
        session.set_measurement(MeasurementField::ShoulderToElbow, "13");
        session.set_measurement(MeasurementField::ShoulderToWrist, "24");
        session.set_measurement(MeasurementField::Bust, "36");
        assert_eq!(session.first_incomplete_step(), None);
        assert!(!session.is_step_complete(WizardStep::Generate));
    }

    #[test]
    fn test_toggle_unit() {
        let mut session = WizardSession::new(UnitSystem::Inches);
        session.set_measurement(MeasurementField::ShoulderToElbow, "13");
        session.toggle_unit();
        assert_eq!(session.unit(), UnitSystem::Centimeters);
        assert_eq!(
            session.measurements().get(MeasurementField::ShoulderToElbow).map(|m| m.value),
            Some(13.0)
        );
    }

    #[test]
    fn test_pattern_types_in_display_order() {
        let names: Vec<_> = PatternType::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Basic Sleeve", "Puff Sleeve", "Bell Sleeve", "Cap Sleeve"]);
        assert_eq!(PatternType::ALL[2].description(), "Flared from elbow down");
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::PatternType.number(), 1);
        assert_eq!(WizardStep::Generate.number(), 5);
        assert_eq!(WizardStep::SleeveCap.title(), "Sleeve Cap");
    }

    #[test]
    fn test_summary_steps_listed_in_order() {
        let session = WizardSession::new(UnitSystem::Inches);
        let summary = session.summary(&DiagramConfig::default());
        let steps: Vec<_> = summary.steps.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, WizardStep::ALL.to_vec());
    }
}
