//! Session files
//!
//! A session file is a TOML snapshot of what a user typed into the wizard.
//! Measurements are kept as text and replayed through the session's field
//! setters, so a value that would have been rejected in the form is rejected
//! here too.

use std::path::Path;

use serde::Deserialize;

use crate::ease::{EaseChoice, Finishing};
use crate::error::SessionError;
use crate::measurement::{MeasurementField, UnitSystem};
use crate::sleeve_cap::SleeveCapMode;
use crate::wizard::{PatternType, WizardSession};

/// TOML structure for deserializing sessions
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionFile {
    #[serde(default)]
    pub units: UnitSystem,
    pub pattern: Option<PatternType>,
    #[serde(default)]
    pub arm: ArmSection,
    #[serde(default)]
    pub sleeve_cap: SleeveCapSection,
    #[serde(default)]
    pub ease: EaseSection,
    #[serde(default)]
    pub finishing: Finishing,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArmSection {
    pub shoulder_to_elbow: Option<String>,
    pub shoulder_to_wrist: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SleeveCapSection {
    #[serde(default)]
    pub mode: SleeveCapMode,
    pub bust: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EaseSection {
    #[serde(default)]
    pub choice: EaseChoice,
    pub negative_ease_percent: Option<String>,
}

impl SessionFile {
    /// Load a session from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a session from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SessionError> {
        Ok(toml::from_str(content)?)
    }

    /// Replay the file into a fresh wizard session
    pub fn into_session(self) -> WizardSession {
        let mut session = WizardSession::new(self.units);

        if let Some(pattern) = self.pattern {
            session.set_pattern(pattern);
        }

        let fields = [
            (MeasurementField::ShoulderToElbow, self.arm.shoulder_to_elbow),
            (MeasurementField::ShoulderToWrist, self.arm.shoulder_to_wrist),
            (MeasurementField::Bust, self.sleeve_cap.bust),
            (MeasurementField::SleeveCapWidth, self.sleeve_cap.width),
            (MeasurementField::SleeveCapHeight, self.sleeve_cap.height),
        ];
        for (field, raw) in fields {
            if let Some(raw) = raw {
                if !session.set_measurement(field, &raw) {
                    tracing::warn!(field = %field, value = %raw, "ignoring non-numeric measurement");
                }
            }
        }

        session.set_sleeve_cap_mode(self.sleeve_cap.mode);

        session.set_ease_choice(self.ease.choice);
        if let Some(raw) = self.ease.negative_ease_percent {
            if !session.set_negative_ease(&raw) {
                tracing::warn!(value = %raw, "ignoring non-numeric negative ease");
            }
        }

        session.set_seam_allowance(self.finishing.seam_allowance);
        session.set_cutting_layout_guide(self.finishing.cutting_layout_guide);

        session
    }
}

/// Parse a TOML session straight into a [`WizardSession`]
pub fn load_session(content: &str) -> Result<WizardSession, SessionError> {
    SessionFile::from_str(content).map(SessionFile::into_session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::{EffectiveEase, SeamAllowance};
    use crate::wizard::WizardStep;

    #[test]
    fn test_empty_file_is_default_session() {
        let session = load_session("").unwrap();
        assert_eq!(session, WizardSession::new(UnitSystem::Inches));
    }

    #[test]
    fn test_full_session() {
        let toml_str = r#"
units = "centimeters"
pattern = "puff-sleeve"

[arm]
shoulder_to_elbow = "33"
shoulder_to_wrist = "61"

[sleeve_cap]
mode = "manual"
bust = "92"
width = "36"
height = "13"

[ease]
choice = "stretch"
negative_ease_percent = "10"

[finishing]
seam_allowance = "five-eighths-inch"
cutting_layout_guide = true
"#;
        let session = load_session(toml_str).unwrap();
        assert_eq!(session.unit(), UnitSystem::Centimeters);
        assert_eq!(session.pattern(), Some(PatternType::PuffSleeve));
        assert_eq!(session.sleeve_cap_mode(), SleeveCapMode::Manual);
        assert_eq!(session.measurements().raw(MeasurementField::Bust), Some("92"));
        assert_eq!(
            session.effective_ease(),
            Ok(EffectiveEase::Negative { percent: 10.0 })
        );
        assert_eq!(session.finishing().seam_allowance, SeamAllowance::FiveEighthsInch);
        assert!(session.finishing().cutting_layout_guide);
        for step in [
            WizardStep::PatternType,
            WizardStep::ArmMeasurements,
            WizardStep::SleeveCap,
            WizardStep::Customization,
        ] {
            assert!(session.is_step_complete(step), "{:?}", step);
        }
    }

    #[test]
    fn test_unit_and_mode_aliases() {
        let toml_str = r#"
units = "cm"
[sleeve_cap]
mode = "bust"
bust = "92"
"#;
        let session = load_session(toml_str).unwrap();
        assert_eq!(session.unit(), UnitSystem::Centimeters);
        assert_eq!(session.sleeve_cap_mode(), SleeveCapMode::FromBust);
        assert!(session.is_step_complete(WizardStep::SleeveCap));
    }

    #[test]
    fn test_non_numeric_measurement_is_dropped() {
        let toml_str = r#"
[arm]
shoulder_to_elbow = "thirteen"
shoulder_to_wrist = "24"
"#;
        let session = load_session(toml_str).unwrap();
        assert!(!session.measurements().is_set(MeasurementField::ShoulderToElbow));
        assert!(!session.is_step_complete(WizardStep::ArmMeasurements));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let result = load_session("colour = \"red\"");
        assert!(matches!(result, Err(SessionError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = SessionFile::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
