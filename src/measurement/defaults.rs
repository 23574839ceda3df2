//! Canonical per-unit defaults for unset measurements

use super::{MeasurementField, UnitSystem};

/// Default text for a field in a unit system
///
/// Each unit has its own table entry; centimeter defaults are not derived
/// from the inch ones.
pub fn default_value(field: MeasurementField, unit: UnitSystem) -> &'static str {
    match (field, unit) {
        (MeasurementField::ShoulderToElbow, UnitSystem::Inches) => "13",
        (MeasurementField::ShoulderToElbow, UnitSystem::Centimeters) => "33",
        (MeasurementField::ShoulderToWrist, UnitSystem::Inches) => "24",
        (MeasurementField::ShoulderToWrist, UnitSystem::Centimeters) => "61",
        (MeasurementField::Bust, UnitSystem::Inches) => "36",
        (MeasurementField::Bust, UnitSystem::Centimeters) => "92",
        (MeasurementField::SleeveCapWidth, UnitSystem::Inches) => "14",
        (MeasurementField::SleeveCapWidth, UnitSystem::Centimeters) => "36",
        (MeasurementField::SleeveCapHeight, UnitSystem::Inches) => "5",
        (MeasurementField::SleeveCapHeight, UnitSystem::Centimeters) => "13",
    }
}

/// Resolve the working measurement for a field
///
/// A value the user entered is returned verbatim; otherwise the canonical
/// default for `(field, unit)` is substituted so the diagram always has
/// something to draw.
pub fn resolve_working_measurement(
    user_value: Option<&str>,
    field: MeasurementField,
    unit: UnitSystem,
) -> String {
    match user_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => default_value(field, unit).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_defaults_inches() {
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToElbow, UnitSystem::Inches),
            "13"
        );
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToWrist, UnitSystem::Inches),
            "24"
        );
    }

    #[test]
    fn test_arm_defaults_centimeters() {
        let unit = UnitSystem::Centimeters;
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToElbow, unit),
            "33"
        );
        assert_eq!(
            resolve_working_measurement(None, MeasurementField::ShoulderToWrist, unit),
            "61"
        );
    }

    #[test]
    fn test_sleeve_cap_defaults() {
        assert_eq!(default_value(MeasurementField::Bust, UnitSystem::Centimeters), "92");
        assert_eq!(default_value(MeasurementField::SleeveCapWidth, UnitSystem::Inches), "14");
        assert_eq!(default_value(MeasurementField::SleeveCapHeight, UnitSystem::Centimeters), "13");
    }

    #[test]
    fn test_user_value_is_verbatim() {
        let resolved = resolve_working_measurement(
            Some("12.75"),
            MeasurementField::ShoulderToElbow,
            UnitSystem::Centimeters,
        );
        assert_eq!(resolved, "12.75");
    }

    #[test]
    fn test_blank_user_value_uses_default() {
        let resolved =
            resolve_working_measurement(Some("  "), MeasurementField::ShoulderToWrist, UnitSystem::Inches);
        assert_eq!(resolved, "24");
    }
}
