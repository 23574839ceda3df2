//! Per-session measurement storage

use std::collections::BTreeMap;

use super::{parse_number, resolve_working_measurement, Measurement, MeasurementField, UnitSystem};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    raw: String,
    value: f64,
}

/// Measurements entered during one wizard session
///
/// Every stored field holds the text the user typed and its parsed value.
/// An edit that does not parse is rejected and leaves the previous entry in
/// place, so the set never holds a half-valid field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    unit: UnitSystem,
    entries: BTreeMap<MeasurementField, Entry>,
}

impl MeasurementSet {
    /// Create an empty set interpreted in `unit`
    pub fn new(unit: UnitSystem) -> Self {
        Self {
            unit,
            entries: BTreeMap::new(),
        }
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Switch the unit system
    ///
    /// Stored numbers are reinterpreted in the new unit, not converted:
    /// "13" inches becomes "13" cm.
    pub fn set_unit(&mut self, unit: UnitSystem) {
        if unit != self.unit {
            tracing::debug!(from = %self.unit, to = %unit, "unit system changed without conversion");
        }
        self.unit = unit;
    }

    /// Apply a field edit
    ///
    /// Blank text clears the field. Parseable text replaces it. Anything else
    /// is rejected and `false` is returned with the set unchanged.
    pub fn set_raw(&mut self, field: MeasurementField, raw: &str) -> bool {
        if raw.trim().is_empty() {
            self.clear(field);
            return true;
        }

        match parse_number(raw) {
            Some(value) => {
                self.entries.insert(
                    field,
                    Entry {
                        raw: raw.trim().to_string(),
                        value,
                    },
                );
                true
            }
            None => {
                tracing::debug!(field = %field, raw, "rejected non-numeric measurement");
                false
            }
        }
    }

    /// Remove a field
    pub fn clear(&mut self, field: MeasurementField) {
        self.entries.remove(&field);
    }

    /// Parsed measurement in the current unit system
    pub fn get(&self, field: MeasurementField) -> Option<Measurement> {
        self.entries
            .get(&field)
            .map(|e| Measurement::new(e.value, self.unit))
    }

    /// Text the user entered for a field
    pub fn raw(&self, field: MeasurementField) -> Option<&str> {
        self.entries.get(&field).map(|e| e.raw.as_str())
    }

    pub fn is_set(&self, field: MeasurementField) -> bool {
        self.entries.contains_key(&field)
    }

    /// Working text for a field: the entered value or the unit's default
    pub fn working(&self, field: MeasurementField) -> String {
        resolve_working_measurement(self.raw(field), field, self.unit)
    }

    /// Iterate over the fields that hold a value
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementField, Measurement)> + '_ {
        self.entries
            .iter()
            .map(|(field, e)| (*field, Measurement::new(e.value, self.unit)))
    }
}
