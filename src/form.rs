//! The five-slot form and its lookup rules.

use crate::reference::{KeyRange, ReferenceTables, Table};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named field of the form. The identifiers are the ones used on screen
/// and in the API documentation: `1a`, `1b`, `2a`, `2b`, `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// SpO2 key typed by the user (`1a`).
    SpO2Key,
    /// Numerator value looked up from `1a` (`1b`).
    SpO2Value,
    /// O2 flow key typed by the user (`2a`).
    FlowKey,
    /// Denominator value looked up from `2a` (`2b`).
    FlowValue,
    /// Calculated ratio (`3`).
    Ratio,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::SpO2Key,
        Slot::SpO2Value,
        Slot::FlowKey,
        Slot::FlowValue,
        Slot::Ratio,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Slot::SpO2Key => "1a",
            Slot::SpO2Value => "1b",
            Slot::FlowKey => "2a",
            Slot::FlowValue => "2b",
            Slot::Ratio => "3",
        }
    }

    /// For driver slots: the table they look up in and the slot the result
    /// lands in.
    pub fn lookup_target(self) -> Option<(Table, Slot)> {
        match self {
            Slot::SpO2Key => Some((Table::Numerator, Slot::SpO2Value)),
            Slot::FlowKey => Some((Table::Denominator, Slot::FlowValue)),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slot '{0}' (expected one of 1a, 1b, 2a, 2b, 3)")]
pub struct SlotParseError(pub String);

impl FromStr for Slot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| SlotParseError(s.to_string()))
    }
}

/// A typed key had no match in its table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid number. {table} should be between {} and {}", .range.min, .range.max)]
    OutOfRange { table: Table, range: KeyRange },
    #[error("Invalid number. No {} values are available", .table.label().to_lowercase())]
    NoValues { table: Table },
}

impl ValidationError {
    fn unmatched(table: Table, range: Option<KeyRange>) -> Self {
        match range {
            Some(range) => ValidationError::OutOfRange { table, range },
            None => ValidationError::NoValues { table },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    spo2_key: String,
    spo2_value: String,
    flow_key: String,
    flow_value: String,
    ratio: String,
}

impl FormState {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::SpO2Key => &self.spo2_key,
            Slot::SpO2Value => &self.spo2_value,
            Slot::FlowKey => &self.flow_key,
            Slot::FlowValue => &self.flow_value,
            Slot::Ratio => &self.ratio,
        }
    }

    /// Copy of this form with one slot overwritten verbatim.
    pub fn with(&self, slot: Slot, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match slot {
            Slot::SpO2Key => next.spo2_key = value,
            Slot::SpO2Value => next.spo2_value = value,
            Slot::FlowKey => next.flow_key = value,
            Slot::FlowValue => next.flow_value = value,
            Slot::Ratio => next.ratio = value,
        }
        next
    }

    /// Both looked-up values are present.
    pub fn can_calculate(&self) -> bool {
        !self.spo2_value.is_empty() && !self.flow_value.is_empty()
    }

    /// Apply a user edit.
    ///
    /// Driver slots (`1a`, `2a`) look the new value up in their table: an
    /// empty value clears both the driver and its dependent slot, a match
    /// fills the dependent slot, and a miss keeps the typed text but leaves
    /// the dependent slot as it was and reports the valid range. Every
    /// other slot is stored as-is.
    pub fn edit(
        &self,
        slot: Slot,
        value: &str,
        tables: &ReferenceTables,
    ) -> (FormState, Option<ValidationError>) {
        let Some((table, dependent)) = slot.lookup_target() else {
            return (self.with(slot, value), None);
        };

        if value.is_empty() {
            return (self.with(slot, "").with(dependent, ""), None);
        }

        let reference = tables.table(table);
        match reference.lookup(value) {
            Some(entry) => (self.with(slot, value).with(dependent, entry.value.as_str()), None),
            None => (
                self.with(slot, value),
                Some(ValidationError::unmatched(table, reference.range())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceEntry;

    fn tables() -> ReferenceTables {
        ReferenceTables::new(
            vec![
                ReferenceEntry::new("88", "60"),
                ReferenceEntry::new("90", "64"),
                ReferenceEntry::new("90", "99"),
                ReferenceEntry::new("95", "80"),
            ],
            vec![
                ReferenceEntry::new("1", "0.24"),
                ReferenceEntry::new("2", "0.28"),
            ],
        )
    }

    #[test]
    fn slot_ids_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(slot.id().parse::<Slot>(), Ok(slot));
        }
        assert_eq!(
            "4".parse::<Slot>(),
            Err(SlotParseError("4".to_string()))
        );
    }

    #[test]
    fn matching_key_fills_dependent_slot() {
        let tables = tables();
        for entry in tables.numerators.entries() {
            let (form, err) = FormState::default().edit(Slot::SpO2Key, &entry.key, &tables);
            assert_eq!(err, None);
            assert_eq!(form.get(Slot::SpO2Key), entry.key);
            // Duplicate keys resolve to their first entry.
            let expected = tables.numerators.lookup(&entry.key).unwrap();
            assert_eq!(form.get(Slot::SpO2Value), expected.value);
        }

        let (form, _) = FormState::default().edit(Slot::FlowKey, "2", &tables);
        assert_eq!(form.get(Slot::FlowValue), "0.28");
        assert_eq!(form.get(Slot::SpO2Value), "");
    }

    #[test]
    fn miss_keeps_previous_dependent_value() {
        let tables = tables();
        let (form, _) = FormState::default().edit(Slot::SpO2Key, "90", &tables);
        let (form, err) = form.edit(Slot::SpO2Key, "91", &tables);

        assert_eq!(form.get(Slot::SpO2Key), "91");
        assert_eq!(form.get(Slot::SpO2Value), "64");
        let message = err.unwrap().to_string();
        assert_eq!(message, "Invalid number. Numerator should be between 88 and 95");
    }

    #[test]
    fn miss_on_denominator_names_denominator_range() {
        let (form, err) = FormState::default().edit(Slot::FlowKey, "02", &tables());
        assert_eq!(form.get(Slot::FlowKey), "02");
        assert_eq!(form.get(Slot::FlowValue), "");
        assert_eq!(
            err.unwrap().to_string(),
            "Invalid number. Denominator should be between 1 and 2"
        );
    }

    #[test]
    fn miss_against_empty_table_says_so() {
        let (_, err) = FormState::default().edit(Slot::SpO2Key, "90", &ReferenceTables::default());
        assert_eq!(
            err.unwrap().to_string(),
            "Invalid number. No numerator values are available"
        );
    }

    #[test]
    fn clearing_driver_clears_dependent() {
        let tables = tables();
        let (form, _) = FormState::default().edit(Slot::SpO2Key, "95", &tables);
        let (form, err) = form.edit(Slot::SpO2Key, "", &tables);
        assert_eq!(err, None);
        assert_eq!(form.get(Slot::SpO2Key), "");
        assert_eq!(form.get(Slot::SpO2Value), "");

        // Clearing also wins over a dependent value left behind by a miss.
        let (form, _) = form.edit(Slot::SpO2Key, "88", &tables);
        let (form, _) = form.edit(Slot::SpO2Key, "8", &tables);
        let (form, _) = form.edit(Slot::SpO2Key, "", &tables);
        assert_eq!(form.get(Slot::SpO2Value), "");
    }

    #[test]
    fn non_driver_slots_store_verbatim() {
        let (form, err) = FormState::default().edit(Slot::Ratio, " anything ", &tables());
        assert_eq!(err, None);
        assert_eq!(form.get(Slot::Ratio), " anything ");
    }

    #[test]
    fn repeated_edit_is_idempotent() {
        let tables = tables();
        for (slot, value) in [(Slot::SpO2Key, "90"), (Slot::SpO2Key, "7"), (Slot::FlowKey, "")] {
            let once = FormState::default().edit(slot, value, &tables);
            let twice = once.0.edit(slot, value, &tables);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn can_calculate_needs_both_values() {
        let tables = tables();
        let (form, _) = FormState::default().edit(Slot::SpO2Key, "88", &tables);
        assert!(!form.can_calculate());
        let (form, _) = form.edit(Slot::FlowKey, "1", &tables);
        assert!(form.can_calculate());
    }
}
