//! Attendance lookup.
//!
//! Billing is opt-out: a child is assumed present for every (date, category)
//! slot unless an explicit attendance record says otherwise.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, ServiceCategory};

type SlotKey = (String, NaiveDate, ServiceCategory);

/// Presence lookup over a pre-fetched attendance snapshot.
///
/// When the snapshot holds more than one record for the same
/// (child, date, category), an explicit absence wins.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::AttendanceLookup;
/// use daycare_billing::models::{AttendanceRecord, ServiceCategory};
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let lookup = AttendanceLookup::new(vec![AttendanceRecord::absent(
///     "child_001",
///     monday,
///     ServiceCategory::Lunch,
/// )]);
///
/// assert!(!lookup.presence_for("child_001", monday, ServiceCategory::Lunch));
/// // No record: present by default
/// assert!(lookup.presence_for("child_001", monday, ServiceCategory::Breakfast));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceLookup {
    slots: HashMap<SlotKey, bool>,
}

impl AttendanceLookup {
    /// Builds a lookup from attendance records.
    pub fn new(records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        let mut slots: HashMap<SlotKey, bool> = HashMap::new();
        for record in records {
            slots
                .entry((record.child_id, record.date, record.category))
                .and_modify(|present| *present &= record.present)
                .or_insert(record.present);
        }
        Self { slots }
    }

    /// Returns the explicit record for a slot, if one exists.
    pub fn explicit(
        &self,
        child_id: &str,
        date: NaiveDate,
        category: ServiceCategory,
    ) -> Option<bool> {
        self.slots
            .get(&(child_id.to_string(), date, category))
            .copied()
    }

    /// Returns whether the child is treated as present for a slot.
    pub fn presence_for(&self, child_id: &str, date: NaiveDate, category: ServiceCategory) -> bool {
        self.explicit(child_id, date, category).unwrap_or(true)
    }

    /// Returns the number of distinct slots with an explicit record.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot has an explicit record.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
