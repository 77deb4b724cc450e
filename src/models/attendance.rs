//! Attendance record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// An explicit presence or absence marker for one child, date and category.
///
/// Attendance is opt-out: a slot without a record is billed as present, so a
/// record is only needed to override that default. Records are created by
/// staff marking attendance and are never produced by the billing engine.
///
/// # Example
///
/// ```
/// use daycare_billing::models::{AttendanceRecord, ServiceCategory};
/// use chrono::NaiveDate;
///
/// let absent = AttendanceRecord::absent(
///     "child_001",
///     NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
///     ServiceCategory::Lunch,
/// );
/// assert!(!absent.present);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The child this record belongs to.
    pub child_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The service slot the record applies to.
    pub category: ServiceCategory,
    /// Whether the child was present for the slot.
    pub present: bool,
}

impl AttendanceRecord {
    /// Creates a record marking the child absent for one slot.
    pub fn absent(child_id: impl Into<String>, date: NaiveDate, category: ServiceCategory) -> Self {
        Self {
            child_id: child_id.into(),
            date,
            category,
            present: false,
        }
    }

    /// Creates a record explicitly marking the child present for one slot.
    pub fn present(child_id: impl Into<String>, date: NaiveDate, category: ServiceCategory) -> Self {
        Self {
            child_id: child_id.into(),
            date,
            category,
            present: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_attendance_record() {
        let json = r#"{
            "child_id": "child_001",
            "date": "2026-03-04",
            "category": "lunch",
            "present": false
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.child_id, "child_001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(record.category, ServiceCategory::Lunch);
        assert!(!record.present);
    }

    #[test]
    fn test_constructors_set_presence() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert!(!AttendanceRecord::absent("c", date, ServiceCategory::Breakfast).present);
        assert!(AttendanceRecord::present("c", date, ServiceCategory::Breakfast).present);
    }
}
