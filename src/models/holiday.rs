//! Holiday period model.
//!
//! This module contains the [`HolidayPeriod`] and [`HolidayKind`] types used to
//! describe the facility's closures. No charges accrue on any date inside a
//! holiday period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of closure a holiday period represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A public or religious holiday.
    Holiday,
    /// Any other facility day off (staff training, summer break, ...).
    DayOff,
}

/// An inclusive date interval during which a facility is closed.
///
/// Multiple periods may be defined per year and they may overlap.
///
/// # Example
///
/// ```
/// use daycare_billing::models::{HolidayKind, HolidayPeriod};
/// use chrono::NaiveDate;
///
/// let winter_break = HolidayPeriod {
///     id: "winter_break".to_string(),
///     facility_id: "sunny_days".to_string(),
///     name: "Winter break".to_string(),
///     start: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
///     kind: HolidayKind::DayOff,
///     description: None,
/// };
///
/// assert!(winter_break.contains(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()));
/// assert!(winter_break.contains(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()));
/// assert_eq!(winter_break.len_days(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPeriod {
    /// Unique identifier for the period.
    pub id: String,
    /// The facility that is closed.
    pub facility_id: String,
    /// The name of the closure (e.g., "Christmas Day").
    pub name: String,
    /// First closed day (inclusive).
    pub start: NaiveDate,
    /// Last closed day (inclusive).
    pub end: NaiveDate,
    /// Whether this is a holiday or a generic day off.
    pub kind: HolidayKind,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HolidayPeriod {
    /// Checks if a given date falls within this period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if this period shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start <= to && self.end >= from
    }

    /// Returns the number of calendar days in the period, or 0 if inverted.
    pub fn len_days(&self) -> i64 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(start: NaiveDate, end: NaiveDate) -> HolidayPeriod {
        HolidayPeriod {
            id: "hp_001".to_string(),
            facility_id: "sunny_days".to_string(),
            name: "Christmas".to_string(),
            start,
            end,
            kind: HolidayKind::Holiday,
            description: None,
        }
    }

    /// HP-001: contains is inclusive at both ends
    #[test]
    fn test_contains_inclusive() {
        let p = period(date(2026, 12, 24), date(2026, 12, 26));
        assert!(p.contains(date(2026, 12, 24)));
        assert!(p.contains(date(2026, 12, 25)));
        assert!(p.contains(date(2026, 12, 26)));
        assert!(!p.contains(date(2026, 12, 23)));
        assert!(!p.contains(date(2026, 12, 27)));
    }

    /// HP-002: overlap with a query range
    #[test]
    fn test_overlaps() {
        let p = period(date(2026, 12, 24), date(2027, 1, 2));
        assert!(p.overlaps(date(2026, 12, 1), date(2026, 12, 31)));
        assert!(p.overlaps(date(2027, 1, 1), date(2027, 1, 31)));
        assert!(p.overlaps(date(2027, 1, 2), date(2027, 1, 2)));
        assert!(!p.overlaps(date(2027, 1, 3), date(2027, 1, 31)));
        assert!(!p.overlaps(date(2026, 11, 1), date(2026, 12, 23)));
    }

    #[test]
    fn test_len_days() {
        assert_eq!(period(date(2026, 5, 1), date(2026, 5, 1)).len_days(), 1);
        assert_eq!(period(date(2026, 12, 24), date(2027, 1, 2)).len_days(), 10);
        assert_eq!(period(date(2026, 5, 2), date(2026, 5, 1)).len_days(), 0);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&HolidayKind::DayOff).unwrap(),
            "\"day_off\""
        );
        let kind: HolidayKind = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(kind, HolidayKind::Holiday);
    }

    #[test]
    fn test_deserialize_holiday_period() {
        let json = r#"{
            "id": "may_day",
            "facility_id": "sunny_days",
            "name": "Labour Day",
            "start": "2026-05-01",
            "end": "2026-05-01",
            "kind": "holiday",
            "description": "Public holiday"
        }"#;

        let p: HolidayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Labour Day");
        assert_eq!(p.description.as_deref(), Some("Public holiday"));
        assert!(p.contains(date(2026, 5, 1)));
    }
}
