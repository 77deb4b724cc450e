//! Rate schedule model.
//!
//! This module contains the [`RateSchedule`] type: the per-day price of one
//! service category for the children of one group, effective over an
//! inclusive date interval.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// A priced entry for one category, scoped to a group.
///
/// Both validity bounds are inclusive. A missing bound is open-ended, so a
/// schedule with neither bound applies on every date. Several schedules for
/// the same group and category may overlap; the rate resolver decides which
/// one wins.
///
/// # Example
///
/// ```
/// use daycare_billing::models::{RateSchedule, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule {
///     id: "rate_lunch_2026".to_string(),
///     group_id: "ladybirds".to_string(),
///     category: ServiceCategory::Lunch,
///     amount: Decimal::from_str("10.00").unwrap(),
///     valid_from: NaiveDate::from_ymd_opt(2026, 1, 1),
///     valid_to: NaiveDate::from_ymd_opt(2026, 12, 31),
///     currency: None,
/// };
///
/// assert!(schedule.is_valid_on(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert!(schedule.is_valid_on(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()));
/// assert!(!schedule.is_valid_on(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Unique identifier for the schedule.
    pub id: String,
    /// The group whose children this price applies to.
    pub group_id: String,
    /// The service category being priced.
    pub category: ServiceCategory,
    /// The amount charged per attended working day.
    pub amount: Decimal,
    /// First day the schedule applies (inclusive). `None` means open start.
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    /// Last day the schedule applies (inclusive). `None` means open end.
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    /// Optional currency label, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl RateSchedule {
    /// Checks if the schedule is effective on the given date.
    ///
    /// The check is inclusive of both bounds. A missing bound opens only its
    /// own side; the other bound still applies.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| date >= from)
            && self.valid_to.is_none_or(|to| date <= to)
    }

    /// Returns true unless `valid_from` is after `valid_to`.
    ///
    /// An inverted interval can never match any date.
    pub fn is_well_formed(&self) -> bool {
        match (self.valid_from, self.valid_to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>) -> RateSchedule {
        RateSchedule {
            id: "rate_001".to_string(),
            group_id: "ladybirds".to_string(),
            category: ServiceCategory::Lunch,
            amount: dec("10.00"),
            valid_from,
            valid_to,
            currency: None,
        }
    }

    /// RS-001: both bounds are inclusive
    #[test]
    fn test_bounds_are_inclusive() {
        let s = schedule(Some(date(2026, 3, 1)), Some(date(2026, 3, 31)));
        assert!(s.is_valid_on(date(2026, 3, 1)));
        assert!(s.is_valid_on(date(2026, 3, 31)));
        assert!(!s.is_valid_on(date(2026, 2, 28)));
        assert!(!s.is_valid_on(date(2026, 4, 1)));
    }

    /// RS-002: missing bounds are open-ended
    #[test]
    fn test_open_bounds() {
        let open_start = schedule(None, Some(date(2026, 3, 31)));
        assert!(open_start.is_valid_on(date(1999, 1, 1)));
        assert!(!open_start.is_valid_on(date(2026, 4, 1)));

        let open_end = schedule(Some(date(2026, 3, 1)), None);
        assert!(open_end.is_valid_on(date(2099, 12, 31)));
        assert!(!open_end.is_valid_on(date(2026, 2, 28)));

        let unbounded = schedule(None, None);
        assert!(unbounded.is_valid_on(date(2026, 6, 15)));
    }

    #[test]
    fn test_inverted_interval_is_not_well_formed() {
        let s = schedule(Some(date(2026, 4, 1)), Some(date(2026, 3, 1)));
        assert!(!s.is_well_formed());
        assert!(!s.is_valid_on(date(2026, 3, 15)));
    }

    #[test]
    fn test_single_day_interval_is_well_formed() {
        let s = schedule(Some(date(2026, 3, 2)), Some(date(2026, 3, 2)));
        assert!(s.is_well_formed());
        assert!(s.is_valid_on(date(2026, 3, 2)));
    }

    #[test]
    fn test_deserialize_without_bounds() {
        let json = r#"{
            "id": "rate_breakfast",
            "group_id": "ladybirds",
            "category": "breakfast",
            "amount": "4.50"
        }"#;

        let s: RateSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(s.amount, dec("4.50"));
        assert_eq!(s.valid_from, None);
        assert_eq!(s.valid_to, None);
    }

    #[test]
    fn test_serialize_amount_as_string() {
        let s = schedule(Some(date(2026, 1, 1)), None);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"amount\":\"10.00\""));
        assert!(json.contains("\"valid_from\":\"2026-01-01\""));
        assert!(!json.contains("currency"));
    }
}
