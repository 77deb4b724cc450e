//! Working day detection.
//!
//! This module decides whether a calendar date is a chargeable working day for
//! a facility: not one of the two weekly rest days and not inside any of the
//! facility's holiday periods. Counting and next/previous lookups are derived
//! by stepping one day at a time through the same predicate.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayKind, HolidayPeriod};

use super::DateRange;

/// The weekly rest days: Saturday and Sunday (days 6 and 7 of a Monday-first week).
pub const REST_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// The classification of a calendar date for billing.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::DayKind;
///
/// assert!(DayKind::Working.is_working());
/// assert!(!DayKind::RestDay.is_working());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DayKind {
    /// A chargeable day.
    Working,
    /// Saturday or Sunday.
    RestDay,
    /// A weekday inside a holiday period.
    Holiday {
        /// Name of the covering period.
        name: String,
        /// Kind of the covering period.
        kind: HolidayKind,
    },
}

impl DayKind {
    /// Returns true for [`DayKind::Working`].
    pub fn is_working(&self) -> bool {
        matches!(self, DayKind::Working)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working day"),
            DayKind::RestDay => write!(f, "Rest day"),
            DayKind::Holiday { name, .. } => write!(f, "Holiday ({})", name),
        }
    }
}

/// Returns true if the date falls on one of the weekly [`REST_DAYS`].
pub fn is_rest_day(date: NaiveDate) -> bool {
    REST_DAYS.contains(&date.weekday())
}

/// Classifies dates as working days against a holiday snapshot.
///
/// The snapshot is indexed by facility once at construction. A facility with
/// no registered periods (including an unknown facility id) simply has an
/// empty holiday set, so only the rest day rule applies to it.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::WorkingDayResolver;
/// use daycare_billing::models::{HolidayKind, HolidayPeriod};
/// use chrono::NaiveDate;
///
/// let resolver = WorkingDayResolver::new(vec![HolidayPeriod {
///     id: "labour_day".to_string(),
///     facility_id: "sunny_days".to_string(),
///     name: "Labour Day".to_string(),
///     start: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///     kind: HolidayKind::Holiday,
///     description: None,
/// }]);
///
/// // 2026-05-01 is a Friday inside the holiday
/// let friday = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
/// assert!(!resolver.is_working_day(friday, "sunny_days"));
/// // Another facility is open that day
/// assert!(resolver.is_working_day(friday, "other_facility"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkingDayResolver {
    by_facility: HashMap<String, Vec<HolidayPeriod>>,
}

impl WorkingDayResolver {
    /// Builds a resolver from a holiday snapshot.
    pub fn new(holidays: Vec<HolidayPeriod>) -> Self {
        let mut by_facility: HashMap<String, Vec<HolidayPeriod>> = HashMap::new();
        for period in holidays {
            by_facility
                .entry(period.facility_id.clone())
                .or_default()
                .push(period);
        }
        for periods in by_facility.values_mut() {
            periods.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        }
        Self { by_facility }
    }

    /// Returns the holiday periods registered for a facility, ordered by start.
    pub fn holidays_for(&self, facility_id: &str) -> &[HolidayPeriod] {
        self.by_facility
            .get(facility_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the first holiday period (by start date) covering the date.
    pub fn holiday_on(&self, date: NaiveDate, facility_id: &str) -> Option<&HolidayPeriod> {
        self.holidays_for(facility_id)
            .iter()
            .find(|period| period.contains(date))
    }

    /// Classifies a date. A rest day inside a holiday period is a rest day.
    pub fn classify_day(&self, date: NaiveDate, facility_id: &str) -> DayKind {
        if is_rest_day(date) {
            return DayKind::RestDay;
        }
        match self.holiday_on(date, facility_id) {
            Some(period) => DayKind::Holiday {
                name: period.name.clone(),
                kind: period.kind,
            },
            None => DayKind::Working,
        }
    }

    /// Returns true if the date is a chargeable working day for the facility.
    pub fn is_working_day(&self, date: NaiveDate, facility_id: &str) -> bool {
        !is_rest_day(date) && self.holiday_on(date, facility_id).is_none()
    }

    /// Counts the working days of a range.
    pub fn count_working_days(&self, range: DateRange, facility_id: &str) -> u32 {
        let count = range
            .iter()
            .filter(|date| self.is_working_day(*date, facility_id))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Returns the first working day strictly after `date`.
    ///
    /// Returns `None` only if the search runs past the last representable date.
    pub fn next_working_day(&self, date: NaiveDate, facility_id: &str) -> Option<NaiveDate> {
        let mut candidate = date.succ_opt()?;
        while !self.is_working_day(candidate, facility_id) {
            candidate = candidate.succ_opt()?;
        }
        Some(candidate)
    }

    /// Returns the last working day strictly before `date`.
    ///
    /// Returns `None` only if the search runs past the first representable date.
    pub fn previous_working_day(&self, date: NaiveDate, facility_id: &str) -> Option<NaiveDate> {
        let mut candidate = date.pred_opt()?;
        while !self.is_working_day(candidate, facility_id) {
            candidate = candidate.pred_opt()?;
        }
        Some(candidate)
    }
}
