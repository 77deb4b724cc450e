//! Calendar and reporting views built on top of the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HolidayKind, HolidayPeriod};

/// The closure covering a calendar day, as shown in calendar views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarClosure {
    /// The holiday period name.
    pub name: String,
    /// Holiday or generic day off.
    pub kind: HolidayKind,
    /// Optional description copied from the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One day of a month calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// English weekday name (e.g., "Monday").
    pub weekday: String,
    /// Day of the month, 1-based.
    pub day_of_month: u32,
    /// True on the weekly rest days.
    pub rest_day: bool,
    /// The holiday period covering the date, if any.
    pub closure: Option<CalendarClosure>,
}

impl CalendarDay {
    /// Returns true if no charges accrue on this day.
    pub fn is_closed(&self) -> bool {
        self.rest_day || self.closure.is_some()
    }
}

/// Holiday periods of one year grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayReport {
    /// The reported year.
    pub year: i32,
    /// Periods of kind [`HolidayKind::Holiday`], ordered by start date.
    pub holidays: Vec<HolidayPeriod>,
    /// Periods of kind [`HolidayKind::DayOff`], ordered by start date.
    pub days_off: Vec<HolidayPeriod>,
    /// Number of periods in the report.
    pub total: usize,
}

/// Expected revenue of a group for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueForecast {
    /// The group being forecast.
    pub group_id: String,
    /// The forecast year.
    pub year: i32,
    /// The forecast month (1-12).
    pub month: u32,
    /// Number of children whose billing was included.
    pub children: usize,
    /// Sum of the billing totals of every child in the group.
    pub forecast_total: Decimal,
}

/// Month-over-month comparison of two revenue forecasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueComparison {
    /// The earlier forecast.
    pub first: RevenueForecast,
    /// The later forecast.
    pub second: RevenueForecast,
    /// `second.forecast_total - first.forecast_total`.
    pub difference: Decimal,
    /// Percentage change relative to the first month, rounded to 2 places.
    /// `None` when the first month forecasts nothing.
    pub change_percent: Option<Decimal>,
}
