//! Month calendar view.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::{CalendarClosure, CalendarDay};

use super::{DateRange, WorkingDayResolver, is_rest_day};

/// Builds the calendar of one month for a facility.
///
/// Returns one [`CalendarDay`] per date of the month. A date covered by a
/// holiday period carries that period as its closure, including on rest days.
///
/// # Returns
///
/// Returns `InvalidMonth` if `month` is not in `1..=12`.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::{WorkingDayResolver, month_calendar};
///
/// let days = month_calendar(2026, 2, "sunny_days", &WorkingDayResolver::default()).unwrap();
/// assert_eq!(days.len(), 28);
/// assert_eq!(days[0].weekday, "Sunday");
/// assert!(days[0].rest_day);
/// ```
pub fn month_calendar(
    year: i32,
    month: u32,
    facility_id: &str,
    resolver: &WorkingDayResolver,
) -> EngineResult<Vec<CalendarDay>> {
    let range = DateRange::month(year, month)?;
    Ok(range
        .iter()
        .map(|date| calendar_day(date, facility_id, resolver))
        .collect())
}

fn calendar_day(date: NaiveDate, facility_id: &str, resolver: &WorkingDayResolver) -> CalendarDay {
    let closure = resolver
        .holiday_on(date, facility_id)
        .map(|period| CalendarClosure {
            name: period.name.clone(),
            kind: period.kind,
            description: period.description.clone(),
        });

    CalendarDay {
        date,
        weekday: date.format("%A").to_string(),
        day_of_month: date.day(),
        rest_day: is_rest_day(date),
        closure,
    }
}
