//! Holiday and revenue reports.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{HolidayKind, HolidayPeriod, HolidayReport, RevenueComparison, RevenueForecast};

use super::DateRange;

/// Groups the holiday periods intersecting a year by kind.
///
/// Periods are ordered by start date (then id) within each group. A period
/// spanning the new year appears in the reports of both years.
///
/// # Returns
///
/// Returns `InvalidYear` if the year is outside the supported calendar.
pub fn holiday_report(periods: &[HolidayPeriod], year: i32) -> EngineResult<HolidayReport> {
    let range = DateRange::year(year)?;

    let mut in_year: Vec<&HolidayPeriod> = periods
        .iter()
        .filter(|period| period.overlaps(range.from(), range.to()))
        .collect();
    in_year.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let (holidays, days_off): (Vec<HolidayPeriod>, Vec<HolidayPeriod>) = in_year
        .into_iter()
        .cloned()
        .partition(|period| period.kind == HolidayKind::Holiday);

    Ok(HolidayReport {
        year,
        total: holidays.len() + days_off.len(),
        holidays,
        days_off,
    })
}

/// Compares two monthly forecasts.
///
/// The percentage change is relative to `first` and rounded half away from
/// zero to 2 decimal places. It is `None` when `first` forecasts nothing.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::compare_revenue;
/// use daycare_billing::models::RevenueForecast;
/// use rust_decimal::Decimal;
///
/// let march = RevenueForecast {
///     group_id: "ladybirds".to_string(),
///     year: 2026,
///     month: 3,
///     children: 2,
///     forecast_total: Decimal::new(30000, 2),
/// };
/// let april = RevenueForecast {
///     month: 4,
///     forecast_total: Decimal::new(33300, 2),
///     ..march.clone()
/// };
///
/// let comparison = compare_revenue(march, april);
/// assert_eq!(comparison.difference, Decimal::new(3300, 2));
/// assert_eq!(comparison.change_percent, Some(Decimal::new(1100, 2)));
/// ```
pub fn compare_revenue(first: RevenueForecast, second: RevenueForecast) -> RevenueComparison {
    let difference = second.forecast_total - first.forecast_total;
    let change_percent = if first.forecast_total.is_zero() {
        None
    } else {
        difference
            .checked_div(first.forecast_total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|percent| percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    };

    RevenueComparison {
        first,
        second,
        difference,
        change_percent,
    }
}
