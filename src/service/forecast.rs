//! Group revenue forecasting.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{BillingCalculator, DateRange, RateResolver, compare_revenue};
use crate::error::EngineResult;
use crate::models::{RevenueComparison, RevenueForecast};

use super::BillingService;

impl BillingService<'_> {
    /// Forecasts a group's revenue for a month.
    ///
    /// The forecast is the sum of the monthly bill of every child currently
    /// enrolled in the group. Holidays and rates are read once for the whole
    /// group; attendance is read per child.
    ///
    /// # Returns
    ///
    /// Returns `InvalidMonth` for a bad month, `NotFound` for an unknown
    /// group or a group of another facility, or the first store error
    /// encountered.
    pub fn forecast_group_revenue(
        &self,
        group_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<RevenueForecast> {
        let range = DateRange::month(year, month)?;
        let group = self.group_in_facility(group_id)?;
        let children = self.children.list_children_in_group(&group.id)?;

        let working_days = self.working_days(range)?;
        let rates = RateResolver::new(self.rates.list_for_group(&group.id)?);

        let mut forecast_total = Decimal::ZERO;
        for child in &children {
            let attendance = self.attendance_lookup(&child.id, range)?;
            let calculator =
                BillingCalculator::new(self.facility_id, &working_days, &rates, &attendance);
            forecast_total += calculator.calculate_range(&child.id, &group.id, range).total;
        }

        debug!(
            group_id = %group.id,
            year,
            month,
            children = children.len(),
            forecast_total = %forecast_total,
            "Revenue forecast computed"
        );

        Ok(RevenueForecast {
            group_id: group.id,
            year,
            month,
            children: children.len(),
            forecast_total,
        })
    }

    /// Compares a group's forecast revenue between two months.
    pub fn compare_group_revenue(
        &self,
        group_id: &str,
        first: (i32, u32),
        second: (i32, u32),
    ) -> EngineResult<RevenueComparison> {
        let first = self.forecast_group_revenue(group_id, first.0, first.1)?;
        let second = self.forecast_group_revenue(group_id, second.0, second.1)?;
        Ok(compare_revenue(first, second))
    }
}
