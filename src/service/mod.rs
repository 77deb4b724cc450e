//! Billing orchestration over the collaborator stores.
//!
//! [`BillingService`] implements read-snapshot-then-compute: it validates the
//! request, reads the holiday, rate and attendance snapshots exactly once each,
//! and only then runs the pure billing fold. A store failure aborts the call
//! before any computation, so no partial result can escape.

mod forecast;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{
    AttendanceLookup, BillingCalculator, DateRange, RateResolver, WorkingDayResolver,
    holiday_report, month_calendar,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{BillingResult, CalendarDay, Group, HolidayReport};
use crate::store::{AttendanceStore, ChildStore, HolidayStore, RateStore};

/// Computes billing results for one facility.
///
/// The service borrows its stores and keeps no state between calls, so
/// concurrent calls are independent.
///
/// # Example
///
/// ```
/// use daycare_billing::models::{Child, Group, RateSchedule, ServiceCategory};
/// use daycare_billing::service::BillingService;
/// use daycare_billing::store::InMemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::default()
///     .with_groups(vec![Group {
///         id: "ladybirds".to_string(),
///         name: "Ladybirds".to_string(),
///         facility_id: "sunny_days".to_string(),
///     }])
///     .with_children(vec![Child {
///         id: "child_001".to_string(),
///         first_name: "Ada".to_string(),
///         last_name: "Nowak".to_string(),
///         group_id: "ladybirds".to_string(),
///     }])
///     .with_rates(vec![RateSchedule {
///         id: "lunch".to_string(),
///         group_id: "ladybirds".to_string(),
///         category: ServiceCategory::Lunch,
///         amount: Decimal::new(1000, 2),
///         valid_from: None,
///         valid_to: None,
///         currency: None,
///     }]);
///
/// let service = BillingService::from_store("sunny_days", &store);
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let result = service.calculate_for_child("child_001", monday, monday).unwrap();
/// assert_eq!(result.total, Decimal::new(1000, 2));
/// ```
#[derive(Clone, Copy)]
pub struct BillingService<'a> {
    facility_id: &'a str,
    children: &'a dyn ChildStore,
    attendance: &'a dyn AttendanceStore,
    rates: &'a dyn RateStore,
    holidays: &'a dyn HolidayStore,
}

impl<'a> BillingService<'a> {
    /// Creates a service over separate stores.
    pub fn new(
        facility_id: &'a str,
        children: &'a dyn ChildStore,
        attendance: &'a dyn AttendanceStore,
        rates: &'a dyn RateStore,
        holidays: &'a dyn HolidayStore,
    ) -> Self {
        Self {
            facility_id,
            children,
            attendance,
            rates,
            holidays,
        }
    }

    /// Creates a service over a single store implementing every trait.
    pub fn from_store<S>(facility_id: &'a str, store: &'a S) -> Self
    where
        S: ChildStore + AttendanceStore + RateStore + HolidayStore,
    {
        Self::new(facility_id, store, store, store, store)
    }

    /// Returns a copy of the service reading attendance from another store.
    pub fn with_attendance(self, attendance: &'a dyn AttendanceStore) -> Self {
        Self { attendance, ..self }
    }

    /// Returns the facility this service bills for.
    pub fn facility_id(&self) -> &str {
        self.facility_id
    }

    /// Calculates the bill of a child in a group over `[period_from, period_to]`.
    ///
    /// # Returns
    ///
    /// Returns `InvalidRange` before touching any store if the period is
    /// inverted, or the first store error encountered.
    pub fn calculate(
        &self,
        child_id: &str,
        group_id: &str,
        period_from: NaiveDate,
        period_to: NaiveDate,
    ) -> EngineResult<BillingResult> {
        let range = DateRange::new(period_from, period_to)?;
        self.calculate_range(child_id, group_id, range)
    }

    /// Calculates the bill of a child, resolving the group from the child store.
    ///
    /// A group that belongs to another facility is reported as `NotFound`.
    pub fn calculate_for_child(
        &self,
        child_id: &str,
        period_from: NaiveDate,
        period_to: NaiveDate,
    ) -> EngineResult<BillingResult> {
        let range = DateRange::new(period_from, period_to)?;
        let child = self.children.get_child(child_id)?;
        let group = self.group_in_facility(&child.group_id)?;
        self.calculate_range(&child.id, &group.id, range)
    }

    /// Calculates the bill of a child for a calendar month.
    pub fn calculate_month(&self, child_id: &str, year: i32, month: u32) -> EngineResult<BillingResult> {
        let range = DateRange::month(year, month)?;
        let child = self.children.get_child(child_id)?;
        let group = self.group_in_facility(&child.group_id)?;
        self.calculate_range(&child.id, &group.id, range)
    }

    /// Builds the month calendar of the facility.
    pub fn month_calendar(&self, year: i32, month: u32) -> EngineResult<Vec<CalendarDay>> {
        let range = DateRange::month(year, month)?;
        let working_days = self.working_days(range)?;
        month_calendar(year, month, self.facility_id, &working_days)
    }

    /// Builds the holiday report of the facility for a year.
    pub fn holiday_report(&self, year: i32) -> EngineResult<HolidayReport> {
        let range = DateRange::year(year)?;
        let periods = self
            .holidays
            .list_between(self.facility_id, range.from(), range.to())?;
        holiday_report(&periods, year)
    }

    fn calculate_range(
        &self,
        child_id: &str,
        group_id: &str,
        range: DateRange,
    ) -> EngineResult<BillingResult> {
        let working_days = self.working_days(range)?;
        let rates = RateResolver::new(self.rates.list_for_group(group_id)?);
        let attendance = self.attendance_lookup(child_id, range)?;

        debug!(
            child_id = %child_id,
            group_id = %group_id,
            rate_schedules = rates.len(),
            attendance_slots = attendance.len(),
            "Snapshots loaded"
        );

        let calculator = BillingCalculator::new(self.facility_id, &working_days, &rates, &attendance);
        Ok(calculator.calculate_range(child_id, group_id, range))
    }

    /// Looks up a group, rejecting groups of other facilities.
    fn group_in_facility(&self, group_id: &str) -> EngineResult<Group> {
        let group = self.children.get_group(group_id)?;
        if group.facility_id != self.facility_id {
            return Err(EngineError::not_found("group", group_id));
        }
        Ok(group)
    }

    fn working_days(&self, range: DateRange) -> EngineResult<WorkingDayResolver> {
        let holidays = self
            .holidays
            .list_between(self.facility_id, range.from(), range.to())?;
        Ok(WorkingDayResolver::new(holidays))
    }

    fn attendance_lookup(&self, child_id: &str, range: DateRange) -> EngineResult<AttendanceLookup> {
        let records = self
            .attendance
            .list_between(child_id, range.from(), range.to())?;
        Ok(AttendanceLookup::new(records))
    }
}
