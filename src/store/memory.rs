//! In-memory store implementation.
//!
//! [`InMemoryStore`] holds immutable snapshots in plain vectors and implements
//! every store trait over them. It backs the HTTP server (filled from the
//! facility configuration) and the tests.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Child, Group, HolidayPeriod, RateSchedule};

use super::{AttendanceStore, ChildStore, HolidayStore, RateStore};

/// In-memory implementation of all store traits.
///
/// # Example
///
/// ```
/// use daycare_billing::models::{Child, Group};
/// use daycare_billing::store::{ChildStore, InMemoryStore};
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
///     }]);
///
/// assert_eq!(store.get_child("child_001").unwrap().group_id, "ladybirds");
/// assert!(store.get_child("child_999").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    groups: Vec<Group>,
    children: Vec<Child>,
    attendance: Vec<AttendanceRecord>,
    rates: Vec<RateSchedule>,
    holidays: Vec<HolidayPeriod>,
}

impl InMemoryStore {
    /// Replaces the groups.
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    /// Replaces the attendance records.
    pub fn with_attendance(mut self, attendance: Vec<AttendanceRecord>) -> Self {
        self.attendance = attendance;
        self
    }

    /// Replaces the rate schedules.
    pub fn with_rates(mut self, rates: Vec<RateSchedule>) -> Self {
        self.rates = rates;
        self
    }

    /// Replaces the holiday periods.
    pub fn with_holidays(mut self, holidays: Vec<HolidayPeriod>) -> Self {
        self.holidays = holidays;
        self
    }

    /// Returns all groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns all children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns all rate schedules.
    pub fn rates(&self) -> &[RateSchedule] {
        &self.rates
    }

    /// Returns all holiday periods.
    pub fn holidays(&self) -> &[HolidayPeriod] {
        &self.holidays
    }
}

impl ChildStore for InMemoryStore {
    fn get_child(&self, child_id: &str) -> EngineResult<Child> {
        self.children
            .iter()
            .find(|child| child.id == child_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("child", child_id))
    }

    fn get_group(&self, group_id: &str) -> EngineResult<Group> {
        self.groups
            .iter()
            .find(|group| group.id == group_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("group", group_id))
    }

    fn list_children_in_group(&self, group_id: &str) -> EngineResult<Vec<Child>> {
        let mut children: Vec<Child> = self
            .children
            .iter()
            .filter(|child| child.group_id == group_id)
            .cloned()
            .collect();
        children.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(children)
    }
}

impl AttendanceStore for InMemoryStore {
    fn list_between(
        &self,
        child_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| r.child_id == child_id && r.date >= date_from && r.date <= date_to)
            .cloned()
            .collect())
    }
}

impl RateStore for InMemoryStore {
    fn list_for_group(&self, group_id: &str) -> EngineResult<Vec<RateSchedule>> {
        Ok(self
            .rates
            .iter()
            .filter(|schedule| schedule.group_id == group_id)
            .cloned()
            .collect())
    }
}

impl HolidayStore for InMemoryStore {
    fn list_between(
        &self,
        facility_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<HolidayPeriod>> {
        Ok(self
            .holidays
            .iter()
            .filter(|p| p.facility_id == facility_id && p.overlaps(date_from, date_to))
            .cloned()
            .collect())
    }
}

/// Attendance store that layers extra records over a base store.
///
/// Used to merge attendance supplied with a request into the stored records
/// for a single calculation. Extra records are filtered by child and date
/// exactly like the base store's, and replace any stored record for the same
/// date and category.
pub struct AttendanceOverlay<'a> {
    base: &'a dyn AttendanceStore,
    extra: Vec<AttendanceRecord>,
}

impl<'a> AttendanceOverlay<'a> {
    /// Creates an overlay of `extra` records on top of `base`.
    pub fn new(base: &'a dyn AttendanceStore, extra: Vec<AttendanceRecord>) -> Self {
        Self { base, extra }
    }
}

impl AttendanceStore for AttendanceOverlay<'_> {
    fn list_between(
        &self,
        child_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let extra: Vec<&AttendanceRecord> = self
            .extra
            .iter()
            .filter(|r| r.child_id == child_id && r.date >= date_from && r.date <= date_to)
            .collect();

        let mut records: Vec<AttendanceRecord> = self
            .base
            .list_between(child_id, date_from, date_to)?
            .into_iter()
            .filter(|stored| {
                !extra
                    .iter()
                    .any(|r| r.date == stored.date && r.category == stored.category)
            })
            .collect();
        records.extend(extra.into_iter().cloned());
        Ok(records)
    }
}
