//! Collaborator stores.
//!
//! The billing engine never owns persistence. It reads snapshots through the
//! traits in this module, which any storage backend can implement. Every
//! method returns an [`EngineResult`]; a backend reports its failures as
//! [`EngineError::StorageError`](crate::error::EngineError::StorageError) and
//! unknown entities as [`EngineError::NotFound`](crate::error::EngineError::NotFound).
//!
//! Implementations must be `Send + Sync` so they can be shared by the HTTP
//! handlers.

mod memory;

pub use memory::{AttendanceOverlay, InMemoryStore};

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Child, Group, HolidayPeriod, RateSchedule};

/// Read access to children and groups.
pub trait ChildStore: Send + Sync {
    /// Returns a child by id, or `NotFound`.
    fn get_child(&self, child_id: &str) -> EngineResult<Child>;

    /// Returns a group by id, or `NotFound`.
    fn get_group(&self, group_id: &str) -> EngineResult<Group>;

    /// Lists the children enrolled in a group, ordered by id.
    fn list_children_in_group(&self, group_id: &str) -> EngineResult<Vec<Child>>;
}

/// Read access to explicit attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Lists a child's records dated within `[date_from, date_to]`.
    fn list_between(
        &self,
        child_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}

/// Read access to rate schedules.
pub trait RateStore: Send + Sync {
    /// Lists every schedule of a group, whatever its validity interval.
    fn list_for_group(&self, group_id: &str) -> EngineResult<Vec<RateSchedule>>;
}

/// Read access to the holiday calendar.
pub trait HolidayStore: Send + Sync {
    /// Lists a facility's periods that intersect `[date_from, date_to]`.
    fn list_between(
        &self,
        facility_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<HolidayPeriod>>;
}
