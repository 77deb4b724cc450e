//! Core data models for the billing engine.
//!
//! This module contains all the domain records the engine reads and produces.

mod attendance;
mod billing_result;
mod category;
mod enrollment;
mod holiday;
mod rate_schedule;
mod report;

pub use attendance::AttendanceRecord;
pub use billing_result::{BillingResult, CategoryCharge, ChargeLine};
pub use category::{BILLABLE_CATEGORIES, ServiceCategory};
pub use enrollment::{Child, Group};
pub use holiday::{HolidayKind, HolidayPeriod};
pub use rate_schedule::RateSchedule;
pub use report::{
    CalendarClosure, CalendarDay, HolidayReport, RevenueComparison, RevenueForecast,
};
