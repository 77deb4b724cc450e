//! Calculation logic for the billing engine.
//!
//! This module contains the pure engine: date range enumeration, working day
//! detection, rate schedule resolution, the attendance lookup with its
//! default-present policy, the billing fold itself, and the calendar and
//! revenue views derived from the same building blocks.
//!
//! Nothing in this module performs I/O or logging. Every function works over
//! snapshots supplied by the caller.

mod attendance;
mod billing;
mod calendar;
mod date_range;
mod rate_resolver;
mod report;
mod working_days;

pub use attendance::AttendanceLookup;
pub use billing::{BillingCalculator, SlotOutcome, assess_slot};
pub use calendar::month_calendar;
pub use date_range::{DateIter, DateRange};
pub use rate_resolver::{RateResolver, compare_precedence};
pub use report::{compare_revenue, holiday_report};
pub use working_days::{DayKind, REST_DAYS, WorkingDayResolver, is_rest_day};
