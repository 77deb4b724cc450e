//! The billing fold.
//!
//! This module walks every date of a billing period once. Non-working days are
//! counted and skipped. On working days each billable category is assessed in
//! turn: an explicit absence or a missing rate leaves the slot free, otherwise
//! the resolved rate is charged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{BILLABLE_CATEGORIES, BillingResult, ChargeLine, ServiceCategory};

use super::{AttendanceLookup, DateRange, RateResolver, WorkingDayResolver};

/// Why a working-day slot was or was not charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SlotOutcome {
    /// The slot was charged.
    Charged {
        /// The resolved per-day amount.
        amount: Decimal,
        /// The schedule that priced the slot.
        schedule_id: String,
    },
    /// An explicit attendance record marked the child absent.
    Absent,
    /// The child was present but no rate schedule covered the date.
    NoRate,
}

impl SlotOutcome {
    /// Returns the charged amount, or zero.
    pub fn amount(&self) -> Decimal {
        match self {
            SlotOutcome::Charged { amount, .. } => *amount,
            SlotOutcome::Absent | SlotOutcome::NoRate => Decimal::ZERO,
        }
    }
}

/// Assesses one (date, category) slot of a working day.
///
/// Attendance is checked before the rate, so an absent child reports
/// [`SlotOutcome::Absent`] even when no rate exists.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::{AttendanceLookup, RateResolver, SlotOutcome, assess_slot};
/// use daycare_billing::models::ServiceCategory;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let outcome = assess_slot(
///     "child_001",
///     "ladybirds",
///     monday,
///     ServiceCategory::Lunch,
///     &AttendanceLookup::default(),
///     &RateResolver::default(),
/// );
/// assert_eq!(outcome, SlotOutcome::NoRate);
/// ```
pub fn assess_slot(
    child_id: &str,
    group_id: &str,
    date: NaiveDate,
    category: ServiceCategory,
    attendance: &AttendanceLookup,
    rates: &RateResolver,
) -> SlotOutcome {
    if !attendance.presence_for(child_id, date, category) {
        return SlotOutcome::Absent;
    }
    match rates.resolve(group_id, category, date) {
        Some(schedule) => SlotOutcome::Charged {
            amount: schedule.amount,
            schedule_id: schedule.id.clone(),
        },
        None => SlotOutcome::NoRate,
    }
}

/// Computes billing results over one consistent set of snapshots.
///
/// The calculator borrows its three inputs and holds no other state, so it can
/// be shared freely between threads and reused for any number of children.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::{
///     AttendanceLookup, BillingCalculator, RateResolver, WorkingDayResolver,
/// };
/// use daycare_billing::models::{RateSchedule, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let working_days = WorkingDayResolver::default();
/// let rates = RateResolver::new(vec![RateSchedule {
///     id: "lunch_2026".to_string(),
///     group_id: "ladybirds".to_string(),
///     category: ServiceCategory::Lunch,
///     amount: Decimal::new(1000, 2),
///     valid_from: NaiveDate::from_ymd_opt(2026, 1, 1),
///     valid_to: NaiveDate::from_ymd_opt(2026, 12, 31),
///     currency: None,
/// }]);
/// let attendance = AttendanceLookup::default();
///
/// let calculator = BillingCalculator::new("sunny_days", &working_days, &rates, &attendance);
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let result = calculator.calculate("child_001", "ladybirds", monday, monday).unwrap();
///
/// assert_eq!(result.total, Decimal::new(1000, 2));
/// assert_eq!(result.working_days_in_period, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BillingCalculator<'a> {
    facility_id: &'a str,
    working_days: &'a WorkingDayResolver,
    rates: &'a RateResolver,
    attendance: &'a AttendanceLookup,
}

impl<'a> BillingCalculator<'a> {
    /// Creates a calculator over the given snapshots.
    pub fn new(
        facility_id: &'a str,
        working_days: &'a WorkingDayResolver,
        rates: &'a RateResolver,
        attendance: &'a AttendanceLookup,
    ) -> Self {
        Self {
            facility_id,
            working_days,
            rates,
            attendance,
        }
    }

    /// Validates the period and computes the billing result.
    ///
    /// # Returns
    ///
    /// Returns `InvalidRange` when `period_from` is after `period_to`.
    pub fn calculate(
        &self,
        child_id: &str,
        group_id: &str,
        period_from: NaiveDate,
        period_to: NaiveDate,
    ) -> EngineResult<BillingResult> {
        let range = DateRange::new(period_from, period_to)?;
        Ok(self.calculate_range(child_id, group_id, range))
    }

    /// Computes the billing result for an already validated range.
    pub fn calculate_range(&self, child_id: &str, group_id: &str, range: DateRange) -> BillingResult {
        let mut result = BillingResult {
            child_id: child_id.to_string(),
            group_id: group_id.to_string(),
            period_from: range.from(),
            period_to: range.to(),
            per_category: Default::default(),
            charge_lines: Vec::new(),
            total: Decimal::ZERO,
            working_days_in_period: 0,
            holiday_days_in_period: 0,
        };

        for date in range {
            if !self.working_days.is_working_day(date, self.facility_id) {
                result.holiday_days_in_period += 1;
                continue;
            }
            result.working_days_in_period += 1;

            for category in BILLABLE_CATEGORIES {
                let outcome =
                    assess_slot(child_id, group_id, date, category, self.attendance, self.rates);
                if let SlotOutcome::Charged {
                    amount,
                    schedule_id,
                } = outcome
                {
                    result.per_category.entry(category).or_default().add(amount);
                    result.total += amount;
                    result.charge_lines.push(ChargeLine {
                        date,
                        category,
                        amount,
                        schedule_id,
                    });
                }
            }
        }

        result
    }
}
