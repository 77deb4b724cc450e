//! Billing result models.
//!
//! This module contains the [`BillingResult`] type and its associated structures
//! that capture the output of a billing calculation: per-category totals, the
//! day-level charge lines and the working/holiday day counts of the period.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// Accumulated charge for one service category.
///
/// # Example
///
/// ```
/// use daycare_billing::models::CategoryCharge;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut charge = CategoryCharge::default();
/// charge.add(Decimal::from_str("10.00").unwrap());
/// charge.add(Decimal::from_str("10.00").unwrap());
/// assert_eq!(charge.amount_charged, Decimal::from_str("20.00").unwrap());
/// assert_eq!(charge.days_charged, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCharge {
    /// The sum of all amounts charged for the category.
    pub amount_charged: Decimal,
    /// The number of days on which the category was charged.
    pub days_charged: u32,
}

impl CategoryCharge {
    /// Adds one charged day at the given amount.
    pub fn add(&mut self, amount: Decimal) {
        self.amount_charged += amount;
        self.days_charged += 1;
    }
}

/// A single charged (date, category) slot.
///
/// Charge lines give the day-level breakdown behind the per-category totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// The working day that was charged.
    pub date: NaiveDate,
    /// The category that was charged.
    pub category: ServiceCategory,
    /// The amount charged for the slot.
    pub amount: Decimal,
    /// The id of the rate schedule that priced the slot.
    pub schedule_id: String,
}

/// The complete result of a billing calculation for one child and period.
///
/// Created fresh on every invocation and never persisted by the engine.
/// The result carries no timestamps or generated ids, so two calculations
/// over identical snapshots compare equal.
///
/// Invariants:
/// - `total` equals the sum of `per_category[*].amount_charged`.
/// - `working_days_in_period + holiday_days_in_period` equals the number of
///   calendar days in `[period_from, period_to]`.
///
/// # Example
///
/// ```
/// use daycare_billing::models::BillingResult;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let result = BillingResult {
///     child_id: "child_001".to_string(),
///     group_id: "ladybirds".to_string(),
///     period_from: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
///     period_to: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     per_category: BTreeMap::new(),
///     charge_lines: vec![],
///     total: Decimal::ZERO,
///     working_days_in_period: 0,
///     holiday_days_in_period: 2,
/// };
/// assert_eq!(result.days_in_period(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingResult {
    /// The child the calculation is for.
    pub child_id: String,
    /// The group whose rates were applied.
    pub group_id: String,
    /// First day of the billed period (inclusive).
    pub period_from: NaiveDate,
    /// Last day of the billed period (inclusive).
    pub period_to: NaiveDate,
    /// Totals for every category charged at least once.
    pub per_category: BTreeMap<ServiceCategory, CategoryCharge>,
    /// Day-level breakdown, ordered by date then category.
    pub charge_lines: Vec<ChargeLine>,
    /// The total amount owed for the period.
    pub total: Decimal,
    /// Number of chargeable working days in the period.
    pub working_days_in_period: u32,
    /// Number of non-working days (rest days and holidays) in the period.
    pub holiday_days_in_period: u32,
}

impl BillingResult {
    /// Returns the number of calendar days covered by the result.
    pub fn days_in_period(&self) -> u32 {
        self.working_days_in_period + self.holiday_days_in_period
    }

    /// Returns the charge for a category, if it was charged at all.
    pub fn charge_for(&self, category: ServiceCategory) -> Option<&CategoryCharge> {
        self.per_category.get(&category)
    }
}
