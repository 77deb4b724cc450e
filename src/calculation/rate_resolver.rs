//! Rate schedule resolution.
//!
//! This module selects the per-day price of a service category for a group on a
//! given date. Rate schedules may overlap, so selection applies a fixed
//! precedence among every schedule whose validity interval contains the date:
//!
//! 1. The latest `valid_from` wins (an open start ranks earliest).
//! 2. Then the earliest `valid_to` (an open end ranks latest).
//! 3. Then the lowest `amount`.
//! 4. Then the lexicographically smallest `id`.
//!
//! The order is total, so the winner never depends on snapshot order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{RateSchedule, ServiceCategory};

/// Compares two schedules by precedence. `Ordering::Less` means `a` wins.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::compare_precedence;
/// use daycare_billing::models::{RateSchedule, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::cmp::Ordering;
///
/// let older = RateSchedule {
///     id: "lunch_2025".to_string(),
///     group_id: "ladybirds".to_string(),
///     category: ServiceCategory::Lunch,
///     amount: Decimal::new(900, 2),
///     valid_from: NaiveDate::from_ymd_opt(2025, 1, 1),
///     valid_to: None,
///     currency: None,
/// };
/// let newer = RateSchedule {
///     id: "lunch_2026".to_string(),
///     valid_from: NaiveDate::from_ymd_opt(2026, 1, 1),
///     amount: Decimal::new(1000, 2),
///     ..older.clone()
/// };
///
/// assert_eq!(compare_precedence(&newer, &older), Ordering::Less);
/// ```
pub fn compare_precedence(a: &RateSchedule, b: &RateSchedule) -> Ordering {
    // None < Some for Option's Ord, so an open start already ranks earliest.
    b.valid_from
        .cmp(&a.valid_from)
        .then_with(|| match (a.valid_to, b.valid_to) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.amount.cmp(&b.amount))
        .then_with(|| a.id.cmp(&b.id))
}

/// Resolves applicable rate schedules from a rate snapshot.
///
/// Schedules are indexed by `(group_id, category)` at construction and each
/// bucket is kept in precedence order, so resolution returns the first bucket
/// entry valid on the requested date.
#[derive(Debug, Clone, Default)]
pub struct RateResolver {
    schedules: HashMap<(String, ServiceCategory), Vec<RateSchedule>>,
}

impl RateResolver {
    /// Builds a resolver from a rate snapshot.
    pub fn new(schedules: Vec<RateSchedule>) -> Self {
        let mut indexed: HashMap<(String, ServiceCategory), Vec<RateSchedule>> = HashMap::new();
        for schedule in schedules {
            indexed
                .entry((schedule.group_id.clone(), schedule.category))
                .or_default()
                .push(schedule);
        }
        for bucket in indexed.values_mut() {
            bucket.sort_by(compare_precedence);
        }
        Self { schedules: indexed }
    }

    /// Returns the number of schedules in the snapshot.
    pub fn len(&self) -> usize {
        self.schedules.values().map(Vec::len).sum()
    }

    /// Returns true if the snapshot holds no schedules.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Returns the winning schedule for a group and category on a date.
    ///
    /// # Arguments
    ///
    /// * `group_id` - The group whose rates apply
    /// * `category` - The service category being priced
    /// * `date` - The day being charged
    ///
    /// # Returns
    ///
    /// Returns `None` when no schedule covers the date. That is not an error:
    /// the slot is simply free.
    pub fn resolve(
        &self,
        group_id: &str,
        category: ServiceCategory,
        date: NaiveDate,
    ) -> Option<&RateSchedule> {
        self.schedules
            .get(&(group_id.to_string(), category))?
            .iter()
            .find(|schedule| schedule.is_valid_on(date))
    }

    /// Returns the per-day amount for a group and category on a date.
    pub fn resolve_rate(
        &self,
        group_id: &str,
        category: ServiceCategory,
        date: NaiveDate,
    ) -> Option<Decimal> {
        self.resolve(group_id, category, date)
            .map(|schedule| schedule.amount)
    }
}
