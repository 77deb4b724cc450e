//! Service categories billed per day.
//!
//! This module defines the [`ServiceCategory`] enum and the fixed set of
//! categories that accrue charges on a working day.

use serde::{Deserialize, Serialize};

/// A billable service slot within a day.
///
/// The four meal slots are charged independently. [`ServiceCategory::WholeDay`]
/// is the derived daily aggregate: it may appear on records coming from the
/// wider system but is never charged on its own.
///
/// # Example
///
/// ```
/// use daycare_billing::models::ServiceCategory;
///
/// let category = ServiceCategory::Lunch;
/// assert!(category.is_billable());
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"lunch\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Breakfast.
    Breakfast,
    /// Mid-morning snack (second breakfast).
    MidMorningSnack,
    /// Lunch.
    Lunch,
    /// Afternoon snack.
    AfternoonSnack,
    /// The whole-day aggregate. Not separately chargeable.
    WholeDay,
}

/// The categories charged on every working day, in charging order.
pub const BILLABLE_CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory::Breakfast,
    ServiceCategory::MidMorningSnack,
    ServiceCategory::Lunch,
    ServiceCategory::AfternoonSnack,
];

impl ServiceCategory {
    /// Returns true if this category accrues its own charge.
    pub fn is_billable(self) -> bool {
        !matches!(self, ServiceCategory::WholeDay)
    }

    /// Returns the snake_case identifier used in configuration and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Breakfast => "breakfast",
            ServiceCategory::MidMorningSnack => "mid_morning_snack",
            ServiceCategory::Lunch => "lunch",
            ServiceCategory::AfternoonSnack => "afternoon_snack",
            ServiceCategory::WholeDay => "whole_day",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billable_categories_exclude_whole_day() {
        assert_eq!(BILLABLE_CATEGORIES.len(), 4);
        assert!(!BILLABLE_CATEGORIES.contains(&ServiceCategory::WholeDay));
        assert!(BILLABLE_CATEGORIES.iter().all(|c| c.is_billable()));
    }

    #[test]
    fn test_whole_day_is_not_billable() {
        assert!(!ServiceCategory::WholeDay.is_billable());
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::MidMorningSnack).unwrap(),
            "\"mid_morning_snack\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceCategory::AfternoonSnack).unwrap(),
            "\"afternoon_snack\""
        );
    }

    #[test]
    fn test_category_deserialization() {
        let category: ServiceCategory = serde_json::from_str("\"whole_day\"").unwrap();
        assert_eq!(category, ServiceCategory::WholeDay);

        let category: ServiceCategory = serde_json::from_str("\"breakfast\"").unwrap();
        assert_eq!(category, ServiceCategory::Breakfast);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for category in BILLABLE_CATEGORIES {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<ServiceCategory, _> = serde_json::from_str("\"dinner\"");
        assert!(result.is_err());
    }
}
