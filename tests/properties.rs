//! Property tests for the billing fold.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use daycare_billing::calculation::{
    AttendanceLookup, BillingCalculator, DateRange, RateResolver, WorkingDayResolver,
};
use daycare_billing::models::{
    AttendanceRecord, BILLABLE_CATEGORIES, BillingResult, HolidayKind, HolidayPeriod,
    RateSchedule,
};

const FACILITY: &str = "sunny_days";
const GROUP: &str = "ladybirds";
const CHILD: &str = "child_001";

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    epoch() + Duration::days(offset)
}

prop_compose! {
    fn arb_range()(start in 0i64..365, len in 0i64..90) -> DateRange {
        DateRange::new(day(start), day(start + len)).unwrap()
    }
}

prop_compose! {
    fn arb_holiday()(id in 0u32..1000, start in 0i64..450, len in 0i64..10, day_off in any::<bool>()) -> HolidayPeriod {
        HolidayPeriod {
            id: format!("holiday_{}", id),
            facility_id: FACILITY.to_string(),
            name: format!("Holiday {}", id),
            start: day(start),
            end: day(start + len),
            kind: if day_off { HolidayKind::DayOff } else { HolidayKind::Holiday },
            description: None,
        }
    }
}

prop_compose! {
    fn arb_rate()(
        id in 0u32..1000,
        category in 0usize..4,
        cents in 0i64..5000,
        from in proptest::option::of(0i64..400),
        len in proptest::option::of(0i64..200),
    ) -> RateSchedule {
        RateSchedule {
            id: format!("rate_{}", id),
            group_id: GROUP.to_string(),
            category: BILLABLE_CATEGORIES[category],
            amount: Decimal::new(cents, 2),
            valid_from: from.map(day),
            valid_to: len.map(|l| day(from.unwrap_or(0) + l)),
            currency: None,
        }
    }
}

prop_compose! {
    fn arb_attendance()(offset in 0i64..450, category in 0usize..4, present in any::<bool>()) -> AttendanceRecord {
        AttendanceRecord {
            child_id: CHILD.to_string(),
            date: day(offset),
            category: BILLABLE_CATEGORIES[category],
            present,
        }
    }
}

fn bill(
    range: DateRange,
    holidays: &[HolidayPeriod],
    rates: &[RateSchedule],
    attendance: &[AttendanceRecord],
) -> BillingResult {
    let working_days = WorkingDayResolver::new(holidays.to_vec());
    let rates = RateResolver::new(rates.to_vec());
    let attendance = AttendanceLookup::new(attendance.to_vec());
    BillingCalculator::new(FACILITY, &working_days, &rates, &attendance)
        .calculate(CHILD, GROUP, range.from(), range.to())
        .unwrap()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

proptest! {
    #[test]
    fn day_counts_cover_the_period(
        range in arb_range(),
        holidays in prop::collection::vec(arb_holiday(), 0..8),
    ) {
        let result = bill(range, &holidays, &[], &[]);
        prop_assert_eq!(
            result.working_days_in_period + result.holiday_days_in_period,
            range.len_days()
        );
    }

    #[test]
    fn total_is_sum_of_categories(
        range in arb_range(),
        holidays in prop::collection::vec(arb_holiday(), 0..8),
        rates in prop::collection::vec(arb_rate(), 0..12),
        attendance in prop::collection::vec(arb_attendance(), 0..40),
    ) {
        let result = bill(range, &holidays, &rates, &attendance);
        let by_category: Decimal = result.per_category.values().map(|c| c.amount_charged).sum();
        let by_line: Decimal = result.charge_lines.iter().map(|l| l.amount).sum();
        prop_assert_eq!(result.total, by_category);
        prop_assert_eq!(result.total, by_line);

        let lines: u32 = result.per_category.values().map(|c| c.days_charged).sum();
        prop_assert_eq!(lines as usize, result.charge_lines.len());
    }

    #[test]
    fn closed_days_are_never_charged(
        range in arb_range(),
        holidays in prop::collection::vec(arb_holiday(), 0..8),
        rates in prop::collection::vec(arb_rate(), 1..12),
    ) {
        let result = bill(range, &holidays, &rates, &[]);
        for line in &result.charge_lines {
            prop_assert!(!is_weekend(line.date));
            prop_assert!(!holidays.iter().any(|h| h.contains(line.date)));
        }

        let weekdays_outside_holidays = range
            .iter()
            .filter(|d| !is_weekend(*d) && !holidays.iter().any(|h| h.contains(*d)))
            .count();
        prop_assert_eq!(result.working_days_in_period as usize, weekdays_outside_holidays);
    }

    #[test]
    fn explicit_absence_is_never_charged(
        range in arb_range(),
        rates in prop::collection::vec(arb_rate(), 1..12),
        attendance in prop::collection::vec(arb_attendance(), 0..60),
    ) {
        let result = bill(range, &[], &rates, &attendance);
        for line in &result.charge_lines {
            let absent = attendance
                .iter()
                .any(|r| r.date == line.date && r.category == line.category && !r.present);
            prop_assert!(!absent);
        }
    }

    #[test]
    fn unmarked_slots_with_a_rate_are_charged(
        range in arb_range(),
        rates in prop::collection::vec(arb_rate(), 1..12),
    ) {
        let result = bill(range, &[], &rates, &[]);
        let resolver = RateResolver::new(rates.clone());
        let expected = range
            .iter()
            .filter(|d| !is_weekend(*d))
            .flat_map(|d| BILLABLE_CATEGORIES.iter().map(move |c| (d, *c)))
            .filter(|(d, c)| resolver.resolve_rate(GROUP, *c, *d).is_some())
            .count();
        prop_assert_eq!(result.charge_lines.len(), expected);
    }

    #[test]
    fn calculation_is_idempotent_and_order_independent(
        range in arb_range(),
        holidays in prop::collection::vec(arb_holiday(), 0..8),
        rates in prop::collection::vec(arb_rate(), 0..12),
        attendance in prop::collection::vec(arb_attendance(), 0..40),
    ) {
        let first = bill(range, &holidays, &rates, &attendance);
        let second = bill(range, &holidays, &rates, &attendance);
        prop_assert_eq!(&first, &second);

        let mut reversed_rates = rates.clone();
        reversed_rates.reverse();
        let mut reversed_attendance = attendance.clone();
        reversed_attendance.reverse();
        let mut reversed_holidays = holidays.clone();
        reversed_holidays.reverse();
        let reordered = bill(range, &reversed_holidays, &reversed_rates, &reversed_attendance);
        prop_assert_eq!(&first, &reordered);
    }

    #[test]
    fn date_range_iteration_is_exact(range in arb_range()) {
        let dates: Vec<NaiveDate> = range.iter().collect();
        prop_assert_eq!(dates.len() as u32, range.len_days());
        prop_assert_eq!(dates.first().copied(), Some(range.from()));
        prop_assert_eq!(dates.last().copied(), Some(range.to()));
        prop_assert!(dates.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }
}
