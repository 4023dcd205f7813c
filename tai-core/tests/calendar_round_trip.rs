//! Exhaustive round-trip coverage for the civil <-> day-count conversions.

use tai_core::calendar::{
    civil_from_days, days_from_civil, days_in_month, is_leap_year, weekday_from_days,
};

#[test]
fn exhaustive_round_trip_wide_proleptic_range() {
    // Every valid day of every month for years -4716..=10000. Also checks
    // that consecutive dates map to consecutive day counts, which catches
    // any off-by-one at month, year, and era boundaries in one pass.
    let mut prev_days: Option<i64> = None;
    for year in -4716..=10_000_i64 {
        for month in 1..=12_u8 {
            let len = days_in_month(month, year).expect("month in range");
            for day in 1..=len {
                let days = days_from_civil(year, month, day);
                assert_eq!(
                    civil_from_days(days),
                    (year, month, day),
                    "round trip failed for {:04}-{:02}-{:02}",
                    year,
                    month,
                    day
                );
                if let Some(prev) = prev_days {
                    assert_eq!(days, prev + 1, "gap before {:04}-{:02}-{:02}", year, month, day);
                }
                prev_days = Some(days);
            }
        }
    }
}

#[test]
fn weekdays_cycle_across_epoch() {
    // Weekday must advance by one per day through negative day counts.
    for days in -20..=20_i64 {
        let expected = weekday_from_days(days);
        let next = weekday_from_days(days + 1);
        assert_eq!(next, (expected + 1) % 7, "day {}", days);
    }
}

#[test]
fn gregorian_reform_boundary_dates() {
    // The 1582 calendar reform dates must behave as ordinary proleptic
    // Gregorian dates: exact round trips, 11 days apart, no drift.
    let before = days_from_civil(1582, 10, 4);
    let after = days_from_civil(1582, 10, 15);
    assert_eq!(after - before, 11);
    assert_eq!(civil_from_days(before), (1582, 10, 4));
    assert_eq!(civil_from_days(after), (1582, 10, 15));
}

#[test]
fn century_and_era_boundaries() {
    // Feb 28 -> Mar 1 in a non-leap centurial year, Feb 29 in a leap one.
    assert_eq!(
        days_from_civil(1900, 3, 1) - days_from_civil(1900, 2, 28),
        1
    );
    assert_eq!(
        days_from_civil(2000, 3, 1) - days_from_civil(2000, 2, 28),
        2
    );
    // A full 400-year era is exactly 146097 days everywhere.
    for &y in &[-400_i64, 0, 1600, 1958, 40_000] {
        assert_eq!(
            days_from_civil(y + 400, 1, 1) - days_from_civil(y, 1, 1),
            146_097,
            "era starting {}",
            y
        );
    }
    assert!(is_leap_year(2000) && !is_leap_year(1900));
}
