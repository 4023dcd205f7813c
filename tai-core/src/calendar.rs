//! Proleptic Gregorian calendar arithmetic.
//!
//! Conversions between civil dates and signed day counts relative to the TAI
//! epoch (1958-01-01 = day 0), using Howard Hinnant's closed-form era
//! algorithms. The civil year is shifted so the computational year starts on
//! March 1, pushing February's variable length to year-end; 400-year eras of
//! exactly [`DAYS_PER_ERA`] days then absorb the century leap rule without
//! any per-year branching.
//!
//! All arithmetic is integer-only and O(1), exact for negative years and for
//! dates billions of years from the epoch.
//!
//! # Year numbering
//!
//! [`is_leap_year`] and the day-count conversions use astronomical year
//! numbering: year 0 exists (and is a leap year) and negative years are
//! valid. Callers that want the strict proleptic Gregorian domain, where
//! year 1 is the floor, should use [`is_leap_year_checked`], which returns a
//! typed [`CalendarError::InvalidYear`] instead of accepting the input.

use crate::constants::{DAYS_PER_ERA, DAYS_PER_WEEK};
use crate::errors::{CalendarError, CalendarResult};
use crate::math::{floor_div, floor_mod};

/// Day count of 1958-01-01 in the March-based scheme (days from 0000-03-01).
///
/// Hinnant's reference constant for 1970-01-01 is 719_468; the TAI epoch is
/// 4383 days earlier.
const EPOCH_DAYS_FROM_MARCH_BASE: i64 = 715_085;

/// Month lengths for a non-leap year, indexed directly by month number.
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Cumulative days before each month in a non-leap year, indexed by month.
const DAYS_BEFORE_MONTH: [u16; 13] = [
    0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334,
];

/// Returns true if `year` is a Gregorian leap year.
///
/// Per USNO: every year exactly divisible by four is a leap year, except
/// centurial years, which are leap years only when exactly divisible by 400.
/// Accepts any year under astronomical numbering, including 0 and negatives.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Strict proleptic Gregorian variant of [`is_leap_year`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for `year < 1`, which is not part
/// of the proleptic Gregorian calendar.
pub fn is_leap_year_checked(year: i64) -> CalendarResult<bool> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    Ok(is_leap_year(year))
}

/// Returns the number of days in the given month, leap-aware for February.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12.
pub fn days_in_month(month: u8, year: i64) -> CalendarResult<u8> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Validates that `(year, month, day)` names a real civil date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`].
pub fn validate_civil(year: i64, month: u8, day: u8) -> CalendarResult<()> {
    let len = days_in_month(month, year)?;
    if day == 0 || day > len {
        return Err(CalendarError::InvalidDay { year, month, day });
    }
    Ok(())
}

/// Converts a civil date to the signed day count relative to 1958-01-01.
///
/// Closed-form: shift to a March-based year, decompose into a 400-year era
/// and year-of-era, locate the day-of-era via the `(153 m + 2) / 5` month
/// table, and recombine. Exact for any year, positive or negative.
///
/// The fields are not validated; out-of-range input yields an unspecified
/// day count. Use [`validate_civil`] first when the source is untrusted.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = floor_div(y, 400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (i64::from(month) + 9) % 12; // March-based month, [0, 11]
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - EPOCH_DAYS_FROM_MARCH_BASE
}

/// Converts a signed day count relative to 1958-01-01 back to a civil date.
///
/// Exact inverse of [`days_from_civil`]: floor-divide into 146097-day eras,
/// recover the year-of-era with the 1460 / 36524 / 146096 sub-era
/// corrections, then map the March-based month index back to January-based.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_DAYS_FROM_MARCH_BASE;
    let era = floor_div(z, DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8; // [1, 31]
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8; // [1, 12]
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Returns the weekday for a day count, 0 = Monday through 6 = Sunday.
///
/// Day 0 (1958-01-01) was a Wednesday. Floored modulo keeps the result in
/// `[0, 6]` for pre-epoch day counts.
pub fn weekday_from_days(days: i64) -> u8 {
    floor_mod(days + 2, DAYS_PER_WEEK) as u8
}

/// Returns the ordinal day of the year, 1-based (Dec 31 is 365 or 366).
///
/// Expects a canonical `(year, month, day)` as produced by
/// [`civil_from_days`]; `month` must be in 1..=12.
pub fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    debug_assert!((1..=12).contains(&month));
    let mut doy = DAYS_BEFORE_MONTH[month as usize] + u16::from(day);
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}
