//! Civil (proleptic Gregorian) decomposition of a TAI instant.

use tai_core::calendar::{day_of_year, days_from_civil, weekday_from_days};

/// Weekday indices returned by [`Gregorian::weekday`].
pub const MONDAY: u8 = 0;
pub const TUESDAY: u8 = 1;
pub const WEDNESDAY: u8 = 2;
pub const THURSDAY: u8 = 3;
pub const FRIDAY: u8 = 4;
pub const SATURDAY: u8 = 5;
pub const SUNDAY: u8 = 6;

/// A calendar date and time of day in the proleptic Gregorian calendar.
///
/// Produced by [`Tai::to_gregorian`](crate::Tai::to_gregorian), whose output
/// is always canonical: month 1..=12, day valid for the month, hour 0..=23,
/// minute and second 0..=59, attoseconds in `[0, 1e18)`. Two values are
/// equal iff every field matches; no normalization happens on comparison.
/// Hand-built values with out-of-range fields have undefined round-trip
/// behavior.
///
/// This is the surface a text formatter consumes; the library itself does
/// not parse or render strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gregorian {
    /// Signed year; astronomical numbering (year 0 exists).
    pub year: i64,
    /// Month, 1..=12.
    pub month: u8,
    /// Day of month, 1..=31.
    pub day: u8,
    /// Hour, 0..=23.
    pub hour: u8,
    /// Minute, 0..=59.
    pub min: u8,
    /// Second, 0..=59.
    pub sec: u8,
    /// Attoseconds of sub-second time, `[0, 1e18)`.
    pub asec: i64,
}

impl Gregorian {
    /// Convenience constructor for a date at midnight.
    pub fn from_ymd(year: i64, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            ..Self::default()
        }
    }

    /// The weekday of the date part, [`MONDAY`] (0) through [`SUNDAY`] (6).
    pub fn weekday(&self) -> u8 {
        weekday_from_days(days_from_civil(self.year, self.month, self.day))
    }

    /// The 1-based ordinal day of the year (Dec 31 is 365, or 366 in a
    /// leap year).
    pub fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month, self.day)
    }
}
