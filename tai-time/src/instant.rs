//! The TAI instant type.
//!
//! [`Tai`] is a two-field fixed-point value: whole seconds since the epoch
//! plus attoseconds of sub-second time. The attosecond field is always
//! normalized to `[0, 1e18)`; [`Tai::new`] is the only raw constructor and
//! enforces the invariant by carrying overflow into the seconds field and
//! rotating negative attoseconds forward by borrowing a second. Because the
//! fields are normalized, the derived lexicographic ordering on
//! `(sec, asec)` is the instant ordering.
//!
//! Pre-epoch instants are ordinary negative-second values and decompose into
//! canonical civil fields: one attosecond before the epoch is
//! `{ sec: -1, asec: 1e18 - 1 }` and reads as 1957-12-31 23:59:59.999....
//!
//! # Precision and range
//!
//! An `i64` second count covers roughly ±292 billion years; the integer
//! calendar arithmetic in `tai-core` is exact across all of it. Overflow
//! beyond that range is out of contract and is not a checked failure.

use crate::gregorian::Gregorian;
use crate::TimeResult;
use tai_core::calendar::{civil_from_days, days_from_civil, validate_civil};
use tai_core::constants::{
    ATTOSECONDS_PER_MICROSECOND, ATTOSECONDS_PER_MILLISECOND, ATTOSECONDS_PER_NANOSECOND,
    ATTOSECONDS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use tai_core::math::{floor_div, floor_mod};

/// An International Atomic Time moment.
///
/// The zero value ([`Tai::default`] / [`Tai::epoch`]) is
/// 1958-01-01 00:00:00.0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tai {
    /// Whole seconds since the TAI epoch; negative before it.
    sec: i64,
    /// Attoseconds of sub-second time, in `[0, 1e18)`.
    asec: i64,
}

impl Tai {
    /// Creates an instant from raw components, normalizing `asec` into
    /// `[0, 1e18)` by carrying whole seconds into `sec`.
    ///
    /// Normalization is idempotent: re-normalizing an already-normalized
    /// value is a no-op.
    pub fn new(sec: i64, asec: i64) -> Self {
        let mut sec = sec + asec / ATTOSECONDS_PER_SECOND;
        let mut asec = asec % ATTOSECONDS_PER_SECOND;
        if asec < 0 {
            asec += ATTOSECONDS_PER_SECOND;
            sec -= 1;
        }
        Self { sec, asec }
    }

    /// The TAI epoch, 1958-01-01 00:00:00.0.
    pub const fn epoch() -> Self {
        Self { sec: 0, asec: 0 }
    }

    /// Whole seconds since the epoch.
    pub const fn seconds(&self) -> i64 {
        self.sec
    }

    /// Sub-second attoseconds, always in `[0, 1e18)`.
    pub const fn attoseconds(&self) -> i64 {
        self.asec
    }

    /// Creates the instant for midnight starting the given civil date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`](crate::CalendarError) (as
    /// [`TimeError::InvalidDate`](crate::TimeError::InvalidDate)) if the
    /// fields do not name a real proleptic Gregorian date.
    pub fn from_date(year: i64, month: u8, day: u8) -> TimeResult<Self> {
        validate_civil(year, month, day)?;
        Ok(Self {
            sec: days_from_civil(year, month, day) * SECONDS_PER_DAY,
            asec: 0,
        })
    }

    /// Recomposes an instant from a civil decomposition.
    ///
    /// The conversion functions are the legitimate producers of a
    /// [`Gregorian`]; hand-built values with out-of-range fields have
    /// undefined round-trip behavior.
    pub fn from_gregorian(g: Gregorian) -> Self {
        let sec = days_from_civil(g.year, g.month, g.day) * SECONDS_PER_DAY
            + i64::from(g.hour) * SECONDS_PER_HOUR
            + i64::from(g.min) * SECONDS_PER_MINUTE
            + i64::from(g.sec);
        Self::new(sec, g.asec)
    }

    /// Decomposes the instant into canonical civil fields.
    ///
    /// The day count and time-of-day split uses floored division, so
    /// pre-epoch instants still yield hour/minute/second in their canonical
    /// non-negative ranges.
    pub fn to_gregorian(&self) -> Gregorian {
        let days = floor_div(self.sec, SECONDS_PER_DAY);
        let mut rem = floor_mod(self.sec, SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let hour = (rem / SECONDS_PER_HOUR) as u8;
        rem %= SECONDS_PER_HOUR;
        Gregorian {
            year,
            month,
            day,
            hour,
            min: (rem / SECONDS_PER_MINUTE) as u8,
            sec: (rem % SECONDS_PER_MINUTE) as u8,
            asec: self.asec,
        }
    }

    /// Returns the instant offset by the given seconds and attoseconds,
    /// renormalized.
    ///
    /// A single call cannot express more than ~9.2e18 attoseconds (the
    /// `i64` limit); for larger sub-second offsets use
    /// [`add_milliseconds`](Self::add_milliseconds),
    /// [`add_microseconds`](Self::add_microseconds), or
    /// [`add_nanoseconds`](Self::add_nanoseconds).
    #[must_use]
    pub fn add(&self, sec: i64, asec: i64) -> Self {
        Self::new(self.sec + sec, self.asec + asec)
    }

    /// Returns the instant offset by the given hours, minutes, and seconds.
    #[must_use]
    pub fn add_hms(&self, hours: i64, minutes: i64, seconds: i64) -> Self {
        self.add(
            hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
            0,
        )
    }

    /// Returns the instant offset by up to 2^63 milliseconds.
    #[must_use]
    pub fn add_milliseconds(&self, msec: i64) -> Self {
        self.add(msec / 1_000, (msec % 1_000) * ATTOSECONDS_PER_MILLISECOND)
    }

    /// Returns the instant offset by up to 2^63 microseconds.
    #[must_use]
    pub fn add_microseconds(&self, usec: i64) -> Self {
        self.add(
            usec / 1_000_000,
            (usec % 1_000_000) * ATTOSECONDS_PER_MICROSECOND,
        )
    }

    /// Returns the instant offset by up to 2^63 nanoseconds.
    #[must_use]
    pub fn add_nanoseconds(&self, nsec: i64) -> Self {
        self.add(
            nsec / 1_000_000_000,
            (nsec % 1_000_000_000) * ATTOSECONDS_PER_NANOSECOND,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tai_core::constants::ATTOSECONDS_PER_SECOND;

    #[test]
    fn test_normalization_carries_overflow() {
        let t = Tai::new(0, 3 * ATTOSECONDS_PER_SECOND + 7);
        assert_eq!(t.seconds(), 3);
        assert_eq!(t.attoseconds(), 7);
    }

    #[test]
    fn test_normalization_borrows_for_negative_fraction() {
        let t = Tai::new(0, -1);
        assert_eq!(t.seconds(), -1);
        assert_eq!(t.attoseconds(), ATTOSECONDS_PER_SECOND - 1);

        // Magnitude larger than one whole second.
        let t = Tai::new(10, -2 * ATTOSECONDS_PER_SECOND - 5);
        assert_eq!(t.seconds(), 7);
        assert_eq!(t.attoseconds(), ATTOSECONDS_PER_SECOND - 5);
    }

    #[test]
    fn test_normalization_idempotence() {
        let cases = [
            (0_i64, 0_i64),
            (5, 123),
            (0, -1),
            (-3, 2 * ATTOSECONDS_PER_SECOND + 1),
            (7, -3 * ATTOSECONDS_PER_SECOND),
            (i64::MIN / 2, ATTOSECONDS_PER_SECOND - 1),
        ];
        for &(sec, asec) in &cases {
            let once = Tai::new(sec, asec);
            let twice = Tai::new(once.seconds(), once.attoseconds());
            assert_eq!(once, twice, "re-normalizing {:?} changed it", (sec, asec));
            assert!(
                (0..ATTOSECONDS_PER_SECOND).contains(&once.attoseconds()),
                "asec out of range for {:?}",
                (sec, asec)
            );
        }
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Tai::new(1, 0);
        let b = Tai::new(1, 1);
        let c = Tai::new(2, 0);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a, Tai::new(0, ATTOSECONDS_PER_SECOND));
        assert!(Tai::new(-1, ATTOSECONDS_PER_SECOND - 1) < Tai::epoch());
    }

    #[test]
    fn test_add_spans_multiple_seconds() {
        let t = Tai::epoch().add(0, 9 * ATTOSECONDS_PER_SECOND / 2);
        assert_eq!(t.seconds(), 4);
        assert_eq!(t.attoseconds(), ATTOSECONDS_PER_SECOND / 2);

        let back = t.add(0, -(9 * ATTOSECONDS_PER_SECOND / 2));
        assert_eq!(back, Tai::epoch());
    }

    #[test]
    fn test_add_hms() {
        let t = Tai::epoch().add_hms(1, 2, 3);
        assert_eq!(t.seconds(), 3_723);
        let g = t.to_gregorian();
        assert_eq!((g.hour, g.min, g.sec), (1, 2, 3));
    }

    #[test]
    fn test_subunit_helpers() {
        assert_eq!(Tai::epoch().add_milliseconds(1_500).seconds(), 1);
        assert_eq!(
            Tai::epoch().add_milliseconds(1_500).attoseconds(),
            ATTOSECONDS_PER_SECOND / 2
        );
        assert_eq!(
            Tai::epoch().add_microseconds(2_000_001).attoseconds(),
            1_000_000_000_000
        );
        assert_eq!(Tai::epoch().add_nanoseconds(-1), Tai::new(0, -1_000_000_000));
        // Offsets far beyond what a single add() of attoseconds could hold.
        let t = Tai::epoch().add_nanoseconds(86_400_000_000_000);
        assert_eq!(t.seconds(), 86_400);
    }

    #[test]
    fn test_from_date_validates() {
        assert!(Tai::from_date(2020, 2, 29).is_ok());
        assert!(Tai::from_date(2021, 2, 29).is_err());
        assert!(Tai::from_date(2021, 0, 1).is_err());
        assert!(Tai::from_date(2021, 6, 31).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let cases = [
            Tai::epoch(),
            Tai::new(1_483_228_800, 999_999_999_999_999_999),
            Tai::new(-1, 1),
        ];
        for original in cases {
            let json = serde_json::to_string(&original).unwrap();
            let back: Tai = serde_json::from_str(&json).unwrap();
            assert_eq!(original, back, "serde round trip changed {:?}", original);
        }
    }
}
