//! International Atomic Time (TAI) with attosecond resolution.
//!
//! TAI is a continuous time scale with no leap seconds: it never repeats and
//! never skips. This crate represents a TAI moment as whole seconds since the
//! epoch (1958-01-01 00:00:00) plus attoseconds of sub-second time, giving a
//! range of hundreds of billions of years at 1e-18 s resolution.
//!
//! # Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`instant`] | The [`Tai`] fixed-point instant: normalization, ordering, arithmetic, civil conversion |
//! | [`gregorian`] | The [`Gregorian`] civil decomposition (calendar fields plus weekday / day-of-year) |
//! | [`leap`] | The [`LeapSecondTable`]: the mutable, concurrently-read UTC correction registry |
//! | [`unix`] | Unix/UTC boundary conversion and the host clock (`now`) |
//! | [`constants`] | Epoch offset and the builtin leap-second seed |
//!
//! # Leap seconds
//!
//! TAI itself needs no leap-second handling; the table matters only at the
//! Unix/UTC boundary. Unix times observe UTC, which is TAI skewed by the
//! accumulated leap seconds, so every [`unix`] conversion consults a
//! [`LeapSecondTable`]:
//!
//! ```text
//! unix = tai - epoch_offset - cumulative_skew(unix timeline)
//! ```
//!
//! The table is an explicitly owned value, not process-global state. A host
//! typically creates one [`LeapSecondTable::builtin`] at startup, shares it
//! behind an `Arc`, and keeps it current with
//! [`register`](LeapSecondTable::register) as new IERS bulletins are
//! published. Lookups take a read lock and run concurrently; registration
//! and removal take the write lock. A stale table makes Unix conversions
//! drift by the number of missing leap seconds; purely TAI-side operations
//! are unaffected.
//!
//! # Usage
//!
//! ```
//! use tai_time::{LeapSecondTable, Tai};
//!
//! let table = LeapSecondTable::builtin();
//!
//! let t = Tai::from_date(2017, 1, 1)?.add_hms(12, 30, 0);
//! let g = t.to_gregorian();
//! assert_eq!((g.year, g.month, g.day, g.hour), (2017, 1, 1, 12));
//!
//! let (secs, nsecs) = table.to_unix(t);
//! assert_eq!(table.from_unix(secs, nsecs), t);
//! # Ok::<(), tai_time::TimeError>(())
//! ```

pub mod constants;
pub mod gregorian;
pub mod instant;
pub mod leap;
pub mod unix;

pub use gregorian::Gregorian;
pub use instant::Tai;
pub use leap::{LeapSecond, LeapSecondTable};

pub use tai_core::{CalendarError, CalendarResult};

use thiserror::Error;

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

/// Failures surfaced by time conversions and leap-table administration.
///
/// Every failure is returned to the direct caller; nothing is logged or
/// swallowed internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Civil-date input failed validation.
    #[error(transparent)]
    InvalidDate(#[from] CalendarError),

    /// The instant is already registered with a different cumulative skew.
    /// The table is left unchanged.
    #[error("leap second at {unix_utc} already registered with skew {existing}, refusing {proposed}")]
    LeapSkewMismatch {
        unix_utc: i64,
        existing: i64,
        proposed: i64,
    },

    /// The instant predates the earliest published leap second; there are no
    /// leap seconds before that floor by definition.
    #[error("leap second at {unix_utc} predates the earliest published leap second at {floor}")]
    LeapBeforeFloor { unix_utc: i64, floor: i64 },

    /// Removal would leave fewer entries than the seeded historical record.
    /// This is a programmer error: published corrections must never be
    /// forgotten. Callers should treat it as fatal rather than retry.
    #[error("removing the leap second at {unix_utc} would leave fewer than the {floor} published entries")]
    LeapTableUnderflow { unix_utc: i64, floor: usize },

    /// A caller-supplied seed was not strictly ascending by instant.
    #[error("leap second seed is not strictly ascending at index {index}")]
    UnsortedSeed { index: usize },
}
