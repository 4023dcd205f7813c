//! Error types for calendar validation.

use thiserror::Error;

/// Typed failures for civil-date inputs.
///
/// Invalid input is always surfaced to the caller, never clamped. Arithmetic
/// overflow beyond the supported multi-billion-year range is out of contract
/// and is not a checked failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Year outside the strict proleptic Gregorian calendar (year < 1).
    #[error("year {year} is not part of the proleptic Gregorian calendar")]
    InvalidYear { year: i64 },

    /// Month outside 1..=12.
    #[error("month {month} is outside 1..=12")]
    InvalidMonth { month: u8 },

    /// Day outside the valid range for the given month and year.
    #[error("day {day} is invalid for {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
}

/// Convenience alias for `Result<T, CalendarError>`.
pub type CalendarResult<T> = Result<T, CalendarError>;
