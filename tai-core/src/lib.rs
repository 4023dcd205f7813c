//! Calendar arithmetic for International Atomic Time (TAI).
//!
//! `tai-core` provides the pure, stateless building blocks under the `tai-time`
//! crate: closed-form conversions between proleptic Gregorian civil dates and
//! epoch-relative day counts, the Gregorian leap-year rule, month and
//! day-of-year tables, weekday derivation, and the floored integer division
//! helpers the conversions depend on.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Civil date <-> day count, leap years, weekdays, validation |
//! | [`constants`] | Unit constants (attoseconds, seconds per day, epoch year) |
//! | [`math`] | `floor_div` / `floor_mod` integer helpers |
//! | [`errors`] | [`CalendarError`] and [`CalendarResult`] |
//!
//! # Design Notes
//!
//! - **Integer-only**: no floating point appears anywhere in the date path,
//!   so conversions are exact across the full supported range (billions of
//!   years either side of the epoch).
//! - **Closed-form**: day arithmetic uses 400-year era decomposition rather
//!   than per-year iteration, so a date ten billion years out costs the same
//!   as tomorrow.
//! - **Epoch**: day 0 is 1958-01-01, the TAI epoch.

pub mod calendar;
pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{CalendarError, CalendarResult};
