//! Boundary-conversion constants and the builtin leap-second seed.

use tai_core::constants::SECONDS_PER_DAY;

/// Whole days between the TAI epoch (1958-01-01) and the Unix epoch
/// (1970-01-01): twelve civil years including the 1960, 1964, and 1968
/// leap days.
pub const UNIX_EPOCH_OFFSET_DAYS: i64 = 4_383;

/// [`UNIX_EPOCH_OFFSET_DAYS`] in seconds (378_691_200).
pub const UNIX_EPOCH_OFFSET_SECONDS: i64 = UNIX_EPOCH_OFFSET_DAYS * SECONDS_PER_DAY;

/// The historical leap-second record known at build time, as
/// `(unix_utc, cumulative_skew)` pairs, strictly ascending by instant.
///
/// This seed defines the historical floor: entries may be appended or
/// amended at runtime via the [`LeapSecondTable`](crate::LeapSecondTable)
/// administrative interface, but the table can never shrink below this
/// record, and no leap second may be registered before its first entry.
///
/// Current through IERS Bulletin C 68 (2024-07-04; no leap second scheduled
/// through at least 2025-01-01).
pub const BUILTIN_LEAP_SECONDS: [(i64, i64); 28] = [
    (63_100_800, 10),
    (78_735_600, 11),
    (94_636_800, 12),
    (126_172_800, 13),
    (157_708_800, 14),
    (189_244_800, 15),
    (220_867_200, 16),
    (252_403_200, 17),
    (283_939_200, 18),
    (315_475_200, 19),
    (362_732_400, 20),
    (394_268_400, 21),
    (425_804_400, 22),
    (488_962_800, 23),
    (567_936_000, 24),
    (631_094_400, 25),
    (662_630_400, 26),
    (709_887_600, 27),
    (741_423_600, 28),
    (772_959_600, 29),
    (820_396_800, 30),
    (867_654_000, 31),
    (915_091_200, 32),
    (1_136_016_000, 33),
    (1_230_710_400, 34),
    (1_341_039_600, 35),
    (1_435_647_600, 36),
    (1_483_171_200, 37),
];
