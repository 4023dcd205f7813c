/// Attoseconds per second: the sub-second resolution of the TAI scale.
pub const ATTOSECONDS_PER_SECOND: i64 = 1_000_000_000_000_000_000;

pub const ATTOSECONDS_PER_FEMTOSECOND: i64 = 1_000;

pub const ATTOSECONDS_PER_PICOSECOND: i64 = 1_000_000;

pub const ATTOSECONDS_PER_NANOSECOND: i64 = 1_000_000_000;

pub const ATTOSECONDS_PER_MICROSECOND: i64 = 1_000_000_000_000;

pub const ATTOSECONDS_PER_MILLISECOND: i64 = 1_000_000_000_000_000;

pub const SECONDS_PER_MINUTE: i64 = 60;

pub const SECONDS_PER_HOUR: i64 = 3_600;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const DAYS_PER_WEEK: i64 = 7;

/// Days per 400-year Gregorian era (the leap-rule cycle length).
pub const DAYS_PER_ERA: i64 = 146_097;

/// Calendar year of the TAI epoch, 1958-01-01 00:00:00.
pub const EPOCH_YEAR: i64 = 1958;
