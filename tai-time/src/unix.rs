//! Unix/UTC boundary conversion.
//!
//! TAI never touches leap seconds internally; the table matters only when
//! crossing into the Unix representation hosts use. The conversion is a
//! fixed epoch shift (1958 -> 1970, [`UNIX_EPOCH_OFFSET_SECONDS`]) plus the
//! table correction, and the correction lookup always keys off the external
//! Unix/UTC timeline, never the internal one, because the table is defined
//! in terms of externally observed instants:
//!
//! ```text
//! to_unix:   shifted = tai_sec - offset;  unix = shifted - skew(shifted)
//! from_unix: tai_sec = unix + skew(unix) + offset
//! ```
//!
//! The Unix side carries nanosecond sub-second resolution for host interop;
//! the attosecond tail below one nanosecond is truncated on the way out.
//! Conversions are methods on [`LeapSecondTable`] since every call is a
//! table read.

use crate::constants::UNIX_EPOCH_OFFSET_SECONDS;
use crate::instant::Tai;
use crate::leap::LeapSecondTable;
use std::time::{SystemTime, UNIX_EPOCH};
use tai_core::constants::ATTOSECONDS_PER_NANOSECOND;

impl LeapSecondTable {
    /// Converts a TAI instant to `(seconds, nanoseconds)` since the Unix
    /// epoch on the UTC-observing Unix timeline.
    ///
    /// Nanoseconds are truncated from the attosecond field and are always
    /// in `[0, 1e9)`, including for pre-1970 instants (the second count is
    /// floored, not truncated toward zero).
    pub fn to_unix(&self, t: Tai) -> (i64, i64) {
        let shifted = t.seconds() - UNIX_EPOCH_OFFSET_SECONDS;
        let skew = self.correction_at(shifted);
        (shifted - skew, t.attoseconds() / ATTOSECONDS_PER_NANOSECOND)
    }

    /// Converts a Unix/UTC instant to TAI.
    ///
    /// All leap seconds known to the table are consulted; if the table is
    /// stale the result drifts by the number of missing leap seconds.
    /// `nsecs` outside `[0, 1e9)` is accepted and normalized.
    pub fn from_unix(&self, secs: i64, nsecs: i64) -> Tai {
        let skew = self.correction_at(secs);
        Tai::new(
            secs + skew + UNIX_EPOCH_OFFSET_SECONDS,
            nsecs * ATTOSECONDS_PER_NANOSECOND,
        )
    }

    /// The current TAI moment, from the host clock, to the accuracy of the
    /// table's maintenance.
    pub fn now(&self) -> Tai {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => self.from_unix(
                elapsed.as_secs() as i64,
                i64::from(elapsed.subsec_nanos()),
            ),
            // Host clock set before 1970; normalize through Tai::new.
            Err(e) => {
                let before = e.duration();
                self.from_unix(
                    -(before.as_secs() as i64),
                    -i64::from(before.subsec_nanos()),
                )
            }
        }
    }
}
