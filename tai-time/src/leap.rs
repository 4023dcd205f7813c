//! The leap-second table.
//!
//! Unix times observe UTC, which steps away from TAI every time the IERS
//! inserts a leap second. The table records the accumulated skew as
//! `(unix_utc, cumulative_skew)` pairs, strictly ascending by instant, and
//! answers "what was the total skew just before this Unix instant" for the
//! boundary conversions in [`unix`](crate::unix).
//!
//! # Ownership and concurrency
//!
//! The table is an explicitly owned value: hosts create one (normally
//! [`LeapSecondTable::builtin`]) at startup and hand out references,
//! typically behind an `Arc`. There is no process-global table.
//!
//! Internally the entries sit behind a `std::sync::RwLock`. Lookups (and
//! therefore every Unix conversion) take the read lock and proceed
//! concurrently without blocking each other; [`register`] and [`remove`]
//! take the write lock for the duration of the mutation, so a reader never
//! observes a half-inserted entry or an unsorted table. Critical sections
//! are bounded by the table length (a few dozen entries).
//!
//! # The historical floor
//!
//! The seed the table was constructed with is immutable history: entries
//! cannot be registered before the earliest seeded instant (no leap seconds
//! existed before it by definition), and the table can never shrink below
//! the seeded count.
//!
//! [`register`]: LeapSecondTable::register
//! [`remove`]: LeapSecondTable::remove

use crate::constants::BUILTIN_LEAP_SECONDS;
use crate::{TimeError, TimeResult};
use std::sync::RwLock;

/// One leap-second record: the Unix/UTC instant it took effect and the
/// total accumulated TAI-UTC skew up to and including it, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapSecond {
    pub unix_utc: i64,
    pub cumulative_skew: i64,
}

/// The mutable, concurrently-read registry of leap seconds.
#[derive(Debug)]
pub struct LeapSecondTable {
    entries: RwLock<Vec<LeapSecond>>,
    /// Number of seeded entries; the table never shrinks below this.
    floor_len: usize,
    /// Earliest seeded instant; nothing may be registered before it.
    floor_instant: i64,
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LeapSecondTable {
    /// Creates a table seeded with the builtin historical record
    /// ([`BUILTIN_LEAP_SECONDS`]).
    pub fn builtin() -> Self {
        Self::seeded(
            BUILTIN_LEAP_SECONDS
                .iter()
                .map(|&(unix_utc, cumulative_skew)| LeapSecond {
                    unix_utc,
                    cumulative_skew,
                })
                .collect(),
        )
    }

    /// Creates a table from a caller-supplied seed, which becomes the
    /// historical floor.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::UnsortedSeed`] if the entries are not strictly
    /// ascending by `unix_utc`.
    pub fn from_entries(entries: Vec<LeapSecond>) -> TimeResult<Self> {
        for (index, pair) in entries.windows(2).enumerate() {
            if pair[1].unix_utc <= pair[0].unix_utc {
                return Err(TimeError::UnsortedSeed { index: index + 1 });
            }
        }
        Ok(Self::seeded(entries))
    }

    fn seeded(entries: Vec<LeapSecond>) -> Self {
        let floor_len = entries.len();
        let floor_instant = entries.first().map_or(i64::MIN, |e| e.unix_utc);
        Self {
            entries: RwLock::new(entries),
            floor_len,
            floor_instant,
        }
    }

    /// Returns the cumulative skew of the latest entry strictly before
    /// `unix_utc`, or 0 if no entry precedes it.
    ///
    /// Read-only; any number of callers may run concurrently.
    pub fn correction_at(&self, unix_utc: i64) -> i64 {
        let entries = self.entries.read().expect("leap table lock poisoned");
        match entries.partition_point(|e| e.unix_utc < unix_utc) {
            0 => 0,
            idx => entries[idx - 1].cumulative_skew,
        }
    }

    /// Registers a leap second.
    ///
    /// If `unix_utc` is already present with the same skew this silently
    /// succeeds. The instant need not be the most recent leap second, and
    /// the skew need not differ from its neighbor by exactly one or be
    /// positive.
    ///
    /// Any in-progress lookup completes before the table is updated.
    ///
    /// # Errors
    ///
    /// [`TimeError::LeapSkewMismatch`] if the instant is present with a
    /// different skew, or [`TimeError::LeapBeforeFloor`] if it predates the
    /// earliest seeded entry. The table is unchanged on error.
    pub fn register(&self, unix_utc: i64, cumulative_skew: i64) -> TimeResult<()> {
        if unix_utc < self.floor_instant {
            return Err(TimeError::LeapBeforeFloor {
                unix_utc,
                floor: self.floor_instant,
            });
        }
        let mut entries = self.entries.write().expect("leap table lock poisoned");
        match entries.binary_search_by_key(&unix_utc, |e| e.unix_utc) {
            Ok(idx) => {
                let existing = entries[idx].cumulative_skew;
                if existing != cumulative_skew {
                    return Err(TimeError::LeapSkewMismatch {
                        unix_utc,
                        existing,
                        proposed: cumulative_skew,
                    });
                }
                Ok(())
            }
            Err(idx) => {
                entries.insert(
                    idx,
                    LeapSecond {
                        unix_utc,
                        cumulative_skew,
                    },
                );
                Ok(())
            }
        }
    }

    /// Removes the leap second at `unix_utc`; a silent no-op if the instant
    /// is not in the table.
    ///
    /// # Errors
    ///
    /// [`TimeError::LeapTableUnderflow`] if removal would drop the table
    /// below the seeded count. That is a programmer error (published
    /// corrections must never be forgotten) and should be treated as fatal.
    pub fn remove(&self, unix_utc: i64) -> TimeResult<()> {
        let mut entries = self.entries.write().expect("leap table lock poisoned");
        match entries.binary_search_by_key(&unix_utc, |e| e.unix_utc) {
            Ok(idx) => {
                if entries.len() <= self.floor_len {
                    return Err(TimeError::LeapTableUnderflow {
                        unix_utc,
                        floor: self.floor_len,
                    });
                }
                entries.remove(idx);
                Ok(())
            }
            Err(_) => Ok(()),
        }
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("leap table lock poisoned").len()
    }

    /// True only for a table constructed from an empty seed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of seeded entries (the irreducible floor).
    pub fn floor_len(&self) -> usize {
        self.floor_len
    }

    /// A point-in-time copy of the entries, in ascending order.
    pub fn snapshot(&self) -> Vec<LeapSecond> {
        self.entries
            .read()
            .expect("leap table lock poisoned")
            .clone()
    }
}
