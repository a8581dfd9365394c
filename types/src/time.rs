//! Timestamp type used throughout the ledger.
//!
//! Timestamps are Unix epoch milliseconds (UTC) — the resolution events are
//! recorded at and the stipend interval is measured in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64;
        Self(millis)
    }

    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Whether at least `interval_ms` has passed since this timestamp.
    pub fn has_elapsed(&self, interval_ms: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(interval_ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_elapsed_at_exact_boundary() {
        let t = Timestamp::new(1_000);
        assert!(t.has_elapsed(500, Timestamp::new(1_500)));
        assert!(!t.has_elapsed(500, Timestamp::new(1_499)));
    }

    #[test]
    fn has_elapsed_tolerates_clock_skew() {
        // A stipend clock ahead of `now` must not wrap into "elapsed".
        let t = Timestamp::new(5_000);
        assert!(!t.has_elapsed(1_000, Timestamp::new(4_000)));
    }
}
