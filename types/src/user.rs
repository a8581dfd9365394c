//! Participant identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric participant identifier.
///
/// Identifiers are opaque positive integers assigned by the caller; 0 is
/// reserved and never valid as a sender or recipient.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Whether this is the reserved id 0, invalid for any participant field.
    pub const fn is_reserved(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
