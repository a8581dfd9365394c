//! Fixed-point currency amounts.
//!
//! Amounts are represented as integer micro-units (u64) to avoid
//! floating-point errors: 1 unit = 1_000_000 micro-units. At 64 bits the
//! economy-wide ceiling is roughly 18 tera-units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A currency amount in micro-units.
///
/// Internally stored as raw micro-units (u64) for precision.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    // Denominations.
    pub const MICRO: Self = Self(1);
    pub const MILLI: Self = Self(1_000);
    /// The standard unit.
    pub const UNIT: Self = Self(1_000_000);
    pub const KILO: Self = Self(1_000_000_000);
    pub const MEGA: Self = Self(1_000_000_000_000);
    pub const GIGA: Self = Self(1_000_000_000_000_000);
    pub const TERA: Self = Self(1_000_000_000_000_000_000);

    pub const fn from_micros(raw: u64) -> Self {
        Self(raw)
    }

    /// Construct from whole units.
    pub const fn from_units(units: u64) -> Self {
        Self(units * Self::UNIT.0)
    }

    pub const fn micros(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Micro-units as `f64`, for the economic control-loop formulas.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Truncate a non-negative `f64` of micro-units back to an amount.
    pub fn from_f64_floor(micros: f64) -> Self {
        if micros <= 0.0 {
            Self::ZERO
        } else {
            Self(micros as u64)
        }
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06} unit", self.0 / Self::UNIT.0, self.0 % Self::UNIT.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_micros() {
        assert_eq!(Amount::from_micros(1_100_000).to_string(), "1.100000 unit");
        assert_eq!(Amount::from_micros(42).to_string(), "0.000042 unit");
        assert_eq!(Amount::from_units(100).to_string(), "100.000000 unit");
    }

    #[test]
    fn checked_sub_underflow_is_none() {
        let a = Amount::from_micros(5);
        let b = Amount::from_micros(6);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(Amount::from_micros(1)));
    }

    #[test]
    fn denominations_scale_by_thousand() {
        assert_eq!(Amount::MILLI.micros(), 1_000 * Amount::MICRO.micros());
        assert_eq!(Amount::UNIT.micros(), 1_000 * Amount::MILLI.micros());
        assert_eq!(Amount::TERA.micros(), 1_000_000 * Amount::MEGA.micros());
    }

    #[test]
    fn from_f64_floor_truncates() {
        assert_eq!(Amount::from_f64_floor(1.9), Amount::from_micros(1));
        assert_eq!(Amount::from_f64_floor(-3.0), Amount::ZERO);
    }
}
