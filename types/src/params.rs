//! Economy parameters — the tuning constants of the control loop.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Tuning parameters for the economic control loop.
///
/// The economy tries to hold circulating supply near
/// `target_per_user × user count`: stipends rise when supply is scarce,
/// transfer fees rise when supply is excessive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EconomyParams {
    /// Desired long-run circulating supply per participant.
    pub target_per_user: Amount,

    /// Floor for the periodic stipend.
    pub base_stipend: Amount,

    /// Floor for the transfer fee rate (fraction of the amount, destroyed).
    pub base_fee_rate: f64,

    /// Minimum interval between stipends per participant, in milliseconds.
    pub stipend_interval_ms: u64,
}

impl EconomyParams {
    /// Florin defaults — the intended configuration for the live economy.
    pub fn florin_defaults() -> Self {
        Self {
            target_per_user: Amount::from_units(100),
            base_stipend: Amount::from_units(10),
            base_fee_rate: 0.1,
            stipend_interval_ms: 12 * 60 * 60 * 1000, // 12 hours
        }
    }
}

/// Default is the florin configuration.
impl Default for EconomyParams {
    fn default() -> Self {
        Self::florin_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let params = EconomyParams::default();
        assert_eq!(params.target_per_user, Amount::from_units(100));
        assert_eq!(params.base_stipend, Amount::from_units(10));
        assert!(params.base_fee_rate > 0.0 && params.base_fee_rate < 1.0);
        assert_eq!(params.stipend_interval_ms, 43_200_000);
    }
}
