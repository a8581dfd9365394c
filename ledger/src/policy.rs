//! Economic policy — the control loop deriving fee rate and stipend size.
//!
//! A proportional controller holds circulating supply per participant near
//! `target_per_user`: when supply is scarce stipends rise, when supply is
//! excessive transfer fees rise. At or past the target on the safe side,
//! both sit at their configured floors.

use crate::state::LedgerState;
use florin_types::{Amount, EconomyParams};

/// Circulating supply per participant, in micro-units.
///
/// Defined as 0 when no participant has ever transacted.
pub fn circulating_per_user(state: &LedgerState) -> f64 {
    let users = state.user_count();
    if users == 0 {
        return 0.0;
    }
    state.total_supply().as_f64() / users as f64
}

/// Stipend currently paid out, floored at `base_stipend`.
pub fn current_stipend(state: &LedgerState, params: &EconomyParams) -> Amount {
    let target = params.target_per_user.as_f64();
    let base = params.base_stipend.as_f64();
    let raised = (target - circulating_per_user(state) + base) / 2.0;
    Amount::from_f64_floor(raised.max(base))
}

/// Fee rate currently charged on transfers, floored at `base_fee_rate`.
pub fn current_fee_rate(state: &LedgerState, params: &EconomyParams) -> f64 {
    let target = params.target_per_user.as_f64();
    let cpu = circulating_per_user(state);
    let scaled = (1.0 + (cpu * 0.9 - target) / target * 4.0) * params.base_fee_rate;
    scaled.max(params.base_fee_rate)
}

/// Fee withheld from a transfer: `floor(amount × rate)`.
pub fn transfer_fee(amount: Amount, rate: f64) -> Amount {
    Amount::from_f64_floor(amount.as_f64() * rate)
}
