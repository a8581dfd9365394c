//! Derived in-memory ledger state.

use crate::error::IntegrityError;
use florin_events::{Event, STIPEND_NOTE};
use florin_types::{Amount, Timestamp, UserId};
use std::collections::HashMap;

/// Balance table, stipend clocks, and the running supply total.
///
/// Rebuilt from the log at startup, mutated in memory afterwards, and
/// discardable at shutdown — the log remains the sole source of truth.
/// `total_supply` is maintained incrementally by the same routine that
/// moves balances, so indicator reads are O(1) instead of a full scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    balances: HashMap<UserId, Amount>,
    last_stipends: HashMap<UserId, Timestamp>,
    total_supply: Amount,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of a participant; unseen identifiers hold zero.
    pub fn balance(&self, id: UserId) -> Amount {
        self.balances.get(&id).copied().unwrap_or(Amount::ZERO)
    }

    /// Time of the participant's last stipend, if any.
    pub fn last_stipend(&self, id: UserId) -> Option<Timestamp> {
        self.last_stipends.get(&id).copied()
    }

    /// Number of distinct participants that ever held a balance entry.
    /// Entries are never removed, so a drained participant still counts.
    pub fn user_count(&self) -> usize {
        self.balances.len()
    }

    /// Running total of all balances.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Sum every balance by full scan. The slow equivalent of
    /// [`total_supply`](Self::total_supply), kept for audits and tests.
    pub fn audit_supply(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::ZERO, |acc, b| acc.saturating_add(*b))
    }

    /// Apply one event's balance delta.
    ///
    /// This is the single implementation of the per-kind rules, used both
    /// by replay and by the live coordinator after a durable append. On
    /// error the state may be partially updated and must be discarded.
    pub fn apply(&mut self, event: &Event) -> Result<(), IntegrityError> {
        match event {
            Event::Transfer(e) => {
                let withdrawal = e
                    .amount
                    .checked_add(e.fee)
                    .ok_or(IntegrityError::SupplyOverflow)?;
                self.debit(e.from, withdrawal)?;
                self.credit(e.to, e.amount)?;
            }
            Event::Mint(e) => {
                self.credit(e.to, e.amount)?;
                if e.note == STIPEND_NOTE {
                    self.last_stipends.insert(e.to, e.time);
                }
            }
            Event::Burn(e) => {
                self.debit(e.from, e.amount)?;
            }
        }
        Ok(())
    }

    fn credit(&mut self, to: UserId, amount: Amount) -> Result<(), IntegrityError> {
        let entry = self.balances.entry(to).or_insert(Amount::ZERO);
        *entry = entry
            .checked_add(amount)
            .ok_or(IntegrityError::SupplyOverflow)?;
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(IntegrityError::SupplyOverflow)?;
        Ok(())
    }

    fn debit(&mut self, from: UserId, amount: Amount) -> Result<(), IntegrityError> {
        let available = self.balance(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(IntegrityError::Insolvent {
                payer: from,
                available,
                required: amount,
            })?;
        self.balances.insert(from, remaining);
        // The supply always covers any single balance, so this cannot underflow.
        self.total_supply = self.total_supply.saturating_sub(amount);
        Ok(())
    }
}
