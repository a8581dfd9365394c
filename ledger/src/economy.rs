//! Operation coordination — the single writer over log and state.
//!
//! Every mutating operation runs validate → append → apply inside one
//! exclusive critical section; interleaving between validation and
//! application is exactly where a stale-balance double-spend could occur.
//! Read operations share the lock's read side and observe only fully pre-
//! or post-mutation state. The critical section holds for one log append
//! plus O(1) map updates; nothing else happens inside it.

use crate::error::LedgerError;
use crate::policy;
use crate::replay::replay;
use crate::state::LedgerState;
use florin_events::{
    codec, validation, BurnEvent, BurnRequest, Event, MintEvent, MintRequest, TransferEvent,
    TransferRequest, ValidationError, STIPEND_NOTE,
};
use florin_store::EventLog;
use florin_types::{Amount, EconomyParams, EventId, Timestamp, UserId};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The economy: an event log, the state derived from it, and the
/// parameters of the control loop.
///
/// Owns all mutable state explicitly, so multiple independent instances
/// can coexist (one per test, for instance). The id provider supplies
/// unique event ids; uniqueness is the provider's contract.
pub struct Economy<L: EventLog> {
    inner: RwLock<Inner<L>>,
    params: EconomyParams,
    next_id: Box<dyn Fn() -> EventId + Send + Sync>,
}

struct Inner<L> {
    log: L,
    state: LedgerState,
}

/// Snapshot of the economy's headline indicators.
#[derive(Clone, Debug)]
pub struct EconomySummary {
    pub user_count: usize,
    pub total_supply: Amount,
    pub circulating_per_user: Amount,
    pub target_per_user: Amount,
    pub fee_rate: f64,
    pub stipend: Amount,
}

impl<L: EventLog> Economy<L> {
    /// Read the whole log, replay it, and stand up the economy.
    ///
    /// Fails on an unreadable log or an integrity fault; serving with an
    /// untrustworthy ledger is never an option, and whether to exit the
    /// process is the caller's decision.
    pub fn open<F>(mut log: L, params: EconomyParams, next_id: F) -> Result<Self, LedgerError>
    where
        F: Fn() -> EventId + Send + Sync + 'static,
    {
        let records = log.read_all()?;
        let state = replay(&records)?;
        tracing::info!(
            records = records.len(),
            users = state.user_count(),
            supply = %state.total_supply(),
            "ledger replayed"
        );
        Ok(Self {
            inner: RwLock::new(Inner { log, state }),
            params,
            next_id: Box::new(next_id),
        })
    }

    // ── Mutating operations ────────────────────────────────────────────

    /// Transfer currency between participants, destroying the current fee.
    pub fn transfer(&self, req: TransferRequest) -> Result<TransferEvent, LedgerError> {
        self.transfer_at(req, Timestamp::now())
    }

    /// [`transfer`](Self::transfer) with an explicit submission time.
    pub fn transfer_at(
        &self,
        req: TransferRequest,
        now: Timestamp,
    ) -> Result<TransferEvent, LedgerError> {
        let mut inner = self.write_inner();

        // The fee is fixed by the rate in force right now; it is recorded
        // in the event and never recomputed.
        let rate = policy::current_fee_rate(&inner.state, &self.params);
        let fee = policy::transfer_fee(req.amount, rate);
        validation::validate_transfer(&req, fee, inner.state.balance(req.from))?;

        let event = TransferEvent::record(req, fee, now, (self.next_id)());
        Self::commit(&mut inner, &Event::Transfer(event.clone()))?;
        tracing::info!(
            from = %event.from,
            to = %event.to,
            amount = %event.amount,
            fee = %event.fee,
            "transfer recorded"
        );
        Ok(event)
    }

    /// Create currency for a participant. Administrative; the caller is
    /// trusted.
    pub fn mint(&self, req: MintRequest) -> Result<MintEvent, LedgerError> {
        self.mint_at(req, Timestamp::now())
    }

    /// [`mint`](Self::mint) with an explicit submission time.
    pub fn mint_at(&self, req: MintRequest, now: Timestamp) -> Result<MintEvent, LedgerError> {
        let mut inner = self.write_inner();
        let event = self.mint_locked(&mut inner, req, now)?;
        tracing::info!(to = %event.to, amount = %event.amount, "mint recorded");
        Ok(event)
    }

    /// Destroy currency held by a participant.
    pub fn burn(&self, req: BurnRequest) -> Result<BurnEvent, LedgerError> {
        self.burn_at(req, Timestamp::now())
    }

    /// [`burn`](Self::burn) with an explicit submission time.
    pub fn burn_at(&self, req: BurnRequest, now: Timestamp) -> Result<BurnEvent, LedgerError> {
        let mut inner = self.write_inner();
        validation::validate_burn(&req, inner.state.balance(req.from))?;

        let event = BurnEvent::record(req, now, (self.next_id)());
        Self::commit(&mut inner, &Event::Burn(event.clone()))?;
        tracing::info!(from = %event.from, amount = %event.amount, "burn recorded");
        Ok(event)
    }

    /// Pay the periodic stipend to a participant.
    ///
    /// Rejected without creating an event if the participant's last stipend
    /// is younger than the configured interval. The amount is whatever the
    /// control loop pays right now.
    pub fn stipend(&self, to: UserId) -> Result<MintEvent, LedgerError> {
        self.stipend_at(to, Timestamp::now())
    }

    /// [`stipend`](Self::stipend) with an explicit submission time.
    pub fn stipend_at(&self, to: UserId, now: Timestamp) -> Result<MintEvent, LedgerError> {
        let mut inner = self.write_inner();

        if let Some(last) = inner.state.last_stipend(to) {
            if !last.has_elapsed(self.params.stipend_interval_ms, now) {
                return Err(ValidationError::StipendNotDue.into());
            }
        }

        let amount = policy::current_stipend(&inner.state, &self.params);
        let req = MintRequest {
            to,
            amount,
            note: STIPEND_NOTE.into(),
        };
        let event = self.mint_locked(&mut inner, req, now)?;
        tracing::info!(to = %event.to, amount = %event.amount, "stipend recorded");
        Ok(event)
    }

    // ── Read operations ────────────────────────────────────────────────

    /// Balance of a participant; unseen identifiers hold zero.
    pub fn balance_of(&self, id: UserId) -> Amount {
        self.read_inner().state.balance(id)
    }

    /// Fee rate a transfer submitted now would pay.
    pub fn current_fee_rate(&self) -> f64 {
        let inner = self.read_inner();
        policy::current_fee_rate(&inner.state, &self.params)
    }

    /// Stipend a participant claiming now would receive.
    pub fn current_stipend_amount(&self) -> Amount {
        let inner = self.read_inner();
        policy::current_stipend(&inner.state, &self.params)
    }

    /// Running total of all balances.
    pub fn total_supply(&self) -> Amount {
        self.read_inner().state.total_supply()
    }

    /// Number of participants that ever held a balance entry.
    pub fn user_count(&self) -> usize {
        self.read_inner().state.user_count()
    }

    /// The control-loop parameters this economy runs with.
    pub fn params(&self) -> &EconomyParams {
        &self.params
    }

    /// Headline indicators, read under one lock acquisition.
    pub fn summary(&self) -> EconomySummary {
        let inner = self.read_inner();
        EconomySummary {
            user_count: inner.state.user_count(),
            total_supply: inner.state.total_supply(),
            circulating_per_user: Amount::from_f64_floor(policy::circulating_per_user(
                &inner.state,
            )),
            target_per_user: self.params.target_per_user,
            fee_rate: policy::current_fee_rate(&inner.state, &self.params),
            stipend: policy::current_stipend(&inner.state, &self.params),
        }
    }

    // ── Internals ──────────────────────────────────────────────────────

    /// Validate and commit a mint while already holding the writer lock.
    /// Shared by `mint_at` and `stipend_at`.
    fn mint_locked(
        &self,
        inner: &mut Inner<L>,
        req: MintRequest,
        now: Timestamp,
    ) -> Result<MintEvent, LedgerError> {
        validation::validate_mint(&req)?;
        if inner.state.total_supply().checked_add(req.amount).is_none() {
            return Err(ValidationError::AmountOverflow.into());
        }

        let event = MintEvent::record(req, now, (self.next_id)());
        Self::commit(inner, &Event::Mint(event.clone()))?;
        Ok(event)
    }

    /// Append the event to the log, then apply it to the state.
    ///
    /// Balances move only after the record is durable; an append failure
    /// short-circuits with no state change.
    fn commit(inner: &mut Inner<L>, event: &Event) -> Result<(), LedgerError> {
        let record = codec::encode(event).map_err(LedgerError::Encode)?;
        inner.log.append(&record)?;
        inner.state.apply(event)?;
        Ok(())
    }

    fn read_inner(&self) -> RwLockReadGuard<'_, Inner<L>> {
        self.inner.read().expect("ledger lock poisoned")
    }

    fn write_inner(&self) -> RwLockWriteGuard<'_, Inner<L>> {
        self.inner.write().expect("ledger lock poisoned")
    }
}
