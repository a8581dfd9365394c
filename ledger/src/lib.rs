//! Event-sourced ledger for the florin economy.
//!
//! The append-only log is the sole source of truth. In-memory state
//! ([`LedgerState`]) is derived by replaying the log at startup and is
//! mutated thereafter only *after* a record has been durably appended —
//! never ahead of it. [`Economy`] coordinates every mutating operation
//! inside a single writer critical section; the economic policy functions
//! derive the current fee rate and stipend from the live state.

pub mod economy;
pub mod error;
pub mod policy;
pub mod replay;
pub mod state;

pub use economy::{Economy, EconomySummary};
pub use error::{IntegrityError, LedgerError};
pub use replay::replay;
pub use state::LedgerState;
