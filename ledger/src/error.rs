use florin_events::{CodecError, ValidationError};
use florin_store::StoreError;
use florin_types::{Amount, UserId};
use thiserror::Error;

/// Top-level error for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A request violated a precondition. Recoverable; nothing changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The log could not be written or read.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An event could not be encoded for the log.
    #[error("failed to encode event: {0}")]
    Encode(#[source] CodecError),

    /// A record of a known kind could not be decoded. The log is
    /// untrustworthy; the load aborts.
    #[error("record {index} is corrupt: {source}")]
    CorruptRecord {
        index: usize,
        #[source]
        source: CodecError,
    },

    /// A recorded event violates a ledger invariant. The log is
    /// untrustworthy; the load aborts.
    #[error("record {index} breaks ledger integrity: {source}")]
    Integrity {
        index: usize,
        #[source]
        source: IntegrityError,
    },

    /// Applying an already-validated event failed. The in-memory state no
    /// longer matches what validation saw; treat the instance as unusable.
    #[error("state diverged while applying a validated event: {0}")]
    Apply(#[from] IntegrityError),
}

/// A state mutation that would violate a ledger invariant.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("withdrawal by {payer} exceeds recorded balance: balance was {available}, at least {required} is required")]
    Insolvent {
        payer: UserId,
        available: Amount,
        required: Amount,
    },

    #[error("economy supply overflows the currency range")]
    SupplyOverflow,
}
