use florin_types::{Amount, UserId};
use thiserror::Error;

/// A request that violated a precondition. Recoverable; no state changed.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{op} must have an amount")]
    ZeroAmount { op: &'static str },

    #[error("{op} must have a sender")]
    MissingSender { op: &'static str },

    #[error("{op} must have a recipient")]
    MissingRecipient { op: &'static str },

    #[error("circular transfer: {from} -> {to}")]
    SelfTransfer { from: UserId, to: UserId },

    #[error("{op} must have a note")]
    MissingNote { op: &'static str },

    #[error("{op} must have a link")]
    MissingLink { op: &'static str },

    #[error("insufficient balance: balance was {available}, at least {required} is required")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("amount overflows the currency range")]
    AmountOverflow,

    #[error("next stipend not available yet")]
    StipendNotDue,
}

/// A record that could not be encoded or decoded.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("record is missing a payload")]
    MissingPayload,

    #[error("malformed {kind} payload: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
