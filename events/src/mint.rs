//! Mint event: administrative creation of currency.

use florin_types::{Amount, EventId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A mint as submitted by a trusted caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintRequest {
    pub to: UserId,
    pub amount: Amount,
    pub note: String,
}

/// A recorded mint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintEvent {
    pub to: UserId,
    pub amount: Amount,
    pub note: String,
    pub time: Timestamp,
    pub id: EventId,
}

impl MintEvent {
    pub fn record(req: MintRequest, time: Timestamp, id: EventId) -> Self {
        Self {
            to: req.to,
            amount: req.amount,
            note: req.note,
            time,
            id,
        }
    }
}
