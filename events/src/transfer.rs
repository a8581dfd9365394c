//! Transfer event: move currency between participants.

use florin_types::{Amount, EventId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A transfer as submitted by the caller, before derived fields exist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: UserId,
    pub to: UserId,
    pub amount: Amount,
    pub note: String,
    /// Reference to whatever the transfer pays for.
    pub link: String,
}

/// A recorded transfer.
///
/// `fee` is computed from the fee rate in force at submission time and is
/// withheld from the sender and destroyed. It is authoritative forever:
/// replay never recomputes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: UserId,
    pub to: UserId,
    pub amount: Amount,
    pub fee: Amount,
    pub note: String,
    pub link: String,
    pub time: Timestamp,
    pub id: EventId,
}

impl TransferEvent {
    /// Build the durable event from a request plus the derived fields.
    pub fn record(req: TransferRequest, fee: Amount, time: Timestamp, id: EventId) -> Self {
        Self {
            from: req.from,
            to: req.to,
            amount: req.amount,
            fee,
            note: req.note,
            link: req.link,
            time,
            id,
        }
    }
}
