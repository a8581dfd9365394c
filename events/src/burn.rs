//! Burn event: destruction of currency held by a participant.

use florin_types::{Amount, EventId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A burn as submitted by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BurnRequest {
    pub from: UserId,
    pub amount: Amount,
    pub note: String,
    /// Reference to whatever the burn pays for.
    pub link: String,
}

/// A recorded burn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BurnEvent {
    pub from: UserId,
    pub amount: Amount,
    pub note: String,
    pub link: String,
    pub time: Timestamp,
    pub id: EventId,
}

impl BurnEvent {
    pub fn record(req: BurnRequest, time: Timestamp, id: EventId) -> Self {
        Self {
            from: req.from,
            amount: req.amount,
            note: req.note,
            link: req.link,
            time,
            id,
        }
    }
}
