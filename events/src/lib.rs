//! Ledger event types and their validation logic.
//!
//! Event kinds:
//! - **Transfer**: move currency between participants, destroying a fee
//! - **Mint**: administrative creation of currency
//! - **Burn**: destruction of currency held by a participant
//!
//! Events are immutable once appended to the log. The record codec
//! (`codec`) defines the durable line grammar; `validation` holds the
//! per-kind precondition checks.

pub mod burn;
pub mod codec;
pub mod error;
pub mod mint;
pub mod transfer;
pub mod validation;

pub use burn::{BurnEvent, BurnRequest};
pub use error::{CodecError, ValidationError};
pub use mint::{MintEvent, MintRequest};
pub use transfer::{TransferEvent, TransferRequest};

use florin_types::{EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// Reserved mint note marking a stipend payout.
///
/// A mint carrying this note refreshes the recipient's stipend clock, both
/// live and during replay.
pub const STIPEND_NOTE: &str = "Stipend";

/// The unified event enum wrapping all ledger event kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    Transfer(transfer::TransferEvent),
    Mint(mint::MintEvent),
    Burn(burn::BurnEvent),
}

impl Event {
    /// Get the unique id of this event.
    pub fn id(&self) -> &EventId {
        match self {
            Self::Transfer(e) => &e.id,
            Self::Mint(e) => &e.id,
            Self::Burn(e) => &e.id,
        }
    }

    /// Get the submission timestamp.
    pub fn time(&self) -> Timestamp {
        match self {
            Self::Transfer(e) => e.time,
            Self::Mint(e) => e.time,
            Self::Burn(e) => e.time,
        }
    }

    /// Get the record kind tag used by the codec.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => codec::KIND_TRANSFER,
            Self::Mint(_) => codec::KIND_MINT,
            Self::Burn(_) => codec::KIND_BURN,
        }
    }
}
