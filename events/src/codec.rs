//! Durable record codec.
//!
//! Grammar, one record per line:
//!
//! ```text
//! <Kind> <json-payload>
//! Kind ∈ { "Transaction", "Mint", "Burn" }
//! ```
//!
//! Amounts are integer micro-units, timestamps integer milliseconds, ids
//! strings. A trailing newline terminates every record (added by the log
//! store, not the codec); a final empty line is not a record.
//!
//! Unrecognized kind tags decode to [`Decoded::Unknown`] so the replayer can
//! skip them — the forward-compatibility path for future kinds. A payload of
//! a *known* kind that fails to decode is an error.

use crate::error::CodecError;
use crate::Event;

/// Kind tag for transfer records.
pub const KIND_TRANSFER: &str = "Transaction";
/// Kind tag for mint records.
pub const KIND_MINT: &str = "Mint";
/// Kind tag for burn records.
pub const KIND_BURN: &str = "Burn";

/// Result of decoding one record.
#[derive(Debug)]
pub enum Decoded {
    /// A record of a known kind.
    Event(Event),
    /// A record of an unrecognized kind — skipped, not an error.
    Unknown { kind: String },
}

/// Encode an event as one record line (no trailing newline).
pub fn encode(event: &Event) -> Result<String, CodecError> {
    let payload = match event {
        Event::Transfer(e) => serde_json::to_string(e)?,
        Event::Mint(e) => serde_json::to_string(e)?,
        Event::Burn(e) => serde_json::to_string(e)?,
    };
    Ok(format!("{} {}", event.kind(), payload))
}

/// Decode one record line.
pub fn decode(record: &str) -> Result<Decoded, CodecError> {
    let (kind, payload) = record.split_once(' ').ok_or(CodecError::MissingPayload)?;

    let malformed = |source| CodecError::Malformed {
        kind: kind.to_string(),
        source,
    };

    match kind {
        KIND_TRANSFER => serde_json::from_str(payload)
            .map(|e| Decoded::Event(Event::Transfer(e)))
            .map_err(malformed),
        KIND_MINT => serde_json::from_str(payload)
            .map(|e| Decoded::Event(Event::Mint(e)))
            .map_err(malformed),
        KIND_BURN => serde_json::from_str(payload)
            .map(|e| Decoded::Event(Event::Burn(e)))
            .map_err(malformed),
        other => Ok(Decoded::Unknown {
            kind: other.to_string(),
        }),
    }
}
