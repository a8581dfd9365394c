//! Log replay — rebuilding state from the record stream.

use crate::error::LedgerError;
use crate::state::LedgerState;
use florin_events::codec::{self, Decoded};

/// Rebuild ledger state by applying every record in append order.
///
/// Runs once at startup, before any operation is accepted. Records of an
/// unknown kind are skipped with a warning — the forward-compatibility path
/// for future kinds. An undecodable record of a known kind, or a recorded
/// withdrawal exceeding the balance it was applied to, aborts the load:
/// the process must not serve with an untrustworthy ledger. Whether to
/// exit is the embedding host's decision.
pub fn replay(records: &[String]) -> Result<LedgerState, LedgerError> {
    let mut state = LedgerState::new();
    for (index, record) in records.iter().enumerate() {
        match codec::decode(record) {
            Ok(Decoded::Event(event)) => {
                state
                    .apply(&event)
                    .map_err(|source| LedgerError::Integrity { index, source })?;
            }
            Ok(Decoded::Unknown { kind }) => {
                tracing::warn!(index, kind = %kind, "skipping ledger record of unknown kind");
            }
            Err(source) => return Err(LedgerError::CorruptRecord { index, source }),
        }
    }
    Ok(state)
}
