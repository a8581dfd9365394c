//! Default event-id provider.
//!
//! The coordinator accepts any provider; this is the stock one. 15
//! characters over a 36-symbol alphabet is ~77 bits — collisions are not a
//! practical concern at this ledger's write rate.

use florin_types::EventId;
use rand::RngExt;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 15;

/// Generate a random lowercase-alphanumeric event id.
pub fn random_event_id() -> EventId {
    let mut rng = rand::rng();
    let id: String = (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    EventId::new(id)
}
