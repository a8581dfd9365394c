//! Abstract storage for the ledger's append-only event log.
//!
//! Every backend (file-based, in-memory for testing) implements the
//! [`EventLog`] trait. The rest of the workspace depends only on the trait.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileLog;
pub use memory::MemoryLog;

/// An ordered, append-only stream of encoded records.
///
/// One record is one line; the backend owns the newline framing. `append`
/// must make the record durable before returning, and a reader must never
/// observe a partial record.
pub trait EventLog {
    /// Durably append one encoded record (without trailing newline).
    fn append(&mut self, record: &str) -> Result<(), StoreError>;

    /// Read every record in append order. A trailing empty line is not a
    /// record.
    fn read_all(&mut self) -> Result<Vec<String>, StoreError>;
}
