use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event log I/O error: {0}")]
    Io(#[from] std::io::Error),
}
