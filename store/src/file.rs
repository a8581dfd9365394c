//! File-backed event log.

use crate::{EventLog, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::Path;

/// Append-only log backed by a single file, one record per line.
///
/// The file is opened in append mode, so every write lands at the current
/// end regardless of the read cursor. Each append is a single `write_all`
/// of the full line followed by fsync: the record is durable before the
/// call returns.
pub struct FileLog {
    file: File,
}

impl FileLog {
    /// Open the log at `path`, creating the file if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;
        Ok(Self { file })
    }
}

impl EventLog for FileLog {
    fn append(&mut self, record: &str) -> Result<(), StoreError> {
        let mut line = String::with_capacity(record.len() + 1);
        line.push_str(record);
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.sync_data()?;
        Ok(())
    }

    fn read_all(&mut self) -> Result<Vec<String>, StoreError> {
        self.file.seek(SeekFrom::Start(0))?;
        let reader = BufReader::new(&self.file);
        let mut records = Vec::new();
        for line in reader.lines() {
            records.push(line?);
        }
        Ok(records)
    }
}
