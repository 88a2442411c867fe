// In crates/ledger/src/store.rs

use crate::Result;
use core_types::BalanceEntry;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Durable append-only storage for balance entries.
///
/// The contract is deliberately small: read the last row, append one row.
/// Rows are never rewritten or deleted.
pub trait LedgerStore {
    /// Returns the most recent entry, or `None` if the store is empty.
    fn read_last(&mut self) -> Result<Option<BalanceEntry>>;

    /// Appends one entry after all existing rows.
    fn append_row(&mut self, entry: &BalanceEntry) -> Result<()>;
}

/// CSV-file ledger store.
///
/// The header is written only when the file is created. Every append writes
/// one full row and flushes it, so an interrupted write cannot corrupt rows
/// already on disk.
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LedgerStore for CsvLedgerStore {
    fn read_last(&mut self) -> Result<Option<BalanceEntry>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut last = None;
        for row in reader.deserialize() {
            last = Some(row?);
        }
        Ok(last)
    }

    fn append_row(&mut self, entry: &BalanceEntry) -> Result<()> {
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory ledger store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    entries: Vec<BalanceEntry>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn read_last(&mut self) -> Result<Option<BalanceEntry>> {
        Ok(self.entries.last().cloned())
    }

    fn append_row(&mut self, entry: &BalanceEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
