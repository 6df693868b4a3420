//! Session-scoped, append-only query history.
//!
//! A [`HistoryLog`] lives exactly as long as the session that owns it; nothing is
//! persisted across sessions. The only way out is an explicit CSV export.

pub mod export;

pub use export::{DEFAULT_EXPORT_FILENAME, export_csv, write_csv};

use crate::models::HistoryEntry;

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Most recently appended entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries in append order
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
