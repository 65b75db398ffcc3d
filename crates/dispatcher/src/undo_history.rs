//! UndoHistory - LIFO log of registrations
//!
//! A pure append/pop log. Entries are copies and are never checked against
//! what is currently waiting.

use std::collections::TryReserveError;

use contracts::UndoEntry;

#[derive(Debug, Default)]
pub struct UndoHistory {
    entries: Vec<UndoEntry>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for one more entry without inserting it
    pub fn reserve_one(&mut self) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)
    }

    /// Push an entry
    pub fn record(&mut self, entry: UndoEntry) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the most recent entry, `None` when empty
    pub fn pop_last(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
