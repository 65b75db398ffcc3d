//! EmergencyStack - LIFO line for emergency patients
//!
//! The most recent alarm is attended first.

use std::collections::TryReserveError;
use std::iter::Rev;
use std::slice;

use contracts::{Channel, PatientRecord};

use crate::line::WaitingLine;

/// Most-recent-first stack
#[derive(Debug, Default)]
pub struct EmergencyStack {
    // top of stack is the last element
    records: Vec<PatientRecord>,
}

impl EmergencyStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a record on top
    pub fn push(&mut self, record: PatientRecord) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(())
    }

    /// Remove the top record, `None` when empty
    pub fn pop_top(&mut self) -> Option<PatientRecord> {
        self.records.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Borrowed view, top to bottom
    pub fn peek_all(&self) -> Rev<slice::Iter<'_, PatientRecord>> {
        self.records.iter().rev()
    }

    /// Remove every record, top to bottom
    pub fn drain(&mut self) -> Rev<std::vec::Drain<'_, PatientRecord>> {
        self.records.drain(..).rev()
    }
}

impl WaitingLine for EmergencyStack {
    fn channel(&self) -> Channel {
        Channel::Emergency
    }

    fn reserve_one(&mut self) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)
    }

    fn admit(&mut self, record: PatientRecord) -> Result<(), TryReserveError> {
        self.push(record)
    }

    fn release(&mut self) -> Option<PatientRecord> {
        self.pop_top()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
