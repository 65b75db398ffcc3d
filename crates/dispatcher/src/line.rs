//! WaitingLine - common interface of the per-channel waiting structures

use std::collections::TryReserveError;

use contracts::{Channel, PatientRecord};

/// A structure holding patients of one channel until they are consulted.
///
/// Each implementation fixes its own release order; the dispatch core only
/// decides which line to ask.
pub trait WaitingLine {
    /// Channel served by this line
    fn channel(&self) -> Channel;

    /// Make room for one more record without inserting it
    fn reserve_one(&mut self) -> Result<(), TryReserveError>;

    /// Take ownership of a record
    fn admit(&mut self, record: PatientRecord) -> Result<(), TryReserveError>;

    /// Remove the next record in this line's order
    fn release(&mut self) -> Option<PatientRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
