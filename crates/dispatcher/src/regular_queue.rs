//! RegularQueue - FIFO line for regular patients

use std::collections::{vec_deque, TryReserveError, VecDeque};

use contracts::{Channel, PatientRecord};

use crate::line::WaitingLine;

/// First-come first-served queue
#[derive(Debug, Default)]
pub struct RegularQueue {
    records: VecDeque<PatientRecord>,
}

impl RegularQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the tail
    pub fn enqueue(&mut self, record: PatientRecord) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)?;
        self.records.push_back(record);
        Ok(())
    }

    /// Remove the head record, `None` when empty
    pub fn dequeue_front(&mut self) -> Option<PatientRecord> {
        self.records.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Borrowed view, front to back
    pub fn peek_all(&self) -> vec_deque::Iter<'_, PatientRecord> {
        self.records.iter()
    }

    /// Remove every record, front to back
    pub fn drain(&mut self) -> vec_deque::Drain<'_, PatientRecord> {
        self.records.drain(..)
    }
}

impl WaitingLine for RegularQueue {
    fn channel(&self) -> Channel {
        Channel::Regular
    }

    fn reserve_one(&mut self) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)
    }

    fn admit(&mut self, record: PatientRecord) -> Result<(), TryReserveError> {
        self.enqueue(record)
    }

    fn release(&mut self) -> Option<PatientRecord> {
        self.dequeue_front()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{IntakeForm, PatientId};

    fn record(id: u64) -> PatientRecord {
        PatientRecord::new(PatientId::new(id), IntakeForm::new(format!("p{id}"), 20, "x"))
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = RegularQueue::new();
        for id in 1..=3 {
            queue.enqueue(record(id)).unwrap();
        }

        let ids: Vec<u64> = queue.peek_all().map(|r| r.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(queue.dequeue_front().unwrap().id(), 1);
        assert_eq!(queue.dequeue_front().unwrap().id(), 2);
        queue.enqueue(record(4)).unwrap();
        assert_eq!(queue.dequeue_front().unwrap().id(), 3);
        assert_eq!(queue.dequeue_front().unwrap().id(), 4);
        assert!(queue.dequeue_front().is_none());
    }

    #[test]
    fn test_len_and_empty() {
        let mut queue = RegularQueue::new();
        assert!(queue.is_empty());
        queue.enqueue(record(1)).unwrap();
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
        queue.dequeue_front();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut queue = RegularQueue::new();
        queue.enqueue(record(1)).unwrap();
        assert_eq!(queue.peek_all().count(), 1);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_waiting_line_release_is_front() {
        let mut queue = RegularQueue::new();
        queue.admit(record(1)).unwrap();
        queue.admit(record(2)).unwrap();
        assert_eq!(queue.channel(), Channel::Regular);
        assert_eq!(queue.release().unwrap().id(), 1);
    }
}
