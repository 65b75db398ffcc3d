//! # Dispatcher
//!
//! Patient dispatch core.
//!
//! Responsibilities:
//! - Hold regular patients in a FIFO queue and emergency patients in a LIFO stack
//! - Release one patient at a time, emergency before regular
//! - Keep an undo history of registrations and consultation statistics

pub mod dispatcher;
pub mod emergency_stack;
pub mod error;
pub mod line;
pub mod regular_queue;
pub mod stats;
pub mod undo_history;

pub use contracts::{Census, Channel, Consultation, PatientId, PatientRecord, StatsSnapshot, UndoEntry};
pub use dispatcher::DispatchCore;
pub use emergency_stack::EmergencyStack;
pub use error::DispatchError;
pub use line::WaitingLine;
pub use regular_queue::RegularQueue;
pub use stats::StatisticsTracker;
pub use undo_history::UndoHistory;
