//! # Contracts
//!
//! Shared data structures for the clinic desk workspace.
//! Business crates depend on this crate only, never on each other's internals.
//!
//! ## Record model
//! - A `PatientRecord` is immutable once built
//! - Ids are issued by the dispatch core from a single counter shared by both channels
//! - `UndoEntry` values are independent copies, never references into a waiting structure

mod config;
mod error;
mod intake;
mod patient_id;
mod record;
mod script;
mod stats;

pub use config::*;
pub use error::*;
pub use intake::*;
pub use patient_id::PatientId;
pub use record::*;
pub use script::*;
pub use stats::*;
