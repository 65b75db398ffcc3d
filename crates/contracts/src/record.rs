//! PatientRecord / Channel / UndoEntry
//!
//! The patient entity and the historical copy kept for undo reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{IntakeForm, PatientId};

/// Intake path of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Served first-come first-served
    Regular,
    /// Served most-recent first, always ahead of regular patients
    Emergency,
}

impl Channel {
    /// Both channels in dispatch priority order
    pub const ALL: [Channel; 2] = [Channel::Emergency, Channel::Regular];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Emergency => "Emergency",
        }
    }

    /// Lowercase tag used for metric labels and log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Patient record
///
/// Fields are private so a record cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    id: PatientId,
    name: String,
    age: u32,
    condition: String,
}

impl PatientRecord {
    /// Build a record from an already-normalized intake form
    pub fn new(id: PatientId, form: IntakeForm) -> Self {
        let IntakeForm {
            name,
            age,
            condition,
        } = form;
        Self {
            id,
            name,
            age,
            condition,
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}

/// Copy of a registration, kept so it can be reported by undo.
///
/// Popping an entry does NOT take the record out of its waiting structure:
/// the patient stays queued (or was already consulted). Callers must not
/// present an undo as a full rollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    /// Record as it was at registration time
    pub record: PatientRecord,

    /// Channel the record was registered on
    pub channel: Channel,
}

impl UndoEntry {
    pub fn new(record: PatientRecord, channel: Channel) -> Self {
        Self { record, channel }
    }

    /// Id of the registration this entry describes
    pub fn id(&self) -> PatientId {
        self.record.id()
    }
}

/// A record released for consultation, tagged with the channel it left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub record: PatientRecord,
    pub channel: Channel,
}
