//! SessionScript - a recorded sequence of desk operations
//!
//! Lets a non-interactive caller drive the dispatch core, one step per
//! operation of the public surface.

use serde::{Deserialize, Serialize};

use crate::{Channel, IntakeForm};

/// Ordered list of desk operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// One desk operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Register a patient on a channel
    Register {
        channel: Channel,
        name: String,
        age: u32,
        #[serde(default)]
        condition: String,
    },
    /// Consult the next patient by priority
    Consult,
    /// Undo the most recent registration
    Undo,
    /// List regular patients front-to-back
    ListRegular,
    /// List emergency patients top-to-bottom
    ListEmergency,
    /// Consultation counters
    Stats,
    /// Counters plus occupancy
    Census,
}

impl ScriptStep {
    /// Operation name as written in scripts
    pub fn op(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Consult => "consult",
            Self::Undo => "undo",
            Self::ListRegular => "list_regular",
            Self::ListEmergency => "list_emergency",
            Self::Stats => "stats",
            Self::Census => "census",
        }
    }

    /// Intake form for a register step
    pub fn intake_form(&self) -> Option<(Channel, IntakeForm)> {
        match self {
            Self::Register {
                channel,
                name,
                age,
                condition,
            } => Some((*channel, IntakeForm::new(name.clone(), *age, condition.clone()))),
            _ => None,
        }
    }
}
