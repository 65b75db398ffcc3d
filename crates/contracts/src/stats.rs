//! Consultation statistics and desk census

use serde::{Deserialize, Serialize};

use crate::Channel;

/// Consultation counters at a point in time
///
/// `total_served == regular_served + emergency_served` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_served: u64,
    pub regular_served: u64,
    pub emergency_served: u64,
}

impl StatsSnapshot {
    /// Served count for one channel
    pub fn served(&self, channel: Channel) -> u64 {
        match channel {
            Channel::Regular => self.regular_served,
            Channel::Emergency => self.emergency_served,
        }
    }
}

/// Statistics plus current occupancy of every structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub stats: StatsSnapshot,
    pub regular_waiting: usize,
    pub emergency_waiting: usize,
    pub undo_depth: usize,
}

impl Census {
    pub fn waiting(&self, channel: Channel) -> usize {
        match channel {
            Channel::Regular => self.regular_waiting,
            Channel::Emergency => self.emergency_waiting,
        }
    }

    pub fn total_waiting(&self) -> usize {
        self.regular_waiting + self.emergency_waiting
    }
}
