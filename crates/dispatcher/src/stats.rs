//! StatisticsTracker - consultation counters

use contracts::{Channel, StatsSnapshot};

/// Running consultation counts, never reset
#[derive(Debug, Default)]
pub struct StatisticsTracker {
    total_served: u64,
    regular_served: u64,
    emergency_served: u64,
}

impl StatisticsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one consultation on `channel`
    pub fn record_consultation(&mut self, channel: Channel) {
        self.total_served += 1;
        match channel {
            Channel::Regular => self.regular_served += 1,
            Channel::Emergency => self.emergency_served += 1,
        }
    }

    pub fn total_served(&self) -> u64 {
        self.total_served
    }

    pub fn served(&self, channel: Channel) -> u64 {
        match channel {
            Channel::Regular => self.regular_served,
            Channel::Emergency => self.emergency_served,
        }
    }

    /// Snapshot of all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_served: self.total_served,
            regular_served: self.regular_served,
            emergency_served: self.emergency_served,
        }
    }
}
