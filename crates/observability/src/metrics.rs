//! Desk metric recording and in-memory census aggregation.

use contracts::{Census, Channel, StatsSnapshot};
use metrics::{counter, gauge, histogram};

/// Record a registration on a channel
pub fn record_registration(channel: Channel) {
    counter!(
        "clinic_desk_registrations_total",
        "channel" => channel.as_str()
    )
    .increment(1);
}

/// Record a consultation on the channel actually served
pub fn record_consultation(channel: Channel) {
    counter!(
        "clinic_desk_consultations_total",
        "channel" => channel.as_str()
    )
    .increment(1);
}

/// Record a consult request that found nobody waiting
pub fn record_consult_empty() {
    counter!("clinic_desk_consult_empty_total").increment(1);
}

/// Record an undo of a registration made on `channel`
pub fn record_undo(channel: Channel) {
    counter!("clinic_desk_undo_total", "channel" => channel.as_str()).increment(1);
}

/// Record an intake field cut to its limit
pub fn record_truncation(field: &'static str) {
    counter!("clinic_desk_intake_truncated_total", "field" => field).increment(1);
}

/// Record the number of patients waiting on a channel
pub fn record_waiting(channel: Channel, depth: usize) {
    gauge!("clinic_desk_waiting", "channel" => channel.as_str()).set(depth as f64);
}

/// Record a full census
///
/// Updates waiting gauges for both channels and the undo depth histogram.
pub fn record_census(census: &Census) {
    for channel in Channel::ALL {
        record_waiting(channel, census.waiting(channel));
    }
    gauge!("clinic_desk_undo_depth").set(census.undo_depth as f64);
    histogram!("clinic_desk_total_waiting").record(census.total_waiting() as f64);
}

/// Census aggregator
///
/// Accumulates census samples in memory so a run can print a summary.
#[derive(Debug, Clone, Default)]
pub struct CensusAggregator {
    /// Number of samples taken
    pub samples: u64,

    /// Peak regular queue length
    pub peak_regular: usize,

    /// Peak emergency stack depth
    pub peak_emergency: usize,

    /// Regular queue length over time
    pub regular_stats: RunningStats,

    /// Emergency stack depth over time
    pub emergency_stats: RunningStats,

    /// Counters from the latest sample
    pub last_stats: StatsSnapshot,
}

impl CensusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one census sample
    pub fn update(&mut self, census: &Census) {
        self.samples += 1;
        self.peak_regular = self.peak_regular.max(census.regular_waiting);
        self.peak_emergency = self.peak_emergency.max(census.emergency_waiting);
        self.regular_stats.push(census.regular_waiting as f64);
        self.emergency_stats.push(census.emergency_waiting as f64);
        self.last_stats = census.stats;
    }

    /// Build a summary report
    pub fn summary(&self) -> CensusSummary {
        let served = self.last_stats.total_served;
        CensusSummary {
            samples: self.samples,
            stats: self.last_stats,
            emergency_share: if served > 0 {
                self.last_stats.emergency_served as f64 / served as f64 * 100.0
            } else {
                0.0
            },
            peak_regular: self.peak_regular,
            peak_emergency: self.peak_emergency,
            regular_waiting: StatsSummary::from(&self.regular_stats),
            emergency_waiting: StatsSummary::from(&self.emergency_stats),
        }
    }
}

/// Census summary
#[derive(Debug, Clone, Default)]
pub struct CensusSummary {
    pub samples: u64,
    pub stats: StatsSnapshot,
    pub emergency_share: f64,
    pub peak_regular: usize,
    pub peak_emergency: usize,
    pub regular_waiting: StatsSummary,
    pub emergency_waiting: StatsSummary,
}

impl std::fmt::Display for CensusSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Desk Summary ===")?;
        writeln!(f, "Total patients served: {}", self.stats.total_served)?;
        writeln!(f, "  Regular consultations: {}", self.stats.regular_served)?;
        writeln!(
            f,
            "  Emergency cases: {} ({:.2}%)",
            self.stats.emergency_served, self.emergency_share
        )?;
        writeln!(f, "Peak regular queue: {}", self.peak_regular)?;
        writeln!(f, "Peak emergency stack: {}", self.peak_emergency)?;
        writeln!(f, "Regular waiting: {}", self.regular_waiting)?;
        writeln!(f, "Emergency waiting: {}", self.emergency_waiting)?;
        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.0}, max={:.0}, mean={:.2}, std={:.2} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// Online mean/variance (Welford)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn census(regular: usize, emergency: usize, stats: StatsSnapshot) -> Census {
        Census {
            stats,
            regular_waiting: regular,
            emergency_waiting: emergency,
            undo_depth: regular + emergency,
        }
    }

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::default();
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            stats.push(v);
        }

        assert_eq!(stats.count(), 5);
        assert!((stats.mean() - 3.0).abs() < 1e-10);
        assert!((stats.min() - 1.0).abs() < 1e-10);
        assert!((stats.max() - 5.0).abs() < 1e-10);
        assert!((stats.variance() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_aggregator_tracks_peaks() {
        let mut aggregator = CensusAggregator::new();
        aggregator.update(&census(2, 0, StatsSnapshot::default()));
        aggregator.update(&census(3, 1, StatsSnapshot::default()));
        aggregator.update(&census(1, 0, StatsSnapshot {
            total_served: 4,
            regular_served: 3,
            emergency_served: 1,
        }));

        assert_eq!(aggregator.samples, 3);
        assert_eq!(aggregator.peak_regular, 3);
        assert_eq!(aggregator.peak_emergency, 1);
        assert_eq!(aggregator.last_stats.total_served, 4);

        let summary = aggregator.summary();
        assert!((summary.emergency_share - 25.0).abs() < 1e-10);
        assert_eq!(summary.regular_waiting.count, 3);
    }

    #[test]
    fn test_summary_display() {
        let mut aggregator = CensusAggregator::new();
        aggregator.update(&census(0, 0, StatsSnapshot {
            total_served: 2,
            regular_served: 1,
            emergency_served: 1,
        }));
        let output = aggregator.summary().to_string();
        assert!(output.contains("Total patients served: 2"));
        assert!(output.contains("50.00%"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = CensusAggregator::new().summary();
        assert_eq!(summary.emergency_share, 0.0);
        assert_eq!(summary.regular_waiting.to_string(), "N/A");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_registration(Channel::Regular);
        record_consultation(Channel::Emergency);
        record_consult_empty();
        record_census(&census(1, 1, StatsSnapshot::default()));
    }
}
