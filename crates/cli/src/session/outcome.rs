//! Step outcomes and their text rendering.

use serde::Serialize;

use contracts::{Census, Channel, PatientId, PatientRecord, StatsSnapshot, UndoEntry};

/// Result of one script step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Registered {
        id: PatientId,
        channel: Channel,
    },
    Consulted {
        channel: Channel,
        record: PatientRecord,
    },
    NobodyWaiting,
    Undone {
        entry: UndoEntry,
        /// Always true: undo never touches the waiting lines
        waiting_lines_unchanged: bool,
    },
    NothingToUndo,
    RegularList {
        records: Vec<PatientRecord>,
    },
    EmergencyList {
        records: Vec<PatientRecord>,
    },
    Stats {
        stats: StatsSnapshot,
    },
    Census {
        census: Census,
    },
    Rejected {
        error: String,
    },
}

/// A step outcome with its position in the script
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub op: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

impl StepReport {
    /// Print the report for a terminal
    pub fn print_text(&self) {
        print!("[{:>3}] {:<14} ", self.index, self.op);
        match &self.outcome {
            StepOutcome::Registered { id, channel } => {
                println!("registered [{id}] in {channel} line");
            }
            StepOutcome::Consulted { channel, record } => {
                println!(
                    "consulting {channel}: [{}] {} ({}) - {}",
                    record.id(),
                    record.name(),
                    record.age(),
                    record.condition()
                );
            }
            StepOutcome::NobodyWaiting => println!("no patients to consult"),
            StepOutcome::Undone { entry, .. } => {
                println!(
                    "undid registration [{}] {} ({}); record is still waiting",
                    entry.id(),
                    entry.record.name(),
                    entry.channel
                );
            }
            StepOutcome::NothingToUndo => println!("nothing to undo"),
            StepOutcome::RegularList { records } => print_records("regular queue", records),
            StepOutcome::EmergencyList { records } => print_records("emergency stack", records),
            StepOutcome::Stats { stats } => {
                println!(
                    "served {} (regular {}, emergency {})",
                    stats.total_served, stats.regular_served, stats.emergency_served
                );
            }
            StepOutcome::Census { census } => {
                println!(
                    "served {} | waiting regular {}, emergency {} | undo depth {}",
                    census.stats.total_served,
                    census.regular_waiting,
                    census.emergency_waiting,
                    census.undo_depth
                );
            }
            StepOutcome::Rejected { error } => println!("rejected: {error}"),
        }
    }
}

fn print_records(title: &str, records: &[PatientRecord]) {
    if records.is_empty() {
        println!("{title}: empty");
        return;
    }
    println!("{title}: {} waiting", records.len());
    println!("      {:<5} {:<20} {:<5} {:<30}", "ID", "Name", "Age", "Condition");
    for record in records {
        println!(
            "      {:<5} {:<20} {:<5} {:<30}",
            record.id(),
            record.name(),
            record.age(),
            record.condition()
        );
    }
}
