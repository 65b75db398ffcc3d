//! Scripted session: applies script steps to a dispatch core.

mod outcome;

pub use outcome::{StepOutcome, StepReport};

use contracts::{DeskConfig, PatientRecord, ScriptStep, SessionScript};
use dispatcher::{DispatchCore, DispatchError};
use observability::{CensusAggregator, CensusSummary};
use tracing::{debug, warn};

use crate::error::{CliError, Result};

/// One desk plus the bookkeeping of a replay run
pub struct Session {
    core: DispatchCore,
    aggregator: CensusAggregator,
    keep_going: bool,
}

impl Session {
    pub fn new(config: &DeskConfig, keep_going: bool) -> Self {
        Self {
            core: DispatchCore::from_config(config),
            aggregator: CensusAggregator::new(),
            keep_going,
        }
    }

    pub fn core(&self) -> &DispatchCore {
        &self.core
    }

    /// Run every step in order
    ///
    /// Stops at the first rejected registration unless `keep_going` is set.
    pub fn run(&mut self, script: &SessionScript) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(script.steps.len());
        for (index, step) in script.steps.iter().enumerate() {
            reports.push(self.run_step(index, step)?);
        }
        Ok(reports)
    }

    /// Run one step and sample the census afterwards
    pub fn run_step(&mut self, index: usize, step: &ScriptStep) -> Result<StepReport> {
        let outcome = match self.apply(step) {
            Ok(outcome) => outcome,
            Err(e) if self.keep_going => {
                warn!(index, op = step.op(), error = %e, "Step rejected, continuing");
                StepOutcome::Rejected {
                    error: e.to_string(),
                }
            }
            Err(e) => return Err(CliError::script_step(index, step.op(), e.to_string())),
        };

        let census = self.core.census();
        observability::record_census(&census);
        self.aggregator.update(&census);
        debug!(index, op = step.op(), "Step applied");

        Ok(StepReport {
            index,
            op: step.op(),
            outcome,
        })
    }

    /// Release everyone still waiting
    pub fn drain(&mut self) -> Vec<PatientRecord> {
        let released = self.core.drain();
        self.aggregator.update(&self.core.census());
        released
    }

    pub fn summary(&self) -> CensusSummary {
        self.aggregator.summary()
    }

    fn apply(&mut self, step: &ScriptStep) -> std::result::Result<StepOutcome, DispatchError> {
        let outcome = match step {
            ScriptStep::Register {
                channel,
                name,
                age,
                condition,
            } => {
                let id = self
                    .core
                    .register(*channel, name.as_str(), *age, condition.as_str())?;
                StepOutcome::Registered {
                    id,
                    channel: *channel,
                }
            }
            ScriptStep::Consult => match self.core.consult_next() {
                Some(c) => StepOutcome::Consulted {
                    channel: c.channel,
                    record: c.record,
                },
                None => StepOutcome::NobodyWaiting,
            },
            ScriptStep::Undo => match self.core.undo_last() {
                Some(entry) => StepOutcome::Undone {
                    entry,
                    waiting_lines_unchanged: true,
                },
                None => StepOutcome::NothingToUndo,
            },
            ScriptStep::ListRegular => StepOutcome::RegularList {
                records: self.core.list_regular().cloned().collect(),
            },
            ScriptStep::ListEmergency => StepOutcome::EmergencyList {
                records: self.core.list_emergency().cloned().collect(),
            },
            ScriptStep::Stats => StepOutcome::Stats {
                stats: self.core.stats_snapshot(),
            },
            ScriptStep::Census => StepOutcome::Census {
                census: self.core.census(),
            },
        };
        Ok(outcome)
    }
}
