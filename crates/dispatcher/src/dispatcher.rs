//! DispatchCore - registration, priority consultation, undo and statistics

use tracing::{debug, info, instrument, warn};

use contracts::{
    Census, Channel, Consultation, DeskConfig, IntakeForm, IntakeLimits, PatientId,
    PatientRecord, StatsSnapshot, UndoEntry,
};

use crate::emergency_stack::EmergencyStack;
use crate::error::DispatchError;
use crate::line::WaitingLine;
use crate::regular_queue::RegularQueue;
use crate::stats::StatisticsTracker;
use crate::undo_history::UndoHistory;

/// Owns every waiting structure, the undo history, the statistics and the
/// id counter of one desk.
///
/// Record lifecycle: `Created -> Waiting(channel) -> Consulted`. There is no
/// way back out of `Waiting` other than consultation; in particular
/// [`DispatchCore::undo_last`] leaves the record where it is.
#[derive(Debug)]
pub struct DispatchCore {
    limits: IntakeLimits,
    regular: RegularQueue,
    emergency: EmergencyStack,
    history: UndoHistory,
    stats: StatisticsTracker,
    next_id: PatientId,
}

impl Default for DispatchCore {
    fn default() -> Self {
        Self::with_limits(IntakeLimits::default())
    }
}

impl DispatchCore {
    /// Create a core with default intake limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a core with custom intake limits
    pub fn with_limits(limits: IntakeLimits) -> Self {
        Self {
            limits,
            regular: RegularQueue::new(),
            emergency: EmergencyStack::new(),
            history: UndoHistory::new(),
            stats: StatisticsTracker::new(),
            next_id: PatientId::FIRST,
        }
    }

    /// Create a core from a loaded desk configuration
    pub fn from_config(config: &DeskConfig) -> Self {
        Self::with_limits(config.intake.clone())
    }

    pub fn limits(&self) -> &IntakeLimits {
        &self.limits
    }

    /// Id the next registration will receive
    pub fn next_id(&self) -> PatientId {
        self.next_id
    }

    /// Register a patient and return the assigned id.
    ///
    /// Text fields go through the intake rules of [`IntakeLimits`] first.
    ///
    /// # Errors
    /// - `Intake` when the fields are rejected
    /// - `AllocationFailure` when a container cannot grow; nothing is inserted
    pub fn register(
        &mut self,
        channel: Channel,
        name: impl Into<String>,
        age: u32,
        condition: impl Into<String>,
    ) -> Result<PatientId, DispatchError> {
        self.register_form(channel, IntakeForm::new(name, age, condition))
    }

    /// Register a patient from an intake form
    #[instrument(name = "dispatch_register", skip(self, form), fields(channel = %channel))]
    pub fn register_form(
        &mut self,
        channel: Channel,
        form: IntakeForm,
    ) -> Result<PatientId, DispatchError> {
        let (form, truncation) = self.limits.normalize(form)?;
        if truncation.name {
            debug!(max = self.limits.name_max_chars, "Name truncated");
            observability::record_truncation("name");
        }
        if truncation.condition {
            debug!(max = self.limits.condition_max_chars, "Condition truncated");
            observability::record_truncation("condition");
        }

        let line: &mut dyn WaitingLine = match channel {
            Channel::Regular => &mut self.regular,
            Channel::Emergency => &mut self.emergency,
        };
        let id = admit_registration(line, &mut self.history, &mut self.next_id, form)?;

        let waiting = self.waiting(channel);
        observability::record_registration(channel);
        observability::record_waiting(channel, waiting);
        info!(id = %id, channel = %channel, waiting, "Patient registered");

        Ok(id)
    }

    /// Release the next patient for consultation.
    ///
    /// Emergency patients always go first: a regular patient is never
    /// released while the emergency stack is non-empty. Returns `None` when
    /// nobody is waiting.
    #[instrument(name = "dispatch_consult_next", skip(self))]
    pub fn consult_next(&mut self) -> Option<Consultation> {
        // Channel::ALL is in priority order, emergency first
        let released = Channel::ALL.into_iter().find_map(|channel| {
            self.line_mut(channel)
                .release()
                .map(|record| (channel, record))
        });

        let Some((channel, record)) = released else {
            debug!("No patients to consult");
            observability::record_consult_empty();
            return None;
        };

        self.stats.record_consultation(channel);
        observability::record_consultation(channel);
        observability::record_waiting(channel, self.waiting(channel));
        info!(
            id = %record.id(),
            channel = %channel,
            total_served = self.stats.total_served(),
            "Patient consulted"
        );

        Some(Consultation { record, channel })
    }

    /// Undo the most recent registration, as far as this desk supports it.
    ///
    /// Pops the undo history and rewinds the id counter by one. The record
    /// is NOT removed from its waiting line, and a record that was already
    /// consulted is not restored. The next registration reuses the rewound
    /// id, so two live records can share an id after an undo.
    ///
    /// Returns `None` when there is nothing to undo.
    #[instrument(name = "dispatch_undo_last", skip(self))]
    pub fn undo_last(&mut self) -> Option<UndoEntry> {
        let Some(entry) = self.history.pop_last() else {
            debug!("Nothing to undo");
            return None;
        };

        self.next_id = self.next_id.prev();
        observability::record_undo(entry.channel);
        warn!(
            id = %entry.id(),
            channel = %entry.channel,
            next_id = %self.next_id,
            "Registration undone in history only; record stays in its waiting line and its id will be reissued"
        );

        Some(entry)
    }

    /// Regular patients, front to back
    pub fn list_regular(&self) -> impl ExactSizeIterator<Item = &PatientRecord> + '_ {
        self.regular.peek_all()
    }

    /// Emergency patients, top to bottom
    pub fn list_emergency(&self) -> impl ExactSizeIterator<Item = &PatientRecord> + '_ {
        self.emergency.peek_all()
    }

    /// Consultation counters
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Counters plus the occupancy of every structure
    pub fn census(&self) -> Census {
        Census {
            stats: self.stats.snapshot(),
            regular_waiting: self.regular.len(),
            emergency_waiting: self.emergency.len(),
            undo_depth: self.history.len(),
        }
    }

    /// Number of patients waiting on a channel
    pub fn waiting(&self, channel: Channel) -> usize {
        match channel {
            Channel::Regular => self.regular.len(),
            Channel::Emergency => self.emergency.len(),
        }
    }

    /// Whether nobody is waiting on either channel
    pub fn is_idle(&self) -> bool {
        self.regular.is_empty() && self.emergency.is_empty()
    }

    /// Release every waiting record without counting it as a consultation.
    ///
    /// Regular records come first, front to back, then emergency records
    /// top to bottom. The undo history is left untouched.
    #[instrument(name = "dispatch_drain", skip(self))]
    pub fn drain(&mut self) -> Vec<PatientRecord> {
        let mut released = Vec::with_capacity(self.regular.len() + self.emergency.len());
        released.extend(self.regular.drain());
        released.extend(self.emergency.drain());

        for channel in Channel::ALL {
            observability::record_waiting(channel, 0);
        }
        info!(released = released.len(), "Waiting lines drained");

        released
    }

    fn line_mut(&mut self, channel: Channel) -> &mut dyn WaitingLine {
        match channel {
            Channel::Regular => &mut self.regular,
            Channel::Emergency => &mut self.emergency,
        }
    }
}

/// Insert a new record into `line` and its copy into `history`.
///
/// Both structures are reserved before either is written, and `next_id`
/// only advances once both inserts succeeded.
fn admit_registration(
    line: &mut dyn WaitingLine,
    history: &mut UndoHistory,
    next_id: &mut PatientId,
    form: IntakeForm,
) -> Result<PatientId, DispatchError> {
    let channel = line.channel();
    history
        .reserve_one()
        .map_err(|e| DispatchError::allocation("undo_history", e))?;
    line.reserve_one()
        .map_err(|e| DispatchError::allocation(channel_structure(channel), e))?;

    let id = *next_id;
    let record = PatientRecord::new(id, form);
    let entry = UndoEntry::new(record.clone(), channel);

    line.admit(record)
        .map_err(|e| DispatchError::allocation(channel_structure(channel), e))?;
    history
        .record(entry)
        .map_err(|e| DispatchError::allocation("undo_history", e))?;
    *next_id = id.next();

    Ok(id)
}

fn channel_structure(channel: Channel) -> &'static str {
    match channel {
        Channel::Regular => "regular_queue",
        Channel::Emergency => "emergency_stack",
    }
}
