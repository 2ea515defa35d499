//! Patients, staff, and the FIFO pools that hold them.

use std::collections::VecDeque;

use hq_core::{BedId, NurseId, PatientId, SimTime};

// ── Entity records ────────────────────────────────────────────────────────────

/// A patient record.  Lives in the registry for the whole run; the id is its
/// registry index.
#[derive(Clone, Debug)]
pub struct Patient {
    pub id: PatientId,
    /// Stamped when the patient's Arrival event executes.  Synthetic
    /// occupants seeded by `half`/`full` start modes never arrive, so theirs
    /// stays `None` and they are excluded from sojourn statistics.
    pub enter_time: Option<SimTime>,
    /// Stamped on the terminal treated-at-home/hospital transition.
    pub exit_time: Option<SimTime>,
}

impl Patient {
    fn new(id: PatientId) -> Self {
        Self { id, enter_time: None, exit_time: None }
    }

    /// Time spent in the system, if both endpoints were stamped.
    pub fn sojourn(&self) -> Option<f64> {
        Some(self.exit_time?.since(self.enter_time?))
    }
}

/// A triage nurse with its cumulative utilization.
#[derive(Clone, Debug)]
pub struct Nurse {
    pub id: NurseId,
    pub busy_time: f64,
}

/// A hospital bed with its cumulative occupancy.
#[derive(Clone, Debug)]
pub struct Bed {
    pub id: BedId,
    pub busy_time: f64,
}

// ── Ward ──────────────────────────────────────────────────────────────────────

/// Id-indexed entity registries plus the three FIFO queues of the model.
///
/// Pool invariant: each nurse/bed is either in its idle deque or committed
/// to exactly one pending event, never both.  The engine's handlers are the
/// only code that moves units between those two states.
pub struct Ward {
    /// Every patient ever created, in id order.  Never shrinks.
    pub patients: Vec<Patient>,
    pub nurses: Vec<Nurse>,
    pub beds: Vec<Bed>,
    /// Idle nurses, served oldest-idle-first.
    pub idle_nurses: VecDeque<NurseId>,
    /// Idle beds, served oldest-idle-first.
    pub idle_beds: VecDeque<BedId>,
    /// Patients waiting for a nurse, in arrival order.  Unbounded.
    pub triage_queue: VecDeque<PatientId>,
}

impl Ward {
    /// Build a ward with `nurses` and `beds` units, all idle.
    pub fn new(nurses: u16, beds: u16) -> Self {
        Self {
            patients:     Vec::new(),
            nurses:       (0..nurses).map(|i| Nurse { id: NurseId(i), busy_time: 0.0 }).collect(),
            beds:         (0..beds).map(|i| Bed { id: BedId(i), busy_time: 0.0 }).collect(),
            idle_nurses:  (0..nurses).map(NurseId).collect(),
            idle_beds:    (0..beds).map(BedId).collect(),
            triage_queue: VecDeque::new(),
        }
    }

    /// Allocate the next patient id and insert a blank record.
    pub fn register_patient(&mut self) -> PatientId {
        let id = PatientId(self.patients.len() as u32);
        self.patients.push(Patient::new(id));
        id
    }

    pub fn patient_mut(&mut self, id: PatientId) -> &mut Patient {
        &mut self.patients[id.index()]
    }

    pub fn nurse_mut(&mut self, id: NurseId) -> &mut Nurse {
        &mut self.nurses[id.index()]
    }

    pub fn bed_mut(&mut self, id: BedId) -> &mut Bed {
        &mut self.beds[id.index()]
    }
}
