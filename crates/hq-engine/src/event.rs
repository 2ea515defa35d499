//! Event records consumed by the transition engine.

use std::fmt;

use hq_core::{BedId, NurseId, PatientId, SimTime};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// The four state transitions of the model.
///
/// A closed enum dispatched by exhaustive `match`: adding a transition is a
/// compile error at every dispatch site until it is handled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A new patient enters the system.
    Arrival,
    /// A patient finishes triage; their condition is decided here.
    TriageDeparture,
    /// A home-treated patient (stable, or critical-rejected) heals.
    TreatedAtHome,
    /// A bed-treated patient heals and frees their bed.
    TreatedAtHospital,
}

impl EventKind {
    /// Stable label, useful for trace/CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival           => "arrival",
            EventKind::TriageDeparture   => "triage_departure",
            EventKind::TreatedAtHome     => "treated_at_home",
            EventKind::TreatedAtHospital => "treated_at_hospital",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServiceUnit ───────────────────────────────────────────────────────────────

/// The resource committed to an event, if any.
///
/// Arrivals and home treatments carry `None`; a triage departure carries the
/// nurse that served the patient, and a hospital treatment the occupied bed,
/// so the handler can return exactly that unit to its idle pool.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceUnit {
    Nurse(NurseId),
    Bed(BedId),
    None,
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// A scheduled state transition.
///
/// Immutable once created and consumed exactly once; the schedule offers no
/// cancellation or mutation of pending events.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// When the transition fires.
    pub time: SimTime,
    pub kind: EventKind,
    pub patient: PatientId,
    pub service: ServiceUnit,
    /// Service duration committed when the event was scheduled.  Zero for
    /// arrivals; added to the resource's cumulative busy time on completion.
    pub duration: f64,
}
