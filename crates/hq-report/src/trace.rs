//! Observers that collect run history.
//!
//! The engine itself keeps no history; these observers opt into it.

use hq_engine::{Counters, Event, EventKind, Occupancy, SimObserver, VariateKind};

// ── TraceObserver ─────────────────────────────────────────────────────────────

/// One recorded row per dispatched event: the event identity plus the
/// post-transition census.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRow {
    pub time: f64,
    pub kind: EventKind,
    pub patient: u32,
    pub in_system: u32,
    pub in_triage: u32,
    pub in_beds: u32,
    pub waiting: u32,
    pub healed: u64,
}

/// Records the event history of a run, optionally capped at a row limit
/// (handy for eyeballing the first stretch of a long run without holding
/// millions of rows).
#[derive(Default)]
pub struct TraceObserver {
    pub rows: Vec<TraceRow>,
    limit: Option<usize>,
}

impl TraceObserver {
    /// Record every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record at most `limit` rows; later events are dropped silently.
    pub fn with_limit(limit: usize) -> Self {
        Self { rows: Vec::with_capacity(limit), limit: Some(limit) }
    }
}

impl SimObserver for TraceObserver {
    fn on_event(&mut self, event: &Event, occupancy: &Occupancy, counters: &Counters) {
        if self.limit.is_some_and(|limit| self.rows.len() >= limit) {
            return;
        }
        self.rows.push(TraceRow {
            time:      event.time.0,
            kind:      event.kind,
            patient:   event.patient.0,
            in_system: occupancy.in_system,
            in_triage: occupancy.in_triage,
            in_beds:   occupancy.in_beds,
            waiting:   occupancy.waiting,
            healed:    counters.healed,
        });
    }
}

// ── VariateHistory ────────────────────────────────────────────────────────────

/// Per-category log of every stochastic duration draw, for distribution
/// inspection.
#[derive(Clone, Debug, Default)]
pub struct VariateHistory {
    pub interarrival: Vec<f64>,
    pub triage_service: Vec<f64>,
    pub bed_treatment: Vec<f64>,
    pub home_stable: Vec<f64>,
    pub home_critical: Vec<f64>,
}

impl VariateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draws across all categories.
    pub fn len(&self) -> usize {
        self.interarrival.len()
            + self.triage_service.len()
            + self.bed_treatment.len()
            + self.home_stable.len()
            + self.home_critical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SimObserver for VariateHistory {
    fn on_variate(&mut self, kind: VariateKind, value: f64) {
        match kind {
            VariateKind::Interarrival  => self.interarrival.push(value),
            VariateKind::TriageService => self.triage_service.push(value),
            VariateKind::BedTreatment  => self.bed_treatment.push(value),
            VariateKind::HomeStable    => self.home_stable.push(value),
            VariateKind::HomeCritical  => self.home_critical.push(value),
        }
    }
}
