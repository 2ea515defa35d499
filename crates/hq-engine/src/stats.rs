//! Running counters and pool usage accumulators.
//!
//! Everything here is bookkeeping the transition handlers update as a side
//! effect; none of it feeds back into scheduling decisions.

use hq_core::SimTime;

// ── Counters ──────────────────────────────────────────────────────────────────

/// Patient-flow totals over the whole run.
///
/// Two conservation identities hold at every event boundary:
/// `direct_to_triage + waited_for_triage == arrived` and
/// `admitted_to_bed + rejected_from_beds == critical_cases`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    /// Patients whose Arrival event has executed.
    pub arrived: u64,
    /// Arrivals that found an idle nurse immediately.
    pub direct_to_triage: u64,
    /// Arrivals that entered the waiting queue.
    pub waited_for_triage: u64,
    /// Triaged patients found to be in critical condition.
    pub critical_cases: u64,
    /// Critical patients that found a free bed.
    pub admitted_to_bed: u64,
    /// Critical patients sent home because no bed was free.
    pub rejected_from_beds: u64,
    pub treated_at_home: u64,
    pub treated_at_hospital: u64,
    /// The run's stopping counter.
    pub healed: u64,
}

// ── UsageWindow ───────────────────────────────────────────────────────────────

/// Edge-triggered accumulator for one uniform pool condition (all idle, or
/// all busy).
///
/// `open` marks the instant the condition starts holding, `close` the
/// instant it stops; the span is added to `total` on close.  Both are no-ops
/// when the window is already in the requested state, so handlers can call
/// them on every edge candidate without tracking the previous state
/// themselves.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageWindow {
    open_since: Option<SimTime>,
    /// Total time the condition has held across all closed windows.
    pub total: f64,
}

impl UsageWindow {
    /// Start a window at `now` unless one is already open.
    pub fn open(&mut self, now: SimTime) {
        if self.open_since.is_none() {
            self.open_since = Some(now);
        }
    }

    /// Close the current window, adding its span to the total.
    pub fn close(&mut self, now: SimTime) {
        if let Some(since) = self.open_since.take() {
            self.total += now.since(since);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_since.is_some()
    }
}

// ── PoolUsage ─────────────────────────────────────────────────────────────────

/// The all-idle / all-busy window pair for one resource pool.
///
/// At most one of the two is open at any instant (a pool of two or more
/// units is often neither uniformly idle nor uniformly busy).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolUsage {
    pub all_idle: UsageWindow,
    pub all_busy: UsageWindow,
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// Instantaneous census of where patients are.
///
/// Invariant between event executions: `in_system == in_triage + in_beds +
/// at_home`; `in_triage` never exceeds the nurse count nor `in_beds` the bed
/// count.  Patients in the waiting queue count toward `waiting` only — they
/// have not entered a service stage yet.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupancy {
    /// Patients currently in any service stage (triage, bed, or home).
    pub in_system: u32,
    pub in_triage: u32,
    pub in_beds: u32,
    /// Queue length in front of triage.
    pub waiting: u32,
    pub at_home: u32,
}
