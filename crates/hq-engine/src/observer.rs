//! Simulation observer trait for trace collection and reporting.

use hq_core::SimTime;

use crate::{Counters, Event, Occupancy, VariateKind};

/// Callbacks invoked by [`HospitalSim::run`][crate::HospitalSim::run] as the
/// event loop advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine itself keeps no event or
/// draw history — observers opt into whatever collection they need.
///
/// # Example — healed-count printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_event(&mut self, event: &Event, _occ: &Occupancy, counters: &Counters) {
///         if counters.healed % 100 == 0 {
///             println!("t={} healed={}", event.time, counters.healed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each dispatched event, with the post-transition census
    /// and flow totals.
    fn on_event(&mut self, _event: &Event, _occupancy: &Occupancy, _counters: &Counters) {}

    /// Called once per stochastic duration draw with its category tag.
    fn on_variate(&mut self, _kind: VariateKind, _value: f64) {}

    /// Called once when the stopping condition holds.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
