//! `hq-engine` — the discrete-event core of the rust_hq simulator.
//!
//! # Event loop
//!
//! ```text
//! seed:  pre-populate pools per StartMode, then dispatch the first
//!        Arrival at time 0 directly (not via the schedule)
//! loop:  while healed < target:
//!   ① pop the earliest event from the schedule (empty = invariant bug)
//!   ② advance the clock to its timestamp
//!   ③ dispatch on the event kind (exhaustive match over four variants):
//!        Arrival           → nurse or queue; always schedule next Arrival
//!        TriageDeparture   → stable/critical split; bed, home, or rejection;
//!                            hand freed nurse to the waiting queue
//!        TreatedAtHome     → patient healed at home
//!        TreatedAtHospital → patient healed in a bed; bed freed
//!   ④ notify the observer
//! ```
//!
//! Every Arrival schedules the next Arrival, so the schedule can never run
//! dry before the healed target is reached; an empty pop is reported as
//! [`EngineError::ScheduleExhausted`] rather than a panic.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hq_core::{SimConfig, StartMode};
//! use hq_engine::{HospitalSim, NoopObserver};
//!
//! let mut sim = HospitalSim::new(config)?;
//! sim.run(&mut NoopObserver)?;
//! println!("healed {} patients by t={}", sim.counters.healed, sim.now);
//! ```

pub mod error;
pub mod event;
pub mod observer;
pub mod schedule;
pub mod sim;
pub mod stats;
pub mod variates;
pub mod ward;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EngineError, EngineResult};
pub use event::{Event, EventKind, ServiceUnit};
pub use observer::{NoopObserver, SimObserver};
pub use schedule::EventSchedule;
pub use sim::HospitalSim;
pub use stats::{Counters, Occupancy, PoolUsage, UsageWindow};
pub use variates::{VariateKind, VariateSource};
pub use ward::{Bed, Nurse, Patient, Ward};
