//! `hq-core` — foundational types for the `rust_hq` healthcare queueing
//! simulator.
//!
//! This crate is a dependency of every other `hq-*` crate.  It intentionally
//! has no `hq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`ids`]     | `PatientId`, `NurseId`, `BedId`            |
//! | [`time`]    | `SimTime` (continuous simulation clock)    |
//! | [`rng`]     | `SimRng` (seeded, engine-owned)            |
//! | [`config`]  | `SimConfig`, `StartMode`                   |
//! | [`error`]   | `HqError`, `HqResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, StartMode};
pub use error::{HqError, HqResult};
pub use ids::{BedId, NurseId, PatientId};
pub use rng::SimRng;
pub use time::SimTime;
