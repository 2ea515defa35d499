//! Simulation configuration.

use std::fmt;

use crate::error::{HqError, HqResult};

// ── StartMode ─────────────────────────────────────────────────────────────────

/// Initial occupancy of the nurse and bed pools.
///
/// `Half` and `Full` pre-assign resources to synthetic patients whose
/// departure/treatment events are already on the schedule at time 0.  No
/// mode places patients in the triage waiting queue at initialization.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartMode {
    /// All resources idle; both idle accumulator windows open at time 0.
    #[default]
    Empty,
    /// `floor(S/2)` nurses and `floor(K/2)` beds start occupied.
    Half,
    /// Every nurse and every bed starts occupied.
    Full,
}

impl StartMode {
    /// How many units of a pool of `size` start occupied under this mode.
    #[inline]
    pub fn occupied(self, size: u16) -> u16 {
        match self {
            StartMode::Empty => 0,
            StartMode::Half  => size / 2,
            StartMode::Full  => size,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StartMode::Empty => "empty",
            StartMode::Half  => "half",
            StartMode::Full  => "full",
        }
    }
}

impl fmt::Display for StartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration, consumed once at engine construction.
///
/// All rates are exponential-distribution rate parameters (inverse of the
/// mean duration), in abstract time units.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Triage nurse pool size S.  Must be at least 1.
    pub nurses: u16,

    /// Hospital bed pool size K.  May be 0: every critical patient is then
    /// rejected and treated at home.
    pub beds: u16,

    /// Patient inter-arrival rate λ.
    pub arrival_rate: f64,

    /// Triage service rate.
    pub triage_rate: f64,

    /// Hospital bed treatment rate.  Also the base of the derived
    /// critical-at-home healing rate.
    pub bed_rate: f64,

    /// Home-healing rate for stable patients.
    pub stable_home_rate: f64,

    /// Probability that a triaged patient is in stable condition, in [0, 1].
    pub p_stable: f64,

    /// Stop once this many patients have healed.  Must be at least 1.
    pub healed_target: u64,

    /// Initial pool occupancy.
    pub start_mode: StartMode,

    /// Master RNG seed.  The same seed always replays the same event trace.
    pub seed: u64,
}

impl SimConfig {
    /// Reject invalid parameters before any event is scheduled.
    ///
    /// Construction-time validation is the only place configuration errors
    /// can surface; the run loop assumes a valid config throughout.
    pub fn validate(&self) -> HqResult<()> {
        if self.nurses == 0 {
            return Err(HqError::Config("nurse count must be at least 1".into()));
        }
        let rates = [
            ("arrival_rate", self.arrival_rate),
            ("triage_rate", self.triage_rate),
            ("bed_rate", self.bed_rate),
            ("stable_home_rate", self.stable_home_rate),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(HqError::Config(format!(
                    "{name} must be a positive finite rate, got {rate}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.p_stable) {
            return Err(HqError::Config(format!(
                "p_stable must lie in [0, 1], got {}",
                self.p_stable
            )));
        }
        if self.healed_target == 0 {
            return Err(HqError::Config("healed_target must be at least 1".into()));
        }
        Ok(())
    }
}
