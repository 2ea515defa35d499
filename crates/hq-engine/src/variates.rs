//! Exponential arrival/service variate generators.
//!
//! All durations in the model are exponential draws.  The four fixed-rate
//! distributions are built once at construction (rates are validated there,
//! so the fallible `Exp::new` runs exactly once per category).  The
//! critical-at-home category has a fresh rate per draw, so it samples a unit
//! exponential and rescales instead of rebuilding a distribution each time.

use rand_distr::{Distribution, Exp, Exp1};

use hq_core::{HqError, HqResult, SimConfig, SimRng};

// ── VariateKind ───────────────────────────────────────────────────────────────

/// Category tag reported to observers alongside each duration draw.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariateKind {
    Interarrival,
    TriageService,
    BedTreatment,
    /// Home healing of a stable patient.
    HomeStable,
    /// Home healing of a critical patient rejected from the beds.
    HomeCritical,
}

impl VariateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariateKind::Interarrival  => "interarrival",
            VariateKind::TriageService => "triage_service",
            VariateKind::BedTreatment  => "bed_treatment",
            VariateKind::HomeStable    => "home_stable",
            VariateKind::HomeCritical  => "home_critical",
        }
    }
}

impl std::fmt::Display for VariateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VariateSource ─────────────────────────────────────────────────────────────

/// All stochastic inputs of the model, owned by the engine and seeded once.
pub struct VariateSource {
    rng:          SimRng,
    interarrival: Exp<f64>,
    triage:       Exp<f64>,
    bed:          Exp<f64>,
    home_stable:  Exp<f64>,
    /// Base rate of the derived critical-at-home healing rate.
    bed_rate:     f64,
}

impl VariateSource {
    /// Build the distributions from a validated config.
    pub fn new(config: &SimConfig) -> HqResult<Self> {
        let exp = |rate: f64, name: &str| {
            Exp::new(rate)
                .map_err(|_| HqError::Config(format!("{name} is not a valid exponential rate")))
        };
        Ok(Self {
            rng:          SimRng::new(config.seed),
            interarrival: exp(config.arrival_rate, "arrival_rate")?,
            triage:       exp(config.triage_rate, "triage_rate")?,
            bed:          exp(config.bed_rate, "bed_rate")?,
            home_stable:  exp(config.stable_home_rate, "stable_home_rate")?,
            bed_rate:     config.bed_rate,
        })
    }

    /// Gap until the next patient arrives.
    pub fn interarrival(&mut self) -> f64 {
        self.interarrival.sample(self.rng.inner())
    }

    /// One nurse-service duration.
    pub fn triage_service(&mut self) -> f64 {
        self.triage.sample(self.rng.inner())
    }

    /// One bed-treatment duration.
    pub fn bed_treatment(&mut self) -> f64 {
        self.bed.sample(self.rng.inner())
    }

    /// Home-healing duration for a stable patient.
    pub fn home_stable(&mut self) -> f64 {
        self.home_stable.sample(self.rng.inner())
    }

    /// Home-healing duration for a critical patient denied a bed.
    ///
    /// Rate = bed_rate / α with α ~ Uniform[1.25, 1.75) drawn fresh per
    /// call: such patients heal slower than admitted ones by a bounded
    /// random factor.  Sampling Exp(bed_rate / α) is equivalent to scaling
    /// a unit exponential by α / bed_rate.
    pub fn home_critical(&mut self) -> f64 {
        let alpha: f64 = self.rng.gen_range(1.25..1.75);
        let unit: f64 = Exp1.sample(self.rng.inner());
        unit * alpha / self.bed_rate
    }

    /// Uniform [0, 1) draw deciding the stable/critical condition split.
    pub fn condition_split(&mut self) -> f64 {
        self.rng.random()
    }
}
