//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one `SimRng`, seeded once from the configured
//! seed and threaded explicitly through every draw site.  No global or
//! thread-local generator state exists anywhere in the workspace, so a run
//! is a pure function of `(config, seed)`: the same inputs replay the same
//! event trace down to the last timestamp.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded pseudo-random source for all stochastic draws in a run.
///
/// The type is `!Sync` to prevent accidental sharing across threads; the
/// simulation is single-threaded by design.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
