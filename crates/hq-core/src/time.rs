//! Continuous simulation time.
//!
//! # Design
//!
//! Service and inter-arrival durations are real-valued exponential draws, so
//! the clock is a plain `f64` wrapped in a newtype that supplies a total
//! order (`f64` alone is only `PartialOrd`, which the event schedule's heap
//! cannot use).  Comparison goes through `total_cmp`; the engine never
//! produces NaN or infinite timestamps, so the IEEE total order and the
//! numeric order agree on every value that actually reaches the heap.
//!
//! Time is an abstract unit: the rate parameters in `SimConfig` define its
//! scale, and the engine never converts to wall-clock time.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A point on the simulation clock.
///
/// The inner value is `pub` for reporting code that needs the raw number;
/// arithmetic should go through [`offset`][SimTime::offset] and
/// [`since`][SimTime::since].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The instant `duration` time units after `self`.
    #[inline]
    pub fn offset(self, duration: f64) -> SimTime {
        SimTime(self.0 + duration)
    }

    /// Elapsed duration from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
