use hq_core::HqError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] HqError),

    /// The future event list ran dry before the healed target was reached.
    ///
    /// The arrival chain schedules a successor for every consumed Arrival,
    /// so this cannot happen under a correct engine: it signals an internal
    /// bug, not a configuration problem.
    #[error("event schedule exhausted with {healed} of {target} patients healed")]
    ScheduleExhausted { healed: u64, target: u64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
