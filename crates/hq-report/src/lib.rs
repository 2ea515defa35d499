//! `hq-report` — reporting collaborators for the rust_hq engine.
//!
//! Nothing here schedules events or mutates engine state: the observers
//! collect history as the run progresses, and the summary is a pure
//! function of the finished engine value.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hq_report::{SummaryReport, TraceObserver, write_trace};
//!
//! let mut trace = TraceObserver::new();
//! sim.run(&mut trace)?;
//! write_trace(Path::new("trace.csv"), &trace.rows)?;
//! println!("{}", SummaryReport::from_sim(&sim));
//! ```

pub mod csv;
pub mod error;
pub mod summary;
pub mod trace;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::write_trace;
pub use error::{ReportError, ReportResult};
pub use summary::SummaryReport;
pub use trace::{TraceObserver, TraceRow, VariateHistory};
