//! Workspace error type.
//!
//! Sub-crates define their own error enums and either convert `HqError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `hq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HqError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hq-*` crates.
pub type HqResult<T> = Result<T, HqError>;
