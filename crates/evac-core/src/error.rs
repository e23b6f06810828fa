//! Simulator error type.
//!
//! Stepping a simulation never fails: invalid moves, blocked spreads and
//! duplicate fires all resolve to "no state change".  The only fallible
//! surface is construction, which rejects configurations the grid cannot
//! represent.

use thiserror::Error;

/// The top-level error type for `evac-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvacError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl EvacError {
    /// Shorthand for `EvacError::InvalidConfiguration(msg.into())`.
    pub fn config(msg: impl Into<String>) -> Self {
        EvacError::InvalidConfiguration(msg.into())
    }
}

/// Shorthand result type for all `evac-*` crates.
pub type EvacResult<T> = Result<T, EvacError>;
