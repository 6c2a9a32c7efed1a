//! Error type shared by every engine operation.

use thiserror::Error;

/// Errors raised by the GA engine.
///
/// All variants are fatal to the current run: the engine never retries and
/// never returns a partial result after one of these is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// A parameter is out of range, or the city set is too small to evolve.
    ///
    /// Raised before any computation begins.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A distance lookup referenced a city absent from the table.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A tour failed the permutation check (duplicate or missing city).
    #[error("tour invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
