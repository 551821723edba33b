//! Error types.

use thiserror::Error;

/// Errors raised while building a [`Generation`](crate::Generation) or its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Height or width is zero.
    #[error("invalid grid dimension {height}x{width}: both sides must be at least 1")]
    InvalidDimension { height: usize, width: usize },

    /// The provided cells do not fill the requested dimensions.
    #[error("dimension mismatch: expected {expected} cells, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Fill density outside of `[0, 1]`.
    #[error("invalid density {0}: must be within [0, 1]")]
    InvalidDensity(f64),
}

/// Errors raised by the interactive setup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An answer that should have been a number was not.
    #[error("inappropriate value {0:?}: expected a whole number")]
    InvalidNumber(String),

    /// Input closed before every question was answered.
    #[error("input ended before setup was complete")]
    Eof,

    #[error(transparent)]
    Grid(#[from] GridError),
}
