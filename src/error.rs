//! Error types for maze generation.

use thiserror::Error;

/// Result type alias for engine operations.
pub type MazeResult<T> = Result<T, MazeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Requested grid is empty or larger than the engine accepts.
    #[error("invalid maze dimensions {rows}x{cols}: each side must be in 1..={max}")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    /// A finished maze failed a structural check.
    #[error("maze invariant violated: {0}")]
    Invariant(String),
}
