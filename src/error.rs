//! Error types for the Hopfield memory library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, HopfieldError>;

/// Errors raised by matrix construction, access and arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column
    #[error("Invalid matrix shape: {rows}x{cols}. Both dimensions must be positive.")]
    InvalidShape { rows: usize, cols: usize },

    /// Operand shapes violate the operation's algebraic rule
    #[error("Dimension mismatch in {operation}: left shape {left:?}, right shape {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Positional access outside the grid
    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Packed data does not fill the requested shape exactly
    #[error("Packed array length mismatch: expected {expected}, got {actual}")]
    PackedLength { expected: usize, actual: usize },
}

/// Main error type for the library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HopfieldError {
    /// Pattern length differs from the network size
    #[error("Can't use a pattern of size {actual} on a Hopfield network of size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Pattern text could not be parsed
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Underlying matrix failure
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

impl HopfieldError {
    /// Whether this error came from a pattern of the wrong length
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, HopfieldError::SizeMismatch { .. })
    }
}
