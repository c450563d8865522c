//! Error types for denmat

use thiserror::Error;

/// Result type alias using denmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in denmat operations
///
/// Every operation either returns a fully valid matrix or fails before any
/// output is observable; there is no partial success.
#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes are incompatible for an operation
    #[error("shape mismatch in {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape as (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape as (rows, cols)
        rhs: (usize, usize),
    },

    /// Buffer length does not divide evenly into the requested column count
    #[error("buffer of {len} elements cannot form a matrix with {cols} columns")]
    IndivisibleLength {
        /// Number of elements in the buffer
        len: usize,
        /// Requested column count
        cols: usize,
    },

    /// Element coordinates outside the matrix
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Submatrix block exceeds the source bounds
    #[error("submatrix at {origin:?} with extent {extent:?} exceeds {rows}x{cols} source")]
    SubmatrixOutOfBounds {
        /// Zero-based (row, col) of the block's top-left corner
        origin: (usize, usize),
        /// (rows, cols) of the requested block
        extent: (usize, usize),
        /// Number of rows in the source
        rows: usize,
        /// Number of columns in the source
        cols: usize,
    },

    /// Invalid argument provided to an operation
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::ShapeMismatch { op, lhs, rhs }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
