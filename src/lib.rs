//! # denmat
//!
//! **Dense matrices with dual row-major/column-major storage and lazy
//! transposition.**
//!
//! denmat stores a matrix as a flat, reference-counted buffer in either
//! storage order, keeps the opposite layout as a lazily materialized cache,
//! and makes logical transposition an O(1) flag flip that shares both
//! buffers. Structural operations (multiply, submatrix extraction, diagonal
//! construction, block assembly) dispatch at compile time to specialized
//! kernels for `f64` and `Complex128`, with a generic fallback for every
//! other element type.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use denmat::prelude::*;
//!
//! let a = Matrix::from_vec(Order::RowMajor, 2, vec![1.0, 2.0, 3.0, 4.0])?;
//! let b = identity(2)?;
//!
//! let c = multiply(Order::RowMajor, &a, &b)?;
//! assert_eq!(c, a);
//!
//! let t = a.transpose(); // O(1), shares storage with a
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded f64 matrix multiplication
//! - `f16`: Half-precision element types (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod element;
pub mod error;
pub mod kernel;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{Complex64, Complex128, Element};
    pub use crate::error::{Error, Result};
    pub use crate::kernel::Kernel;
    pub use crate::matrix::{
        diag, diag_rect, dot, from_blocks, identity, join_horiz, join_vert, multiply, outer,
        Matrix, Order,
    };
}
