//! Dense matrix entity with dual-layout storage
//!
//! A `Matrix` composes logical dimensions, a primary buffer laid out per its
//! storage order, a lazily materialized opposite-layout cache, and a logical
//! transpose flag. Transposing is O(1): it swaps the dimensions and flips the
//! flag, sharing both buffers with the original.
//!
//! # Layout invariant
//!
//! The buffer holding the logical row-major view is selected by
//! `transposed XOR (order == ColumnMajor)`: when the XOR is set, the view
//! lives in the transposed cache (materialized on first need); otherwise it
//! is the primary buffer. The invariant holds after every transpose,
//! reshape, and slice.

mod build;
mod ops;
mod order;

pub use build::{from_blocks, join_horiz, join_vert};
pub use ops::{diag, diag_rect, dot, identity, multiply, outer};
pub use order::Order;

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::kernel::Kernel;
use std::sync::{Arc, OnceLock};

/// Dense two-dimensional matrix over element type `T`
///
/// Immutable after construction except for the internal transposed-buffer
/// cache, which is filled at most once (`OnceLock` compute-once publish) and
/// is not a semantic mutation: every read observes the same logical value.
#[derive(Clone)]
pub struct Matrix<T: Kernel> {
    /// Logical row count
    rows: usize,
    /// Logical column count
    cols: usize,
    /// Primary buffer, laid out according to `order`
    data: Buffer<T>,
    /// Same elements in the opposite physical layout, materialized lazily.
    /// Shared with O(1) transpose wrappers so the cache fills once per
    /// buffer pair, not once per wrapper.
    flipped: Arc<OnceLock<Buffer<T>>>,
    /// Logical transpose flag; flipping it swaps rows/cols without touching
    /// buffers
    transposed: bool,
    /// Physical layout of the primary buffer, fixed at construction
    order: Order,
}

impl<T: Kernel> Matrix<T> {
    /// Create a matrix from a flat buffer and a column count
    ///
    /// The row count is derived as `data.len() / cols`; the division must be
    /// exact and the result non-empty. `data` is interpreted according to
    /// `order`: row-major stores each row contiguously, column-major each
    /// column.
    pub fn from_vec(order: Order, cols: usize, data: Vec<T>) -> Result<Self> {
        if cols == 0 || data.is_empty() || data.len() % cols != 0 {
            return Err(Error::IndivisibleLength {
                len: data.len(),
                cols,
            });
        }
        let rows = data.len() / cols;
        Ok(Self {
            rows,
            cols,
            data: Buffer::from_vec(data),
            flipped: Arc::new(OnceLock::new()),
            transposed: false,
            order,
        })
    }

    /// Reinterpret a flat buffer as a row-major matrix with `cols` columns
    pub fn reshape(cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_vec(Order::RowMajor, cols, data)
    }

    /// Wrap an existing buffer without copying
    ///
    /// Internal constructor; callers guarantee `data.len()` divides evenly
    /// by `cols`.
    pub(crate) fn from_parts(order: Order, cols: usize, data: Buffer<T>) -> Self {
        debug_assert!(cols > 0 && !data.is_empty() && data.len() % cols == 0);
        let rows = data.len() / cols;
        Self {
            rows,
            cols,
            data,
            flipped: Arc::new(OnceLock::new()),
            transposed: false,
            order,
        }
    }

    /// Build a row-major matrix by evaluating `f` at every (row, col)
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self> {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_vec(Order::RowMajor, cols, data)
    }

    /// Matrix with every element equal to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        Self::from_vec(Order::RowMajor, cols, vec![value; rows * cols])
    }

    /// Matrix of additive identities
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero())
    }

    /// Matrix of multiplicative identities
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::one())
    }

    // ===== Accessors =====

    /// Logical row count
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Logical column count
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Logical shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Storage order of the primary buffer
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Bounds-checked element read at zero-based (row, col)
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.row_major()[row * self.cols + col])
    }

    /// Copy the logical elements out in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.row_major().to_vec()
    }

    // ===== Layout engine =====

    /// True when the logical row-major view lives in the transposed cache
    /// rather than the primary buffer
    #[inline]
    fn needs_flip(&self) -> bool {
        self.transposed != (self.order == Order::ColumnMajor)
    }

    /// The logical row-major view of the elements
    ///
    /// Materializes the transposed cache on first need. A single row or
    /// column is its own transpose, so both views alias the primary buffer
    /// and no copy is ever made for vector-shaped matrices.
    pub fn row_major(&self) -> &[T] {
        if self.rows == 1 || self.cols == 1 {
            return self.data.as_slice();
        }
        if self.needs_flip() {
            self.materialized().as_slice()
        } else {
            self.data.as_slice()
        }
    }

    /// The logical column-major view of the elements
    pub fn col_major(&self) -> &[T] {
        if self.rows == 1 || self.cols == 1 {
            return self.data.as_slice();
        }
        if self.needs_flip() {
            self.data.as_slice()
        } else {
            self.materialized().as_slice()
        }
    }

    /// Fill (at most once) and return the opposite-layout buffer
    ///
    /// The primary buffer read row-major has shape (rows, cols) when it
    /// already is the row-major view, and (cols, rows) otherwise; either
    /// way its transpose is the missing view. The shape choice is invariant
    /// under logical transposition, so wrappers sharing this cache agree on
    /// its contents.
    fn materialized(&self) -> &Buffer<T> {
        self.flipped.get_or_init(|| {
            let (pr, pc) = if self.needs_flip() {
                (self.cols, self.rows)
            } else {
                (self.rows, self.cols)
            };
            Buffer::from_vec(T::transpose(pr, pc, self.data.as_slice()))
        })
    }

    // ===== Structure =====

    /// Logical transpose: swap dimensions and flip the flag, sharing both
    /// buffers; O(1), no copy, no materialization
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            data: self.data.clone(),
            flipped: Arc::clone(&self.flipped),
            transposed: !self.transposed,
            order: self.order,
        }
    }

    /// Conjugate transpose: transpose composed with element-wise conjugation
    ///
    /// For real element types this equals `transpose` (conjugation is the
    /// identity) but always copies. A materialized cache is conjugated
    /// eagerly into the result rather than recomputed later.
    pub fn conjugate_transpose(&self) -> Self {
        let conj = |buf: &Buffer<T>| {
            Buffer::from_vec(buf.as_slice().iter().map(|&z| z.conj()).collect())
        };
        let cell = OnceLock::new();
        if let Some(f) = self.flipped.get() {
            let _ = cell.set(conj(f));
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data: conj(&self.data),
            flipped: Arc::new(cell),
            transposed: !self.transposed,
            order: self.order,
        }
    }

    /// Reinterpret this matrix's flattened row-major data with a new column
    /// count
    pub fn reshaped(&self, cols: usize) -> Result<Self> {
        Self::reshape(cols, self.to_vec())
    }

    /// Primary buffer accessor for zero-copy rewrapping inside the crate
    #[inline]
    pub(crate) fn primary(&self) -> &Buffer<T> {
        &self.data
    }
}

impl<T: Kernel> PartialEq for Matrix<T> {
    /// Logical-view equality: same shape, same elements at every (i, j),
    /// regardless of storage order or transpose state
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.row_major() == other.row_major()
    }
}

impl<T: Kernel> std::fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("order", &self.order)
            .field("transposed", &self.transposed)
            .field("data", &self.row_major())
            .finish()
    }
}
