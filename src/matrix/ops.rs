//! Structural operations: multiply, submatrix extraction, diagonals
//!
//! Dispatch flows through `T: Kernel`, so element types with specialized
//! buffer kernels (f64, Complex128) get the fast paths and everything else
//! runs the generic fallbacks, with no runtime type tests.

use super::{join_vert, Matrix, Order};
use crate::error::{Error, Result};
use crate::kernel::Kernel;

/// Matrix product with the requested output storage order
///
/// The contracted dimension of `a` (its column count) must equal the row
/// count of `b`. The row-major product feeds the kernel the row-major views
/// of both operands. The column-major product is computed as the transpose
/// of `multiply(RowMajor, bᵀ, aᵀ)` via the identity (AB)ᵀ = BᵀAᵀ, then
/// rewrapped so the result's order field reads ColumnMajor; the identity is
/// what makes the single kernel calling convention sufficient.
pub fn multiply<T: Kernel>(order: Order, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(Error::shape_mismatch("multiply", a.shape(), b.shape()));
    }
    match order {
        Order::RowMajor => {
            let (m, k, n) = (a.rows(), a.cols(), b.cols());
            let out = T::matmul(m, k, n, a.row_major(), b.row_major());
            Matrix::from_vec(Order::RowMajor, n, out)
        }
        Order::ColumnMajor => {
            let t = multiply(Order::RowMajor, &b.transpose(), &a.transpose())?;
            // t is (n x m) row-major, which is exactly the (m x n) product
            // stored column-major; rewrap the buffer without copying.
            Ok(Matrix::from_parts(
                Order::ColumnMajor,
                b.cols(),
                t.primary().clone(),
            ))
        }
    }
}

/// Outer product: the m x n matrix with (i, j) = u[i] * v[j]
///
/// Encoded as column-matrix times row-matrix; errors if either vector is
/// empty.
pub fn outer<T: Kernel>(u: &[T], v: &[T]) -> Result<Matrix<T>> {
    let col = Matrix::from_vec(Order::RowMajor, 1, u.to_vec())?;
    let row = Matrix::from_vec(Order::RowMajor, v.len(), v.to_vec())?;
    multiply(Order::RowMajor, &col, &row)
}

/// Dot product of equal-length vectors
///
/// The scalar at (0, 0) of row-matrix times column-matrix.
pub fn dot<T: Kernel>(u: &[T], v: &[T]) -> Result<T> {
    if u.len() != v.len() {
        return Err(Error::shape_mismatch("dot", (1, u.len()), (v.len(), 1)));
    }
    let row = Matrix::from_vec(Order::RowMajor, u.len(), u.to_vec())?;
    let col = Matrix::from_vec(Order::RowMajor, 1, v.to_vec())?;
    multiply(Order::RowMajor, &row, &col)?.at(0, 0)
}

/// Square diagonal matrix from a vector
///
/// (i, i) entries equal `v[i]`, everything else is the additive identity.
/// Errors if `v` is empty.
pub fn diag<T: Kernel>(v: &[T]) -> Result<Matrix<T>> {
    Matrix::from_vec(Order::RowMajor, v.len(), T::diagonal(v))
}

/// Rectangular r x c diagonal matrix
///
/// Requires `v.len() >= min(rows, cols)`; only the first min(rows, cols)
/// entries are used. The wide case is the transpose of the tall case; the
/// tall case is the square diagonal with a zero block joined below.
pub fn diag_rect<T: Kernel>(v: &[T], rows: usize, cols: usize) -> Result<Matrix<T>> {
    let min = rows.min(cols);
    if v.len() < min {
        return Err(Error::shape_mismatch("diag_rect", (rows, cols), (1, v.len())));
    }
    match rows.cmp(&cols) {
        std::cmp::Ordering::Equal => diag(&v[..rows]),
        std::cmp::Ordering::Less => Ok(diag_rect(v, cols, rows)?.transpose()),
        std::cmp::Ordering::Greater => {
            let square = diag(&v[..cols])?;
            let pad = Matrix::zeros(rows - cols, cols)?;
            join_vert(&[square, pad])
        }
    }
}

/// n x n identity matrix
pub fn identity<T: Kernel>(n: usize) -> Result<Matrix<T>> {
    diag(&vec![T::one(); n])
}

impl<T: Kernel> Matrix<T> {
    /// Row-major matrix product; shorthand for `multiply(Order::RowMajor, ..)`
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        multiply(Order::RowMajor, self, rhs)
    }

    /// Extract the `extent` = (rows, cols) block whose top-left corner sits
    /// at zero-based `origin`
    ///
    /// The whole block must lie within bounds; out-of-range requests error
    /// rather than reading past the buffer.
    pub fn sub_matrix(&self, origin: (usize, usize), extent: (usize, usize)) -> Result<Self> {
        let (r0, c0) = origin;
        let (rt, ct) = extent;
        if r0 + rt > self.rows() || c0 + ct > self.cols() {
            return Err(Error::SubmatrixOutOfBounds {
                origin,
                extent,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let out = T::submatrix(origin, extent, self.cols(), self.row_major());
        Matrix::from_vec(Order::RowMajor, ct, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(Order::RowMajor, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn test_multiply_contraction_mismatch() {
        let a = mat(3, &[1.0; 6]); // 2x3
        let b = mat(3, &[1.0; 6]); // 2x3
        assert!(matches!(
            multiply(Order::RowMajor, &a, &b),
            Err(Error::ShapeMismatch {
                op: "multiply",
                lhs: (2, 3),
                rhs: (2, 3),
            })
        ));
    }

    #[test]
    fn test_column_major_product_matches_row_major() {
        let a = mat(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]); // 2x3
        let b = mat(2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]); // 3x2
        let rm = multiply(Order::RowMajor, &a, &b).unwrap();
        let cm = multiply(Order::ColumnMajor, &a, &b).unwrap();
        assert_eq!(cm.order(), Order::ColumnMajor);
        assert_eq!(rm, cm);
        assert_eq!(rm.row_major(), [58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_diag_rect_wide_is_transpose_of_tall() {
        let v = [1.0, 2.0];
        let wide = diag_rect(&v, 2, 4).unwrap();
        let tall = diag_rect(&v, 4, 2).unwrap();
        assert_eq!(wide, tall.transpose());
        assert_eq!(wide.row_major(), [1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_diag_rect_insufficient_vector() {
        assert!(diag_rect(&[1.0], 2, 3).is_err());
    }
}
