//! Builder and accessor API: row/column lists, joins, block assembly, flips
//!
//! Column operations are defined purely in terms of row operations plus the
//! O(1) transpose, never duplicated: `from_columns = transpose ∘ from_rows`,
//! `to_columns = to_rows ∘ transpose`, and `join_horiz` is `join_vert` over
//! transposed inputs.

use super::{Matrix, Order};
use crate::error::{Error, Result};
use crate::kernel::Kernel;

impl<T: Kernel> Matrix<T> {
    /// Row-major matrix whose rows are the given vectors
    ///
    /// All rows must share one length; ragged input is a shape mismatch.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::invalid_argument("rows", "at least one row required"));
        };
        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::shape_mismatch("from_rows", (1, cols), (1, row.len())));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(Order::RowMajor, cols, data)
    }

    /// Matrix whose columns are the given vectors
    pub fn from_columns(cols: &[Vec<T>]) -> Result<Self> {
        Ok(Self::from_rows(cols)?.transpose())
    }

    /// Copy the rows out as vectors
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_major()
            .chunks(self.cols())
            .map(<[T]>::to_vec)
            .collect()
    }

    /// Copy the columns out as vectors
    pub fn to_columns(&self) -> Vec<Vec<T>> {
        self.transpose().to_rows()
    }

    /// Reverse the order of the rows
    pub fn flipud(&self) -> Result<Self> {
        let mut rows = self.to_rows();
        rows.reverse();
        Self::from_rows(&rows)
    }

    /// Reverse the order of the columns
    pub fn fliprl(&self) -> Result<Self> {
        let mut cols = self.to_columns();
        cols.reverse();
        Self::from_columns(&cols)
    }

    /// The first `n` rows
    pub fn take_rows(&self, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("n", "cannot take zero rows"));
        }
        self.sub_matrix((0, 0), (n, self.cols()))
    }

    /// Everything below the first `n` rows
    pub fn drop_rows(&self, n: usize) -> Result<Self> {
        if n >= self.rows() {
            return Err(Error::invalid_argument(
                "n",
                format!("cannot drop {n} of {} rows", self.rows()),
            ));
        }
        self.sub_matrix((n, 0), (self.rows() - n, self.cols()))
    }

    /// The first `n` columns
    pub fn take_columns(&self, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("n", "cannot take zero columns"));
        }
        self.sub_matrix((0, 0), (self.rows(), n))
    }

    /// Everything right of the first `n` columns
    pub fn drop_columns(&self, n: usize) -> Result<Self> {
        if n >= self.cols() {
            return Err(Error::invalid_argument(
                "n",
                format!("cannot drop {n} of {} columns", self.cols()),
            ));
        }
        self.sub_matrix((0, n), (self.rows(), self.cols() - n))
    }
}

/// Stack matrices vertically
///
/// All inputs must share a column count; rows are concatenated in input
/// order.
pub fn join_vert<T: Kernel>(ms: &[Matrix<T>]) -> Result<Matrix<T>> {
    let Some(first) = ms.first() else {
        return Err(Error::invalid_argument(
            "ms",
            "at least one matrix required",
        ));
    };
    let cols = first.cols();
    let mut data = Vec::new();
    for m in ms {
        if m.cols() != cols {
            return Err(Error::shape_mismatch("join_vert", first.shape(), m.shape()));
        }
        data.extend_from_slice(m.row_major());
    }
    Matrix::from_vec(Order::RowMajor, cols, data)
}

/// Stack matrices horizontally
///
/// All inputs must share a row count. Defined as vertical stacking of the
/// transposes, transposed back.
pub fn join_horiz<T: Kernel>(ms: &[Matrix<T>]) -> Result<Matrix<T>> {
    let flipped: Vec<Matrix<T>> = ms.iter().map(Matrix::transpose).collect();
    Ok(join_vert(&flipped)?.transpose())
}

/// Assemble a block matrix
///
/// Each inner list is joined horizontally (row counts must match within a
/// list), then the resulting row blocks are joined vertically (their column
/// counts must match).
pub fn from_blocks<T: Kernel>(blocks: &[Vec<Matrix<T>>]) -> Result<Matrix<T>> {
    let rows: Vec<Matrix<T>> = blocks
        .iter()
        .map(|row| join_horiz(row))
        .collect::<Result<_>>()?;
    join_vert(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            err,
            Err(Error::ShapeMismatch {
                op: "from_rows",
                ..
            })
        ));
    }

    #[test]
    fn test_join_horiz_via_transposes() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0], vec![6.0]]).unwrap();
        let j = join_horiz(&[a, b]).unwrap();
        assert_eq!(j.shape(), (2, 3));
        assert_eq!(j.row_major(), [1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_empty_join_rejected() {
        assert!(join_vert::<f64>(&[]).is_err());
    }
}
