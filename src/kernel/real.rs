//! f64 fast paths
//!
//! Tiled transpose for cache locality, ikj-order multiply parallelized over
//! output rows when the `rayon` feature is enabled, and block-copy submatrix
//! extraction. These are the kernels the complex specialization also leans
//! on through the doubled-lane reinterpretation.

use super::Kernel;

/// Tile edge for the blocked transpose
const TILE: usize = 32;

/// Work threshold (m * k * n) above which the multiply goes parallel
#[cfg(feature = "rayon")]
const PAR_THRESHOLD: usize = 64 * 64 * 64;

impl Kernel for f64 {
    fn transpose(rows: usize, cols: usize, src: &[Self]) -> Vec<Self> {
        transpose_f64(rows, cols, src)
    }

    fn matmul(m: usize, k: usize, n: usize, a: &[Self], b: &[Self]) -> Vec<Self> {
        matmul_f64(m, k, n, a, b)
    }

    fn submatrix(
        origin: (usize, usize),
        extent: (usize, usize),
        src_cols: usize,
        src: &[Self],
    ) -> Vec<Self> {
        submatrix_f64(origin, extent, src_cols, src)
    }

    fn diagonal(v: &[Self]) -> Vec<Self> {
        diagonal_f64(v)
    }
}

/// Blocked transpose: walk TILE x TILE tiles so both source and destination
/// stay cache-resident
pub(super) fn transpose_f64(rows: usize, cols: usize, src: &[f64]) -> Vec<f64> {
    debug_assert_eq!(src.len(), rows * cols);
    let mut dst = vec![0.0; src.len()];
    for ib in (0..rows).step_by(TILE) {
        let imax = (ib + TILE).min(rows);
        for jb in (0..cols).step_by(TILE) {
            let jmax = (jb + TILE).min(cols);
            for i in ib..imax {
                for j in jb..jmax {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }
        }
    }
    dst
}

/// Row-major multiply with accumulation along contiguous rows of `b`
pub(super) fn matmul_f64(m: usize, k: usize, n: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    let mut out = vec![0.0; m * n];

    #[cfg(feature = "rayon")]
    {
        if m * k * n >= PAR_THRESHOLD {
            use rayon::prelude::*;
            out.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                accumulate_row(i, k, n, a, b, row);
            });
            return out;
        }
    }

    for (i, row) in out.chunks_mut(n).enumerate() {
        accumulate_row(i, k, n, a, b, row);
    }
    out
}

/// One output row: row_i(out) += a[i][kk] * row_kk(b) for every kk
#[inline]
fn accumulate_row(i: usize, k: usize, n: usize, a: &[f64], b: &[f64], row: &mut [f64]) {
    for kk in 0..k {
        let av = a[i * k + kk];
        let brow = &b[kk * n..(kk + 1) * n];
        for (o, &bv) in row.iter_mut().zip(brow) {
            *o += av * bv;
        }
    }
}

/// Block copy: one contiguous memcpy per extracted row
pub(super) fn submatrix_f64(
    origin: (usize, usize),
    extent: (usize, usize),
    src_cols: usize,
    src: &[f64],
) -> Vec<f64> {
    let (r0, c0) = origin;
    let (rt, ct) = extent;
    let mut out = vec![0.0; rt * ct];
    for (i, row) in out.chunks_mut(ct).enumerate() {
        let start = (r0 + i) * src_cols + c0;
        row.copy_from_slice(&src[start..start + ct]);
    }
    out
}

/// Diagonal fill over a zeroed buffer
pub(super) fn diagonal_f64(v: &[f64]) -> Vec<f64> {
    let n = v.len();
    let mut out = vec![0.0; n * n];
    for (i, &x) in v.iter().enumerate() {
        out[i * n + i] = x;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::generic;
    use super::*;

    #[test]
    fn test_tiled_transpose_matches_generic() {
        // Odd sizes exercise the partial tiles
        let (rows, cols) = (37, 53);
        let src: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
        assert_eq!(
            transpose_f64(rows, cols, &src),
            generic::transpose(rows, cols, &src)
        );
    }

    #[test]
    fn test_matmul_small() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        assert_eq!(matmul_f64(2, 2, 2, &a, &b), [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_matches_generic() {
        let (m, k, n) = (5, 7, 3);
        let a: Vec<f64> = (0..m * k).map(|i| (i % 11) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 7) as f64).collect();
        assert_eq!(matmul_f64(m, k, n, &a, &b), generic::matmul(m, k, n, &a, &b));
    }

    #[test]
    fn test_submatrix_block_copy() {
        let src: Vec<f64> = (0..16).map(|i| i as f64).collect();
        // Interior 2x2 of a 4x4: rows 1..3, cols 1..3
        assert_eq!(
            submatrix_f64((1, 1), (2, 2), 4, &src),
            [5.0, 6.0, 9.0, 10.0]
        );
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            diagonal_f64(&[2.0, 3.0]),
            [2.0, 0.0, 0.0, 3.0]
        );
    }
}
