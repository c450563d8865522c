//! Complex128 fast paths
//!
//! Transpose, multiply, and diagonal work directly over complex scalars.
//! Submatrix extraction reuses the real-valued block copy: the interleaved
//! (re, im) buffer is viewed as f64 lanes with column bounds doubled, copied,
//! and viewed back. The reinterpretation is exact because each complex
//! element is two adjacent lanes.

use super::real;
use super::Kernel;
use crate::element::Complex128;

/// Tile edge for the blocked transpose
const TILE: usize = 16;

impl Kernel for Complex128 {
    fn transpose(rows: usize, cols: usize, src: &[Self]) -> Vec<Self> {
        debug_assert_eq!(src.len(), rows * cols);
        let mut dst = vec![Complex128::ZERO; src.len()];
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

    fn matmul(m: usize, k: usize, n: usize, a: &[Self], b: &[Self]) -> Vec<Self> {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        let mut out = vec![Complex128::ZERO; m * n];
        for (i, row) in out.chunks_mut(n).enumerate() {
            for kk in 0..k {
                let av = a[i * k + kk];
                let brow = &b[kk * n..(kk + 1) * n];
                for (o, &bv) in row.iter_mut().zip(brow) {
                    // Inlined complex FMA keeps re/im in registers
                    o.re += av.re * bv.re - av.im * bv.im;
                    o.im += av.re * bv.im + av.im * bv.re;
                }
            }
        }
        out
    }

    fn submatrix(
        origin: (usize, usize),
        extent: (usize, usize),
        src_cols: usize,
        src: &[Self],
    ) -> Vec<Self> {
        let (r0, c0) = origin;
        let (rt, ct) = extent;
        let lanes: &[f64] = bytemuck::cast_slice(src);
        let block = real::submatrix_f64((r0, 2 * c0), (rt, 2 * ct), 2 * src_cols, lanes);
        bytemuck::cast_slice(&block).to_vec()
    }

    fn diagonal(v: &[Self]) -> Vec<Self> {
        let n = v.len();
        let mut out = vec![Complex128::ZERO; n * n];
        for (i, &z) in v.iter().enumerate() {
            out[i * n + i] = z;
        }
        out
    }
}
