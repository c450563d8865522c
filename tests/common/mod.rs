//! Common test utilities
#![allow(dead_code)]

use denmat::element::Complex128;
use denmat::matrix::{Matrix, Order};

/// Build a row-major f64 matrix from a flat slice
pub fn mat(cols: usize, data: &[f64]) -> Matrix<f64> {
    Matrix::from_vec(Order::RowMajor, cols, data.to_vec()).unwrap()
}

/// Build a row-major i64 matrix from a flat slice
pub fn mat_i64(cols: usize, data: &[i64]) -> Matrix<i64> {
    Matrix::from_vec(Order::RowMajor, cols, data.to_vec()).unwrap()
}

/// Build a row-major Complex128 matrix from (re, im) pairs
pub fn mat_c128(cols: usize, data: &[(f64, f64)]) -> Matrix<Complex128> {
    let elems: Vec<Complex128> = data.iter().map(|&(re, im)| Complex128::new(re, im)).collect();
    Matrix::from_vec(Order::RowMajor, cols, elems).unwrap()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
