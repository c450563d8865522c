//! Benchmarks for multiply and transpose materialization

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use denmat::matrix::{multiply, Matrix, Order};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fill_f64(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 17 + 3) % 1000) as f64 / 1000.0).collect()
}

fn square(size: usize) -> Matrix<f64> {
    Matrix::from_vec(Order::RowMajor, size, fill_f64(size * size)).unwrap()
}

// ---------------------------------------------------------------------------
// Multiply (specialized f64 kernel; sizes straddle the rayon threshold)
// ---------------------------------------------------------------------------

fn bench_matmul_f64(c: &mut Criterion) {
    for size in [32, 128, 256] {
        let a = square(size);
        let b = square(size);
        c.bench_function(&format!("matmul_f64_{size}"), |bench| {
            bench.iter(|| black_box(multiply(Order::RowMajor, &a, &b).unwrap()))
        });
    }
}

// ---------------------------------------------------------------------------
// Multiply (generic fallback path, i64)
// ---------------------------------------------------------------------------

fn bench_matmul_generic(c: &mut Criterion) {
    let size = 128;
    let data: Vec<i64> = (0..size * size).map(|i| (i % 100) as i64).collect();
    let a = Matrix::from_vec(Order::RowMajor, size, data.clone()).unwrap();
    let b = Matrix::from_vec(Order::RowMajor, size, data).unwrap();
    c.bench_function("matmul_i64_128", |bench| {
        bench.iter(|| black_box(multiply(Order::RowMajor, &a, &b).unwrap()))
    });
}

// ---------------------------------------------------------------------------
// Transpose materialization (first col_major read pays the buffer transpose)
// ---------------------------------------------------------------------------

fn bench_transpose_materialization(c: &mut Criterion) {
    for size in [256, 1024] {
        let data = fill_f64(size * size);
        c.bench_function(&format!("materialize_f64_{size}"), |bench| {
            bench.iter(|| {
                let m = Matrix::from_vec(Order::RowMajor, size, data.clone()).unwrap();
                black_box(m.col_major()[1])
            })
        });
    }
}

criterion_group!(
    benches,
    bench_matmul_f64,
    bench_matmul_generic,
    bench_transpose_materialization
);
criterion_main!(benches);
