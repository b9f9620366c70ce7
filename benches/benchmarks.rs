//! Benchmarks for polyr polynomial operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polyr::{Polynomial, Ring};

fn make_poly(len: usize) -> Polynomial {
    (0..len).map(|i| (i as f64 + 1.0) * 0.5).collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Arithmetic");

    for &len in &[16usize, 64, 256] {
        let p = make_poly(len);
        let q = make_poly(len / 2);

        group.bench_with_input(BenchmarkId::new("add", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&p) + black_box(&q))
        });

        group.bench_with_input(BenchmarkId::new("sub_self", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&p) - black_box(&p))
        });

        group.bench_with_input(BenchmarkId::new("mul_naive", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&p) * black_box(&q))
        });
    }

    let base = make_poly(4);
    group.bench_function("pow_8", |bencher| bencher.iter(|| black_box(&base).pow(8)));

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Evaluation");

    for &len in &[16usize, 64, 256] {
        let p = make_poly(len);
        group.bench_with_input(BenchmarkId::new("eval", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&p).eval(black_box(0.75)))
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Construction");

    let roots: Vec<f64> = (0..16).map(|i| i as f64 - 8.0).collect();
    group.bench_function("from_roots_16", |bencher| {
        bencher.iter(|| Polynomial::from_roots(black_box(&roots)))
    });

    let points: Vec<(f64, f64)> = (0..16).map(|i| (i as f64, (i * i) as f64)).collect();
    group.bench_function("interpolate_16", |bencher| {
        bencher.iter(|| Polynomial::interpolate(black_box(&points)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_evaluation,
    bench_construction
);
criterion_main!(benches);
