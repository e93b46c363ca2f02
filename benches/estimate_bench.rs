//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonic_series::*;

fn benchmark_block_sum(c: &mut Criterion) {
    c.bench_function("block_sum_first_window", |b| {
        b.iter(|| approximate_block_sum(black_box(16384), black_box(32767)))
    });

    c.bench_function("difference_table_m=100", |b| {
        b.iter(|| DifferenceTable::build(black_box(1.0 / 24576.0), TERMS))
    });
}

fn benchmark_estimate(c: &mut Criterion) {
    let estimator = HarmonicEstimator::default();

    c.bench_function("estimate_n=1e6", |b| {
        b.iter(|| estimator.estimate(black_box(1_000_000)))
    });

    c.bench_function("estimate_n=u64_max", |b| {
        b.iter(|| estimator.estimate(black_box(u64::MAX)))
    });
}

criterion_group!(benches, benchmark_block_sum, benchmark_estimate);
criterion_main!(benches);
