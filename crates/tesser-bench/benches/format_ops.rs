//! Criterion micro-benchmarks for text persistence.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tesser_bench::twisted_profile;

/// Benchmark: render a 10x10 grid of 10x10 rooms (10K tiles) to text.
fn bench_save_10k(c: &mut Criterion) {
    let world = twisted_profile(10, 10, 10).unwrap();

    c.bench_function("save_10k", |b| {
        b.iter(|| black_box(tesser_format::to_string(&world)));
    });
}

/// Benchmark: parse the same world back.
fn bench_load_10k(c: &mut Criterion) {
    let world = twisted_profile(10, 10, 10).unwrap();
    let text = tesser_format::to_string(&world);

    c.bench_function("load_10k", |b| {
        b.iter(|| black_box(tesser_format::from_str(&text).unwrap()));
    });
}

criterion_group!(benches, bench_save_10k, bench_load_10k);
criterion_main!(benches);
