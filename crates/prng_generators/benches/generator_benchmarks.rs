//! Criterion benchmarks for the sequence generators.
//!
//! Measures raw generation time of the three algorithms across sample sizes
//! to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prng_generators::{
    lcg_sequence, middle_products_sequence, BuiltinGenerator, MiddleProductSeeds,
    INITIAL_MULTIPLIER,
};

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Benchmark the linear congruential recurrence (u128 arithmetic).
fn bench_linear_congruential(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_congruential");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| lcg_sequence(black_box(17_000_000_000_000_000), size));
        });
    }

    group.finish();
}

/// Benchmark the middle-products recurrence.
fn bench_middle_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_products");
    let seeds = MiddleProductSeeds::new(42, 42, INITIAL_MULTIPLIER);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| middle_products_sequence(black_box(seeds), size));
        });
    }

    group.finish();
}

/// Benchmark the builtin generator (StdRng + gen_range).
fn bench_builtin(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut generator = BuiltinGenerator::from_seed(42);
            b.iter(|| generator.generate(black_box(size)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_congruential,
    bench_middle_products,
    bench_builtin
);
criterion_main!(benches);
