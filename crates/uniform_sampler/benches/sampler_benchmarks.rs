//! Criterion benchmarks for uniform interval sampling.
//!
//! Benchmarks cover:
//! - `sample_uniform` with varying counts
//! - Sequential vs rayon-parallel sampling on large requests
//! - Zero-allocation buffer fill

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uniform_sampler::{sample_uniform, UniformConfig, UniformSampler};

fn bench_sample_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_uniform");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("interval", count), &count, |b, &n| {
            b.iter(|| black_box(sample_uniform(n, 10.0, 20.0, 42)));
        });
    }

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler_parallel");
    group.sample_size(20);

    for count in [1_000_000u32, 10_000_000] {
        let config = UniformConfig::builder().count(count).seed(42).build().unwrap();
        let sampler = UniformSampler::new(config);

        group.bench_with_input(BenchmarkId::new("sequential", count), &sampler, |b, s| {
            b.iter(|| black_box(s.sample()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &sampler, |b, s| {
            b.iter(|| black_box(s.sample_par()));
        });
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let sampler = UniformSampler::new(UniformConfig::new(0));
    let mut buffer = vec![0.0; 100_000];

    c.bench_function("fill_100k", |b| {
        b.iter(|| {
            sampler.fill(&mut buffer);
            black_box(buffer[buffer.len() - 1])
        });
    });
}

criterion_group!(benches, bench_sample_uniform, bench_parallel, bench_fill);
criterion_main!(benches);
