//! Per-kernel hashing throughput.
//!
//! # Benchmark Categories
//!
//! 1. **Kernel by key type** - every kernel over random, sequential and
//!    Unicode keys (10K keys, cycled)
//! 2. **Input size scaling** - byte throughput from 8B to 2KB keys
//! 3. **Seed cost** - seeded vs unseeded variants of murmur3 and seeded
//!
//! # Expected Shape
//!
//! `rolling64`, `murmur3` and `seeded` are byte loops and scale linearly with
//! key length. `sum-modulo` and `djb2` pay for UTF-8 decoding first.
//! `sha256` is an order of magnitude slower than the rest at every size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashscope::hash::{HashKernel, KernelKind, KernelParams, Murmur3, SeededHash};

mod common;
use common::*;

fn all_kernels() -> Vec<Box<dyn HashKernel>> {
    match KernelKind::build_all(&KernelParams::default()) {
        Ok(kernels) => kernels,
        Err(e) => panic!("default kernel parameters rejected: {e}"),
    }
}

fn bench_keys(group_name: &str, c: &mut Criterion, keys: &[String]) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(1));

    for kernel in all_kernels() {
        group.bench_function(kernel.name(), |b| {
            let mut idx = 0;
            b.iter(|| {
                let key = &keys[idx % keys.len()];
                idx += 1;
                black_box(kernel.hash(black_box(key.as_bytes())))
            });
        });
    }

    group.finish();
}

// BENCHMARK 1: Kernel by Key Type

fn bench_random_keys(c: &mut Criterion) {
    bench_keys("1_random_keys_10", c, &generate_strings(10_000, 10));
}

fn bench_sequential_keys(c: &mut Criterion) {
    bench_keys("1_sequential_keys", c, &generate_sequential_strings(10_000));
}

fn bench_unicode_keys(c: &mut Criterion) {
    bench_keys("1_unicode_keys", c, &generate_unicode_strings(10_000));
}

// BENCHMARK 2: Input Size Scaling

fn bench_input_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("2_input_size_scaling");
    let kernels = all_kernels();

    for &len in KEY_LENGTHS {
        let keys = generate_strings(1_000, len);
        group.throughput(Throughput::Bytes(len as u64));

        for kernel in &kernels {
            group.bench_with_input(BenchmarkId::new(kernel.name(), len), &len, |b, _| {
                let mut idx = 0;
                b.iter(|| {
                    let key = &keys[idx % keys.len()];
                    idx += 1;
                    black_box(kernel.hash(key.as_bytes()))
                });
            });
        }
    }

    group.finish();
}

// BENCHMARK 3: Seed Cost

fn bench_seed_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("3_seed_cost");
    let keys = generate_strings(1_000, 32);

    for seed in [0u32, 0x9747_B28C] {
        let kernel = Murmur3::with_seed(seed);
        group.bench_with_input(BenchmarkId::new("murmur3", seed), &seed, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let key = &keys[idx % keys.len()];
                idx += 1;
                black_box(kernel.hash(key.as_bytes()))
            });
        });
    }

    for seed in [0u64, 42] {
        let kernel = SeededHash::with_seed(seed);
        group.bench_with_input(BenchmarkId::new("seeded", seed), &seed, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let key = &keys[idx % keys.len()];
                idx += 1;
                black_box(kernel.hash(key.as_bytes()))
            });
        });
    }

    group.finish();
}

criterion_group!(
    kernel_benches,
    bench_random_keys,
    bench_sequential_keys,
    bench_unicode_keys,
    bench_input_size_scaling,
    bench_seed_cost,
);

criterion_main!(kernel_benches);
