//! Shared data generators for the benchmarks.
//!
//! Every generator is seeded so repeated benchmark runs hash identical
//! inputs and timings stay comparable between runs.
#![allow(dead_code)]

use hashscope::dataset::{generate, Dataset, GeneratorConfig};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used by every generator here.
pub const BENCH_SEED: u64 = 0x5EED;

/// Dataset sizes used by the analyzer benchmarks.
pub const DATASET_SIZES: &[usize] = &[5_000, 10_000, 20_000];

/// Key lengths used by the input scaling benchmarks.
pub const KEY_LENGTHS: &[usize] = &[8, 32, 128, 512, 2048];

// DATA GENERATORS

/// Generate `count` alphanumeric strings of length `len`.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED ^ len as u64);
    (0..count)
        .map(|_| (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect())
        .collect()
}

/// Generate `count` strings mixing ASCII with multi-byte code points.
pub fn generate_unicode_strings(count: usize) -> Vec<String> {
    const PIECES: &[&str] = &["π", "héllo", "世界", "🦀", "naïve", "abc"];
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);
    (0..count)
        .map(|_| {
            (0..4)
                .map(|_| PIECES[rng.gen_range(0..PIECES.len())])
                .collect::<String>()
        })
        .collect()
}

/// Sequential keys: "item_00000000", "item_00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{i:08}")).collect()
}

/// Generated dataset of `size` unique 10-character keys.
pub fn dataset(size: usize) -> Dataset {
    match generate(&GeneratorConfig::new(size).with_seed(BENCH_SEED)) {
        Ok(dataset) => dataset,
        Err(e) => panic!("benchmark dataset generation failed: {e}"),
    }
}
