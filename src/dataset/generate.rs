//! Deterministic random datasets.
//!
//! Keys and values are alphanumeric strings (`[A-Za-z0-9]`) drawn from a
//! [`ChaCha8Rng`] seeded with [`GeneratorConfig::seed`], so the same
//! configuration always produces the same dataset on every platform.
//!
//! # Examples
//!
//! ```
//! use hashscope::dataset::{generate, GeneratorConfig};
//!
//! let dataset = generate(&GeneratorConfig::new(100).with_seed(7))?;
//! assert_eq!(dataset.len(), 100);
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```

use super::{Dataset, Entry};
use crate::error::{HashScopeError, Result};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name used in generator parameter errors.
const GENERATOR: &str = "generator";

/// Size of the alphanumeric alphabet.
const ALPHABET: u64 = 62;

/// Default dataset sizes, matching the standard `dataset_5k.json`,
/// `dataset_10k.json` and `dataset_20k.json` files.
pub const DEFAULT_SIZES: [usize; 3] = [5_000, 10_000, 20_000];

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of unique keys.
    pub size: usize,
    /// Characters per key.
    pub key_len: usize,
    /// Characters per value.
    pub value_len: usize,
    /// RNG seed.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Config for `size` keys with 10-character keys and values and seed 0.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            key_len: 10,
            value_len: 10,
            seed: 0,
        }
    }

    /// Set the key length.
    #[must_use]
    pub const fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    /// Set the value length.
    #[must_use]
    pub const fn with_value_len(mut self, value_len: usize) -> Self {
        self.value_len = value_len;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Conventional file name for this size: `dataset_5k.json` for 5000,
    /// `dataset_1234.json` for sizes that are not whole thousands.
    #[must_use]
    pub fn file_name(&self) -> String {
        if self.size >= 1_000 && self.size % 1_000 == 0 {
            format!("dataset_{}k.json", self.size / 1_000)
        } else {
            format!("dataset_{}.json", self.size)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.size > 0 && self.key_len == 0 {
            return Err(HashScopeError::invalid_parameter(
                GENERATOR,
                "key length must be at least 1",
            ));
        }
        let key_space = u32::try_from(self.key_len)
            .ok()
            .and_then(|len| ALPHABET.checked_pow(len))
            .unwrap_or(u64::MAX);
        if (self.size as u64) > key_space {
            return Err(HashScopeError::invalid_parameter(
                GENERATOR,
                format!(
                    "cannot draw {} unique keys of length {} ({key_space} possible)",
                    self.size, self.key_len
                ),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZES[0])
    }
}

fn random_string(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Generate a dataset of exactly `config.size` unique keys.
///
/// Keys that repeat an earlier draw are discarded and redrawn; each kept key
/// is paired with a fresh random value.
///
/// # Errors
///
/// Returns [`HashScopeError::InvalidParameter`] if the key length leaves
/// fewer than `size` distinct keys.
pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut seen: HashSet<String> = HashSet::with_capacity(config.size);
    let mut entries = Vec::with_capacity(config.size);
    let mut redraws = 0usize;

    while entries.len() < config.size {
        let key = random_string(&mut rng, config.key_len);
        if !seen.insert(key.clone()) {
            redraws += 1;
            continue;
        }
        let value = random_string(&mut rng, config.value_len);
        entries.push(Entry::new(key, value));
    }

    tracing::debug!(
        size = config.size,
        seed = config.seed,
        redraws,
        "generated dataset"
    );
    Ok(Dataset::from(entries))
}
