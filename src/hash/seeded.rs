//! Explicitly seeded general-purpose string hash.
//!
//! Language runtimes usually hash strings with a per-process random key, so
//! their "built-in" hash changes from one run to the next and cannot be
//! compared across runs. This kernel plays that role with the randomization
//! removed: XXH3-64 with a caller-chosen seed (0 unless configured).
//!
//! # Implementation Note
//!
//! This module wraps the `xxhash-rust` crate's XXH3 implementation.
//!
//! # Examples
//!
//! ```
//! use hashscope::hash::{HashKernel, SeededHash};
//!
//! let a = SeededHash::with_seed(0).hash(b"test").unwrap();
//! let b = SeededHash::with_seed(1).hash(b"test").unwrap();
//! assert_ne!(a, b);
//! ```

use super::kernel::{HashKernel, HashWidth};
use crate::error::Result;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Kernel name.
pub const NAME: &str = "seeded";

/// Seeded XXH3-64 kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededHash {
    seed: u64,
}

impl SeededHash {
    /// Create a kernel with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a kernel with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl HashKernel for SeededHash {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        Ok(if self.seed == 0 {
            xxh3_64(key)
        } else {
            xxh3_64_with_seed(key, self.seed)
        })
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::BITS_64
    }
}
