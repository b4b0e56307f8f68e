//! Hash kernels and kernel selection.
//!
//! This module provides the hash functions under study and a uniform way to
//! pick one by name and configure it.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── kernel.rs   - HashKernel trait and HashWidth
//! ├── rolling.rs  - Multiplicative rolling 64-bit hash
//! ├── city.rs     - CityHash64
//! ├── modulo.rs   - Sum-of-code-points modulo M (worst-case baseline)
//! ├── djb2.rs     - DJB2 truncated to a fixed width
//! ├── murmur3.rs  - MurmurHash3 x86_32
//! ├── digest.rs   - SHA-256 truncated to 64 bits
//! ├── seeded.rs   - Explicitly seeded XXH3-64
//! └── mod.rs      - This file (KernelKind, KernelParams)
//! ```
//!
//! # Choosing a Kernel
//!
//! | Kernel          | Width   | Quality   | Notes                                  |
//! |-----------------|---------|-----------|----------------------------------------|
//! | `rolling64`     | 64-bit  | Fair      | FNV-style byte loop                    |
//! | `city64`        | 64-bit  | Good      | Google CityHash64 v1.1                 |
//! | `sum-modulo`    | log2 M  | Poor      | Anagrams collide; baseline only        |
//! | `djb2`          | 16-bit* | Fair      | *configurable truncation width         |
//! | `murmur3`       | 32-bit  | Good      | Reference-exact x86_32 variant         |
//! | `sha256`        | 64-bit  | Excellent | Slow; cryptographic digest, truncated  |
//! | `seeded`        | 64-bit  | Excellent | Seeded XXH3, stands in for `hash()`    |
//!
//! # Examples
//!
//! ```
//! use hashscope::hash::{KernelKind, KernelParams};
//!
//! let params = KernelParams::new().with_seed(42);
//! let kernel = KernelKind::Murmur3.build(&params).unwrap();
//! assert_eq!(kernel.hash_str("a").unwrap(), 0xB2E5_A263);
//!
//! // Selection by name, including the runner's short aliases
//! let kind: KernelKind = "murmur".parse().unwrap();
//! assert_eq!(kind, KernelKind::Murmur3);
//! ```

pub mod city;
pub mod digest;
pub mod djb2;
pub mod kernel;
pub mod modulo;
pub mod murmur3;
pub mod rolling;
pub mod seeded;

pub use city::CityHash64;
pub use digest::Sha256Truncated;
pub use djb2::Djb2;
pub use kernel::{HashKernel, HashWidth};
pub use modulo::SumModulo;
pub use murmur3::Murmur3;
pub use rolling::Rolling64;
pub use seeded::SeededHash;

use crate::error::{HashScopeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameters shared by all kernels.
///
/// Each kernel reads only the fields it needs; validation happens in
/// [`KernelKind::build`], before any key is hashed.
///
/// # Examples
///
/// ```
/// use hashscope::hash::KernelParams;
///
/// let params = KernelParams::new().with_modulus(97).with_seed(7);
/// assert_eq!(params.modulus, 97);
/// assert_eq!(params.djb2_bits, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Seed for `murmur3` (must fit in 32 bits) and `seeded`.
    pub seed: u64,
    /// Modulus for `sum-modulo`; must be positive.
    pub modulus: i64,
    /// Truncation width for `djb2`; must be in `1..=64`.
    pub djb2_bits: u32,
}

impl KernelParams {
    /// Default parameters: seed 0, modulus 1000, 16-bit DJB2.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: 0,
            modulus: modulo::DEFAULT_MODULUS as i64,
            djb2_bits: djb2::DEFAULT_BITS,
        }
    }

    /// Set the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the sum-modulo modulus.
    #[must_use]
    pub const fn with_modulus(mut self, modulus: i64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Set the DJB2 truncation width.
    #[must_use]
    pub const fn with_djb2_bits(mut self, bits: u32) -> Self {
        self.djb2_bits = bits;
        self
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Kernel selector.
///
/// Picks an algorithm by tag so that callers, not the analyzer, decide which
/// kernel runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KernelKind {
    /// Multiplicative rolling 64-bit hash.
    Rolling64,
    /// CityHash64.
    City64,
    /// Sum of code points modulo M.
    SumModulo,
    /// DJB2 truncated to `djb2_bits`.
    Djb2,
    /// MurmurHash3 x86_32.
    Murmur3,
    /// SHA-256, last 8 bytes.
    Sha256,
    /// Seeded XXH3-64.
    Seeded,
}

impl KernelKind {
    /// Every kernel, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Rolling64,
        Self::City64,
        Self::SumModulo,
        Self::Djb2,
        Self::Murmur3,
        Self::Sha256,
        Self::Seeded,
    ];

    /// Canonical name; equal to the built kernel's [`HashKernel::name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rolling64 => rolling::NAME,
            Self::City64 => city::NAME,
            Self::SumModulo => modulo::NAME,
            Self::Djb2 => djb2::NAME,
            Self::Murmur3 => murmur3::NAME,
            Self::Sha256 => digest::NAME,
            Self::Seeded => seeded::NAME,
        }
    }

    /// Alternative names accepted by [`FromStr`].
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Rolling64 => &["custom64"],
            Self::City64 => &["cityhash", "cityhash64"],
            Self::SumModulo => &["modulo"],
            Self::Djb2 => &[],
            Self::Murmur3 => &["murmur"],
            Self::Sha256 => &["sha256-64"],
            Self::Seeded => &["builtin"],
        }
    }

    /// Build a configured kernel.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::InvalidParameter`] when `params` violates the
    /// selected kernel's constraints (non-positive modulus, Murmur seed wider
    /// than 32 bits, DJB2 width outside `1..=64`).
    pub fn build(&self, params: &KernelParams) -> Result<Box<dyn HashKernel>> {
        let kernel: Box<dyn HashKernel> = match self {
            Self::Rolling64 => Box::new(Rolling64::new()),
            Self::City64 => Box::new(CityHash64::new()),
            Self::SumModulo => Box::new(SumModulo::from_param(params.modulus)?),
            Self::Djb2 => Box::new(Djb2::new(params.djb2_bits)?),
            Self::Murmur3 => Box::new(Murmur3::from_seed(params.seed)?),
            Self::Sha256 => Box::new(Sha256Truncated::new()),
            Self::Seeded => Box::new(SeededHash::with_seed(params.seed)),
        };
        Ok(kernel)
    }

    /// Build every kernel with the same parameters.
    ///
    /// # Errors
    ///
    /// Fails on the first kernel whose parameters are invalid.
    pub fn build_all(params: &KernelParams) -> Result<Vec<Box<dyn HashKernel>>> {
        Self::ALL.iter().map(|kind| kind.build(params)).collect()
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = HashScopeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted || kind.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(KernelKind::name).collect();
                HashScopeError::invalid_parameter(
                    s,
                    format!("unknown kernel; expected one of {}", known.join(", ")),
                )
            })
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        CityHash64, Djb2, HashKernel, HashWidth, KernelKind, KernelParams, Murmur3, Rolling64,
        SeededHash, Sha256Truncated, SumModulo,
    };
}
