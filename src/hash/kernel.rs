//! Hash kernel trait and output width.
//!
//! A kernel is a pure function from a byte string to an unsigned integer of
//! a fixed significant width. Kernels operate on byte slices rather than on
//! `T: Hash` so that every algorithm sees exactly the bytes the dataset
//! holds, with no serialization layer in between.
//!
//! # Examples
//!
//! ```
//! use hashscope::hash::{HashKernel, Murmur3};
//!
//! let kernel = Murmur3::new();
//! assert_eq!(kernel.hash(b"").unwrap(), 0);
//! assert_eq!(kernel.width().bits(), 32);
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::error::{HashScopeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of significant bits in a kernel's output.
///
/// Hash values are always carried as `u64`; the width states how many of the
/// low bits a kernel can actually set. A value produced by a kernel never
/// exceeds [`HashWidth::max_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HashWidth(u32);

impl HashWidth {
    /// 16-bit output space.
    pub const BITS_16: Self = Self(16);

    /// 32-bit output space.
    pub const BITS_32: Self = Self(32);

    /// 64-bit output space.
    pub const BITS_64: Self = Self(64);

    /// Create a width of `bits` significant bits.
    ///
    /// Returns `None` for widths above 64.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits <= 64 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Smallest width able to represent every residue modulo `modulus`.
    ///
    /// This is `ceil(log2(modulus))`; a modulus of 1 yields a zero-bit width
    /// (every value is 0).
    #[must_use]
    pub const fn for_modulus(modulus: u64) -> Self {
        if modulus <= 1 {
            Self(0)
        } else {
            Self(64 - (modulus - 1).leading_zeros())
        }
    }

    /// Number of significant bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Largest value representable at this width.
    #[must_use]
    pub const fn max_value(self) -> u64 {
        match self.0 {
            0 => 0,
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// Check whether `value` fits in this width.
    #[must_use]
    pub const fn contains(self, value: u64) -> bool {
        value <= self.max_value()
    }
}

impl TryFrom<u32> for HashWidth {
    type Error = HashScopeError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            HashScopeError::invalid_parameter("width", format!("at most 64 bits, got {bits}"))
        })
    }
}

impl From<HashWidth> for u32 {
    fn from(width: HashWidth) -> Self {
        width.0
    }
}

impl fmt::Display for HashWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

/// A deterministic hash function over byte strings.
///
/// # Requirements
///
/// Implementations must be:
/// - **Pure**: the same key always yields the same value, within a process
///   and across process runs. No per-process random state.
/// - **Width-exact**: all arithmetic at width W wraps modulo 2^W and the
///   result never exceeds [`HashWidth::max_value`] of [`width`](Self::width).
/// - **Stateless**: parameters are fixed at construction; `hash` takes `&self`.
///
/// # Thread Safety
///
/// Kernels are `Send + Sync`, so independent analyses can share one kernel
/// across threads without synchronization.
///
/// # Errors
///
/// `hash` fails only with [`HashScopeError::Encoding`](crate::HashScopeError::Encoding),
/// when a kernel that interprets characters receives bytes that are not
/// valid UTF-8.
pub trait HashKernel: Send + Sync {
    /// Hash a key.
    fn hash(&self, key: &[u8]) -> Result<u64>;

    /// Hash a string key through its UTF-8 encoding.
    fn hash_str(&self, key: &str) -> Result<u64> {
        self.hash(key.as_bytes())
    }

    /// Short stable identifier (e.g. `"murmur3"`).
    fn name(&self) -> &'static str;

    /// Significant width of the values this kernel produces.
    fn width(&self) -> HashWidth;
}

impl<K: HashKernel + ?Sized> HashKernel for Box<K> {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        (**self).hash(key)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn width(&self) -> HashWidth {
        (**self).width()
    }
}

impl<K: HashKernel + ?Sized> HashKernel for &K {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        (**self).hash(key)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn width(&self) -> HashWidth {
        (**self).width()
    }
}
