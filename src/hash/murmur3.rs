//! MurmurHash3, x86 32-bit variant.
//!
//! Austin Appleby's MurmurHash3_x86_32: a 4-byte block mix, a partial-block
//! tail, and the `fmix32` avalanche finalizer. Output matches the reference
//! implementation bit for bit.
//!
//! # Algorithm
//!
//! ```text
//! for each 4-byte little-endian block k:
//!     k  = rotl(k * c1, 15) * c2
//!     h ^= k
//!     h  = rotl(h, 13) * 5 + 0xe6546b64
//!
//! tail (1-3 bytes, little-endian, zero-padded):
//!     k  = rotl(k * c1, 15) * c2
//!     h ^= k                      (no rotate / multiply-add)
//!
//! h ^= len
//! h  = fmix32(h)
//! ```
//!
//! The tail skips the rotate/multiply-add step that full blocks receive.
//! Keys whose length is not a multiple of four depend on that asymmetry.
//!
//! Every intermediate value is a `u32` and every multiply is a
//! `wrapping_mul`, so each step truncates at exactly 32 bits.
//!
//! # Examples
//!
//! ```
//! use hashscope::hash::murmur3::murmur3_x86_32;
//!
//! assert_eq!(murmur3_x86_32(b"", 0), 0);
//! assert_eq!(murmur3_x86_32(b"abc", 0), 0xB3DD_93FA);
//! ```
//!
//! # References
//!
//! - Austin Appleby: SMHasher, `MurmurHash3.cpp`

use super::kernel::{HashKernel, HashWidth};
use crate::error::{HashScopeError, Result};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const R1: u32 = 15;
const R2: u32 = 13;
const M: u32 = 5;
const N: u32 = 0xe654_6b64;

/// Kernel name.
pub const NAME: &str = "murmur3";

#[inline(always)]
const fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(R1).wrapping_mul(C2)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Compute MurmurHash3_x86_32 of `data` with `seed`.
#[must_use]
pub fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= mix_k(k);
        h = h.rotate_left(R2).wrapping_mul(M).wrapping_add(N);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .enumerate()
            .fold(0u32, |k, (i, &byte)| k | (u32::from(byte) << (8 * i)));
        h ^= mix_k(k);
    }

    // The reference mixes in the length as a 32-bit value.
    h ^= data.len() as u32;
    fmix32(h)
}

/// MurmurHash3 x86_32 kernel.
///
/// The seed is a 32-bit value. Seeds supplied through [`KernelParams`]
/// (a `u64`) are validated by [`Murmur3::from_seed`].
///
/// [`KernelParams`]: super::KernelParams
///
/// # Examples
///
/// ```
/// use hashscope::hash::{HashKernel, Murmur3};
///
/// let kernel = Murmur3::with_seed(0x9747_b28c);
/// assert_eq!(kernel.hash(b"Hello, world!").unwrap(), 0x2488_4CBA);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3 {
    seed: u32,
}

impl Murmur3 {
    /// Create a kernel with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a kernel with an explicit 32-bit seed.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Create a kernel from a wide seed parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::InvalidParameter`] if `seed` does not fit in
    /// 32 bits.
    pub fn from_seed(seed: u64) -> Result<Self> {
        u32::try_from(seed).map(Self::with_seed).map_err(|_| {
            HashScopeError::invalid_parameter(
                NAME,
                format!("seed {seed} exceeds the 32-bit seed space"),
            )
        })
    }

    /// Configured seed.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl HashKernel for Murmur3 {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        Ok(u64::from(murmur3_x86_32(key, self.seed)))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::BITS_32
    }
}
