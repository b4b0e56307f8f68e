//! Multiplicative rolling 64-bit hash.
//!
//! An FNV-1a style byte loop with a non-standard offset basis: XOR each byte
//! into the accumulator, then multiply by the 64-bit FNV prime. This is the
//! runner's custom 64-bit routine, not CityHash64 (see [`super::city`]).

use super::kernel::{HashKernel, HashWidth};
use crate::error::Result;

/// Kernel name.
pub const NAME: &str = "rolling64";

/// Initial accumulator value.
pub const OFFSET_BASIS: u64 = 0x1234_5678_9abc_def0;

/// Odd multiplier applied after every byte (the 64-bit FNV prime).
pub const PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash `bytes` with the rolling multiplicative scheme.
#[inline]
#[must_use]
pub fn rolling64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(OFFSET_BASIS, |h, &byte| {
        (h ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

/// Rolling 64-bit kernel. Accepts any byte string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rolling64;

impl Rolling64 {
    /// Create the kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HashKernel for Rolling64 {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        Ok(rolling64(key))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::BITS_64
    }
}
