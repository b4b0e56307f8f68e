//! DJB2 with end-of-run truncation.
//!
//! Bernstein's `h = h * 33 + c` over Unicode code points, starting from
//! 5381, then masked to a fixed hash-space width (16 bits by default, i.e.
//! 65 536 buckets).
//!
//! The accumulator runs in wrapping 64-bit arithmetic and is masked only once
//! at the end. The low `w` bits of a wrapping product/sum equal the low `w`
//! bits of the exact integer result, so for any width up to 64 this is
//! exactly the unbounded-precision DJB2 value truncated to `w` bits.

use super::kernel::{HashKernel, HashWidth};
use crate::error::{HashScopeError, Result};

/// Kernel name.
pub const NAME: &str = "djb2";

/// Initial accumulator value.
pub const DJB2_INIT: u64 = 5381;

/// Truncation width used when none is configured.
pub const DEFAULT_BITS: u32 = HashWidth::BITS_16.bits();

/// Full 64-bit DJB2 over the code points of `text`.
#[inline]
#[must_use]
pub fn djb2_64(text: &str) -> u64 {
    text.chars().fold(DJB2_INIT, |h, c| {
        h.wrapping_mul(33).wrapping_add(u64::from(u32::from(c)))
    })
}

/// DJB2 kernel truncated to a configurable width.
///
/// # Examples
///
/// ```
/// use hashscope::hash::{Djb2, HashKernel};
///
/// let kernel = Djb2::default();
/// assert_eq!(kernel.hash_str("apple").unwrap(), 40503);
/// assert_eq!(kernel.width().bits(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Djb2 {
    width: HashWidth,
}

impl Djb2 {
    /// Create a kernel truncating to `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::InvalidParameter`] unless `1 <= bits <= 64`.
    pub fn new(bits: u32) -> Result<Self> {
        match HashWidth::from_bits(bits) {
            Some(width) if bits > 0 => Ok(Self { width }),
            _ => Err(HashScopeError::invalid_parameter(
                NAME,
                format!("truncation width must be in 1..=64 bits, got {bits}"),
            )),
        }
    }

    /// Mask applied to the 64-bit accumulator.
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.width.max_value()
    }
}

impl Default for Djb2 {
    fn default() -> Self {
        Self {
            width: HashWidth::BITS_16,
        }
    }
}

impl HashKernel for Djb2 {
    fn hash(&self, key: &[u8]) -> Result<u64> {
        let text = std::str::from_utf8(key).map_err(|e| HashScopeError::encoding(NAME, key, e))?;
        Ok(djb2_64(text) & self.mask())
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        self.width
    }
}
