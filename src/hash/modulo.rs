//! Sum-modulo baseline hash.
//!
//! Sums the Unicode code points of a key and reduces the sum modulo `M`.
//! Anagrams always collide and the output space is only `M` values wide, so
//! this kernel is a deliberate worst case against which real hash functions
//! are compared.

use super::kernel::{HashKernel, HashWidth};
use crate::error::{HashScopeError, Result};
use std::num::NonZeroU64;

/// Kernel name.
pub const NAME: &str = "sum-modulo";

/// Modulus used when none is configured.
pub const DEFAULT_MODULUS: u64 = 1000;

/// Sum the code points of `text` and reduce modulo `modulus`.
///
/// The sum is accumulated in `u128`, so the result equals the exact
/// (unbounded) sum reduced modulo `modulus`.
#[inline]
#[must_use]
pub fn sum_modulo(text: &str, modulus: NonZeroU64) -> u64 {
    let sum: u128 = text.chars().map(|c| u128::from(u32::from(c))).sum();
    // Result is below `modulus`, so it fits in u64.
    (sum % u128::from(modulus.get())) as u64
}

const DEFAULT: NonZeroU64 = match NonZeroU64::new(DEFAULT_MODULUS) {
    Some(m) => m,
    None => panic!("default modulus is zero"),
};

/// Sum-modulo kernel.
///
/// # Examples
///
/// ```
/// use hashscope::hash::{HashKernel, SumModulo};
///
/// let kernel = SumModulo::new(1000).unwrap();
/// // 'a' + 'p' + 'p' + 'l' + 'e' = 530
/// assert_eq!(kernel.hash_str("apple").unwrap(), 530);
/// // Anagrams collide
/// assert_eq!(kernel.hash_str("listen").unwrap(), kernel.hash_str("silent").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumModulo {
    modulus: NonZeroU64,
}

impl SumModulo {
    /// Create a kernel reducing modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::InvalidParameter`] if `modulus` is zero.
    pub fn new(modulus: u64) -> Result<Self> {
        NonZeroU64::new(modulus)
            .map(|modulus| Self { modulus })
            .ok_or_else(|| {
                HashScopeError::invalid_parameter(NAME, "modulus must be a positive integer, got 0")
            })
    }

    /// Create a kernel from a signed modulus parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::InvalidParameter`] if `modulus <= 0`.
    pub fn from_param(modulus: i64) -> Result<Self> {
        let modulus = u64::try_from(modulus).map_err(|_| {
            HashScopeError::invalid_parameter(
                NAME,
                format!("modulus must be a positive integer, got {modulus}"),
            )
        })?;
        Self::new(modulus)
    }

    /// Configured modulus.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus.get()
    }
}

impl Default for SumModulo {
    fn default() -> Self {
        Self { modulus: DEFAULT }
    }
}

impl HashKernel for SumModulo {
    fn hash(&self, key: &[u8]) -> Result<u64> {
        let text = std::str::from_utf8(key).map_err(|e| HashScopeError::encoding(NAME, key, e))?;
        Ok(sum_modulo(text, self.modulus))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::for_modulus(self.modulus.get())
    }
}
