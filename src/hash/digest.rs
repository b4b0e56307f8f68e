//! SHA-256 truncated to 64 bits.
//!
//! Computes the SHA-256 digest of a key's UTF-8 encoding and keeps its last
//! eight bytes, read big-endian. The digest itself comes from the `sha2`
//! crate; this kernel only fixes which bytes are kept and how they are read.

use super::kernel::{HashKernel, HashWidth};
use crate::error::{HashScopeError, Result};
use sha2::{Digest, Sha256};

/// Kernel name.
pub const NAME: &str = "sha256";

/// Last eight bytes of the SHA-256 digest of `bytes`, big-endian.
#[must_use]
pub fn sha256_tail64(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&digest[digest.len() - 8..]);
    u64::from_be_bytes(tail)
}

/// Truncated SHA-256 kernel.
///
/// Keys must be valid UTF-8 text; raw byte strings that are not are rejected
/// rather than digested, so every hashed key has a textual form.
///
/// # Examples
///
/// ```
/// use hashscope::hash::{HashKernel, Sha256Truncated};
///
/// let kernel = Sha256Truncated::new();
/// assert_eq!(kernel.hash_str("abc").unwrap(), 0xB410_FF61_F200_15AD);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Truncated;

impl Sha256Truncated {
    /// Create the kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HashKernel for Sha256Truncated {
    fn hash(&self, key: &[u8]) -> Result<u64> {
        std::str::from_utf8(key).map_err(|e| HashScopeError::encoding(NAME, key, e))?;
        Ok(sha256_tail64(key))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::BITS_64
    }
}
