//! CityHash64 (v1.1).
//!
//! Google's CityHash64 over the raw key bytes, via the pure-Rust
//! `cityhasher` port. Text keys are hashed as their UTF-8 bytes, so the
//! kernel accepts any byte string and never fails.

use super::kernel::{HashKernel, HashWidth};
use crate::error::Result;

/// Kernel name.
pub const NAME: &str = "city64";

/// Hash `bytes` with unseeded CityHash64.
#[inline]
#[must_use]
pub fn city64(bytes: &[u8]) -> u64 {
    cityhasher::hash::<u64>(bytes)
}

/// CityHash64 kernel.
///
/// # Examples
///
/// ```
/// use hashscope::hash::{CityHash64, HashKernel};
///
/// let kernel = CityHash64::new();
/// assert_eq!(kernel.hash_str("hello").unwrap(), 13_009_744_463_427_800_296);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityHash64;

impl CityHash64 {
    /// Create the kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HashKernel for CityHash64 {
    #[inline]
    fn hash(&self, key: &[u8]) -> Result<u64> {
        Ok(city64(key))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn width(&self) -> HashWidth {
        HashWidth::BITS_64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_k2() {
        assert_eq!(city64(b""), 0x9AE1_6A3B_2F90_404F);
    }

    #[test]
    fn test_known_values_short() {
        // One branch per length class: 1..=3, 4..=7, 8..=16
        assert_eq!(city64(b"a"), 0xB345_4265_B6DF_75E3);
        assert_eq!(city64(b"abc"), 0x24A5_B3A0_74E7_F369);
        assert_eq!(city64(b"abcd"), 0x1A55_02DE_4A1F_8101);
        assert_eq!(city64(b"hello"), 0xB48B_E5A9_3138_0CE8);
        assert_eq!(city64(b"hello world"), 0x588F_B747_8BD6_B01B);
    }

    #[test]
    fn test_known_values_long() {
        // 17..=32, 33..=64 and the 64-byte block loop
        assert_eq!(city64(b"abcdefghijklmnopqrstuvwxyz"), 0x5EAD_741C_E7AC_31BD);
        assert_eq!(
            city64(b"The quick brown fox jumps over the lazy dog"),
            0xC268_7249_28FE_CA7D
        );
        let counting: Vec<u8> = (0..100).collect();
        assert_eq!(city64(&counting), 0xA47F_E83E_60B3_4CC6);
        assert_eq!(city64(&[b'x'; 200]), 0x9668_9325_E6B2_D000);
    }

    #[test]
    fn test_hashes_utf8_bytes() {
        assert_eq!(
            CityHash64::new().hash_str("héllo").unwrap(),
            0xED45_DBD0_2997_54F7
        );
    }

    #[test]
    fn test_accepts_non_utf8() {
        assert!(CityHash64::new().hash(&[0xFF, 0xFE, 0x80]).is_ok());
    }

    #[test]
    fn test_differs_from_rolling64() {
        let rolling = super::super::rolling::rolling64(b"hello");
        assert_ne!(city64(b"hello"), rolling);
    }
}
