//! Known-answer vectors for every kernel, checked through the public API.

use hashscope::hash::{
    city::city64, djb2::djb2_64, murmur3::murmur3_x86_32, rolling::rolling64, HashKernel,
    KernelKind, KernelParams,
};

fn kernel(kind: KernelKind, params: KernelParams) -> Box<dyn HashKernel> {
    kind.build(&params).unwrap()
}

// MurmurHash3 x86_32

#[test]
fn test_murmur3_reference_vectors() {
    let cases: &[(&[u8], u32, u32)] = &[
        (b"", 0, 0),
        (b"", 1, 0x514E_28B7),
        (b"", 0xFFFF_FFFF, 0x81F1_6F39),
        (b"\0\0\0\0", 0, 0x2362_F9DE),
        (b"aaaa", 0x9747_B28C, 0x5A97_808A),
        (b"abc", 0, 0xB3DD_93FA),
        (b"abcd", 0x9747_B28C, 0xF047_8627),
        (b"Hello, world!", 0x9747_B28C, 0x2488_4CBA),
        (b"The quick brown fox jumps over the lazy dog", 0, 0x2E4F_F723),
        ("ππππππππ".as_bytes(), 0x9747_B28C, 0xD580_63C1),
    ];

    for &(key, seed, expected) in cases {
        assert_eq!(
            murmur3_x86_32(key, seed),
            expected,
            "murmur3({:?}, {seed:#x})",
            String::from_utf8_lossy(key)
        );

        let k = kernel(KernelKind::Murmur3, KernelParams::new().with_seed(u64::from(seed)));
        assert_eq!(k.hash(key).unwrap(), u64::from(expected));
    }
}

#[test]
fn test_murmur3_seed_42_scenario() {
    let k = kernel(KernelKind::Murmur3, KernelParams::new().with_seed(42));
    assert_eq!(k.hash_str("a").unwrap(), 0xB2E5_A263);
    assert_eq!(k.hash_str("b").unwrap(), 0x335A_45F5);
}

// Rolling64

#[test]
fn test_rolling64_vectors() {
    assert_eq!(rolling64(b""), 0x1234_5678_9ABC_DEF0);
    assert_eq!(rolling64(b"a"), 0xABCD_7FEE_EEEE_3063);

    let k = kernel(KernelKind::Rolling64, KernelParams::default());
    assert_eq!(k.hash(b"abc").unwrap(), 0x335B_BBFD_D8B8_C470);
}

// CityHash64

#[test]
fn test_city64_vectors() {
    assert_eq!(city64(b""), 0x9AE1_6A3B_2F90_404F);
    assert_eq!(city64(b"hello"), 13_009_744_463_427_800_296);

    let k = kernel("city64".parse().unwrap(), KernelParams::default());
    assert_eq!(k.name(), "city64");
    assert_eq!(k.hash(b"abc").unwrap(), 0x24A5_B3A0_74E7_F369);
    assert_ne!(k.hash(b"abc").unwrap(), rolling64(b"abc"));
}

// DJB2

#[test]
fn test_djb2_vectors() {
    let k = kernel(KernelKind::Djb2, KernelParams::default());
    assert_eq!(k.hash_str("apple").unwrap(), 40503);
    assert_eq!(k.hash_str("a").unwrap(), 46598);
    assert_eq!(djb2_64("hello world"), 0xC094_3FD4_3551_C8C1);

    let full = kernel(KernelKind::Djb2, KernelParams::new().with_djb2_bits(64));
    assert_eq!(full.hash_str("hello world").unwrap(), 0xC094_3FD4_3551_C8C1);
}

// Sum-modulo

#[test]
fn test_sum_modulo_vectors() {
    let k = kernel(KernelKind::SumModulo, KernelParams::default());
    // 97 + 98 + 99
    assert_eq!(k.hash_str("abc").unwrap(), 294);
    // Anagrams always collide
    assert_eq!(k.hash_str("listen").unwrap(), k.hash_str("silent").unwrap());
    // Code points, not bytes: 'é' is U+00E9 = 233
    assert_eq!(k.hash_str("é").unwrap(), 233);
}

// SHA-256 truncated

#[test]
fn test_sha256_vectors() {
    let k = kernel(KernelKind::Sha256, KernelParams::default());
    assert_eq!(k.hash_str("").unwrap(), 0xA495_991B_7852_B855);
    assert_eq!(k.hash_str("abc").unwrap(), 0xB410_FF61_F200_15AD);
}

// Width invariant

#[test]
fn test_outputs_fit_declared_width() {
    let params = KernelParams::new().with_modulus(97).with_djb2_bits(12).with_seed(7);
    let keys = ["", "a", "héllo wörld", "🦀🦀🦀", "The quick brown fox"];

    for k in KernelKind::build_all(&params).unwrap() {
        for key in keys {
            let h = k.hash_str(key).unwrap();
            assert!(k.width().contains(h), "{} produced {h:#x} beyond {}", k.name(), k.width());
        }
    }
}
