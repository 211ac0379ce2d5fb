use traceable_ring::rng::Csprng;
use traceable_ring::{Error, Scalar};

/// ℓ itself, the one little-endian encoding that must be rejected as
/// non-canonical (scenario 5 of the testable-properties list).
const ORDER_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

#[test]
fn test_scalar_byte_round_trip() {
    let mut rng = Csprng::new();

    for _ in 0..16 {
        let s = Scalar::random(&mut rng).unwrap();
        let back = Scalar::from_bytes(&s.to_bytes()).unwrap();
        assert!(s.eq(&back));
    }
}

#[test]
fn test_scalar_rejects_non_canonical_encoding() {
    let result = Scalar::from_bytes(&ORDER_BYTES);
    assert!(matches!(result, Err(Error::MalformedEncoding(_))));
}

#[test]
fn test_scalar_accepts_order_minus_one() {
    let mut bytes = ORDER_BYTES;
    bytes[0] -= 1;
    assert!(Scalar::from_bytes(&bytes).is_ok());
}

#[test]
fn test_scalar_addition_inverse_is_zero() {
    let mut rng = Csprng::new();
    let s = Scalar::random(&mut rng).unwrap();

    let sum = s + (-s);
    assert!(sum.eq(&Scalar::ZERO));
}

#[test]
fn test_scalar_multiplication_identity() {
    let mut rng = Csprng::new();
    let s = Scalar::random(&mut rng).unwrap();

    let one = Scalar::from_bytes(&{
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        bytes
    })
    .unwrap();

    assert!((s * one).eq(&s));
}

#[test]
fn test_scalar_random_is_not_degenerate() {
    let mut rng = Csprng::new();
    let a = Scalar::random(&mut rng).unwrap();
    let b = Scalar::random(&mut rng).unwrap();

    assert!(!a.eq(&b));
    assert!(!a.eq(&Scalar::ZERO));
}
