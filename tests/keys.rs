use traceable_ring::rng::Csprng;
use traceable_ring::{Error, PrivateKey, PublicKey};

#[test]
fn test_public_key_byte_round_trip() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::generate(&mut rng).unwrap();
    let pk = sk.public_key();

    let decoded = PublicKey::from_bytes(&pk.to_bytes()).unwrap();
    assert!(pk == decoded);
}

#[test]
fn test_private_key_byte_round_trip() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::generate(&mut rng).unwrap();

    let restored = PrivateKey::from_bytes(&sk.to_bytes()).unwrap();
    assert!(sk.public_key() == restored.public_key());
}

#[test]
fn test_key_image_is_deterministic() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::generate(&mut rng).unwrap();

    let a = sk.key_image();
    let b = sk.key_image();
    assert!(a == b);
}

#[test]
fn test_distinct_keys_have_distinct_key_images() {
    let mut rng = Csprng::new();
    let a = PrivateKey::generate(&mut rng).unwrap();
    let b = PrivateKey::generate(&mut rng).unwrap();

    assert!(!(a.key_image() == b.key_image()));
}

#[test]
fn test_private_key_rejects_non_canonical_encoding() {
    let non_canonical: [u8; 32] = [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ];
    let result = PrivateKey::from_bytes(&non_canonical);
    assert!(matches!(result, Err(Error::MalformedEncoding(_))));
}
