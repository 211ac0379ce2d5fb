use traceable_ring::rng::Csprng;
use traceable_ring::{
    Error, PrivateKey, PublicKey, ring_verify, sign, within_ring_sign, within_ring_verify,
};

fn scalar_one() -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[0] = 1;
    bytes
}

/// Scenario 1: `n = 1`, `x = 1`, ring = `[G]`, empty message.
#[test]
fn test_ring_size_one() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::from_bytes(&scalar_one()).unwrap();
    let ring = vec![sk.public_key()];

    let signature = sign(b"", &ring, &sk, 0, &mut rng).unwrap();
    assert!(ring_verify(b"", &signature).unwrap());
    assert!(signature.key_image == sk.key_image());
}

/// Scenario 2: `n = 5`, signer at index 2; tampering `c[0]` invalidates
/// the signature.
#[test]
fn test_ring_of_five_tamper_invalidates() {
    let mut rng = Csprng::new();

    let keys: Vec<PrivateKey> = (0..5)
        .map(|_| PrivateKey::generate(&mut rng).unwrap())
        .collect();
    let ring: Vec<PublicKey> = keys.iter().map(PrivateKey::public_key).collect();

    let message = b"five-member ring";
    let mut signature = sign(message, &ring, &keys[2], 2, &mut rng).unwrap();
    assert!(ring_verify(message, &signature).unwrap());

    let one = traceable_ring::Scalar::from_bytes(&scalar_one()).unwrap();
    signature.c[0] = signature.c[0] + one;
    assert!(!ring_verify(message, &signature).unwrap());
}

/// Scenario 3: the same private key produces byte-equal key images across
/// unrelated messages and rings.
#[test]
fn test_key_image_reuse_is_detectable() {
    let mut rng = Csprng::new();
    let signer = PrivateKey::generate(&mut rng).unwrap();

    let mut ring_a: Vec<PublicKey> = (0..2)
        .map(|_| PrivateKey::generate(&mut rng).unwrap().public_key())
        .collect();
    ring_a.push(signer.public_key());

    let mut ring_b: Vec<PublicKey> = (0..2)
        .map(|_| PrivateKey::generate(&mut rng).unwrap().public_key())
        .collect();
    ring_b.insert(0, signer.public_key());

    let sig_a = sign(b"message one", &ring_a, &signer, 2, &mut rng).unwrap();
    let sig_b = sign(b"an unrelated message", &ring_b, &signer, 0, &mut rng).unwrap();

    assert!(sig_a.key_image == sig_b.key_image);
    assert!(sig_a.key_image == signer.key_image());
}

/// Scenario 4: within-ring signing, `n = 4`, signer at index 1. The signer
/// recovers a valid signature; a non-signing ring member recovers a
/// pseudorandom key image and fails; a key outside the ring is rejected
/// with `MembershipError`.
#[test]
fn test_within_ring_cross_variant() {
    let mut rng = Csprng::new();

    let keys: Vec<PrivateKey> = (0..4)
        .map(|_| PrivateKey::generate(&mut rng).unwrap())
        .collect();
    let ring: Vec<PublicKey> = keys.iter().map(PrivateKey::public_key).collect();

    let message = b"within-ring message";
    let signature = within_ring_sign(message, &ring, &keys[1], 1, &mut rng).unwrap();

    assert!(within_ring_verify(message, &signature, &keys[1]).unwrap());
    assert!(!within_ring_verify(message, &signature, &keys[0]).unwrap());

    let outsider = PrivateKey::generate(&mut rng).unwrap();
    let result = within_ring_verify(message, &signature, &outsider);
    assert!(matches!(result, Err(Error::MembershipError)));
}

/// A bit flip anywhere in the message invalidates the signature.
#[test]
fn test_message_tampering_invalidates() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::generate(&mut rng).unwrap();
    let ring = vec![sk.public_key()];

    let signature = sign(b"original", &ring, &sk, 0, &mut rng).unwrap();
    assert!(ring_verify(b"original", &signature).unwrap());
    assert!(!ring_verify(b"tampered!", &signature).unwrap());
}

/// An empty ring is rejected at the shape level, not treated as an
/// ordinary verification failure.
#[test]
fn test_empty_ring_is_rejected() {
    let mut rng = Csprng::new();
    let sk = PrivateKey::generate(&mut rng).unwrap();

    let result = sign(b"", &[], &sk, 0, &mut rng);
    assert!(matches!(result, Err(Error::RingSizeInvalid)));
}
