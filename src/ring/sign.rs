use crate::error::Error;
use crate::group::Point;
use crate::hash::{hash_to_point, hash_to_scalar};
use crate::keys::{KeyImage, PrivateKey, PublicKey};
use crate::rng::Csprng;
use crate::scalar::Scalar;

use super::types::{RingSignature, WithinRingSignature};
use super::build_transcript;

/// Produces a traceable ring signature.
///
/// `public_keys[signer_index]` MUST equal `private_key.public_key()` —
/// checked with a `debug_assert`, since verifying it costs a scalar
/// multiplication the caller has almost certainly already paid for while
/// assembling the ring.
///
/// The caller is responsible for presenting `public_keys` in an order
/// independent of the signer's identity; this function never reorders the
/// ring, so an order that leaks `signer_index` leaks it straight through.
pub fn sign(
    message: &[u8],
    public_keys: &[PublicKey],
    private_key: &PrivateKey,
    signer_index: usize,
    rng: &mut Csprng,
) -> Result<RingSignature, Error> {
    let n = public_keys.len();
    if n == 0 {
        return Err(Error::RingSizeInvalid);
    }
    if signer_index >= n {
        return Err(Error::RingShapeMismatch("signer index out of range"));
    }

    debug_assert!(
        public_keys[signer_index].to_bytes() == private_key.public_key().to_bytes(),
        "public_keys[signer_index] must equal private_key.public_key()"
    );

    let signer_point = &public_keys[signer_index].0;
    let signer_base = hash_to_point(signer_point);
    let key_image = Point::mul(private_key.scalar(), &signer_base);

    let mut c = vec![Scalar::ZERO; n];
    let mut r = vec![Scalar::ZERO; n];
    let mut pairs = Vec::with_capacity(n);
    let mut signer_nonce = Scalar::ZERO;

    for i in 0..n {
        if i == signer_index {
            let q = Scalar::random(rng)?;
            signer_nonce = q;

            let a = Point::mul(&q, &Point::basepoint());
            let b = Point::mul(&q, &signer_base);
            pairs.push((a, b));
        } else {
            let qi = Scalar::random(rng)?;
            let wi = Scalar::random(rng)?;

            let pi_base = hash_to_point(&public_keys[i].0);
            let a = Point::mul(&qi, &Point::basepoint()).add(&Point::mul(&wi, &public_keys[i].0));
            let b = Point::mul(&qi, &pi_base).add(&Point::mul(&wi, &key_image));

            c[i] = wi;
            r[i] = qi;
            pairs.push((a, b));
        }
    }

    let transcript = build_transcript(message, &pairs);
    let h = hash_to_scalar(&transcript);

    let sum_others = (0..n).filter(|&i| i != signer_index).fold(Scalar::ZERO, |acc, i| acc + c[i]);

    c[signer_index] = h - sum_others;
    r[signer_index] = signer_nonce - c[signer_index] * *private_key.scalar();

    Ok(RingSignature {
        public_keys: public_keys.to_vec(),
        key_image: KeyImage(key_image),
        c,
        r,
    })
}

/// Produces a ring signature whose key image is encrypted toward every
/// ring member individually, so each can later recover it (and so decide
/// whether they signed) without anyone else learning it.
///
/// See [`WithinRingSignature::decrypt_key_image`] (via
/// [`within_ring_verify`](super::within_ring_verify)) for the recovery
/// side.
pub fn within_ring_sign(
    message: &[u8],
    public_keys: &[PublicKey],
    private_key: &PrivateKey,
    signer_index: usize,
    rng: &mut Csprng,
) -> Result<WithinRingSignature, Error> {
    let base = sign(message, public_keys, private_key, signer_index, rng)?;

    let n = public_keys.len();
    let mut public_points = Vec::with_capacity(n);
    let mut enc_points = Vec::with_capacity(n);

    for pk in public_keys {
        let rho = Scalar::random(rng)?;

        public_points.push(Point::mul(&rho, &Point::basepoint()));
        enc_points.push(Point::mul(&rho, &pk.0).add(&base.key_image.0));
    }

    Ok(WithinRingSignature {
        public_keys: base.public_keys,
        public_points,
        enc_points,
        c: base.c,
        r: base.r,
    })
}
