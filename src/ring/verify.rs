use crate::error::Error;
use crate::group::Point;
use crate::hash::{hash_to_point, hash_to_scalar};
use crate::keys::{KeyImage, PrivateKey};
use crate::scalar::Scalar;

use super::build_transcript;
use super::types::{RingSignature, WithinRingSignature};

/// Verifies a traceable ring signature.
///
/// Returns `Err` for a structurally malformed signature (vectors of
/// disagreeing length, an empty ring) and `Ok(false)` — never an error —
/// when the signature's closing equation simply does not hold. There are
/// no secrets on this path, so nothing here needs to run in constant time.
pub fn ring_verify(message: &[u8], signature: &RingSignature) -> Result<bool, Error> {
    signature.shape_check()?;

    let n = signature.len();
    let mut pairs = Vec::with_capacity(n);

    for i in 0..n {
        let pi_base = hash_to_point(&signature.public_keys[i].0);

        let a = Point::mul(&signature.r[i], &Point::basepoint())
            .add(&Point::mul(&signature.c[i], &signature.public_keys[i].0));
        let b = Point::mul(&signature.r[i], &pi_base)
            .add(&Point::mul(&signature.c[i], &signature.key_image.0));

        pairs.push((a, b));
    }

    let transcript = build_transcript(message, &pairs);
    let h = hash_to_scalar(&transcript);

    let sum_c = signature
        .c
        .iter()
        .fold(Scalar::ZERO, |acc, &c| acc + c);

    Ok(h == sum_c)
}

/// Verifies a within-ring signature on behalf of one specific ring member.
///
/// Locates `private_key`'s public key within the ring (`Err(MembershipError)`
/// if it is not a member), recovers the candidate key image via
/// [`WithinRingSignature::decrypt_key_image`], and checks the recovered
/// ring signature exactly as [`ring_verify`] would. Non-signer members
/// recover a pseudorandom point in place of the true key image, so their
/// verification legitimately returns `Ok(false)`.
pub fn within_ring_verify(
    message: &[u8],
    signature: &WithinRingSignature,
    private_key: &PrivateKey,
) -> Result<bool, Error> {
    signature.shape_check()?;

    let caller_public = private_key.public_key();
    let member_index = signature
        .public_keys
        .iter()
        .position(|pk| pk.to_bytes() == caller_public.to_bytes())
        .ok_or(Error::MembershipError)?;

    let candidate_key_image = signature.decrypt_key_image(member_index, private_key.scalar());

    let recovered = RingSignature {
        public_keys: signature.public_keys.clone(),
        key_image: KeyImage(candidate_key_image),
        c: signature.c.clone(),
        r: signature.r.clone(),
    };

    ring_verify(message, &recovered)
}
