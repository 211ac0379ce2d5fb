//! Hash-to-point and hash-to-scalar.
//!
//! Both functions are built on the same 256-bit hash, selected at compile
//! time by Cargo feature: the `keccak256` feature (default) uses the
//! legacy, pre-NIST-padding Keccak-256 permutation for CryptoNote/Monero
//! interop; the `sha3-256` feature swaps in the NIST-padded permutation.
//! The two are not interoperable — a signature produced under one feature
//! does not verify under the other — which is why this is a build-time
//! choice rather than a runtime option.

use crate::group::Point;
use crate::scalar::Scalar;

#[cfg(feature = "sha3-256")]
static SHA3_WARNING: std::sync::Once = std::sync::Once::new();

fn digest(input: &[u8]) -> [u8; 32] {
    #[cfg(not(feature = "sha3-256"))]
    {
        use tiny_keccak::{Hasher, Keccak};
        let mut hasher = Keccak::v256();
        hasher.update(input);
        let mut out = [0u8; 32];
        hasher.finalize(&mut out);
        out
    }

    #[cfg(feature = "sha3-256")]
    {
        SHA3_WARNING.call_once(|| {
            log::warn!(
                "traceable-ring built with the `sha3-256` feature: signatures are not \
                 interoperable with the default keccak256 configuration"
            );
        });

        use tiny_keccak::{Hasher, Sha3};
        let mut hasher = Sha3::v256();
        hasher.update(input);
        let mut out = [0u8; 32];
        hasher.finalize(&mut out);
        out
    }
}

/// Maps an arbitrary byte string to a scalar mod ℓ.
///
/// Hashes the input with the crate's configured 256-bit hash, then reduces
/// the digest modulo ℓ via the same wide-reduction primitive used for
/// uniform scalar sampling (the digest is zero-padded to 64 bytes).
pub fn hash_to_scalar(input: &[u8]) -> Scalar {
    let digest = digest(input);
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&digest);
    Scalar::reduce_wide(wide)
}

/// Maps a point to another point on the curve, with no known efficient
/// inverse.
///
/// Try-and-increment: the point's encoding is hashed with a trailing
/// attempt counter appended (`H(P || i)` for `i` in `0u8..`); the first
/// digest that decodes as a valid compressed point is cofactor-cleared
/// (multiplied by 8) and returned. Matches the CryptoNote construction
/// bit-for-bit under the default `keccak256` feature.
pub fn hash_to_point(point: &Point) -> Point {
    let encoded = point.to_bytes();
    let mut buffer = [0u8; 33];
    buffer[..32].copy_from_slice(&encoded);

    for attempt in 0u8..=255 {
        buffer[32] = attempt;
        let candidate = digest(&buffer);

        if let Ok(candidate_point) = Point::from_bytes(&candidate) {
            return candidate_point.mul_by_cofactor();
        }
    }

    unreachable!("a valid curve point is found within 256 attempts with overwhelming probability")
}
