//! Traceable ring signatures (CryptoNote §4.4).
//!
//! A ring signature lets any member of a declared set of public keys
//! ("the ring") sign a message so that a verifier learns only that *some*
//! member signed it, never which one. The construction here is additionally
//! *traceable*: every signature carries a key image `I` deterministic in
//! the signer's private key, so two signatures from the same key — over
//! any rings, any messages — are linkable without identifying the signer.
//!
//! [`WithinRingSignature`] extends this with a per-member encrypted key
//! image, letting a chosen ring member recover `I` (and so confirm or deny
//! having signed) without any other member or outside observer being able
//! to.

mod sign;
mod types;
mod verify;

pub use sign::{sign, within_ring_sign};
pub use types::{RingSignature, WithinRingSignature};
pub use verify::{ring_verify, within_ring_verify};

use crate::group::Point;

/// Appends a message and a sequence of `(encode_a, encode_b)` point pairs
/// into one growable transcript buffer, in ring order.
///
/// Shared by signing and verification so both sides hash an identical
/// byte layout. A streaming hasher was considered, but `HashToScalar` here
/// runs once over a bounded, `O(n)`-sized buffer, so the extra indirection
/// would not pay for itself at this scale.
pub(crate) fn build_transcript(message: &[u8], pairs: &[(Point, Point)]) -> Vec<u8> {
    let mut transcript = Vec::with_capacity(message.len() + pairs.len() * 64);
    transcript.extend_from_slice(message);

    for (a, b) in pairs {
        transcript.extend_from_slice(&a.to_bytes());
        transcript.extend_from_slice(&b.to_bytes());
    }

    transcript
}
