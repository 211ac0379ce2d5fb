//! Key types.
//!
//! A key pair here is a scalar `x` and its image `P = x·G` under the
//! standard Ed25519 basepoint — structurally identical to an Ed25519 key
//! pair, but deliberately **not** RFC 8032 compatible: [`PrivateKey`]
//! performs no clamping, because the ring construction needs `x` to range
//! uniformly over all of ℤ/ℓℤ for its closing linear equation to hold.
//!
//! [`KeyImage`] is the CryptoNote-style double-spend tag `I = x·H(P)`: two
//! signatures produced by the same private key, over any two rings, always
//! carry the same key image, which is what makes the scheme traceable.

use zeroize::Zeroize;

use crate::error::Error;
use crate::group::Point;
use crate::hash::hash_to_point;
use crate::rng::Csprng;
use crate::scalar::Scalar;

/// A secret signing scalar.
///
/// No `Debug` or `Display` impl is provided, so a stray `{:?}` cannot leak
/// the secret into logs. Wiped on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey(Scalar);

impl PrivateKey {
    /// Draws a new private key uniformly from ℤ/ℓℤ.
    pub fn generate(rng: &mut Csprng) -> Result<Self, Error> {
        Ok(PrivateKey(Scalar::random(rng)?))
    }

    /// Constructs a private key from a 32-byte little-endian scalar
    /// encoding. Rejects non-canonical encodings (see [`Scalar::from_bytes`]).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(PrivateKey(Scalar::from_bytes(bytes)?))
    }

    /// Returns the canonical 32-byte encoding of the underlying scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Derives the corresponding public key, `P = x·G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(Point::mul(&self.0, &Point::basepoint()))
    }

    /// Computes this key's key image, `I = x·H(P)`, against its own public
    /// key.
    pub fn key_image(&self) -> KeyImage {
        let public = self.public_key();
        KeyImage(Point::mul(&self.0, &hash_to_point(&public.0)))
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.0
    }
}

/// A public key, `P = x·G` for some private scalar `x`.
#[derive(Clone)]
pub struct PublicKey(pub(crate) Point);

impl PublicKey {
    /// Decodes a public key from its 32-byte compressed point encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(PublicKey(Point::from_bytes(bytes)?))
    }

    /// Encodes this public key into its 32-byte compressed point form.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PublicKey {}

/// A key image, the linkability tag `I = x·H(P)` attached to every ring
/// signature produced by the holder of `x`.
///
/// Two signatures — over the same ring or different rings — carrying equal
/// key images were produced by the same private key. Verifiers are
/// expected to track key images they have already seen and reject a second
/// signature carrying one.
#[derive(Clone)]
pub struct KeyImage(pub(crate) Point);

impl KeyImage {
    /// Decodes a key image from its 32-byte compressed point encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(KeyImage(Point::from_bytes(bytes)?))
    }

    /// Encodes this key image into its 32-byte compressed point form.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl PartialEq for KeyImage {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for KeyImage {}
