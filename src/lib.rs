//! A traceable ring signature scheme over Ed25519 (CryptoNote §4.4).
//!
//! A ring signature lets any holder of a private key in a declared public
//! set sign a message so that a verifier learns only that *some* member of
//! the ring signed it. This construction is additionally traceable: every
//! signature carries a *key image*, deterministic in the signer's private
//! key, so repeated use of the same key is linkable across signatures and
//! rings without ever identifying the signer — the basis for double-spend
//! detection in CryptoNote-style systems.
//!
//! # Module overview
//!
//! - [`field`] — arithmetic in 𝔽ₚ, p = 2²⁵⁵ − 19, the field Ed25519's
//!   curve is defined over.
//! - [`scalar`] — arithmetic in ℤ/ℓℤ, the curve's prime-order scalar
//!   field. No RFC 8032 clamping: the ring equation needs the full linear
//!   structure of ℤ/ℓℤ.
//! - [`group`] — Edwards25519 group operations: encode/decode, addition,
//!   and a single constant-time variable-base scalar multiplication used
//!   for every `s·P` in this crate, including multiplication by `G`.
//! - [`hash`] — `HashToPoint` (try-and-increment, cofactor-cleared) and
//!   `HashToScalar` (wide-reduction), both built on a compile-time-selected
//!   256-bit hash (`keccak256` default, `sha3-256` feature).
//! - [`keys`] — `PrivateKey`, `PublicKey`, `KeyImage`.
//! - [`ring`] — the signer and verifier: [`sign`], [`within_ring_sign`],
//!   [`ring_verify`], [`within_ring_verify`].
//! - [`rng`] — the crate's CSPRNG, a ChaCha20-based DRBG seeded from OS
//!   entropy.
//! - [`error`] — the crate's single error type.
//!
//! # Non-goals
//!
//! This crate implements only the in-memory signing and verification API.
//! PEM/DER wire encoding, CLI tooling, and key storage/wallet concerns are
//! left to sibling crates built on top of this one. It also does not
//! implement key exchange, arbitrary-payload encryption, or threshold
//! signatures, and it is deliberately not RFC 8032 Ed25519 compatible.

pub mod error;
mod field;
mod group;
pub mod hash;
pub mod keys;
mod os;
mod ring;
pub mod rng;
pub mod scalar;

pub use error::Error;
pub use group::Point;
pub use keys::{KeyImage, PrivateKey, PublicKey};
pub use ring::{RingSignature, WithinRingSignature, ring_verify, sign, within_ring_sign, within_ring_verify};
pub use scalar::Scalar;
