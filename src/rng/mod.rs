//! Randomness.
//!
//! Built around a ChaCha20-based deterministic random bit generator (DRBG),
//! exposing a high-level CSPRNG suitable for security-critical use: private
//! scalar generation, per-signature nonces, and encrypted-key-image
//! blinding factors.
//!
//! Design goals:
//! - cryptographic security
//! - deterministic expansion from a secure seed
//! - forward secrecy through periodic rekeying
//! - no heap allocation

pub(crate) mod block;
mod csprng;

pub use csprng::Csprng;
