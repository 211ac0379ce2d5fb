//! Error taxonomy for traceable ring signatures.
//!
//! One variant per failure class. Messages name the kind of failure but
//! never echo the raw bytes of a scalar, point, or key — logging or
//! displaying this type must not leak secret material.

use thiserror::Error;

/// Failures that can occur while constructing, encoding, or verifying a
/// ring signature.
///
/// [`Error::InvalidSignature`] is reserved for verification outcomes and is
/// the only variant a verifier surfaces for a syntactically well-formed
/// signature that simply fails the closing equation; everything else is a
/// precondition failure on the caller's input.
#[derive(Debug, Error)]
pub enum Error {
    /// A scalar or point byte string failed canonical decoding.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(&'static str),

    /// The vectors within a signature disagree in length.
    #[error("ring shape mismatch: {0}")]
    RingShapeMismatch(&'static str),

    /// The ring has zero members.
    #[error("ring size invalid: ring must contain at least one member")]
    RingSizeInvalid,

    /// The operating system's random source failed.
    #[error("randomness source failed")]
    RandomnessFailure,

    /// The caller's key was not found among the ring's public keys.
    #[error("caller's public key is not a member of this ring")]
    MembershipError,

    /// The signature's closing equation did not hold.
    #[error("signature is invalid")]
    InvalidSignature,
}
