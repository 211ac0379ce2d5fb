//! Edwards25519 curve constants.
//!
//! `D`/`D2` are the curve equation's `d` parameter (and `2d`); `SQRTM1` is a
//! fixed square root of `-1` in 𝔽ₚ, used to pick the alternate root during
//! point decompression. These are the standard ref10 constants, given here
//! in the crate's 10-limb radix-(2²⁵·⁵) representation.

use crate::field::FieldElement;

/// The Edwards25519 curve constant `d = -121665/121666 mod p`.
pub(crate) const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// `2 * d mod p`.
pub(crate) const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13897642, 229458, 15447542, 6791789, -6540453, -12760182,
    -24072010,
]);

/// A square root of `-1` modulo `p = 2²⁵⁵ − 19`.
pub(crate) const SQRTM1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);
