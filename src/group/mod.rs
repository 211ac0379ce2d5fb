//! Edwards25519 group operations.
//!
//! Exposes [`Point`], the public-facing group element type used throughout
//! the ring construction: decoding/encoding, addition, and scalar
//! multiplication. Internal coordinate forms (`GeP1`/`GeP2`/`GeP3`/
//! `GeCached`) live in [`ge`] and closely follow the Ed25519 reference
//! implementations (ref10 / orlp); [`consts`] holds the curve's fixed field
//! constants.
//!
//! ## Scalar multiplication
//!
//! [`Point::mul`] is a single generic variable-base routine: constant-time
//! double-and-always-add over the extended/cached coordinate forms, used
//! uniformly for every scalar multiplication in this crate — including
//! multiplication by the fixed basepoint. The ring construction needs
//! `s·P` for arbitrary `P` at nearly every step, so a separate windowed
//! fixed-base table would only cover a minority of call sites; one code
//! path is simpler to audit for constant-time behavior than two.
//!
//! ## Torsion
//!
//! Points in the 8-torsion subgroup are accepted by [`Point::from_bytes`];
//! no prime-order membership check is performed. The ring equation's
//! soundness here does not require it, so this is a deliberate policy
//! choice and not an oversight.

mod consts;
mod ge;

use ge::{GeCached, GeP1, GeP3};

use crate::error::Error;
use crate::scalar::Scalar;

/// An element of the Ed25519 group.
///
/// Every live `Point` decodes to a valid curve point; operations always
/// return valid points. The canonical wire form is the standard 32-byte
/// compressed Edwards encoding (little-endian y, sign of x in the top bit).
#[derive(Clone)]
pub struct Point(pub(crate) GeP3);

impl Point {
    /// The curve's identity element.
    pub fn identity() -> Self {
        Point(GeP3::ONE)
    }

    /// The standard Ed25519 basepoint `G`.
    ///
    /// Derived from `y = 4/5 mod p` (the RFC 8032 definition of the
    /// basepoint's y-coordinate) via [`GeP3::decompress`], rather than a
    /// hardcoded compressed-byte constant — so the one curve point this
    /// crate can't derive from a signature or a hash is still produced by
    /// the same decompression code path everything else exercises.
    pub fn basepoint() -> Self {
        let four = crate::field::FieldElement([4, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let five = crate::field::FieldElement([5, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let y = four * five.invert();

        let mut encoded = y.to_bytes();
        encoded[31] &= 0x7f; // even x: sign bit 0

        let (point, status) = GeP3::decompress(&encoded);
        debug_assert_eq!(status, 0, "basepoint y=4/5 must decompress");

        Point(point)
    }

    /// Decodes a point from its 32-byte compressed encoding.
    ///
    /// Rejects encodings that are not exactly 32 bytes or that do not
    /// correspond to a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| Error::MalformedEncoding("point must be 32 bytes"))?;

        let (point, status) = GeP3::decompress(&arr);
        if status != 0 {
            return Err(Error::MalformedEncoding("point is not on the curve"));
        }

        Ok(Point(point))
    }

    /// Encodes this point into its canonical 32-byte compressed form.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        let cached = GeCached::from_p3(&other.0);
        Point(GeP3::from_gep1(&GeP1::from_sum(&self.0, &cached)))
    }

    /// `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        let cached = GeCached::from_p3(&other.0);
        Point(GeP3::from_gep1(&GeP1::from_difference(&self.0, &cached)))
    }

    /// `scalar * point`, constant-time with respect to `scalar`.
    pub fn mul(scalar: &Scalar, point: &Self) -> Self {
        let cached = GeCached::from_p3(&point.0);
        let bytes = scalar.to_bytes();

        let mut acc = GeP3::ONE;
        for i in (0..256).rev() {
            acc = GeP3::from_gep1(&acc.double());

            let bit = ((bytes[i / 8] >> (i % 8)) & 1) as u32;
            let added = GeP3::from_gep1(&GeP1::from_sum(&acc, &cached));
            acc = GeP3::conditional_select(&acc, &added, bit);
        }

        Point(acc)
    }

    /// Multiplies this point by the curve's cofactor (8), via three
    /// doublings. Used by hash-to-point to force results into the
    /// prime-order subgroup.
    pub(crate) fn mul_by_cofactor(&self) -> Self {
        let mut p = GeP3::from_gep1(&self.0.double());
        p = GeP3::from_gep1(&p.double());
        p = GeP3::from_gep1(&p.double());
        Point(p)
    }

    /// Constant-time equality (by canonical encoding).
    pub fn eq(&self, other: &Self) -> bool {
        self.to_bytes()
            .iter()
            .zip(other.to_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        Point::eq(self, other)
    }
}

impl Eq for Point {}
