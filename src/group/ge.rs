//! Edwards25519 point coordinate forms.
//!
//! The curve is defined over the prime field 𝔽ₚ, p = 2²⁵⁵ − 19, in twisted
//! Edwards form:
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! ## Coordinate systems
//!
//! - **GeP3** — extended coordinates `(X : Y : Z : T)`, the primary working
//!   representation; supports complete addition formulas without inversions.
//! - **GeP1** — extended intermediate coordinates, a transient result during
//!   additions and doublings, never stored long-term.
//! - **GeP2** — projective coordinates `(X : Y : Z)`, used mainly for point
//!   doubling.
//! - **GeCached** — precomputed `(Y+X, Y-X, Z, 2·d·T)`, optimized for
//!   repeated addition/subtraction against a fixed second operand.
//!
//! All formulas follow the Ed25519 reference implementations (ref10 / orlp)
//! and are constant-time with respect to secret data; point decompression
//! operates on public data only and may branch freely.

use super::consts::D2;
use crate::field::FieldElement;

/// Group element in extended projective coordinates (P1 representation).
///
/// `(X : Y : Z : T)` with `X = x/z`, `Y = y/z`, `T = xy/z`. Used only as an
/// intermediate form during addition and doubling.
pub(crate) struct GeP1 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP1 {
    /// `a + b`, both in extended form (`a` as `GeP3`, `b` cached).
    pub(crate) fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.t2d * a.t;

        y = y * b.yminusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx + t;
        t = sumx - t;

        Self { x, y, z, t }
    }

    /// `a - b`, both in extended form (`a` as `GeP3`, `b` cached).
    pub(crate) fn from_difference(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yminusx;
        let mut t = b.t2d * a.t;

        y = y * b.yplusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx - t;
        t = sumx + t;

        Self { x, y, z, t }
    }
}

/// A point in projective coordinates `(X : Y : Z)`, `(x, y) = (X/Z, Y/Z)`.
///
/// Used as an intermediate form during point doubling.
pub(crate) struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl GeP2 {
    /// The neutral element, affine `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    /// `GeP1 -> GeP2`, recombining `(X, Y, Z, T)` into `(XT, YZ, ZT)`.
    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;

        GeP2 { x, y, z }
    }

    /// `GeP3 -> GeP2`, dropping the extended `T` coordinate.
    pub(crate) fn from_gep3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    /// `2 * self`, returned in `GeP1` form.
    pub(crate) fn double(self) -> GeP1 {
        let mut x = self.x.square();
        let mut z = self.y.square();
        let mut t = self.z.double_square();
        let mut y = self.x + self.y;
        let ysquare = y.square();

        y = z + x;
        z = z - x;
        x = ysquare - y;
        t = t - z;

        GeP1 { x, y, z, t }
    }

    /// Encodes this point into its 32-byte compressed Edwards form.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();

        let sign_bit = x.is_negative() as u8;
        output[31] ^= sign_bit << 7;

        output
    }
}

/// A point in extended coordinates `(X : Y : Z : T)`, the primary working
/// representation for group operations.
pub(crate) struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP3 {
    /// The identity element, affine `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Doubles this point.
    #[inline(always)]
    pub(crate) fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    /// `GeP1 -> GeP3`.
    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;
        let t = g.x * g.y;

        Self { x, y, z, t }
    }

    /// Encodes this point into its compressed 32-byte representation.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= (x.is_negative() as u8) << 7;

        output
    }

    /// Decompresses a point from its 32-byte encoding.
    ///
    /// `s` is the canonical encoding of the y-coordinate with the sign of x
    /// in the top bit. Reconstructs x by solving
    /// `x² ≡ (y² − 1) · (d·y² + 1)⁻¹ (mod p)` via exponentiation by
    /// `(p − 5) / 8`, trying the `SQRTM1`-scaled alternative root if the
    /// first candidate fails, and enforcing the encoded sign.
    ///
    /// Returns `(point, 0)` on success, `(_, -1)` if `s` does not encode a
    /// point on the curve — the returned point must not be used in that
    /// case. Operates on public input only; branching here is safe.
    pub(crate) fn decompress(s: &[u8; 32]) -> (Self, i32) {
        use super::consts::{D, SQRTM1};

        let mut h = Self {
            x: FieldElement::ZERO,
            y: FieldElement::from_bytes(s),
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        };

        let mut u = h.y.square();
        let mut v = u * D;
        u = u - h.z;
        v = v + h.z;

        let v3 = v.square() * v;

        h.x = v3.square();
        h.x = h.x * v;
        h.x = h.x * u;
        h.x = h.x.pow22523();
        h.x = h.x * v3;
        h.x = h.x * u;

        let vxx = h.x.square() * v;
        let mut check = vxx - u;

        if check.is_non_zero() == 1 {
            check = vxx + u;

            if check.is_non_zero() == 1 {
                return (h, -1);
            }

            h.x = h.x * SQRTM1;
        }

        let sign = (s[31] >> 7) as i32;
        if h.x.is_negative() == sign {
            h.x = -h.x;
        }

        h.t = h.x * h.y;

        (h, 0)
    }

    /// Constant-time conditional select: returns `a` if `condition == 0`,
    /// `b` if `condition == 1`.
    ///
    /// Modeled on the reference implementation's table-selection idiom
    /// (conditional-move over raw limbs, no secret-dependent branch); used
    /// by variable-base scalar multiplication to fold the "add" branch of
    /// double-and-add into a single, always-executed step.
    pub(crate) fn conditional_select(a: &Self, b: &Self, condition: u32) -> Self {
        let mut x = a.x;
        let mut y = a.y;
        let mut z = a.z;
        let mut t = a.t;

        x.conditional_move(&b.x, condition);
        y.conditional_move(&b.y, condition);
        z.conditional_move(&b.z, condition);
        t.conditional_move(&b.t, condition);

        Self { x, y, z, t }
    }
}

/// Cached representation of a point in extended coordinates, optimized for
/// repeated addition/subtraction against a second, varying operand.
///
/// Precomputes `y+x`, `y-x`, `z`, and `2·d·t` so that addition avoids
/// recomputing these expressions on every call.
pub(crate) struct GeCached {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl GeCached {
    /// `GeP3 -> GeCached`.
    pub(crate) fn from_p3(g: &GeP3) -> GeCached {
        let yplusx = g.y + g.x;
        let yminusx = g.y - g.x;
        let z = g.z;
        let t2d = g.t * D2;

        GeCached {
            yplusx,
            yminusx,
            z,
            t2d,
        }
    }
}
