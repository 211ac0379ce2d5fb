//! Ed25519 scalar field arithmetic.
//!
//! This module implements arithmetic on scalars modulo the Ed25519 group
//! order:
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! ## Representation
//!
//! Scalars are stored as a fixed-size `[u8; 32]` little-endian byte array.
//! Unlike a raw byte buffer, this type enforces canonicity at construction:
//! [`Scalar::from_bytes`] rejects any encoding whose numeric value is not
//! strictly less than `ℓ`. Internal arithmetic (`reduce`, `from_mul_sum`)
//! always normalizes its output, so every live `Scalar` value is canonical.
//!
//! ## No clamping
//!
//! This module deliberately does not implement the RFC 8032 Ed25519 key
//! clamp. The ring construction needs the full linear structure of ℤ/ℓℤ —
//! clamping would break the identity `(x·H(P)) + (w·I) = (x+w)·H(P)` that
//! the signer and verifier both rely on.
//!
//! ## Algorithms
//!
//! Scalars are reduced using a radix-2²¹ representation with signed limbs;
//! reduction coefficients follow the identity
//! `2^252 ≡ 27742317777372353535851937790883648493 (mod ℓ)`. All algorithms
//! closely follow the Ed25519 reference implementations (ref10 / orlp).
//!
//! ## Security properties
//!
//! All scalar operations are constant-time with respect to secret data: no
//! secret-dependent branches, no secret-dependent memory accesses.

use std::ops::{Add, Mul, Neg, Sub};

use zeroize::Zeroize;

use crate::error::Error;
use crate::field::{load_3, load_4};
use crate::rng::Csprng;

/// ℓ, the order of the Ed25519 prime-order subgroup, little-endian.
const ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// An element of ℤ/ℓℤ, the Ed25519 scalar field.
///
/// Every value of this type is guaranteed canonical: its little-endian byte
/// value is strictly less than `ℓ`. Zeroed on drop, since scalars are the
/// carrier for private keys and per-signature nonces.
#[derive(Clone, Copy, Zeroize)]
#[zeroize(drop)]
pub struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Scalar([0u8; 32]);

    /// Constructs a scalar from a 32-byte little-endian encoding.
    ///
    /// Rejects any encoding whose numeric value is not strictly less than
    /// `ℓ` — this is the canonical-decoding check the ring construction
    /// depends on for its closing equation to be unambiguous.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| Error::MalformedEncoding("scalar must be 32 bytes"))?;

        if !is_canonical(&arr) {
            return Err(Error::MalformedEncoding("scalar not reduced modulo ℓ"));
        }

        Ok(Scalar(arr))
    }

    /// Returns the canonical 32-byte little-endian encoding of the scalar.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a scalar uniformly at random from [0, ℓ) via wide reduction.
    ///
    /// 64 bytes are drawn from the crate's CSPRNG and folded modulo ℓ with
    /// the same primitive [`Scalar::reduce_wide`] uses for hash-to-scalar,
    /// so sampling never rejects and never branches on secret bytes.
    pub fn random(rng: &mut Csprng) -> Result<Self, Error> {
        let mut wide = [0u8; 64];
        rng.try_fill_bytes(&mut wide)?;

        let scalar = Self::reduce(wide);
        wide.zeroize();

        Ok(scalar)
    }

    /// Reduces a 512-bit little-endian integer modulo ℓ.
    ///
    /// Used both for sampling (on fresh random bytes) and for hash-to-scalar
    /// (on a hash digest, zero-padded to 64 bytes).
    pub(crate) fn reduce_wide(wide: [u8; 64]) -> Self {
        Self::reduce(wide)
    }

    /// `self + rhs (mod ℓ)`.
    pub fn add(self, rhs: Self) -> Self {
        Self::from_mul_sum(self, Self::one(), rhs)
    }

    /// `self - rhs (mod ℓ)`.
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// `-self (mod ℓ)`.
    pub fn neg(self) -> Self {
        Self::from_mul_sum(self, Self::minus_one(), Self::ZERO)
    }

    /// `self * rhs (mod ℓ)`.
    pub fn mul(self, rhs: Self) -> Self {
        Self::from_mul_sum(self, rhs, Self::ZERO)
    }

    /// Constant-time equality.
    pub fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    fn one() -> Self {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Scalar(bytes)
    }

    fn minus_one() -> Self {
        // ℓ - 1, i.e. -1 mod ℓ.
        let mut bytes = ORDER;
        bytes[0] -= 1;
        Scalar(bytes)
    }

    /// Reduces a 512-bit integer modulo the Ed25519 scalar field order `ℓ`.
    ///
    /// Radix-2²¹ decomposition over 24 signed limbs, high limbs folded back
    /// via the reduction coefficients derived from `2^252 ≡ ℓ_low (mod ℓ)`.
    pub(crate) fn reduce(wide: [u8; 64]) -> Self {
        let mask = 0x1f_ffffi64;

        let mut s = [
            (load_3(&wide[0..]) as i64) & mask,
            ((load_4(&wide[2..]) >> 5) as i64) & mask,
            ((load_3(&wide[5..]) >> 2) as i64) & mask,
            ((load_4(&wide[7..]) >> 7) as i64) & mask,
            ((load_4(&wide[10..]) >> 4) as i64) & mask,
            ((load_3(&wide[13..]) >> 1) as i64) & mask,
            ((load_4(&wide[15..]) >> 6) as i64) & mask,
            ((load_3(&wide[18..]) >> 3) as i64) & mask,
            (load_3(&wide[21..]) as i64) & mask,
            ((load_4(&wide[23..]) >> 5) as i64) & mask,
            ((load_3(&wide[26..]) >> 2) as i64) & mask,
            ((load_4(&wide[28..]) >> 7) as i64) & mask,
            ((load_4(&wide[31..]) >> 4) as i64) & mask,
            ((load_3(&wide[34..]) >> 1) as i64) & mask,
            ((load_4(&wide[36..]) >> 6) as i64) & mask,
            ((load_3(&wide[39..]) >> 3) as i64) & mask,
            (load_3(&wide[42..]) as i64) & mask,
            ((load_4(&wide[44..]) >> 5) as i64) & mask,
            ((load_3(&wide[47..]) >> 2) as i64) & mask,
            ((load_4(&wide[49..]) >> 7) as i64) & mask,
            ((load_4(&wide[52..]) >> 4) as i64) & mask,
            ((load_3(&wide[55..]) >> 1) as i64) & mask,
            ((load_4(&wide[57..]) >> 6) as i64) & mask,
            (load_4(&wide[60..]) >> 3) as i64,
        ];

        let coeffs = [666643, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx = s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx = s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let result = pack(&s);

        Scalar(result)
    }

    /// Computes `a * b + c (mod ℓ)`.
    ///
    /// The core linear-combination primitive every other scalar operation in
    /// this module is built from.
    pub(crate) fn from_mul_sum(a: Scalar, b: Scalar, c: Scalar) -> Self {
        let mask = 0x1f_ffffi64;

        let load_a = |data: &[u8; 32]| -> [i64; 12] {
            [
                (load_3(&data[0..]) as i64) & mask,
                ((load_4(&data[2..]) >> 5) as i64) & mask,
                ((load_3(&data[5..]) >> 2) as i64) & mask,
                ((load_4(&data[7..]) >> 7) as i64) & mask,
                ((load_4(&data[10..]) >> 4) as i64) & mask,
                ((load_3(&data[13..]) >> 1) as i64) & mask,
                ((load_4(&data[15..]) >> 6) as i64) & mask,
                ((load_3(&data[18..]) >> 3) as i64) & mask,
                (load_3(&data[21..]) as i64) & mask,
                ((load_4(&data[23..]) >> 5) as i64) & mask,
                ((load_3(&data[26..]) >> 2) as i64) & mask,
                (load_4(&data[28..]) >> 7) as i64,
            ]
        };

        let a_limbs = load_a(&a.0);
        let b_limbs = load_a(&b.0);
        let c_limbs = load_a(&c.0);

        let mut s = [0i64; 24];

        for index in 0..12 {
            s[index] = c_limbs[index];
            for j in 0..=index.min(11) {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }

        for index in 12..23 {
            for j in (index - 11)..12 {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }

        s[23] = 0;

        for &index in &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let coeffs = [666643i64, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let result = pack(&s);

        Scalar(result)
    }
}

/// Packs 12 reduced 21-bit limbs (indices 0..=11, plus overflow limb 12
/// already folded in) into the canonical 32-byte little-endian encoding.
fn pack(s: &[i64]) -> [u8; 32] {
    [
        s[0] as u8,
        (s[0] >> 8) as u8,
        ((s[0] >> 16) | (s[1] << 5)) as u8,
        (s[1] >> 3) as u8,
        (s[1] >> 11) as u8,
        ((s[1] >> 19) | (s[2] << 2)) as u8,
        (s[2] >> 6) as u8,
        ((s[2] >> 14) | (s[3] << 7)) as u8,
        (s[3] >> 1) as u8,
        (s[3] >> 9) as u8,
        ((s[3] >> 17) | (s[4] << 4)) as u8,
        (s[4] >> 4) as u8,
        (s[4] >> 12) as u8,
        ((s[4] >> 20) | (s[5] << 1)) as u8,
        (s[5] >> 7) as u8,
        ((s[5] >> 15) | (s[6] << 6)) as u8,
        (s[6] >> 2) as u8,
        (s[6] >> 10) as u8,
        ((s[6] >> 18) | (s[7] << 3)) as u8,
        (s[7] >> 5) as u8,
        (s[7] >> 13) as u8,
        s[8] as u8,
        (s[8] >> 8) as u8,
        ((s[8] >> 16) | (s[9] << 5)) as u8,
        (s[9] >> 3) as u8,
        (s[9] >> 11) as u8,
        ((s[9] >> 19) | (s[10] << 2)) as u8,
        (s[10] >> 6) as u8,
        ((s[10] >> 14) | (s[11] << 7)) as u8,
        (s[11] >> 1) as u8,
        (s[11] >> 9) as u8,
        (s[11] >> 17) as u8,
    ]
}

/// Returns true iff `bytes`, read as a little-endian integer, is `< ℓ`.
///
/// Compares most-significant byte first; the first differing byte settles
/// the ordering. Runs over public data (decoded ciphertext), so this need
/// not be constant-time.
fn is_canonical(bytes: &[u8; 32]) -> bool {
    for index in (0..32).rev() {
        if bytes[index] < ORDER[index] {
            return true;
        }
        if bytes[index] > ORDER[index] {
            return false;
        }
    }
    false // bytes == ORDER, not strictly less
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Self) -> Self::Output {
        Scalar::add(self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Self) -> Self::Output {
        Scalar::sub(self, rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Self) -> Self::Output {
        Scalar::mul(self, rhs)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Self::Output {
        Scalar::neg(self)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        Scalar::eq(self, other)
    }
}

impl Eq for Scalar {}
