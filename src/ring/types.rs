//! Signature types.

use crate::group::Point;
use crate::keys::{KeyImage, PublicKey};
use crate::scalar::Scalar;

/// A CryptoNote-style traceable ring signature.
///
/// `public_keys`, `c`, and `r` share one length, the ring size `n`. A valid
/// signature's closing equation is checked by [`crate::ring_verify`]; this
/// type carries no invariant of its own beyond the three vectors agreeing
/// in length, which [`RingSignature::shape_check`] enforces on decode.
pub struct RingSignature {
    pub public_keys: Vec<PublicKey>,
    pub key_image: KeyImage,
    pub c: Vec<Scalar>,
    pub r: Vec<Scalar>,
}

impl RingSignature {
    /// The ring size `n`.
    pub fn len(&self) -> usize {
        self.public_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.public_keys.is_empty()
    }

    pub(crate) fn shape_check(&self) -> Result<(), crate::error::Error> {
        let n = self.public_keys.len();
        if n == 0 {
            return Err(crate::error::Error::RingSizeInvalid);
        }
        if self.c.len() != n || self.r.len() != n {
            return Err(crate::error::Error::RingShapeMismatch(
                "c and r must have the same length as public_keys",
            ));
        }
        Ok(())
    }
}

/// A ring signature extended with a per-member encrypted key image.
///
/// `public_points[i]` and `enc_points[i]` let the holder of the private key
/// behind `public_keys[i]` recover the signer's key image without anyone
/// else learning it — see [`crate::within_ring_verify`].
pub struct WithinRingSignature {
    pub public_keys: Vec<PublicKey>,
    pub public_points: Vec<Point>,
    pub enc_points: Vec<Point>,
    pub c: Vec<Scalar>,
    pub r: Vec<Scalar>,
}

impl WithinRingSignature {
    /// The ring size `n`.
    pub fn len(&self) -> usize {
        self.public_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.public_keys.is_empty()
    }

    pub(crate) fn shape_check(&self) -> Result<(), crate::error::Error> {
        let n = self.public_keys.len();
        if n == 0 {
            return Err(crate::error::Error::RingSizeInvalid);
        }
        if self.public_points.len() != n || self.enc_points.len() != n {
            return Err(crate::error::Error::RingShapeMismatch(
                "public_points and enc_points must have the same length as public_keys",
            ));
        }
        if self.c.len() != n || self.r.len() != n {
            return Err(crate::error::Error::RingShapeMismatch(
                "c and r must have the same length as public_keys",
            ));
        }
        Ok(())
    }

    /// Recovers the ring's key image as seen by member `j`.
    ///
    /// `I_candidate = enc_points[j] − x_j · public_points[j]`. Equal to the
    /// true signing key image iff `j` was the signer; otherwise a
    /// pseudorandom point.
    pub(crate) fn decrypt_key_image(&self, j: usize, x: &Scalar) -> Point {
        let blinded = Point::mul(x, &self.public_points[j]);
        self.enc_points[j].sub(&blinded)
    }
}
