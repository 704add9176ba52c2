//! Public keys.

use crate::{
    AffinePoint, Curve, Error, Mode, Result,
    arithmetic::{from_be_bytes, to_be_bytes_padded},
};
use alloc::vec::Vec;
use num_bigint::BigInt;

/// GOST R 34.10 public key: a curve point bound to a [`Curve`] and a
/// key-size class.
///
/// The raw encoding is `mode.point_size()` bytes: the big-endian
/// coordinates `y ∥ x`, each padded to `mode.key_size()`, with the whole
/// buffer then byte-reversed. In other words little-endian `x` followed by
/// little-endian `y`.
///
/// Decoded points are not checked against the curve equation; use
/// [`Curve::contains`] on [`PublicKey::as_affine`] when that matters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey<'c> {
    curve: &'c Curve,
    mode: Mode,
    point: AffinePoint,
}

impl<'c> PublicKey<'c> {
    /// Decode a public key from its raw encoding.
    pub fn new(curve: &'c Curve, mode: Mode, raw: &[u8]) -> Result<Self> {
        if raw.len() != mode.point_size() {
            return Err(Error::InvalidPublicKeyLength);
        }

        let mut key = raw.to_vec();
        key.reverse();
        let (y, x) = key.split_at(mode.key_size());

        Ok(Self {
            curve,
            mode,
            point: AffinePoint::new(from_be_bytes(x), from_be_bytes(y)),
        })
    }

    pub(crate) fn from_affine(curve: &'c Curve, mode: Mode, point: AffinePoint) -> Self {
        Self { curve, mode, point }
    }

    /// Serialize as the raw encoding.
    ///
    /// The point at infinity encodes as all zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.mode.key_size();
        let mut raw = to_be_bytes_padded(self.point.y(), size);
        raw.extend_from_slice(&to_be_bytes_padded(self.point.x(), size));
        raw.reverse();
        raw
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigInt {
        self.point.x()
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigInt {
        self.point.y()
    }

    /// Borrow the underlying curve point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Curve this key lives on.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Key-size class of this key.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl AsRef<AffinePoint> for PublicKey<'_> {
    fn as_ref(&self) -> &AffinePoint {
        &self.point
    }
}
