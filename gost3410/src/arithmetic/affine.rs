//! Affine curve points.

use num_bigint::BigInt;
use num_traits::Zero;

/// Point on a short Weierstrass curve in affine coordinates, or the point at
/// infinity.
///
/// The point at infinity reports zero coordinates, so reducing its
/// x-coordinate modulo the group order yields zero. The signature engine
/// relies on this to retry on degenerate nonces.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigInt,

    /// y-coordinate
    pub(crate) y: BigInt,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl AffinePoint {
    /// Build a point from its coordinates.
    ///
    /// The coordinates are not checked against any curve equation; see
    /// [`Curve::contains`](crate::Curve::contains).
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigInt::zero(),
            y: BigInt::zero(),
            infinity: true,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
