//! Curve parameters and scalar multiplication.

use crate::{
    AffinePoint, CurveParams, Error, Result,
    arithmetic::{ProjectivePoint, from_be_bytes, reduce},
};
use num_bigint::BigInt;
use num_traits::Signed;

/// Short Weierstrass curve `y² = x³ + a·x + b` over the prime field `GF(p)`
/// together with a base point of prime order `q`.
///
/// A [`Curve`] is immutable once built and is shared by reference with every
/// key created on it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    name: &'static str,
    p: BigInt,
    q: BigInt,
    a: BigInt,
    b: BigInt,
    base: AffinePoint,
}

impl Curve {
    /// Build a curve from big-endian encodings of its parameters.
    ///
    /// Fails with [`Error::InvalidCurveParameters`] if a modulus is not
    /// positive or the base point `(bx, by)` does not satisfy the curve
    /// equation.
    pub fn new(p: &[u8], q: &[u8], a: &[u8], b: &[u8], bx: &[u8], by: &[u8]) -> Result<Self> {
        Self::with_name("custom", p, q, a, b, bx, by)
    }

    /// Build one of the named parameter sets from [`params`](crate::params).
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        Self::with_name(
            params.name,
            params.p,
            params.q,
            params.a,
            params.b,
            params.bx,
            params.by,
        )
    }

    fn with_name(
        name: &'static str,
        p: &[u8],
        q: &[u8],
        a: &[u8],
        b: &[u8],
        bx: &[u8],
        by: &[u8],
    ) -> Result<Self> {
        let p = from_be_bytes(p);
        let q = from_be_bytes(q);

        if !p.is_positive() || !q.is_positive() {
            return Err(Error::InvalidCurveParameters);
        }

        let curve = Self {
            name,
            a: reduce(&from_be_bytes(a), &p),
            b: reduce(&from_be_bytes(b), &p),
            base: AffinePoint::new(from_be_bytes(bx), from_be_bytes(by)),
            p,
            q,
        };

        if curve.contains(&curve.base) {
            Ok(curve)
        } else {
            Err(Error::InvalidCurveParameters)
        }
    }

    /// Name of the parameter set this curve was built from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Order `q` of the base point.
    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Base point.
    pub fn base_point(&self) -> &AffinePoint {
        &self.base
    }

    /// Does `point` satisfy `y² ≡ x³ + a·x + b (mod p)`?
    ///
    /// The point at infinity is always on the curve.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        if point.is_identity() {
            return true;
        }

        let (x, y) = (point.x(), point.y());
        let lhs = reduce(&(y * y), &self.p);
        let rhs = reduce(&(x * x * x + &self.a * x + &self.b), &self.p);
        lhs == rhs
    }

    /// Compute `degree · point` with MSB-first double-and-add.
    ///
    /// Intermediate points are kept in projective coordinates so only one
    /// field inversion happens, at the very end.
    ///
    /// Degrees whose bit length is 0 or 1 (`0` and `1`) and negative degrees
    /// are rejected with [`Error::InvalidScalar`]. The point at infinity is
    /// returned as [`AffinePoint::identity`].
    pub fn exp(&self, degree: &BigInt, point: &AffinePoint) -> Result<AffinePoint> {
        if degree.is_negative() || degree.bits() <= 1 {
            return Err(Error::InvalidScalar);
        }

        if point.is_identity() {
            return Ok(AffinePoint::identity());
        }

        let mut acc = ProjectivePoint::from(point);
        for i in (0..degree.bits() - 1).rev() {
            acc = acc.double(self);
            if degree.bit(i) {
                acc = acc.add_mixed(point, self);
            }
        }

        Ok(acc.to_affine(self))
    }
}
