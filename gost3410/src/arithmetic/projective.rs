//! Projective curve points.
//!
//! Homogeneous coordinates `(X : Y : Z)` with affine `x = X/Z`, `y = Y/Z`.
//! `Z = 0` marks the point at infinity. Every coordinate is kept reduced
//! into `[0, p)` after each formula step.

use super::{AffinePoint, invert, reduce};
use crate::Curve;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Point on a short Weierstrass curve in projective coordinates.
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
    pub(crate) z: BigInt,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity() -> Self {
        Self {
            x: BigInt::one(),
            y: BigInt::one(),
            z: BigInt::zero(),
        }
    }

    /// Is this point the point at infinity?
    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns `self + self`.
    ///
    /// ```text
    /// w  = a·Z² + 3·X²
    /// s  = Y·Z
    /// B  = X·Y·s
    /// h  = w² − 8·B
    /// X' = 2·h·s
    /// Y' = w·(4·B − h) − 8·Y²·s²
    /// Z' = 8·s³
    /// ```
    pub(crate) fn double(&self, curve: &Curve) -> Self {
        if self.is_identity() {
            return self.clone();
        }

        let p = curve.p();
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let w = reduce(&(curve.a() * z * z + x * x * 3u32), p);
        let s = reduce(&(y * z), p);
        let b = reduce(&(x * y * &s), p);
        let h = reduce(&(&w * &w - &b * 8u32), p);
        let s2 = reduce(&(&s * &s), p);

        let x3 = reduce(&(&h * &s * 2u32), p);
        let y3 = reduce(&((&b * 4u32 - &h) * &w - y * y * &s2 * 8u32), p);
        let z3 = reduce(&(&s2 * &s * 8u32), p);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + rhs` for an affine `rhs`.
    ///
    /// ```text
    /// u  = y·Z − Y
    /// v  = x·Z − X
    /// A  = u²·Z − v³ − 2·v²·X
    /// X' = v·A
    /// Y' = u·(v²·X − A) − v³·Y
    /// Z' = v³·Z
    /// ```
    ///
    /// When `self == rhs` both `u` and `v` vanish and the sum is computed
    /// by [`ProjectivePoint::double`] instead.
    pub(crate) fn add_mixed(&self, rhs: &AffinePoint, curve: &Curve) -> Self {
        if rhs.is_identity() {
            return self.clone();
        }

        if self.is_identity() {
            return Self::from(rhs);
        }

        let p = curve.p();
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let u = reduce(&(rhs.y() * z - y), p);
        let v = reduce(&(rhs.x() * z - x), p);
        if u.is_zero() && v.is_zero() {
            return self.double(curve);
        }

        let v2 = reduce(&(&v * &v), p);
        let v3 = reduce(&(&v2 * &v), p);
        let a = reduce(&(&u * &u * z - &v3 - &v2 * x * 2u32), p);

        let x3 = reduce(&(&v * &a), p);
        let y3 = reduce(&((&v2 * x - &a) * &u - &v3 * y), p);
        let z3 = reduce(&(&v3 * z), p);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns the affine representation of this point, performing the only
    /// field inversion of a scalar multiplication.
    pub(crate) fn to_affine(&self, curve: &Curve) -> AffinePoint {
        if self.is_identity() {
            return AffinePoint::identity();
        }

        let p = curve.p();
        match invert(&self.z, p) {
            Some(z_inv) => AffinePoint::new(
                reduce(&(&self.x * &z_inv), p),
                reduce(&(&self.y * &z_inv), p),
            ),
            None => AffinePoint::identity(),
        }
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        if p.is_identity() {
            Self::identity()
        } else {
            Self {
                x: p.x.clone(),
                y: p.y.clone(),
                z: BigInt::one(),
            }
        }
    }
}
