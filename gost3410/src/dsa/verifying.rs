//! Support for verifying GOST R 34.10 signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. If |S| != 2l, return NO.
//! 2. Split S = s ∥ r. If r ∉ (0, q) or s ∉ (0, q), return NO.
//! 3. e = H mod q, e = 1 if e = 0
//! 4. v = e⁻¹ mod q
//! 5. z1 = s·v mod q, z2 = q − (r·v mod q)
//! 6. C = z1·G + z2·Q
//! 7. If x_C mod q != r, return NO.
//! 8. Return YES.
//! ```

use super::{Signature, digest_to_scalar};
use crate::{
    PublicKey, Result,
    arithmetic::{in_open_range, invert, reduce, to_be_bytes_padded},
};
use num_bigint::BigInt;
use signature::{Error, hazmat::PrehashVerifier};
use subtle::ConstantTimeEq;

impl PublicKey<'_> {
    /// Verify a raw signature over a message digest.
    ///
    /// A signature that is well-formed for the operation but does not check
    /// out yields `Ok(false)`, as do wrong-length inputs and out-of-range
    /// `r`/`s`. An error means the check itself could not be carried out.
    pub fn verify_digest(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        // 1. If |S| != 2l, return NO.
        if signature.len() != self.mode().point_size() {
            return Ok(false);
        }

        let signature = Signature::from_slice(signature)?;
        self.verify_signature(digest, &signature)
    }

    /// Verify a parsed [`Signature`] over a message digest.
    pub fn verify_signature(&self, digest: &[u8], signature: &Signature) -> Result<bool> {
        if signature.mode() != self.mode() {
            return Ok(false);
        }

        let curve = self.curve();
        let (p, q) = (curve.p(), curve.q());
        let (s, r) = (signature.s(), signature.r());

        // 2. If r ∉ (0, q) or s ∉ (0, q), return NO.
        if !in_open_range(r, q) || !in_open_range(s, q) {
            return Ok(false);
        }

        // 3. e = H mod q, e = 1 if e = 0
        let e = digest_to_scalar(digest, q);

        // 4. v = e⁻¹ mod q
        let Some(v) = invert(&e, q) else {
            return Ok(false);
        };

        // 5. z1 = s·v mod q, z2 = q − (r·v mod q)
        let z1 = reduce(&(s * &v), q);
        let z2: BigInt = q - reduce(&(r * &v), q);

        // 6. C = z1·G + z2·Q
        let p1 = curve.exp(&z1, curve.base_point())?;
        let q1 = curve.exp(&z2, self.as_affine())?;

        // The identity has no affine coordinates to add with.
        if p1.is_identity() || q1.is_identity() {
            return Ok(false);
        }

        let Some(dx_inv) = invert(&(q1.x() - p1.x()), p) else {
            return Ok(false);
        };
        let lambda = reduce(&((q1.y() - p1.y()) * dx_inv), p);
        let x = reduce(&(&lambda * &lambda - p1.x() - q1.x()), p);

        // 7. If x_C mod q != r, return NO.
        let size = self.mode().key_size();
        let expected = to_be_bytes_padded(r, size);
        let actual = to_be_bytes_padded(&reduce(&x, q), size);
        Ok(actual.ct_eq(&expected).into())
    }
}

impl PrehashVerifier<Signature> for PublicKey<'_> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_signature(prehash, signature)? {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}
