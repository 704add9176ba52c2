//! Support for GOST R 34.10 signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1. e = H mod q, e = 1 if e = 0
//! 2. pick a random k, k = k mod q, repeat while k = 0
//! 3. C = k·G, r = x_C mod q, return to step 2 if r = 0
//! 4. s = (r·d + k·e) mod q, return to step 2 if s = 0
//! 5. the signature is s ∥ r
//! ```

use super::{Signature, digest_to_scalar};
use crate::{
    Error, PrivateKey, Result,
    arithmetic::{from_be_bytes, reduce},
};
use alloc::vec;
use num_traits::Zero;
use signature::{hazmat::RandomizedPrehashSigner, rand_core::CryptoRngCore};
use zeroize::Zeroizing;

impl PrivateKey<'_> {
    /// Sign a message digest.
    ///
    /// The digest is any byte string, normally the output of a GOST hash of
    /// the message. The nonce is drawn from `rng`; degenerate nonces are
    /// redrawn until a valid signature comes out.
    pub fn sign_digest(&self, digest: &[u8], rng: &mut impl CryptoRngCore) -> Result<Signature> {
        let curve = self.curve();
        let q = curve.q();

        // 1. e = H mod q, e = 1 if e = 0
        let e = digest_to_scalar(digest, q);

        let mut k_raw = Zeroizing::new(vec![0u8; self.mode().key_size()]);
        loop {
            // 2. pick a random k, k = k mod q, repeat while k = 0
            rng.try_fill_bytes(&mut k_raw)
                .map_err(|_| Error::RandomSourceFailure)?;
            let k = reduce(&from_be_bytes(&k_raw), q);
            if k.is_zero() {
                continue;
            }

            // 3. C = k·G, r = x_C mod q, return to step 2 if r = 0
            let c = curve.exp(&k, curve.base_point())?;
            let r = reduce(c.x(), q);
            if r.is_zero() {
                continue;
            }

            // 4. s = (r·d + k·e) mod q, return to step 2 if s = 0
            let s = reduce(&(self.secret_scalar() * &r + &k * &e), q);
            if s.is_zero() {
                continue;
            }

            // 5. the signature is s ∥ r
            return Ok(Signature::from_scalars(self.mode(), s, r));
        }
    }
}

impl RandomizedPrehashSigner<Signature> for PrivateKey<'_> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_digest(prehash, rng)?)
    }
}
