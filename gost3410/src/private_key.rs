//! Private keys.

use crate::{
    Curve, Error, Mode, PublicKey, Result,
    arithmetic::{from_le_bytes, to_be_bytes_padded},
};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug};
use num_bigint::BigInt;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// GOST R 34.10 private key: a non-zero scalar `d` bound to a [`Curve`] and a
/// key-size class.
///
/// The raw encoding is `mode.key_size()` bytes holding `d` in little-endian
/// order. The scalar is taken as encoded and is not reduced modulo `q`.
#[derive(Clone)]
pub struct PrivateKey<'c> {
    curve: &'c Curve,
    mode: Mode,
    key: BigInt,
}

impl<'c> PrivateKey<'c> {
    /// Decode a private key from its raw little-endian encoding.
    pub fn new(curve: &'c Curve, mode: Mode, raw: &[u8]) -> Result<Self> {
        if raw.len() != mode.key_size() {
            return Err(Error::InvalidPrivateKeyLength);
        }

        let key = from_le_bytes(raw);
        if key.is_zero() {
            return Err(Error::ZeroPrivateKey);
        }

        Ok(Self { curve, mode, key })
    }

    /// Generate a private key from `mode.key_size()` random bytes.
    ///
    /// An all-zero draw surfaces as [`Error::ZeroPrivateKey`]; there is no
    /// internal retry.
    pub fn generate(curve: &'c Curve, mode: Mode, rng: &mut impl CryptoRngCore) -> Result<Self> {
        let mut raw = Zeroizing::new(vec![0u8; mode.key_size()]);
        rng.try_fill_bytes(&mut raw)
            .map_err(|_| Error::RandomSourceFailure)?;
        Self::new(curve, mode, &raw)
    }

    /// Serialize as the raw little-endian encoding.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut raw = Zeroizing::new(to_be_bytes_padded(&self.key, self.mode.key_size()));
        raw.reverse();
        raw
    }

    /// Compute the public key `d·G`.
    pub fn public_key(&self) -> Result<PublicKey<'c>> {
        let point = self.curve.exp(&self.key, self.curve.base_point())?;
        Ok(PublicKey::from_affine(self.curve, self.mode, point))
    }

    /// Curve this key lives on.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Key-size class of this key.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub(crate) fn secret_scalar(&self) -> &BigInt {
        &self.key
    }
}

impl ConstantTimeEq for PrivateKey<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_domain = Choice::from(u8::from(
            self.mode == other.mode && self.curve == other.curve,
        ));
        same_domain & self.to_bytes().as_slice().ct_eq(other.to_bytes().as_slice())
    }
}

/// Constant-time comparison
impl Eq for PrivateKey<'_> {}
impl PartialEq for PrivateKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for PrivateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::PrivateKey;
    use crate::{Curve, Error, Mode, params};
    use hex_literal::hex;
    use num_bigint::BigInt;

    #[test]
    fn wrong_length() {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_TEST).unwrap();
        assert_eq!(
            PrivateKey::new(&curve, Mode::Mode2001, &[1u8; 31]).unwrap_err(),
            Error::InvalidPrivateKeyLength
        );
        assert_eq!(
            PrivateKey::new(&curve, Mode::Mode2012, &[1u8; 32]).unwrap_err(),
            Error::InvalidPrivateKeyLength
        );
    }

    #[test]
    fn zero_key() {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_TEST).unwrap();
        assert_eq!(
            PrivateKey::new(&curve, Mode::Mode2001, &[0u8; 32]).unwrap_err(),
            Error::ZeroPrivateKey
        );
    }

    #[test]
    fn little_endian_encoding() {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_TEST).unwrap();
        let raw = hex!("0500000000000000000000000000000000000000000000000000000000000000");
        let key = PrivateKey::new(&curve, Mode::Mode2001, &raw).unwrap();
        assert_eq!(key.secret_scalar(), &BigInt::from(5));
        assert_eq!(key.to_bytes().as_slice(), &raw);
    }

    #[test]
    fn debug_is_redacted() {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_TEST).unwrap();
        let key = PrivateKey::new(&curve, Mode::Mode2001, &[0x42; 32]).unwrap();
        let debug = alloc::format!("{key:?}");
        assert!(debug.contains("Mode2001"));
        assert!(!debug.contains("42"));
    }
}
