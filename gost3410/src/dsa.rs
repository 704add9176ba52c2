//! GOST R 34.10-2001 / GOST R 34.10-2012 digital signature algorithm as
//! defined in [RFC 5832 § 6] and [RFC 7091 § 6].
//!
//! Signing and verification work on a message digest computed by the
//! caller, usually with GOST R 34.11-94 or Streebog.
//!
//! ## Usage
//!
//! NOTE: requires the `dsa` crate feature enabled, and `rand_core` dependency
//! with `getrandom` feature enabled.
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom` feature
//! use gost3410::{Curve, Mode, PrivateKey, PublicKey, params};
//!
//! let curve = Curve::from_params(&params::GOST_R_34_10_2001_CRYPTO_PRO_A)?;
//!
//! // Signing
//! let private_key = PrivateKey::generate(&curve, Mode::Mode2001, &mut OsRng)?;
//! let public_key_bytes = private_key.public_key()?.to_bytes();
//! let digest = [0x42u8; 32]; // output of the message hash
//! let signature = private_key.sign_digest(&digest, &mut OsRng)?;
//!
//! // Verifying
//! let public_key = PublicKey::new(&curve, Mode::Mode2001, &public_key_bytes)?;
//! assert!(public_key.verify_digest(&digest, &signature.to_bytes())?);
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 5832 § 6]: https://www.rfc-editor.org/rfc/rfc5832#section-6
//! [RFC 7091 § 6]: https://www.rfc-editor.org/rfc/rfc7091#section-6

mod signing;
mod verifying;

pub use signature;

use crate::{
    Error, Mode, Result,
    arithmetic::{from_be_bytes, reduce, to_be_bytes_padded},
};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use signature::SignatureEncoding;

/// GOST R 34.10 signature: the pair `(s, r)` together with the key-size
/// class that fixes its encoded width.
///
/// The encoding is `s ∥ r`, each a big-endian integer padded to
/// `mode.key_size()` bytes. Unlike key encodings it is not byte-reversed.
///
/// Parsing checks the length only. Range checks on `r` and `s` happen during
/// verification.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    mode: Mode,
    s: BigInt,
    r: BigInt,
}

impl Signature {
    pub(crate) fn from_scalars(mode: Mode, s: BigInt, r: BigInt) -> Self {
        Self { mode, s, r }
    }

    /// Parse a signature, inferring the key-size class from its length
    /// (64 bytes for [`Mode::Mode2001`], 128 for [`Mode::Mode2012`]).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mode = Mode::from_point_size(bytes.len()).ok_or(Error::InvalidSignatureLength)?;
        let (s_bytes, r_bytes) = bytes.split_at(mode.key_size());

        Ok(Self {
            mode,
            s: from_be_bytes(s_bytes),
            r: from_be_bytes(r_bytes),
        })
    }

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.mode.key_size();
        let mut ret = to_be_bytes_padded(&self.s, size);
        ret.extend_from_slice(&to_be_bytes_padded(&self.r, size));
        ret
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Key-size class of this signature.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost3410::dsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for Vec<u8> {
    fn from(signature: Signature) -> Vec<u8> {
        signature.to_bytes()
    }
}

impl From<&Signature> for Vec<u8> {
    fn from(signature: &Signature) -> Vec<u8> {
        signature.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Vec<u8>;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        self.mode.point_size()
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Signature> {
        Signature::from_slice(&bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

/// Interpret a digest as a big-endian integer reduced modulo `q`, mapping
/// zero to one.
pub(crate) fn digest_to_scalar(digest: &[u8], q: &BigInt) -> BigInt {
    let e = reduce(&from_be_bytes(digest), q);
    if e.is_zero() { BigInt::one() } else { e }
}

#[cfg(test)]
mod tests {
    use super::{Signature, digest_to_scalar};
    use crate::{Error, Mode};
    use num_bigint::BigInt;

    #[test]
    fn parse_infers_mode() {
        assert_eq!(
            Signature::from_slice(&[1u8; 64]).unwrap().mode(),
            Mode::Mode2001
        );
        assert_eq!(
            Signature::from_slice(&[1u8; 128]).unwrap().mode(),
            Mode::Mode2012
        );
        assert_eq!(
            Signature::from_slice(&[1u8; 96]),
            Err(Error::InvalidSignatureLength)
        );
    }

    #[test]
    fn s_comes_first() {
        let mut bytes = [0u8; 64];
        bytes[31] = 7;
        bytes[63] = 9;
        let sig = Signature::from_slice(&bytes).unwrap();
        assert_eq!(sig.s(), &BigInt::from(7));
        assert_eq!(sig.r(), &BigInt::from(9));
        assert_eq!(sig.to_bytes(), bytes);
    }

    #[test]
    fn zero_digest_maps_to_one() {
        let q = BigInt::from(11);
        assert_eq!(digest_to_scalar(&[0, 0], &q), BigInt::from(1));
        assert_eq!(digest_to_scalar(&[11], &q), BigInt::from(1));
        assert_eq!(digest_to_scalar(&[0x01, 0x00], &q), BigInt::from(256 % 11));
    }

    #[test]
    fn debug_is_hex() {
        let sig = Signature::from_slice(&[0xAB; 64]).unwrap();
        let debug = alloc::format!("{sig:?}");
        assert!(debug.starts_with("gost3410::dsa::Signature(ABAB"));
    }
}
