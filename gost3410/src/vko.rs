//! VKO key agreement as defined in [RFC 4357 § 5.2] and [RFC 7836 § 4.3].
//!
//! Both parties multiply the peer's public key by their own private key and
//! by the shared user keying material (UKM). The resulting point, in the raw
//! public-key encoding, is hashed into the key encryption key (KEK).
//!
//! ## Usage
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom` feature
//! use gost3410::{Curve, Mode, PrivateKey, params, vko::ukm_from_bytes};
//!
//! let curve = Curve::from_params(&params::GOST_R_34_10_2001_CRYPTO_PRO_XCH_A)?;
//! let alice = PrivateKey::generate(&curve, Mode::Mode2001, &mut OsRng)?;
//! let bob = PrivateKey::generate(&curve, Mode::Mode2001, &mut OsRng)?;
//! let ukm = ukm_from_bytes(&[0x51, 0x72, 0xbe, 0x25, 0xf8, 0x52, 0xa2, 0x33]);
//!
//! let alice_kek = alice.kek_2001(&bob.public_key()?, &ukm)?;
//! let bob_kek = bob.kek_2001(&alice.public_key()?, &ukm)?;
//! assert_eq!(alice_kek, bob_kek);
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 4357 § 5.2]: https://www.rfc-editor.org/rfc/rfc4357#section-5.2
//! [RFC 7836 § 4.3]: https://www.rfc-editor.org/rfc/rfc7836#section-4.3

use crate::{
    Error, Mode, PrivateKey, PublicKey, Result,
    arithmetic::from_le_bytes,
};
use alloc::vec::Vec;
use digest::{Digest, generic_array::GenericArray};
use gost94::Gost94CryptoPro;
use num_bigint::BigInt;
use streebog::{Streebog256, Streebog512};
use zeroize::Zeroizing;

/// Decode user keying material as a little-endian unsigned integer.
pub fn ukm_from_bytes(raw: &[u8]) -> BigInt {
    from_le_bytes(raw)
}

impl PrivateKey<'_> {
    /// Compute the raw shared point `ukm·d·Q` in the public-key encoding.
    ///
    /// A UKM of 0 or 1 cannot be used and fails with
    /// [`Error::InvalidScalar`].
    pub fn kek(&self, public: &PublicKey<'_>, ukm: &BigInt) -> Result<Zeroizing<Vec<u8>>> {
        let curve = self.curve();
        let shared = curve.exp(self.secret_scalar(), public.as_affine())?;
        let shared = curve.exp(ukm, &shared)?;
        Ok(Zeroizing::new(
            PublicKey::from_affine(curve, self.mode(), shared).to_bytes(),
        ))
    }

    /// VKO GOST R 34.10-2001: hash the shared point with GOST R 34.11-94
    /// (CryptoPro parameters) into a 32-byte KEK.
    pub fn kek_2001(&self, public: &PublicKey<'_>, ukm: &BigInt) -> Result<Zeroizing<Vec<u8>>> {
        self.kek_with::<Gost94CryptoPro>(Mode::Mode2001, public, ukm)
    }

    /// VKO GOST R 34.10-2012: hash the shared point with Streebog-256 into a
    /// 32-byte KEK.
    pub fn kek_2012_256(&self, public: &PublicKey<'_>, ukm: &BigInt) -> Result<Zeroizing<Vec<u8>>> {
        self.kek_with::<Streebog256>(Mode::Mode2012, public, ukm)
    }

    /// VKO GOST R 34.10-2012: hash the shared point with Streebog-512 into a
    /// 64-byte KEK.
    pub fn kek_2012_512(&self, public: &PublicKey<'_>, ukm: &BigInt) -> Result<Zeroizing<Vec<u8>>> {
        self.kek_with::<Streebog512>(Mode::Mode2012, public, ukm)
    }

    fn kek_with<D: Digest>(
        &self,
        mode: Mode,
        public: &PublicKey<'_>,
        ukm: &BigInt,
    ) -> Result<Zeroizing<Vec<u8>>> {
        if self.mode() != mode {
            return Err(Error::WrongMode);
        }

        let mut key = self.kek(public, ukm)?;
        hash_in_place::<D>(&mut key);
        Ok(key)
    }
}

/// Replace the contents of `buf` with its hash.
///
/// `buf` must be at least as long as the hash output.
fn hash_in_place<D: Digest>(buf: &mut Vec<u8>) {
    let size = <D as Digest>::output_size();
    let hasher = D::new_with_prefix(buf.as_slice());
    hasher.finalize_into(GenericArray::from_mut_slice(&mut buf[..size]));
    buf.truncate(size);
}
