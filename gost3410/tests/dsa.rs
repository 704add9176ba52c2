//! GOST R 34.10 signature tests.

#![cfg(feature = "dsa")]

use core::num::NonZeroU32;
use gost3410::{
    Curve, Error, Mode, PrivateKey, PublicKey,
    dsa::{
        Signature,
        signature::{
            SignatureEncoding,
            hazmat::{PrehashVerifier, RandomizedPrehashSigner},
        },
    },
    params,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::{CryptoRng, OsRng, RngCore, impls};

// GOST R 34.10-2001 test parameters, RFC 5832 § 7.1
const PRIVATE_KEY: [u8; 32] =
    hex!("283bec9198ce191dee7e39491f96601bc1729ad39d35ed10beb99b78de9a927a");
const PUBLIC_KEY: [u8; 64] = hex!(
    "0bd86fe5d8db89668f789b4e1dba8585c5508b45ec5b59d8906ddb70e2492b7f" // x
    "da77ff871a10fbdf2766d293c5d164afbb3c7b973a41c885d11d70d689b4f126" // y
);
const DIGEST: [u8; 32] = hex!("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5");
const NONCE: [u8; 32] = hex!("77105C9B20BCD3122823C8CF6FCC7B956DE33814E95B7FE64FED924594DCEAB3");
const SIG: [u8; 64] = hex!(
    "01456c64ba4642a1653c235a98a60249bcd6d3f746b631df928014f6c5bf9c40" // s
    "41aa28d2f1ab148280cd9ed56feda41974053554a42767b83ad043fd39dc0493" // r
);

/// Replays a fixed byte string, then fails.
struct FixedRng<'a>(&'a [u8]);

impl RngCore for FixedRng<'_> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("out of bytes")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if self.0.len() < dest.len() {
            return Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into());
        }
        let (head, tail) = self.0.split_at(dest.len());
        dest.copy_from_slice(head);
        self.0 = tail;
        Ok(())
    }
}

impl CryptoRng for FixedRng<'_> {}

fn test_curve() -> Curve {
    Curve::from_params(&params::GOST_R_34_10_2001_TEST).unwrap()
}

#[test]
fn sign_test_vector() {
    let curve = test_curve();
    let sk = PrivateKey::new(&curve, Mode::Mode2001, &PRIVATE_KEY).unwrap();
    let sig = sk.sign_digest(&DIGEST, &mut FixedRng(&NONCE)).unwrap();
    assert_eq!(sig.to_bytes(), SIG);
}

#[test]
fn verify_test_vector() {
    let curve = test_curve();
    let pk = PublicKey::new(&curve, Mode::Mode2001, &PUBLIC_KEY).unwrap();
    assert_eq!(pk.verify_digest(&DIGEST, &SIG), Ok(true));

    let sig = Signature::try_from(&SIG[..]).unwrap();
    assert!(pk.verify_prehash(&DIGEST, &sig).is_ok());
}

#[test]
fn reject_wrong_digest() {
    let curve = test_curve();
    let pk = PublicKey::new(&curve, Mode::Mode2001, &PUBLIC_KEY).unwrap();
    let mut digest = DIGEST;
    digest[0] ^= 1;
    assert_eq!(pk.verify_digest(&digest, &SIG), Ok(false));
}

#[test]
fn reject_wrong_length() {
    let curve = test_curve();
    let pk = PublicKey::new(&curve, Mode::Mode2001, &PUBLIC_KEY).unwrap();
    assert_eq!(pk.verify_digest(&DIGEST, &SIG[..63]), Ok(false));
    assert_eq!(pk.verify_digest(&DIGEST, &[0x01; 128]), Ok(false));
    assert_eq!(pk.verify_digest(&DIGEST, &[]), Ok(false));
}

#[test]
fn reject_out_of_range() {
    let curve = test_curve();
    let pk = PublicKey::new(&curve, Mode::Mode2001, &PUBLIC_KEY).unwrap();

    // r = 0
    let mut sig = SIG;
    sig[32..].fill(0);
    assert_eq!(pk.verify_digest(&DIGEST, &sig), Ok(false));

    // s = 0
    let mut sig = SIG;
    sig[..32].fill(0);
    assert_eq!(pk.verify_digest(&DIGEST, &sig), Ok(false));

    // r = q
    let mut sig = SIG;
    sig[32..].copy_from_slice(params::GOST_R_34_10_2001_TEST.q);
    assert_eq!(pk.verify_digest(&DIGEST, &sig), Ok(false));

    // s > q
    let mut sig = SIG;
    sig[..32].fill(0xff);
    assert_eq!(pk.verify_digest(&DIGEST, &sig), Ok(false));
}

#[test]
fn verify_surfaces_scalar_errors() {
    let curve = test_curve();
    let pk = PublicKey::new(&curve, Mode::Mode2001, &PUBLIC_KEY).unwrap();

    // s = e makes z1 = 1
    let digest = hex!("0000000000000000000000000000000000000000000000000000000000000005");
    let sig = hex!(
        "0000000000000000000000000000000000000000000000000000000000000005"
        "0000000000000000000000000000000000000000000000000000000000000007"
    );
    assert_eq!(pk.verify_digest(&digest, &sig), Err(Error::InvalidScalar));
}

#[test]
fn sign_with_failing_rng() {
    let curve = test_curve();
    let sk = PrivateKey::new(&curve, Mode::Mode2001, &PRIVATE_KEY).unwrap();
    assert_eq!(
        sk.sign_digest(&DIGEST, &mut FixedRng(&[])).unwrap_err(),
        Error::RandomSourceFailure
    );
}

#[test]
fn zero_nonce_is_redrawn() {
    let curve = test_curve();
    let sk = PrivateKey::new(&curve, Mode::Mode2001, &PRIVATE_KEY).unwrap();
    let mut nonces = [0u8; 64];
    nonces[32..].copy_from_slice(&NONCE);
    let sig = sk.sign_digest(&DIGEST, &mut FixedRng(&nonces)).unwrap();
    assert_eq!(sig.to_bytes(), SIG);
}

#[test]
fn signature_trait_round_trip() {
    let curve = Curve::from_params(&params::GOST_R_34_10_2012_TC26_512_A).unwrap();
    let sk = PrivateKey::generate(&curve, Mode::Mode2012, &mut OsRng).unwrap();
    let pk = sk.public_key().unwrap();
    let digest = [0x42; 64];

    let sig = sk.sign_prehash_with_rng(&mut OsRng, &digest).unwrap();
    assert_eq!(sig.mode(), Mode::Mode2012);
    assert_eq!(sig.encoded_len(), 128);

    let sig = Signature::try_from(SignatureEncoding::to_bytes(&sig)).unwrap();
    assert!(pk.verify_prehash(&digest, &sig).is_ok());
    assert!(pk.verify_prehash(&[0x43; 64], &sig).is_err());
}

#[test]
fn identity_public_key_is_rejected() {
    let curve = test_curve();
    let mut raw = curve.q().to_bytes_le().1;
    raw.resize(32, 0);

    let sk = PrivateKey::new(&curve, Mode::Mode2001, &raw).unwrap();
    let pk = sk.public_key().unwrap();
    assert!(pk.as_affine().is_identity());
    assert_eq!(pk.verify_digest(&DIGEST, &SIG), Ok(false));
}

#[test]
fn mode_mismatch_is_rejected() {
    let curve = Curve::from_params(&params::GOST_R_34_10_2012_TC26_512_A).unwrap();
    let sk = PrivateKey::generate(&curve, Mode::Mode2012, &mut OsRng).unwrap();
    let pk = sk.public_key().unwrap();
    let sig = Signature::from_slice(&SIG).unwrap();
    assert_eq!(pk.verify_signature(&DIGEST, &sig), Ok(false));
}

prop_compose! {
    fn private_key_bytes()(bytes in any::<[u8; 32]>()) -> [u8; 32] {
        bytes
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_and_verify(raw in private_key_bytes(), digest in any::<[u8; 32]>()) {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_CRYPTO_PRO_A).unwrap();
        let sk = PrivateKey::new(&curve, Mode::Mode2001, &raw);
        prop_assume!(sk.is_ok());
        let sk = sk.unwrap();
        let pk = sk.public_key().unwrap();

        let signature = sk.sign_digest(&digest, &mut OsRng).unwrap();
        prop_assert_eq!(pk.verify_digest(&digest, &signature.to_bytes()), Ok(true));
    }

    #[test]
    fn reject_invalid_signature(
        raw in private_key_bytes(),
        digest in any::<[u8; 32]>(),
        byte in 0usize..64,
        bit in 0usize..8,
    ) {
        let curve = Curve::from_params(&params::GOST_R_34_10_2001_CRYPTO_PRO_A).unwrap();
        let sk = PrivateKey::new(&curve, Mode::Mode2001, &raw);
        prop_assume!(sk.is_ok());
        let sk = sk.unwrap();
        let pk = sk.public_key().unwrap();
        let mut signature_bytes = sk.sign_digest(&digest, &mut OsRng).unwrap().to_bytes();

        // tweak signature to make it invalid
        signature_bytes[byte] ^= 1 << bit;

        prop_assert_ne!(pk.verify_digest(&digest, &signature_bytes), Ok(true));
    }
}
