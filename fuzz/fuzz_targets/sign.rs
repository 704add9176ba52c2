#![no_main]
// Every signature produced must verify under the matching public key.
use gost3410::{Curve, Mode, PrivateKey, params};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 97 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());
    let params = &params::ALL[usize::from(data[32]) % params::ALL.len()];
    let mode = if params.p.len() > 32 {
        Mode::Mode2012
    } else {
        Mode::Mode2001
    };
    let curve = Curve::from_params(params).unwrap();

    let Ok(private_key) = PrivateKey::generate(&curve, mode, &mut rng) else {
        return;
    };
    let Ok(public_key) = private_key.public_key() else {
        return;
    };

    let digest = &data[33..];
    let signature = private_key.sign_digest(digest, &mut rng).unwrap();
    assert_eq!(
        public_key.verify_digest(digest, &signature.to_bytes()),
        Ok(true)
    );
});
