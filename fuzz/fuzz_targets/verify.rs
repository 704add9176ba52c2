#![no_main]
// Decodes attacker-controlled public keys and signatures and runs them
// through verification, which must never panic.
use gost3410::{Curve, Mode, PublicKey, params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let params = &params::ALL[usize::from(selector) % params::ALL.len()];
    let mode = if params.p.len() > 32 {
        Mode::Mode2012
    } else {
        Mode::Mode2001
    };
    let curve = Curve::from_params(params).unwrap();

    if data.len() < 2 * mode.point_size() {
        return;
    }

    let (raw_key, rest) = data.split_at(mode.point_size());
    let (signature, digest) = rest.split_at(mode.point_size());
    let public_key = PublicKey::new(&curve, mode, raw_key).unwrap();
    assert_eq!(public_key.to_bytes(), raw_key);

    let _ = public_key.verify_digest(digest, signature);
});
