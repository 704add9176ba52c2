#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod params;

#[cfg(feature = "dsa")]
pub mod dsa;

#[cfg(feature = "vko")]
pub mod vko;

mod arithmetic;
mod curve;
mod error;
mod private_key;
mod public_key;

pub use num_bigint;

pub use crate::{
    arithmetic::AffinePoint,
    curve::Curve,
    error::{Error, Result},
    params::CurveParams,
    private_key::PrivateKey,
    public_key::PublicKey,
};

/// Key-size class of a GOST R 34.10 key pair.
///
/// Determines the byte width of raw private keys, of each public key
/// coordinate, and of each half of a signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// GOST R 34.10-2001 and GOST R 34.10-2012 with 256-bit keys.
    Mode2001,

    /// GOST R 34.10-2012 with 512-bit keys.
    Mode2012,
}

impl Mode {
    /// Byte width of a raw private key in this mode.
    pub const fn key_size(self) -> usize {
        match self {
            Mode::Mode2001 => 32,
            Mode::Mode2012 => 64,
        }
    }

    /// Byte width of a raw public key or signature in this mode.
    pub const fn point_size(self) -> usize {
        2 * self.key_size()
    }

    /// Find the mode whose signature (or public key) encoding is `len` bytes.
    pub fn from_point_size(len: usize) -> Option<Self> {
        [Mode::Mode2001, Mode::Mode2012]
            .into_iter()
            .find(|mode| mode.point_size() == len)
    }
}
