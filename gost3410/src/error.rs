//! Error types.

use core::fmt;

/// Error type.
///
/// Signature verification never produces an error for a merely invalid
/// signature: it yields `Ok(false)` instead. An [`Error`] means the
/// operation itself could not be carried out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Base point does not satisfy the curve equation.
    InvalidCurveParameters,

    /// Scalar multiplication was asked to multiply by a degree whose bit
    /// length is 0 or 1.
    InvalidScalar,

    /// Private key decodes to zero.
    ZeroPrivateKey,

    /// Raw private key length does not match the key-size class.
    InvalidPrivateKeyLength,

    /// Raw public key length is not twice the key-size class.
    InvalidPublicKeyLength,

    /// Raw signature length does not correspond to any key-size class.
    InvalidSignatureLength,

    /// Key-size class of the key does not match the requested operation.
    WrongMode,

    /// Random number generator failed to produce bytes.
    RandomSourceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidCurveParameters => "invalid curve parameters",
            Error::InvalidScalar => "bad degree value",
            Error::ZeroPrivateKey => "zero private key",
            Error::InvalidPrivateKeyLength => "invalid private key length",
            Error::InvalidPublicKeyLength => "invalid public key length",
            Error::InvalidSignatureLength => "invalid signature length",
            Error::WrongMode => "key mode does not match the requested algorithm",
            Error::RandomSourceFailure => "random source failure",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "dsa")]
impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
