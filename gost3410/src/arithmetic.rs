//! Arithmetic over the runtime moduli of a [`Curve`](crate::Curve).
//!
//! Field elements and scalars are sign-aware arbitrary-precision integers.
//! Every helper that reduces a value normalizes it into `[0, modulus)`:
//! the remainder operator on [`BigInt`] follows the sign of the dividend,
//! so negative remainders get the modulus added back.

mod affine;
mod projective;

pub use self::affine::AffinePoint;
pub(crate) use self::projective::ProjectivePoint;

use alloc::{vec, vec::Vec};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed};

/// Reduce `value` into `[0, modulus)`.
pub(crate) fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    let rem = value % modulus;
    if rem.is_negative() {
        rem + modulus
    } else {
        rem
    }
}

/// Compute `value⁻¹ mod modulus` with the extended Euclidean algorithm.
///
/// Returns `None` when `value` shares a factor with `modulus` (in particular
/// when `value ≡ 0`).
pub(crate) fn invert(value: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    let value = reduce(value, modulus);
    let egcd = value.extended_gcd(modulus);

    if egcd.gcd.is_one() {
        Some(reduce(&egcd.x, modulus))
    } else {
        None
    }
}

/// Check `0 < value < modulus`.
#[cfg_attr(not(feature = "dsa"), allow(dead_code))]
pub(crate) fn in_open_range(value: &BigInt, modulus: &BigInt) -> bool {
    value.is_positive() && value < modulus
}

/// Parse an unsigned big-endian integer.
pub(crate) fn from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Parse an unsigned little-endian integer (the GOST wire byte order).
pub(crate) fn from_le_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_le(Sign::Plus, bytes)
}

/// Big-endian magnitude of `value`, left-padded with zeros to `size` bytes.
pub(crate) fn to_be_bytes_padded(value: &BigInt, size: usize) -> Vec<u8> {
    let (_, magnitude) = value.to_bytes_be();
    let mut out = vec![0u8; size.saturating_sub(magnitude.len())];
    out.extend_from_slice(&magnitude);
    out
}
