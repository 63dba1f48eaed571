//! 256-bit intermediates for products of bounded quantities.
//!
//! Reserves and balances fit in 112 bits, but every formula of the pair
//! multiplies two of them (or one of them by the total supply, or by a fee
//! denominator squared).  Those products are formed here, in [`U256`], and
//! narrowed back to `u128` only after the final division.

use crate::error::{PairError, Result};

#[allow(
    clippy::assign_op_pattern,
    clippy::ptr_offset_with_cast,
    clippy::manual_range_contains,
    clippy::manual_div_ceil
)]
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer used for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Widens a `u128` into a [`U256`].
#[inline]
#[must_use]
pub fn widen(value: u128) -> U256 {
    U256::from(value)
}

/// `a * b` on 256-bit intermediates.
///
/// # Errors
///
/// Returns [`PairError::Overflow`] tagged with `what` if the product does
/// not fit in 256 bits.
#[inline]
pub fn mul(a: U256, b: U256, what: &'static str) -> Result<U256> {
    a.checked_mul(b).ok_or(PairError::Overflow(what))
}

/// Narrows a [`U256`] back to `u128`.
///
/// # Errors
///
/// Returns [`PairError::Overflow`] tagged with `what` if the value needs
/// more than 128 bits.
#[inline]
pub fn narrow(value: U256, what: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(PairError::Overflow(what));
    }
    Ok(value.low_u128())
}

/// `floor(sqrt(value))`.
#[inline]
#[must_use]
pub fn isqrt(value: U256) -> U256 {
    if value.is_zero() {
        return U256::zero();
    }
    value.integer_sqrt()
}
