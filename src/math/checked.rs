//! Checked arithmetic on domain quantities, reported as [`PairError`].
//!
//! The inherent `checked_*` methods on [`Amount`] and [`Liquidity`] return
//! `Option`.  Engines need a typed error naming the quantity that failed,
//! so they go through [`CheckedArithmetic`] instead.
//!
//! # Examples
//!
//! ```
//! use hydra_pair::domain::Amount;
//! use hydra_pair::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200), "balance0");
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2), "balance0").is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::{PairError, Result};

/// Fallible arithmetic for domain quantities.
///
/// No panics, no saturation: a failed operation is an error tagged with
/// the name of the quantity being computed.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Overflow`] tagged with `what`.
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Underflow`] tagged with `what`.
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(PairError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(PairError::Underflow(what))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(PairError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(PairError::Underflow(what))
    }
}

/// `value + delta`, rejected if the sum exceeds `ceiling`.
///
/// # Errors
///
/// Returns [`PairError::Overflow`] tagged with `what` if the sum overflows
/// `u128` or lands above `ceiling`.
pub fn add_within(
    value: Amount,
    delta: Amount,
    ceiling: Amount,
    what: &'static str,
) -> Result<Amount> {
    let sum = value.safe_add(&delta, what)?;
    if !sum.within(&ceiling) {
        return Err(PairError::Overflow(what));
    }
    Ok(sum)
}

/// `value + added − removed`, rejected if the result exceeds `ceiling`.
///
/// Only the settled value is bounded: an intermediate sum above `ceiling`
/// is fine as long as `removed` brings it back under.
///
/// # Errors
///
/// - [`PairError::Overflow`] tagged with `what` if the sum overflows `u128`
///   or the result lands above `ceiling`.
/// - [`PairError::Underflow`] tagged with `what` if `removed` exceeds
///   `value + added`.
pub fn settle_within(
    value: Amount,
    added: Amount,
    removed: Amount,
    ceiling: Amount,
    what: &'static str,
) -> Result<Amount> {
    let settled = value.safe_add(&added, what)?.safe_sub(&removed, what)?;
    if !settled.within(&ceiling) {
        return Err(PairError::Overflow(what));
    }
    Ok(settled)
}
