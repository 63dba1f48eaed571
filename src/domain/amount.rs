//! Token quantity held by, paid into, or paid out of the pair.

use core::fmt;

/// A raw quantity of one of the pair's two assets, in its smallest unit.
///
/// Reserves and balances are `Amount`s bounded by the pair's configured
/// ceiling; the type itself accepts any `u128` so that bound checks happen
/// in one place ([`Amount::within`]) and produce a typed error.
///
/// Arithmetic is checked and returns `None` instead of wrapping.  Products
/// of two amounts are never formed here: they can exceed 128 bits and are
/// computed in [`crate::math`] on 256-bit intermediates.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
///
/// let reserve = Amount::new(1_000);
/// let out = Amount::new(90);
/// assert_eq!(reserve.checked_sub(&out), Some(Amount::new(910)));
/// assert_eq!(out.saturating_delta(&reserve), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an `Amount` from a raw value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `max(self - base, 0)`: how far `self` sits above `base`.
    ///
    /// Used to measure input as the excess of a balance over its reserve.
    pub const fn saturating_delta(&self, base: &Self) -> Self {
        Self(self.0.saturating_sub(base.0))
    }

    /// Returns `true` if `self <= ceiling`.
    #[must_use]
    pub const fn within(&self, ceiling: &Self) -> bool {
        self.0 <= ceiling.0
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
