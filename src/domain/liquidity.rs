//! Liquidity shares: proportional claims on the pair's balances.

use core::fmt;

/// A count of liquidity shares.
///
/// Distinct from [`Amount`](super::Amount): an amount is a quantity of one
/// asset, a share is a fraction of both.  Total supply, per-account ledger
/// balances and the permanently locked minimum are all `Liquidity`.
///
/// Burning `s` shares out of a supply `S` releases `⌊s·balance/S⌋` of each
/// asset; that conversion needs 256-bit intermediates and lives in
/// [`crate::math`], never here.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Liquidity;
///
/// let locked = Liquidity::new(1_000);
/// let credited = Liquidity::new(1_000);
/// let supply = credited.checked_add(&locked);
/// assert_eq!(supply, Some(Liquidity::new(2_000)));
/// assert_eq!(credited.checked_sub(&Liquidity::new(1_001)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Liquidity(u128);

impl Liquidity {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` for an empty balance or supply.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds shares, `None` if the count would exceed `u128`.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Removes shares, `None` if more are removed than held.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Liquidity {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
