//! Proportional swap fee as an exact integer ratio.

use core::fmt;

/// The fee charged on swap input, as `numerator / denominator`.
///
/// The fee never leaves the pair: it is enforced by scaling both sides of
/// the constant-product check (`balance * denominator - input * numerator`),
/// so the retained portion of every input accrues to the reserves.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::FeeRate;
///
/// let fee = FeeRate::THIRTY_BPS;
/// assert_eq!(fee.numerator(), 3);
/// assert_eq!(fee.denominator(), 1_000);
/// assert!(fee.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// 0.30%, expressed as 3/1000.
    pub const THIRTY_BPS: Self = Self::new(3, 1_000);

    /// No fee.
    pub const ZERO: Self = Self::new(0, 1_000);

    /// Largest denominator the 256-bit invariant arithmetic is sized for.
    pub const MAX_DENOMINATOR: u32 = 10_000;

    /// Creates a fee rate.  Use [`is_valid`](Self::is_valid) to check it;
    /// [`PairConfig`](crate::config::PairConfig) rejects invalid rates.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// `denominator - numerator`: the retained fraction's numerator.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        self.denominator.saturating_sub(self.numerator)
    }

    /// `0 <= numerator < denominator <= MAX_DENOMINATOR`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.denominator > 0
            && self.denominator <= Self::MAX_DENOMINATOR
            && self.numerator < self.denominator
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::THIRTY_BPS
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
