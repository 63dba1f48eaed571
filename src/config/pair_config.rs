//! Configuration for a constant-product pair.

use crate::domain::{Amount, FeeRate, Liquidity, TokenPair};
use crate::error::PairError;

/// Shares permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: Liquidity = Liquidity::new(1_000);

/// Fee charged on swap input: 0.3%.
pub const DEFAULT_FEE: FeeRate = FeeRate::THIRTY_BPS;

/// Largest admissible reserve/balance ceiling, `2^112 − 1`.
///
/// The fee-adjusted product of two ceiling-sized balances scaled by the
/// largest fee denominator must fit in 256 bits; this bound guarantees it.
pub const MAX_RESERVE_CEILING: Amount = Amount::new((1u128 << 112) - 1);

/// Immutable parameters of a pair.
///
/// Built once from the two asset identities supplied by the registry; the
/// remaining parameters default to the canonical values and may be
/// tightened with the `with_*` methods.
///
/// # Defaults
///
/// | Parameter | Default |
/// |-----------|---------|
/// | fee | [`DEFAULT_FEE`] (3/1000) |
/// | minimum liquidity | [`MINIMUM_LIQUIDITY`] (1000) |
/// | reserve ceiling | [`MAX_RESERVE_CEILING`] (`2^112 − 1`) |
///
/// # Validation
///
/// - the fee satisfies [`FeeRate::is_valid`];
/// - minimum liquidity is non-zero;
/// - the ceiling is in `1..=MAX_RESERVE_CEILING` and above the minimum
///   liquidity.
///
/// # Examples
///
/// ```
/// use hydra_pair::config::PairConfig;
/// use hydra_pair::domain::{Amount, TokenAddress, TokenPair};
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct");
///
/// let cfg = PairConfig::new(pair)
///     .with_reserve_ceiling(Amount::new(u64::MAX as u128))
///     .expect("valid config");
/// assert_eq!(cfg.reserve_ceiling(), Amount::new(u64::MAX as u128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairConfig {
    token_pair: TokenPair,
    fee: FeeRate,
    minimum_liquidity: Liquidity,
    reserve_ceiling: Amount,
}

impl PairConfig {
    /// Creates a configuration with default parameters.
    #[must_use]
    pub const fn new(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            fee: DEFAULT_FEE,
            minimum_liquidity: MINIMUM_LIQUIDITY,
            reserve_ceiling: MAX_RESERVE_CEILING,
        }
    }

    /// Replaces the fee.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if the result is invalid.
    pub fn with_fee(mut self, fee: FeeRate) -> Result<Self, PairError> {
        self.fee = fee;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the permanently locked minimum liquidity.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if the result is invalid.
    pub fn with_minimum_liquidity(mut self, minimum: Liquidity) -> Result<Self, PairError> {
        self.minimum_liquidity = minimum;
        self.validate()?;
        Ok(self)
    }

    /// Lowers the reserve/balance ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if the result is invalid.
    pub fn with_reserve_ceiling(mut self, ceiling: Amount) -> Result<Self, PairError> {
        self.reserve_ceiling = ceiling;
        self.validate()?;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations bypass the builder, so construction
    /// through [`FromConfig`](crate::traits::FromConfig) calls this again.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] naming the first
    /// violated rule, or [`PairError::InvalidToken`] for a degenerate pair.
    pub fn validate(&self) -> Result<(), PairError> {
        if self.token_pair.token0() == self.token_pair.token1() {
            return Err(PairError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        if !self.fee.is_valid() {
            return Err(PairError::InvalidConfiguration(
                "fee must satisfy 0 <= numerator < denominator <= 10000",
            ));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(PairError::InvalidConfiguration(
                "minimum liquidity must be non-zero",
            ));
        }
        if self.reserve_ceiling.is_zero() || !self.reserve_ceiling.within(&MAX_RESERVE_CEILING) {
            return Err(PairError::InvalidConfiguration(
                "reserve ceiling must be in 1..=2^112-1",
            ));
        }
        if self.reserve_ceiling.get() <= self.minimum_liquidity.get() {
            return Err(PairError::InvalidConfiguration(
                "reserve ceiling must exceed minimum liquidity",
            ));
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns the permanently locked minimum liquidity.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Returns the reserve/balance ceiling.
    pub const fn reserve_ceiling(&self) -> Amount {
        self.reserve_ceiling
    }
}
