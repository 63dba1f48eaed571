//! Parameters of a single-step swap.

use super::Amount;

/// A swap as presented to the pair: what leaves, and what has already
/// arrived.
///
/// Inputs are quantities the transfer collaborator has already credited to
/// the pair's balances; the engine never moves assets itself.  The request
/// is not validated on construction: the swap engine reports each
/// precondition failure with its own error.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, SwapRequest};
///
/// // Pay 100 of token0, take 90 of token1.
/// let req = SwapRequest::new(Amount::ZERO, Amount::new(90))
///     .with_input(Amount::new(100), Amount::ZERO);
/// assert_eq!(req.amount1_out(), Amount::new(90));
/// assert_eq!(req.amount0_in(), Amount::new(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRequest {
    amount0_out: Amount,
    amount1_out: Amount,
    amount0_in: Amount,
    amount1_in: Amount,
}

impl SwapRequest {
    /// Creates a request for the given outputs with no input yet.
    pub const fn new(amount0_out: Amount, amount1_out: Amount) -> Self {
        Self {
            amount0_out,
            amount1_out,
            amount0_in: Amount::ZERO,
            amount1_in: Amount::ZERO,
        }
    }

    /// Sets the input quantities already credited to the balances.
    pub const fn with_input(mut self, amount0_in: Amount, amount1_in: Amount) -> Self {
        self.amount0_in = amount0_in;
        self.amount1_in = amount1_in;
        self
    }

    /// Sell `amount_in` of token0 for `amount_out` of token1.
    pub const fn zero_for_one(amount_in: Amount, amount_out: Amount) -> Self {
        Self::new(Amount::ZERO, amount_out).with_input(amount_in, Amount::ZERO)
    }

    /// Sell `amount_in` of token1 for `amount_out` of token0.
    pub const fn one_for_zero(amount_in: Amount, amount_out: Amount) -> Self {
        Self::new(amount_out, Amount::ZERO).with_input(Amount::ZERO, amount_in)
    }

    /// Requested output of token0.
    pub const fn amount0_out(&self) -> Amount {
        self.amount0_out
    }

    /// Requested output of token1.
    pub const fn amount1_out(&self) -> Amount {
        self.amount1_out
    }

    /// Input of token0 already credited.
    pub const fn amount0_in(&self) -> Amount {
        self.amount0_in
    }

    /// Input of token1 already credited.
    pub const fn amount1_in(&self) -> Amount {
        self.amount1_in
    }
}
