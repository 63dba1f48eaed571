//! The pair's two asset identities, in canonical order.

use super::TokenAddress;
use crate::error::PairError;

/// The two distinct assets of a pair, sorted so that `token0 < token1`.
///
/// All quantities indexed `0` refer to [`token0`](Self::token0) and all
/// quantities indexed `1` to [`token1`](Self::token1).  Sorting at
/// construction means `(A, B)` and `(B, A)` describe the same pair.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{TokenAddress, TokenPair};
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct tokens");
/// assert_eq!(pair.token0(), usdc);
/// assert_eq!(pair.token1(), weth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl TokenPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidToken`] if both addresses are equal.
    pub fn new(a: TokenAddress, b: TokenAddress) -> Result<Self, PairError> {
        if a == b {
            return Err(PairError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        let (token0, token1) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { token0, token1 })
    }

    /// Returns the lower-ordered asset.
    #[must_use]
    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    /// Returns the higher-ordered asset.
    #[must_use]
    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }

    /// Returns `true` if `token` is one of the pair's assets.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns the counterpart of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &TokenAddress) -> Result<TokenAddress, PairError> {
        if *token == self.token0 {
            Ok(self.token1)
        } else if *token == self.token1 {
            Ok(self.token0)
        } else {
            Err(PairError::InvalidToken("token is not part of this pair"))
        }
    }
}
