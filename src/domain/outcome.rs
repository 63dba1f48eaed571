//! Records returned by committed transitions.
//!
//! Each record describes what a transition did, in the same terms a
//! deployed pair would announce it (mint, burn, swap, sync).  They carry no
//! behaviour; the state store already holds the result.

use super::{AccountId, Amount, Liquidity, SessionId};

/// A committed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MintOutcome {
    /// Account credited with the new shares.
    pub to: AccountId,
    /// Shares credited to `to` (excludes the locked minimum).
    pub liquidity: Liquidity,
    /// Shares permanently locked by this mint; non-zero only on the first.
    pub locked: Liquidity,
    /// Token0 deposited.
    pub amount0: Amount,
    /// Token1 deposited.
    pub amount1: Amount,
}

/// A committed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurnOutcome {
    /// Account whose shares were destroyed.
    pub owner: AccountId,
    /// Shares destroyed.
    pub liquidity: Liquidity,
    /// Token0 released to the owner.
    pub amount0: Amount,
    /// Token1 released to the owner.
    pub amount1: Amount,
}

/// A committed single-step swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    /// Token0 received.
    pub amount0_in: Amount,
    /// Token1 received.
    pub amount1_in: Amount,
    /// Token0 released.
    pub amount0_out: Amount,
    /// Token1 released.
    pub amount1_out: Amount,
    /// Reserve of token0 after the swap.
    pub reserve0: Amount,
    /// Reserve of token1 after the swap.
    pub reserve1: Amount,
}

/// An open flash-swap session, returned by Begin.
///
/// The borrowed quantities have already been debited from the balances;
/// the reserves are untouched until Verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashSession {
    /// Id required by Callback and Verify.
    pub id: SessionId,
    /// Token0 released optimistically.
    pub amount0_out: Amount,
    /// Token1 released optimistically.
    pub amount1_out: Amount,
}

/// A verified flash swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashSwapOutcome {
    /// The session that was closed.
    pub session: SessionId,
    /// Token0 borrowed at Begin.
    pub amount0_out: Amount,
    /// Token1 borrowed at Begin.
    pub amount1_out: Amount,
    /// `max(balance0 - reserve0, 0)` at Verify.
    pub amount0_in: Amount,
    /// `max(balance1 - reserve1, 0)` at Verify.
    pub amount1_in: Amount,
    /// Reserve of token0 committed by Verify.
    pub reserve0: Amount,
    /// Reserve of token1 committed by Verify.
    pub reserve1: Amount,
}

/// Reserves as seen by a price observer at an Idle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReserveSnapshot {
    /// Reserve of token0.
    pub reserve0: Amount,
    /// Reserve of token1.
    pub reserve1: Amount,
}
