//! Burn Engine: destroy shares, release the pro-rata assets.

use tracing::debug;

use crate::domain::{AccountId, Amount, BurnOutcome, Liquidity, Phase, Rounding};
use crate::error::{PairError, Result};
use crate::math::{mul_div, reserve_product, CheckedArithmetic};
use crate::state::{PairState, ShareChange, Transition};

/// Destroys `liquidity` of `owner`'s shares and releases
/// `⌊liquidity·balance/total_supply⌋` of each asset.
///
/// The pro-rata amounts are taken against the balances, not the reserves.
/// The locked minimum keeps `liquidity < total_supply`, so a burn never
/// empties a reserve.
///
/// # Errors
///
/// - [`PairError::LockHeld`] if a flash-swap session is open.
/// - [`PairError::InsufficientLiquidityBurned`] if `liquidity` is zero or
///   either released amount rounds to zero.
/// - [`PairError::InsufficientShares`] if `owner` holds fewer than
///   `liquidity` shares.
pub(crate) fn burn(
    state: &mut PairState,
    owner: AccountId,
    liquidity: Liquidity,
) -> Result<BurnOutcome> {
    state.lock().try_enter(&[Phase::Idle])?;

    if liquidity.is_zero() {
        return Err(PairError::InsufficientLiquidityBurned);
    }
    let held = state.ledger().balance_of(&owner);
    if held < liquidity {
        return Err(PairError::InsufficientShares {
            held,
            requested: liquidity,
        });
    }

    let total_supply = state.total_supply();
    let amount0 = Amount::new(mul_div(
        liquidity.get(),
        state.balance0().get(),
        total_supply.get(),
        Rounding::Down,
        "burn amount0",
    )?);
    let amount1 = Amount::new(mul_div(
        liquidity.get(),
        state.balance1().get(),
        total_supply.get(),
        Rounding::Down,
        "burn amount1",
    )?);
    if amount0.is_zero() || amount1.is_zero() {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    let balance0 = state.balance0().safe_sub(&amount0, "balance0")?;
    let balance1 = state.balance1().safe_sub(&amount1, "balance1")?;

    let mut next = Transition::from_state(state);
    next.total_supply = total_supply.safe_sub(&liquidity, "total supply")?;
    next.reserve0 = balance0;
    next.reserve1 = balance1;
    next.balance0 = balance0;
    next.balance1 = balance1;
    next.k_last = reserve_product(balance0, balance1)?;
    next.shares = ShareChange::Burn { owner, liquidity };
    state.commit(next)?;

    debug!(
        %owner, %liquidity, %amount0, %amount1,
        reserve0 = %balance0, reserve1 = %balance1,
        "burn"
    );

    Ok(BurnOutcome {
        owner,
        liquidity,
        amount0,
        amount1,
    })
}
