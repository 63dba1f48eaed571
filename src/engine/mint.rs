//! Mint Engine: deposit both assets, receive shares.

use tracing::{debug, info};

use crate::config::PairConfig;
use crate::domain::{AccountId, Amount, Liquidity, MintOutcome, Phase, Rounding};
use crate::error::{PairError, Result};
use crate::math::{
    add_within, isqrt, mul, mul_div, narrow, reserve_product, widen, CheckedArithmetic,
};
use crate::state::{PairState, ShareChange, Transition};

/// Credits `to` with shares for a deposit of `amount0` and `amount1`.
///
/// The amounts are taken as already transferred: both the reserves and the
/// balances move to `reserve + amount`.
///
/// - First deposit (`total_supply == 0`): `⌊√(amount0·amount1)⌋ − MIN` to
///   `to`, and `MIN` locked with no owner.
/// - Later deposits: `min(⌊amount0·S/r0⌋, ⌊amount1·S/r1⌋)`.  A deposit off
///   the pool ratio is credited on its scarcer side; the surplus stays in
///   the reserves for existing holders.
///
/// `k_last` is set to the new reserve product.
///
/// # Errors
///
/// - [`PairError::LockHeld`] if a flash-swap session is open.
/// - [`PairError::Overflow`] if a new reserve would exceed the ceiling.
/// - [`PairError::InsufficientLiquidityMinted`] if the deposit rounds to
///   zero shares (including one-sided deposits).
pub(crate) fn mint(
    state: &mut PairState,
    config: &PairConfig,
    to: AccountId,
    amount0: Amount,
    amount1: Amount,
) -> Result<MintOutcome> {
    state.lock().try_enter(&[Phase::Idle])?;

    let ceiling = config.reserve_ceiling();
    let reserve0 = add_within(state.reserve0(), amount0, ceiling, "reserve0")?;
    let reserve1 = add_within(state.reserve1(), amount1, ceiling, "reserve1")?;

    let total_supply = state.total_supply();
    let (liquidity, locked) = if total_supply.is_zero() {
        let deposit = mul(widen(amount0.get()), widen(amount1.get()), "deposit product")?;
        let root = narrow(isqrt(deposit), "initial liquidity")?;
        let minimum = config.minimum_liquidity();
        match root.checked_sub(minimum.get()) {
            Some(credited) if credited > 0 => (Liquidity::new(credited), minimum),
            _ => return Err(PairError::InsufficientLiquidityMinted),
        }
    } else {
        let supply = total_supply.get();
        let share0 = mul_div(
            amount0.get(),
            supply,
            state.reserve0().get(),
            Rounding::Down,
            "shares for token0",
        )?;
        let share1 = mul_div(
            amount1.get(),
            supply,
            state.reserve1().get(),
            Rounding::Down,
            "shares for token1",
        )?;
        (Liquidity::new(share0.min(share1)), Liquidity::ZERO)
    };
    if liquidity.is_zero() {
        return Err(PairError::InsufficientLiquidityMinted);
    }

    let mut next = Transition::from_state(state);
    next.total_supply = total_supply
        .safe_add(&liquidity, "total supply")?
        .safe_add(&locked, "total supply")?;
    next.reserve0 = reserve0;
    next.reserve1 = reserve1;
    next.balance0 = reserve0;
    next.balance1 = reserve1;
    next.k_last = reserve_product(reserve0, reserve1)?;
    next.shares = ShareChange::Mint {
        to,
        liquidity,
        locked,
    };
    state.commit(next)?;

    if locked.is_zero() {
        debug!(%to, %liquidity, %amount0, %amount1, %reserve0, %reserve1, "mint");
    } else {
        info!(%to, %liquidity, %locked, %reserve0, %reserve1, "pair initialized by first mint");
    }

    Ok(MintOutcome {
        to,
        liquidity,
        locked,
        amount0,
        amount1,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::engine::tests_support::{acct, config};
    use crate::math::U256;

    #[test]
    fn first_mint_locks_minimum() {
        let mut state = PairState::new();
        let Ok(out) = mint(&mut state, &config(), acct(1), Amount::new(2_000), Amount::new(2_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(out.liquidity, Liquidity::new(1_000));
        assert_eq!(out.locked, Liquidity::new(1_000));
        assert_eq!(state.total_supply(), Liquidity::new(2_000));
        assert_eq!(state.ledger().balance_of(&acct(1)), Liquidity::new(1_000));
        assert_eq!(state.ledger().locked(), Liquidity::new(1_000));
        assert_eq!(state.k_last(), U256::from(4_000_000u64));
        assert_eq!(state.balance0(), state.reserve0());
    }

    #[test]
    fn first_mint_at_or_below_minimum_rejected() {
        let mut state = PairState::new();
        let result = mint(&mut state, &config(), acct(1), Amount::new(1_000), Amount::new(1_000));
        assert_eq!(result, Err(PairError::InsufficientLiquidityMinted));
        assert_eq!(state, PairState::new());
    }

    #[test]
    fn subsequent_mint_is_proportional() {
        let mut state = PairState::new();
        let cfg = config();
        let Ok(_) = mint(&mut state, &cfg, acct(1), Amount::new(2_000), Amount::new(2_000)) else {
            panic!("expected Ok");
        };
        let Ok(out) = mint(&mut state, &cfg, acct(2), Amount::new(1_000), Amount::new(1_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(out.liquidity, Liquidity::new(1_000));
        assert!(out.locked.is_zero());
        assert_eq!(state.total_supply(), Liquidity::new(3_000));
        assert_eq!(state.reserve0(), Amount::new(3_000));
    }

    #[test]
    fn unbalanced_deposit_credits_scarcer_side() {
        let mut state = PairState::new();
        let cfg = config();
        let Ok(_) = mint(&mut state, &cfg, acct(1), Amount::new(2_000), Amount::new(2_000)) else {
            panic!("expected Ok");
        };
        let Ok(out) = mint(&mut state, &cfg, acct(2), Amount::new(1_000), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(out.liquidity, Liquidity::new(10));
        assert_eq!(state.reserve0(), Amount::new(3_000));
        assert_eq!(state.reserve1(), Amount::new(2_010));
    }

    #[test]
    fn one_sided_deposit_rejected() {
        let mut state = PairState::new();
        let cfg = config();
        let Ok(_) = mint(&mut state, &cfg, acct(1), Amount::new(2_000), Amount::new(2_000)) else {
            panic!("expected Ok");
        };
        let before = state.clone();
        let result = mint(&mut state, &cfg, acct(2), Amount::new(1_000), Amount::ZERO);
        assert_eq!(result, Err(PairError::InsufficientLiquidityMinted));
        assert_eq!(state, before);
    }

    #[test]
    fn deposit_above_ceiling_rejected() {
        let mut state = PairState::new();
        let Ok(cfg) = config().with_reserve_ceiling(Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        let result = mint(&mut state, &cfg, acct(1), Amount::new(10_001), Amount::new(5_000));
        assert_eq!(result, Err(PairError::Overflow("reserve0")));
        assert_eq!(state, PairState::new());
    }
}
