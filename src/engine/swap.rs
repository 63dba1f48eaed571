//! Swap Engine: single-step exchange under the fee-adjusted product check.

use tracing::debug;

use crate::config::PairConfig;
use crate::domain::{Amount, Phase, SwapOutcome, SwapRequest};
use crate::error::{PairError, Result};
use crate::math::{check_fee_adjusted_product, settle_within};
use crate::state::{PairState, Transition};

/// Requested outputs must each be strictly below their reserve, and at
/// least one must be non-zero.
pub(super) fn check_outputs(
    state: &PairState,
    amount0_out: Amount,
    amount1_out: Amount,
) -> Result<()> {
    if amount0_out.is_zero() && amount1_out.is_zero() {
        return Err(PairError::InsufficientOutputAmount);
    }
    if amount0_out >= state.reserve0() || amount1_out >= state.reserve1() {
        return Err(PairError::InsufficientLiquidity);
    }
    Ok(())
}

/// Executes `request` against the current reserves.
///
/// The inputs are taken as already transferred.  With
/// `newBal = reserve + in − out` on each side, the swap is admitted only if
/// the fee-adjusted product of the new balances is at least the reserve
/// product.  Reserves and balances both move to `newBal`; the ledger,
/// total supply and `k_last` are unchanged, so fees accrue to the reserves.
///
/// # Errors
///
/// - [`PairError::LockHeld`] if a flash-swap session is open.
/// - [`PairError::InsufficientOutputAmount`] if no output is requested.
/// - [`PairError::InsufficientLiquidity`] if an output reaches its reserve.
/// - [`PairError::InsufficientInputAmount`] if no input is supplied.
/// - [`PairError::Overflow`] if a settled balance (`reserve + in − out`)
///   exceeds the ceiling.
/// - [`PairError::InvariantViolation`] if the product check fails.
pub(crate) fn swap(
    state: &mut PairState,
    config: &PairConfig,
    request: SwapRequest,
) -> Result<SwapOutcome> {
    state.lock().try_enter(&[Phase::Idle])?;

    let (amount0_out, amount1_out) = (request.amount0_out(), request.amount1_out());
    let (amount0_in, amount1_in) = (request.amount0_in(), request.amount1_in());
    check_outputs(state, amount0_out, amount1_out)?;
    if amount0_in.is_zero() && amount1_in.is_zero() {
        return Err(PairError::InsufficientInputAmount);
    }

    let (reserve0, reserve1) = (state.reserve0(), state.reserve1());
    let ceiling = config.reserve_ceiling();
    let balance0 = settle_within(reserve0, amount0_in, amount0_out, ceiling, "balance0")?;
    let balance1 = settle_within(reserve1, amount1_in, amount1_out, ceiling, "balance1")?;

    check_fee_adjusted_product(
        balance0,
        balance1,
        amount0_in,
        amount1_in,
        reserve0,
        reserve1,
        config.fee(),
    )?;

    let mut next = Transition::from_state(state);
    next.reserve0 = balance0;
    next.reserve1 = balance1;
    next.balance0 = balance0;
    next.balance1 = balance1;
    state.commit(next)?;

    debug!(
        %amount0_in, %amount1_in, %amount0_out, %amount1_out,
        reserve0 = %balance0, reserve1 = %balance1,
        "swap"
    );

    Ok(SwapOutcome {
        amount0_in,
        amount1_in,
        amount0_out,
        amount1_out,
        reserve0: balance0,
        reserve1: balance1,
    })
}
