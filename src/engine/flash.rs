//! Flash-Swap Coordinator: Begin, Callback, Verify.
//!
//! ```text
//!   Idle ──begin──▶ AwaitingCallback ──callback──▶ AwaitingVerification
//!    ▲                                                     │
//!    └──────────────────────── verify ─────────────────────┘
//! ```
//!
//! Begin releases the outputs optimistically by debiting the balances and
//! leaves the reserves alone.  Callback credits the repayment.  Verify runs
//! the swap admission check with the balances as the new side and the
//! untouched reserves as the base, and only then moves the reserves.
//!
//! A failed Verify commits nothing and leaves the session open.  Undoing
//! an open session is the enclosing context's job
//! ([`ExecutionContext`](crate::context::ExecutionContext)).

use tracing::{debug, info, warn};

use super::swap::check_outputs;
use crate::config::PairConfig;
use crate::domain::{Amount, FlashSession, FlashSwapOutcome, Phase, SessionId};
use crate::error::{PairError, Result};
use crate::math::{add_within, check_fee_adjusted_product, CheckedArithmetic};
use crate::state::{PairState, Transition};

/// Opens a session releasing `amount0_out` and `amount1_out`.
///
/// # Errors
///
/// - [`PairError::LockHeld`] if a session is already open.
/// - [`PairError::InsufficientOutputAmount`] if both outputs are zero.
/// - [`PairError::InsufficientLiquidity`] if an output reaches its reserve.
/// - [`PairError::Overflow`] if session ids are exhausted.
pub(crate) fn begin(
    state: &mut PairState,
    amount0_out: Amount,
    amount1_out: Amount,
) -> Result<FlashSession> {
    state.lock().try_enter(&[Phase::Idle])?;
    check_outputs(state, amount0_out, amount1_out)?;

    let session = FlashSession {
        id: state.lock().next_session_id()?,
        amount0_out,
        amount1_out,
    };

    let mut next = Transition::from_state(state);
    next.balance0 = state.balance0().safe_sub(&amount0_out, "balance0")?;
    next.balance1 = state.balance1().safe_sub(&amount1_out, "balance1")?;
    next.phase = Phase::AwaitingCallback;
    next.session = Some(session);
    state.commit(next)?;

    info!(session = %session.id, %amount0_out, %amount1_out, "flash swap opened");
    Ok(session)
}

/// Credits the counterparty's repayment to the balances.
///
/// # Errors
///
/// - [`PairError::InvalidPhase`] unless the pair is `AwaitingCallback`.
/// - [`PairError::SessionMismatch`] if `id` is not the open session.
/// - [`PairError::Overflow`] if a balance would exceed the ceiling.
pub(crate) fn callback(
    state: &mut PairState,
    config: &PairConfig,
    id: SessionId,
    repay0: Amount,
    repay1: Amount,
) -> Result<()> {
    state.lock().try_enter(&[Phase::AwaitingCallback])?;
    state.lock().expect_session(id)?;

    let ceiling = config.reserve_ceiling();
    let mut next = Transition::from_state(state);
    next.balance0 = add_within(state.balance0(), repay0, ceiling, "balance0")?;
    next.balance1 = add_within(state.balance1(), repay1, ceiling, "balance1")?;
    next.phase = Phase::AwaitingVerification;
    state.commit(next)?;

    debug!(session = %id, %repay0, %repay1, "flash swap repaid");
    Ok(())
}

/// Checks the repaid balances against the stale reserves and closes the
/// session.
///
/// Inputs are `max(balance − reserve, 0)` per side.  On success the
/// reserves move to the balances and the lock is released; `k_last` is
/// not touched.
///
/// # Errors
///
/// - [`PairError::InvalidPhase`] unless the pair is `AwaitingVerification`.
/// - [`PairError::SessionMismatch`] if `id` is not the open session.
/// - [`PairError::InsufficientInputAmount`] if neither balance grew.
/// - [`PairError::InvariantViolation`] if the product check fails.
pub(crate) fn verify(
    state: &mut PairState,
    config: &PairConfig,
    id: SessionId,
) -> Result<FlashSwapOutcome> {
    state.lock().try_enter(&[Phase::AwaitingVerification])?;
    let session = state.lock().expect_session(id)?;

    let (reserve0, reserve1) = (state.reserve0(), state.reserve1());
    let (balance0, balance1) = (state.balance0(), state.balance1());
    let amount0_in = balance0.saturating_delta(&reserve0);
    let amount1_in = balance1.saturating_delta(&reserve1);

    let admitted = if amount0_in.is_zero() && amount1_in.is_zero() {
        Err(PairError::InsufficientInputAmount)
    } else {
        check_fee_adjusted_product(
            balance0,
            balance1,
            amount0_in,
            amount1_in,
            reserve0,
            reserve1,
            config.fee(),
        )
    };
    if let Err(err) = admitted {
        warn!(session = %id, %err, "flash swap verification failed; session left open");
        return Err(err);
    }

    let mut next = Transition::from_state(state);
    next.reserve0 = balance0;
    next.reserve1 = balance1;
    next.phase = Phase::Idle;
    next.session = None;
    state.commit(next)?;

    info!(
        session = %id, %amount0_in, %amount1_in,
        reserve0 = %balance0, reserve1 = %balance1,
        "flash swap closed"
    );

    Ok(FlashSwapOutcome {
        session: id,
        amount0_out: session.amount0_out,
        amount1_out: session.amount1_out,
        amount0_in,
        amount1_in,
        reserve0: balance0,
        reserve1: balance1,
    })
}
