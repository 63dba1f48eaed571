//! The fee-adjusted constant-product admission check.
//!
//! Shared by the swap engine and flash-swap Verify.  With fee
//! `n / d`, inputs `in0, in1`, post-transition balances `b0, b1` and the
//! pre-transition reserves `r0, r1`:
//!
//! ```text
//! adj0 = b0·d − in0·n      adj1 = b1·d − in1·n
//! admit  ⇔  adj0 > 0 ∧ adj1 > 0 ∧ adj0·adj1 ≥ r0·r1·d²
//! ```
//!
//! With reserves at most `2^112 − 1` and `d ≤ 10 000` every term fits in
//! 256 bits.

use tracing::trace;

use super::wide::{mul, widen, U256};
use crate::domain::{Amount, FeeRate};
use crate::error::{PairError, Result};

/// `reserve0 · reserve1` as a 256-bit value.
///
/// # Errors
///
/// Never fails for `u128` inputs; the `Result` keeps the call sites uniform.
pub fn reserve_product(reserve0: Amount, reserve1: Amount) -> Result<U256> {
    mul(widen(reserve0.get()), widen(reserve1.get()), "reserve product")
}

/// `balance·d − input·n`, required to be strictly positive.
fn adjusted(balance: Amount, input: Amount, fee: FeeRate) -> Result<U256> {
    let scaled = mul(
        widen(balance.get()),
        U256::from(fee.denominator()),
        "scaled balance",
    )?;
    let charged = mul(widen(input.get()), U256::from(fee.numerator()), "fee charge")?;
    match scaled.checked_sub(charged) {
        Some(adj) if !adj.is_zero() => Ok(adj),
        _ => Err(PairError::InvariantViolation),
    }
}

/// Admits a transition whose post-state balances are `balance0, balance1`,
/// given the inputs measured against `reserve0, reserve1`.
///
/// # Errors
///
/// - [`PairError::InvariantViolation`] if either adjusted balance is not
///   strictly positive or the adjusted product is below `r0·r1·d²`.
/// - [`PairError::Overflow`] if an intermediate exceeds 256 bits, which
///   the configuration bounds rule out.
pub fn check_fee_adjusted_product(
    balance0: Amount,
    balance1: Amount,
    amount0_in: Amount,
    amount1_in: Amount,
    reserve0: Amount,
    reserve1: Amount,
    fee: FeeRate,
) -> Result<()> {
    let adj0 = adjusted(balance0, amount0_in, fee)?;
    let adj1 = adjusted(balance1, amount1_in, fee)?;
    let lhs = mul(adj0, adj1, "adjusted product")?;

    let denom = U256::from(fee.denominator());
    let scale = mul(denom, denom, "fee denominator squared")?;
    let rhs = mul(reserve_product(reserve0, reserve1)?, scale, "scaled reserve product")?;

    trace!(%lhs, %rhs, "fee-adjusted product check");
    if lhs < rhs {
        return Err(PairError::InvariantViolation);
    }
    Ok(())
}
