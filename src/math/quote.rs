//! Swap quotes consistent with the fee-adjusted product check.
//!
//! The pair itself never prices a trade: it only admits or rejects one.
//! These helpers compute the boundary of what it admits, for callers that
//! want to size a swap before transferring the input.
//!
//! # Formulas (fee `n / d`, `c = d − n`)
//!
//! ```text
//! amount_out = ⌊ in·c·R_out / (R_in·d + in·c) ⌋             (largest admitted)
//! amount_in  = ⌈ R_in·out·d / ((R_out − out)·c) ⌉           (smallest admitted)
//! ```

use super::rounding::div_round;
use super::wide::{mul, narrow, widen, U256};
use crate::domain::{Amount, FeeRate, Rounding};
use crate::error::{PairError, Result};

/// Largest output admitted for `amount_in` of the other asset.
///
/// # Errors
///
/// - [`PairError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`PairError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, FeeRate};
/// use hydra_pair::math::quote;
///
/// let out = quote::amount_out(
///     Amount::new(100),
///     Amount::new(1_000),
///     Amount::new(1_000),
///     FeeRate::THIRTY_BPS,
/// );
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(PairError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PairError::InsufficientLiquidity);
    }
    let in_with_fee = mul(
        widen(amount_in.get()),
        U256::from(fee.complement()),
        "quote input with fee",
    )?;
    let numerator = mul(in_with_fee, widen(reserve_out.get()), "quote numerator")?;
    let denominator = mul(
        widen(reserve_in.get()),
        U256::from(fee.denominator()),
        "quote denominator",
    )?
    .checked_add(in_with_fee)
    .ok_or(PairError::Overflow("quote denominator"))?;
    let out = div_round(numerator, denominator, Rounding::Down)?;
    Ok(Amount::new(narrow(out, "quoted output")?))
}

/// Smallest input admitted for taking `amount_out` of the other asset.
///
/// # Errors
///
/// - [`PairError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`PairError::InsufficientLiquidity`] if `amount_out >= reserve_out`
///   or `reserve_in` is zero.
/// - [`PairError::Overflow`] if the required input does not fit in `u128`.
pub fn amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(PairError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || amount_out >= reserve_out {
        return Err(PairError::InsufficientLiquidity);
    }
    let numerator = mul(
        mul(widen(reserve_in.get()), widen(amount_out.get()), "quote numerator")?,
        U256::from(fee.denominator()),
        "quote numerator",
    )?;
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = mul(
        widen(remaining),
        U256::from(fee.complement()),
        "quote denominator",
    )?;
    let required = div_round(numerator, denominator, Rounding::Up)?;
    Ok(Amount::new(narrow(required, "quoted input")?))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::check_fee_adjusted_product;

    const FEE: FeeRate = FeeRate::THIRTY_BPS;

    fn a(v: u128) -> Amount {
        Amount::new(v)
    }

    #[test]
    fn amount_out_matches_worked_example() {
        assert_eq!(amount_out(a(100), a(1_000), a(1_000), FEE), Ok(a(90)));
    }

    #[test]
    fn amount_out_rejects_degenerate_inputs() {
        assert_eq!(
            amount_out(a(0), a(1_000), a(1_000), FEE),
            Err(PairError::InsufficientInputAmount)
        );
        assert_eq!(
            amount_out(a(10), a(0), a(1_000), FEE),
            Err(PairError::InsufficientLiquidity)
        );
    }

    #[test]
    fn amount_out_is_the_admission_boundary() {
        let (r_in, r_out, input) = (a(5_000_000), a(3_000_000), a(12_345));
        let Ok(out) = amount_out(input, r_in, r_out, FEE) else {
            panic!("expected Ok");
        };
        let b_in = a(r_in.get() + input.get());
        let admitted = |o: u128| {
            check_fee_adjusted_product(b_in, a(r_out.get() - o), input, a(0), r_in, r_out, FEE)
        };
        assert_eq!(admitted(out.get()), Ok(()));
        assert_eq!(admitted(out.get() + 1), Err(PairError::InvariantViolation));
    }

    #[test]
    fn amount_in_is_the_admission_boundary() {
        let (r_in, r_out, out) = (a(2_000_000), a(7_000_000), a(40_000));
        let Ok(input) = amount_in(out, r_in, r_out, FEE) else {
            panic!("expected Ok");
        };
        let b_out = a(r_out.get() - out.get());
        let admitted = |i: u128| {
            check_fee_adjusted_product(a(r_in.get() + i), b_out, a(i), a(0), r_in, r_out, FEE)
        };
        assert_eq!(admitted(input.get()), Ok(()));
        assert_eq!(admitted(input.get() - 1), Err(PairError::InvariantViolation));
    }

    #[test]
    fn amount_in_rejects_draining_output() {
        assert_eq!(
            amount_in(a(1_000), a(1_000), a(1_000), FEE),
            Err(PairError::InsufficientLiquidity)
        );
        assert_eq!(
            amount_in(a(0), a(1_000), a(1_000), FEE),
            Err(PairError::InsufficientOutputAmount)
        );
    }
}
