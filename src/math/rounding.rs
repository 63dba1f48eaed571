//! Division with an explicit rounding direction.
//!
//! # Convention
//!
//! Truncation always favours the pair:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Shares minted | [`Rounding::Down`] |
//! | Assets released on burn | [`Rounding::Down`] |
//! | Quoted swap output | [`Rounding::Down`] |
//! | Quoted swap input | [`Rounding::Up`] |

use super::wide::{mul, narrow, widen, U256};
use crate::domain::Rounding;
use crate::error::{PairError, Result};

/// `numerator / denominator` on 256-bit values, rounded as requested.
///
/// # Errors
///
/// Returns [`PairError::DivisionByZero`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Rounding;
/// use hydra_pair::math::{div_round, U256};
///
/// let q = div_round(U256::from(10u8), U256::from(3u8), Rounding::Down);
/// assert_eq!(q, Ok(U256::from(3u8)));
/// let q = div_round(U256::from(10u8), U256::from(3u8), Rounding::Up);
/// assert_eq!(q, Ok(U256::from(4u8)));
/// ```
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(PairError::DivisionByZero);
    }
    let (q, r) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Ok(q),
        Rounding::Up if r.is_zero() => Ok(q),
        // q < numerator <= U256::MAX whenever r != 0, so q + 1 cannot overflow.
        Rounding::Up => Ok(q + U256::one()),
    }
}

/// `value · scale / whole` on `u128` operands with a 256-bit intermediate.
///
/// Used for every pro-rata share computation (mint against the supply,
/// burn against the balances).
///
/// # Errors
///
/// - [`PairError::DivisionByZero`] if `whole` is zero.
/// - [`PairError::Overflow`] tagged with `what` if the quotient needs more
///   than 128 bits.
pub fn mul_div(
    value: u128,
    scale: u128,
    whole: u128,
    rounding: Rounding,
    what: &'static str,
) -> Result<u128> {
    let product = mul(widen(value), widen(scale), what)?;
    narrow(div_round(product, widen(whole), rounding)?, what)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn u(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            div_round(u(1), U256::zero(), Rounding::Down),
            Err(PairError::DivisionByZero)
        );
        assert_eq!(
            div_round(U256::zero(), U256::zero(), Rounding::Up),
            Err(PairError::DivisionByZero)
        );
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(u(100), u(10), Rounding::Down), Ok(u(10)));
        assert_eq!(div_round(u(100), u(10), Rounding::Up), Ok(u(10)));
    }

    #[test]
    fn remainder_splits_directions() {
        assert_eq!(div_round(u(9), u(10), Rounding::Down), Ok(u(0)));
        assert_eq!(div_round(u(9), u(10), Rounding::Up), Ok(u(1)));
    }

    #[test]
    fn mul_div_keeps_wide_intermediate() {
        let big = (1u128 << 112) - 1;
        assert_eq!(mul_div(big, big, big, Rounding::Down, "x"), Ok(big));
        assert_eq!(mul_div(1_000, 3_000, 3_000, Rounding::Down, "x"), Ok(1_000));
        assert_eq!(mul_div(1, 2, 3, Rounding::Down, "x"), Ok(0));
        assert_eq!(mul_div(1, 2, 3, Rounding::Up, "x"), Ok(1));
        assert_eq!(
            mul_div(1, 1, 0, Rounding::Down, "x"),
            Err(PairError::DivisionByZero)
        );
    }

    #[test]
    fn max_numerator_rounds_up_without_overflow() {
        let Ok(q) = div_round(U256::MAX, u(2), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(q, (U256::MAX / u(2)) + U256::one());
    }
}
