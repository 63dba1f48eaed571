//! Idle-state invariants as a callable check.
//!
//! Whenever the pair is `Idle`:
//!
//! 1. `reserve0 == balance0` and `reserve1 == balance1`;
//! 2. `reserve0 · reserve1 >= k_last`;
//! 3. with a non-zero supply, the enumerated account shares plus the
//!    locked minimum equal `total_supply`, and the running total agrees
//!    with the enumeration;
//! 4. the locked minimum is exactly the configured value once minted.
//!
//! [`check_invariants`] walks the whole ledger and is meant for tests and
//! audits, not for the transition path.

use thiserror::Error;

use crate::domain::{Amount, Liquidity, Phase};
use crate::error::PairError;
use crate::math::{reserve_product, U256};
use crate::pair::Pair;

/// A violated Idle-state invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantBreach {
    /// The pair is not `Idle`; the invariants are not defined.
    #[error("pair is not idle (phase {0})")]
    NotIdle(Phase),

    /// A reserve differs from its balance.
    #[error("reserve{index} {reserve} differs from balance{index} {balance}")]
    ReserveBalanceSkew {
        /// `0` or `1`.
        index: u8,
        /// Cached reserve.
        reserve: Amount,
        /// Actual balance.
        balance: Amount,
    },

    /// The reserve product is below `k_last`.
    #[error("reserve product {product} below k_last {k_last}")]
    ProductBelowKLast {
        /// `reserve0 · reserve1`.
        product: U256,
        /// Recorded `k_last`.
        k_last: U256,
    },

    /// Account shares plus the locked minimum do not add up to the supply.
    #[error("ledger holds {enumerated} + {locked} locked, total supply is {total_supply}")]
    SupplyMismatch {
        /// Sum of all account balances, by enumeration.
        enumerated: Liquidity,
        /// Shares locked with no owner.
        locked: Liquidity,
        /// Recorded total supply.
        total_supply: Liquidity,
    },

    /// The maintained running total drifted from the enumeration.
    #[error("running total {held} differs from enumerated {enumerated}")]
    RunningTotalDrift {
        /// Maintained running total.
        held: Liquidity,
        /// Sum by enumeration.
        enumerated: Liquidity,
    },

    /// A quantity the check needs could not be computed.
    #[error("invariant check could not compute a quantity: {0}")]
    Arithmetic(#[from] PairError),

    /// The locked minimum is not the configured value.
    #[error("locked minimum is {locked}, expected {expected}")]
    LockedMinimum {
        /// Shares locked with no owner.
        locked: Liquidity,
        /// Configured minimum liquidity.
        expected: Liquidity,
    },
}

/// Checks every Idle-state invariant of `pair`.
///
/// # Errors
///
/// Returns the first [`InvariantBreach`] found.
pub fn check_invariants(pair: &Pair) -> Result<(), InvariantBreach> {
    let phase = pair.phase();
    if phase.is_held() {
        return Err(InvariantBreach::NotIdle(phase));
    }

    let (reserve0, reserve1) = pair.reserves();
    let (balance0, balance1) = pair.balances();
    for (index, reserve, balance) in [(0u8, reserve0, balance0), (1u8, reserve1, balance1)] {
        if reserve != balance {
            return Err(InvariantBreach::ReserveBalanceSkew {
                index,
                reserve,
                balance,
            });
        }
    }

    let k_last = pair.k_last();
    let product = reserve_product(reserve0, reserve1)?;
    if product < k_last {
        return Err(InvariantBreach::ProductBelowKLast { product, k_last });
    }

    let ledger = pair.state().ledger();
    let total_supply = pair.total_supply();
    let locked = ledger.locked();
    let held = ledger.held();
    let enumerated = ledger.enumerated_total()?;
    if enumerated != held {
        return Err(InvariantBreach::RunningTotalDrift { held, enumerated });
    }
    if total_supply.is_zero() {
        if !enumerated.is_zero() || !locked.is_zero() {
            return Err(InvariantBreach::SupplyMismatch {
                enumerated,
                locked,
                total_supply,
            });
        }
        return Ok(());
    }
    if enumerated.checked_add(&locked) != Some(total_supply) {
        return Err(InvariantBreach::SupplyMismatch {
            enumerated,
            locked,
            total_supply,
        });
    }
    let expected = pair.config().minimum_liquidity();
    if locked != expected {
        return Err(InvariantBreach::LockedMinimum { locked, expected });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PairConfig;
    use crate::domain::{AccountId, SwapRequest, TokenAddress, TokenPair};
    use crate::traits::FromConfig;

    fn make_pair() -> Pair {
        let Ok(tokens) = TokenPair::new(
            TokenAddress::from_bytes([1u8; 32]),
            TokenAddress::from_bytes([2u8; 32]),
        ) else {
            panic!("valid pair");
        };
        let Ok(pair) = Pair::from_config(&PairConfig::new(tokens)) else {
            panic!("valid config");
        };
        pair
    }

    #[test]
    fn empty_pair_holds() {
        assert_eq!(check_invariants(&make_pair()), Ok(()));
    }

    #[test]
    fn holds_across_mint_swap_burn() {
        let mut pair = make_pair();
        let lp = AccountId::from_bytes([3; 32]);
        let Ok(_) = pair.mint(lp, Amount::new(50_000), Amount::new(80_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(check_invariants(&pair), Ok(()));
        let request = SwapRequest::zero_for_one(Amount::new(5_000), Amount::new(7_000));
        let Ok(_) = pair.swap(request) else {
            panic!("expected Ok");
        };
        assert_eq!(check_invariants(&pair), Ok(()));
        let Ok(_) = pair.burn(lp, Liquidity::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(check_invariants(&pair), Ok(()));
    }

    #[test]
    fn open_session_is_not_idle() {
        let mut pair = make_pair();
        let Ok(_) = pair.mint(
            AccountId::from_bytes([3; 32]),
            Amount::new(50_000),
            Amount::new(50_000),
        ) else {
            panic!("expected Ok");
        };
        let Ok(_) = pair.begin_flash_swap(Amount::new(10), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(
            check_invariants(&pair),
            Err(InvariantBreach::NotIdle(Phase::AwaitingCallback))
        );
    }

    #[test]
    fn arithmetic_failure_is_reported_not_masked() {
        let breach = InvariantBreach::from(PairError::Overflow("ledger sum"));
        assert_eq!(breach, InvariantBreach::Arithmetic(PairError::Overflow("ledger sum")));
        assert!(breach.to_string().contains("ledger sum"));
    }
}
