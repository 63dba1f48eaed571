//! Property-based tests for the transition engines.
//!
//! 1. **k monotonicity**: the reserve product never decreases across
//!    random swap sequences, and stays at or above `k_last`.
//! 2. **Ledger conservation**: held + locked shares equal the total supply
//!    after any sequence of mints and burns.
//! 3. **Rounding favours the pool**: a mint never credits more than the
//!    deposit is worth, and a burn never releases more than the shares are.
//! 4. **Quote boundary**: the quoted output is admitted, one more unit is
//!    rejected.
//! 5. **Flash-swap isolation**: Begin and Callback never move reserves; a
//!    failed Verify leaves the store exactly as it was.

use proptest::prelude::*;

use super::tests_support::{acct, config, pool};
use super::{begin, burn, callback, mint, swap, verify};
use crate::domain::{Amount, Liquidity, Phase, SwapRequest};
use crate::math::{quote, reserve_product};
use crate::state::PairState;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// A swap leg: direction and input as a per-mille fraction of the reserve.
fn swap_leg_strategy() -> impl Strategy<Value = (bool, u128)> {
    (any::<bool>(), 1u128..=500u128)
}

/// A ledger action: `true` mints `(a, b)`, `false` burns a fraction of the
/// actor's shares.
fn ledger_action_strategy() -> impl Strategy<Value = (bool, u8, u128, u128)> {
    (any::<bool>(), 1u8..=4u8, 1u128..=1_000_000u128, 1u128..=1_000_000u128)
}

fn assert_idle_consistent(state: &PairState) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.phase(), Phase::Idle);
    prop_assert_eq!(state.reserve0(), state.balance0());
    prop_assert_eq!(state.reserve1(), state.balance1());
    let Ok(k) = reserve_product(state.reserve0(), state.reserve1()) else {
        return Err(TestCaseError::fail("reserve product"));
    };
    prop_assert!(k >= state.k_last());
    let ledger = state.ledger();
    prop_assert_eq!(
        ledger.held().get() + ledger.locked().get(),
        state.total_supply().get()
    );
    prop_assert_eq!(ledger.enumerated_total(), Ok(ledger.held()));
    Ok(())
}

// ---------------------------------------------------------------------------
// Property 1: k monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_decrease_k(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        legs in proptest::collection::vec(swap_leg_strategy(), 1..20),
    ) {
        let cfg = config();
        let mut state = pool(r0, r1);

        for (zero_for_one, per_mille) in legs {
            let Ok(k_before) = reserve_product(state.reserve0(), state.reserve1()) else {
                return Err(TestCaseError::fail("reserve product"));
            };
            let (reserve_in, reserve_out) = if zero_for_one {
                (state.reserve0(), state.reserve1())
            } else {
                (state.reserve1(), state.reserve0())
            };
            let amount_in = Amount::new((reserve_in.get() * per_mille / 1_000).max(1));
            let Ok(amount_out) = quote::amount_out(amount_in, reserve_in, reserve_out, cfg.fee())
            else {
                continue;
            };
            if amount_out.is_zero() {
                continue;
            }
            let request = if zero_for_one {
                SwapRequest::zero_for_one(amount_in, amount_out)
            } else {
                SwapRequest::one_for_zero(amount_in, amount_out)
            };
            prop_assert!(swap(&mut state, &cfg, request).is_ok());

            let Ok(k_after) = reserve_product(state.reserve0(), state.reserve1()) else {
                return Err(TestCaseError::fail("reserve product"));
            };
            prop_assert!(k_after >= k_before, "k decreased: {} < {}", k_after, k_before);
            assert_idle_consistent(&state)?;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: ledger conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_burn_conserve_supply(
        seed0 in reserve_strategy(),
        seed1 in reserve_strategy(),
        actions in proptest::collection::vec(ledger_action_strategy(), 1..24),
    ) {
        let cfg = config();
        let mut state = PairState::new();
        let seeded = mint(&mut state, &cfg, acct(0), Amount::new(seed0), Amount::new(seed1));
        prop_assert!(seeded.is_ok());

        for (is_mint, actor, a, b) in actions {
            let before = state.clone();
            let result = if is_mint {
                mint(&mut state, &cfg, acct(actor), Amount::new(a), Amount::new(b)).map(|_| ())
            } else {
                let held = state.ledger().balance_of(&acct(actor)).get();
                let share = Liquidity::new(held * (a % 100 + 1) / 100);
                burn(&mut state, acct(actor), share).map(|_| ())
            };
            if result.is_err() {
                prop_assert_eq!(&state, &before);
            }
            assert_idle_consistent(&state)?;
            prop_assert!(state.ledger().locked() == cfg.minimum_liquidity());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: rounding favours the pool
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_mint_never_over_credits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        a0 in 1u128..=10_000_000u128,
        a1 in 1u128..=10_000_000u128,
    ) {
        let cfg = config();
        let mut state = pool(r0, r1);
        let supply = state.total_supply().get();
        let Ok(out) = mint(&mut state, &cfg, acct(7), Amount::new(a0), Amount::new(a1)) else {
            return Ok(());
        };
        let minted = out.liquidity.get();
        // minted / supply <= a / r on both sides.
        prop_assert!(minted * r0 <= a0 * supply);
        prop_assert!(minted * r1 <= a1 * supply);
    }

    #[test]
    fn prop_burn_never_over_releases(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        pct in 1u128..=100u128,
    ) {
        let mut state = pool(r0, r1);
        let supply = state.total_supply().get();
        let held = state.ledger().balance_of(&acct(0)).get();
        let share = (held * pct / 100).max(1);
        let Ok(out) = burn(&mut state, acct(0), Liquidity::new(share)) else {
            return Ok(());
        };
        // released / balance <= share / supply on both sides.
        prop_assert!(out.amount0.get() * supply <= share * r0);
        prop_assert!(out.amount1.get() * supply <= share * r1);
    }
}

// ---------------------------------------------------------------------------
// Property 4: quote boundary
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quoted_output_is_the_boundary(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in 1u128..=5_000_000u128,
    ) {
        let cfg = config();
        let state = pool(r0, r1);
        let amount_in = Amount::new(amount_in);
        let Ok(out) = quote::amount_out(amount_in, state.reserve0(), state.reserve1(), cfg.fee())
        else {
            return Ok(());
        };
        if out.is_zero() {
            return Ok(());
        }

        let mut admitted = state.clone();
        let request = SwapRequest::zero_for_one(amount_in, out);
        prop_assert!(swap(&mut admitted, &cfg, request).is_ok());

        let one_more = Amount::new(out.get() + 1);
        if one_more < state.reserve1() {
            let mut rejected = state.clone();
            let request = SwapRequest::zero_for_one(amount_in, one_more);
            prop_assert!(swap(&mut rejected, &cfg, request).is_err());
            prop_assert_eq!(&rejected, &state);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: flash-swap isolation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_only_verify_moves_reserves(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        borrow_per_mille in 1u128..=999u128,
        repay0 in 0u128..=2_000_000u128,
        repay1 in 0u128..=2_000_000u128,
    ) {
        let cfg = config();
        let mut state = pool(r0, r1);
        let reserves = (state.reserve0(), state.reserve1());
        let borrow = Amount::new((r0 * borrow_per_mille / 1_000).max(1));

        let Ok(session) = begin(&mut state, borrow, Amount::ZERO) else {
            return Err(TestCaseError::fail("begin"));
        };
        prop_assert_eq!((state.reserve0(), state.reserve1()), reserves);

        let repaid = callback(&mut state, &cfg, session.id, Amount::new(repay0), Amount::new(repay1));
        prop_assert!(repaid.is_ok());
        prop_assert_eq!((state.reserve0(), state.reserve1()), reserves);

        let before_verify = state.clone();
        match verify(&mut state, &cfg, session.id) {
            Ok(out) => {
                prop_assert_eq!(out.reserve0, state.balance0());
                assert_idle_consistent(&state)?;
            }
            Err(_) => {
                prop_assert_eq!(&state, &before_verify);
                prop_assert_eq!((state.reserve0(), state.reserve1()), reserves);
                prop_assert!(state.lock().is_held());
            }
        }
    }
}
