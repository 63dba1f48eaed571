//! # Hydra Pair
//!
//! Constant-product pair state machine: one pool of two assets with
//! liquidity shares, fee-charging swaps, and three-phase flash swaps
//! guarded by an explicit reentrancy lock.
//!
//! The crate is the accounting core only.  It never moves tokens: every
//! amount passed to a transition is assumed to be already reflected in the
//! pair's balances by an external transfer layer.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on configuration and value types |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pair::prelude::*;
//!
//! // 1. Two distinct assets, supplied once by the registry.
//! let tokens = TokenPair::new(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     TokenAddress::from_bytes([2u8; 32]),
//! )
//! .expect("distinct tokens");
//!
//! // 2. Build an empty pair with the default 0.3% fee.
//! let mut pair = Pair::from_config(&PairConfig::new(tokens)).expect("valid config");
//!
//! // 3. First deposit: sqrt(2000 · 2000) − 1000 shares, 1000 locked forever.
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let minted = pair.mint(alice, Amount::new(2_000), Amount::new(2_000)).expect("mint");
//! assert_eq!(minted.liquidity, Liquidity::new(1_000));
//! assert_eq!(pair.total_supply(), Liquidity::new(2_000));
//!
//! // 4. Swap 100 token0 for the largest admitted token1 output.
//! let (r0, r1) = pair.reserves();
//! let out = quote::amount_out(Amount::new(100), r0, r1, pair.config().fee()).expect("quote");
//! pair.swap(SwapRequest::zero_for_one(Amount::new(100), out)).expect("swap");
//!
//! check_invariants(&pair).expect("idle invariants hold");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ ExecutionContext │  checkpoint / commit / abandon, drives flash swaps
//! └────────┬─────────┘
//!          │ &mut Pair
//!          ▼
//! ┌──────────────────┐
//! │       Pair       │  config + state, the only mutation surface
//! └────────┬─────────┘
//!          │ &mut PairState
//!          ▼
//! ┌──────────────────┐
//! │     Engines      │  mint, burn, swap, begin / callback / verify
//! └────────┬─────────┘
//!          │ Transition → commit
//!          ▼
//! ┌──────────────────┐
//! │    PairState     │  reserves, balances, ShareLedger, k_last, lock
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Phase`](domain::Phase), outcomes |
//! | [`math`] | Checked arithmetic, 256-bit intermediates, the fee-adjusted product check, [`quote`](math::quote) |
//! | [`config`] | [`PairConfig`](config::PairConfig) and the canonical constants |
//! | [`state`] | [`PairState`](state::PairState), [`ShareLedger`](state::ShareLedger), [`ReentrancyLock`](state::ReentrancyLock) |
//! | [`pair`] | [`Pair`](pair::Pair): mint, burn, swap and the flash-swap phases |
//! | [`context`] | [`ExecutionContext`](context::ExecutionContext): the all-or-nothing boundary |
//! | [`invariants`] | [`check_invariants`](invariants::check_invariants) for tests and audits |
//! | [`traits`] | [`FromConfig`](traits::FromConfig), [`FlashSwapCallee`](traits::FlashSwapCallee) |
//! | [`error`] | [`PairError`](error::PairError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod context;
pub mod domain;
mod engine;
pub mod error;
pub mod invariants;
pub mod math;
pub mod pair;
pub mod prelude;
pub mod state;
pub mod traits;
