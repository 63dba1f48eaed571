//! Pair configuration.
//!
//! [`PairConfig`] is the declarative blueprint a [`Pair`](crate::pair::Pair)
//! is built from, together with the canonical parameter values.

mod pair_config;

pub use pair_config::{PairConfig, DEFAULT_FEE, MAX_RESERVE_CEILING, MINIMUM_LIQUIDITY};
