//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```

pub use crate::config::{PairConfig, MINIMUM_LIQUIDITY};
pub use crate::context::{ExecutionContext, FlashSwapHandle};
pub use crate::domain::{
    AccountId, Amount, BurnOutcome, FeeRate, FlashSession, FlashSwapOutcome, Liquidity,
    MintOutcome, Phase, ReserveSnapshot, SessionId, SwapOutcome, SwapRequest, TokenAddress,
    TokenPair,
};
pub use crate::error::{PairError, Result};
pub use crate::invariants::{check_invariants, InvariantBreach};
pub use crate::math::quote;
pub use crate::pair::Pair;
pub use crate::traits::{FlashSwapCallee, FromConfig};
