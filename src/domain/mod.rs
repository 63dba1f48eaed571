//! Value types of the pair domain.
//!
//! Quantities ([`Amount`], [`Liquidity`]), identities ([`TokenAddress`],
//! [`AccountId`], [`TokenPair`]), the fee ([`FeeRate`]), the lock
//! ([`Phase`], [`SessionId`]), swap parameters and transition records.
//! Newtypes keep asset quantities and share counts from being mixed up.

mod amount;
mod fee_rate;
mod identity;
mod liquidity;
mod outcome;
mod phase;
mod rounding;
mod swap_request;
mod token_pair;

pub use amount::Amount;
pub use fee_rate::FeeRate;
pub use identity::{AccountId, TokenAddress};
pub use liquidity::Liquidity;
pub use outcome::{
    BurnOutcome, FlashSession, FlashSwapOutcome, MintOutcome, ReserveSnapshot, SwapOutcome,
};
pub use phase::{Phase, SessionId};
pub use rounding::Rounding;
pub use swap_request::SwapRequest;
pub use token_pair::TokenPair;
