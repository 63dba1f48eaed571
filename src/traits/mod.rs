//! Trait seams of the pair.
//!
//! [`FromConfig`] builds a pair from its configuration, and
//! [`FlashSwapCallee`] is the external counterparty invoked in the middle of
//! a flash swap.

mod callee;
mod from_config;

pub use callee::FlashSwapCallee;
pub use from_config::FromConfig;
