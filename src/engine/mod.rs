//! Transition engines.
//!
//! Each engine is a free function over `&mut PairState` that runs exactly
//! one transition:
//!
//! 1. enter the lock for the phases it accepts;
//! 2. validate inputs and compute the complete next state into a
//!    [`Transition`](crate::state::Transition) with checked arithmetic;
//! 3. commit it in one step.
//!
//! Any error before step 3 returns with the store untouched.
//!
//! | Engine | Entry phase | Exit phase |
//! |--------|-------------|------------|
//! | [`mint`] | Idle | Idle |
//! | [`burn`] | Idle | Idle |
//! | [`swap`] | Idle | Idle |
//! | [`begin`] | Idle | AwaitingCallback |
//! | [`callback`] | AwaitingCallback | AwaitingVerification |
//! | [`verify`] | AwaitingVerification | Idle |

mod burn;
mod flash;
mod mint;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub(crate) use burn::burn;
pub(crate) use flash::{begin, callback, verify};
pub(crate) use mint::mint;
pub(crate) use swap::swap;
