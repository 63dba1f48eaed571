//! The State Store and its reentrancy lock.
//!
//! [`PairState`] is the single record every engine reads and writes.  It is
//! owned exclusively by a [`Pair`](crate::pair::Pair); engines receive it by
//! `&mut` for the duration of one transition and write it back through a
//! single commit.

mod ledger;
mod lock;
mod store;

pub use ledger::ShareLedger;
pub use lock::ReentrancyLock;
pub use store::PairState;

pub(crate) use store::{ShareChange, Transition};
