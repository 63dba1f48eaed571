//! The pair's persistent record and its single commit point.

use super::{ReentrancyLock, ShareLedger};
use crate::domain::{AccountId, Amount, FlashSession, Liquidity, Phase};
use crate::error::Result;
use crate::math::U256;

/// Ledger effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShareChange {
    /// Swaps and flash-swap phases leave the ledger alone.
    None,
    /// Credit `liquidity` to `to`, and lock `locked` with no owner.
    Mint {
        to: AccountId,
        liquidity: Liquidity,
        locked: Liquidity,
    },
    /// Destroy `liquidity` of `owner`'s shares.
    Burn { owner: AccountId, liquidity: Liquidity },
}

/// The complete next state computed by an engine, applied by
/// [`PairState::commit`] in one step.
///
/// Engines start from [`Transition::from_state`] and overwrite only what
/// they change, so untouched fields carry over by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub reserve0: Amount,
    pub reserve1: Amount,
    pub balance0: Amount,
    pub balance1: Amount,
    pub total_supply: Liquidity,
    pub k_last: U256,
    pub shares: ShareChange,
    pub phase: Phase,
    pub session: Option<FlashSession>,
}

impl Transition {
    pub(crate) fn from_state(state: &PairState) -> Self {
        Self {
            reserve0: state.reserve0,
            reserve1: state.reserve1,
            balance0: state.balance0,
            balance1: state.balance1,
            total_supply: state.total_supply,
            k_last: state.k_last,
            shares: ShareChange::None,
            phase: state.lock.phase(),
            session: state.lock.session().copied(),
        }
    }
}

/// Reserves, balances, share ledger, `kLast` and lock of one pair.
///
/// Created empty and mutated only through [`commit`](Self::commit), which
/// the engines call once per transition after every check has passed.
/// While the phase is `Idle`:
///
/// - `reserve0 == balance0` and `reserve1 == balance1`;
/// - `reserve0 · reserve1 >= k_last`;
/// - `ledger.held() + ledger.locked() == total_supply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairState {
    reserve0: Amount,
    reserve1: Amount,
    balance0: Amount,
    balance1: Amount,
    ledger: ShareLedger,
    total_supply: Liquidity,
    k_last: U256,
    lock: ReentrancyLock,
}

impl PairState {
    /// Creates an empty store: all quantities zero, phase `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached reserve of token0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Cached reserve of token1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Actual holding of token0.
    pub const fn balance0(&self) -> Amount {
        self.balance0
    }

    /// Actual holding of token1.
    pub const fn balance1(&self) -> Amount {
        self.balance1
    }

    /// The share ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ShareLedger {
        &self.ledger
    }

    /// Total shares outstanding, including the locked minimum.
    #[must_use]
    pub const fn total_supply(&self) -> Liquidity {
        self.total_supply
    }

    /// Reserve product recorded by the last mint or burn.
    ///
    /// Swap and Verify leave it unchanged; their fee-adjusted check already
    /// keeps `reserve0 · reserve1 >= k_last`.
    #[must_use]
    pub const fn k_last(&self) -> U256 {
        self.k_last
    }

    /// The reentrancy lock.
    #[must_use]
    pub const fn lock(&self) -> &ReentrancyLock {
        &self.lock
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.lock.phase()
    }

    /// Rewinds to `checkpoint`, keeping the session ids issued since it was
    /// taken.
    pub(crate) fn rewind(&mut self, mut checkpoint: PairState) {
        checkpoint.lock.keep_issued_ids(&self.lock);
        *self = checkpoint;
    }

    /// Replaces the whole state with `next`.
    ///
    /// The ledger change is the only fallible step and runs first; if it
    /// fails nothing has been written.
    pub(crate) fn commit(&mut self, next: Transition) -> Result<()> {
        match next.shares {
            ShareChange::None => {}
            ShareChange::Mint {
                to,
                liquidity,
                locked,
            } => {
                let mut ledger = self.ledger.clone();
                ledger.lock(locked)?;
                ledger.credit(to, liquidity)?;
                self.ledger = ledger;
            }
            ShareChange::Burn { owner, liquidity } => {
                self.ledger.debit(owner, liquidity)?;
            }
        }
        self.reserve0 = next.reserve0;
        self.reserve1 = next.reserve1;
        self.balance0 = next.balance0;
        self.balance1 = next.balance1;
        self.total_supply = next.total_supply;
        self.k_last = next.k_last;
        self.lock.commit(next.phase, next.session);
        Ok(())
    }
}
