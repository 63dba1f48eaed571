//! Liquidity-share ledger.

use rustc_hash::FxHashMap;

use crate::domain::{AccountId, Liquidity};
use crate::error::{PairError, Result};
use crate::math::CheckedArithmetic;

/// Sparse mapping from account to share balance.
///
/// Accounts with a zero balance are not stored.  The sum of all stored
/// balances is maintained as a running total ([`held`](Self::held)) so the
/// supply invariant can be checked without enumeration; the
/// [`enumerated_total`](Self::enumerated_total) walk is kept for tests and
/// audits.
///
/// The permanently locked minimum is not owned by any account and is
/// recorded separately in [`locked`](Self::locked).  Nothing ever reduces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: FxHashMap<AccountId, Liquidity>,
    held: Liquidity,
    locked: Liquidity,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares credited to `account` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Liquidity {
        self.balances
            .get(account)
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// Running total of all account balances.
    #[must_use]
    pub const fn held(&self) -> Liquidity {
        self.held
    }

    /// Shares locked with no owner.
    #[must_use]
    pub const fn locked(&self) -> Liquidity {
        self.locked
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Iterates over `(account, balance)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Liquidity)> {
        self.balances.iter()
    }

    /// Sums every balance by walking the map.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Overflow`] if the sum exceeds `u128`, which a
    /// consistent ledger never does.
    pub fn enumerated_total(&self) -> Result<Liquidity> {
        self.balances
            .values()
            .try_fold(Liquidity::ZERO, |acc, v| acc.safe_add(v, "ledger sum"))
    }

    /// Adds `amount` to `to`. Leaves the ledger untouched on error.
    pub(crate) fn credit(&mut self, to: AccountId, amount: Liquidity) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let held = self.held.safe_add(&amount, "held shares")?;
        let balance = self.balance_of(&to).safe_add(&amount, "account shares")?;
        self.balances.insert(to, balance);
        self.held = held;
        Ok(())
    }

    /// Removes `amount` from `from`. Leaves the ledger untouched on error.
    pub(crate) fn debit(&mut self, from: AccountId, amount: Liquidity) -> Result<()> {
        let current = self.balance_of(&from);
        let Some(remaining) = current.checked_sub(&amount) else {
            return Err(PairError::InsufficientShares {
                held: current,
                requested: amount,
            });
        };
        let held = self.held.safe_sub(&amount, "held shares")?;
        if remaining.is_zero() {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, remaining);
        }
        self.held = held;
        Ok(())
    }

    /// Records shares locked with no owner.
    pub(crate) fn lock(&mut self, amount: Liquidity) -> Result<()> {
        self.locked = self.locked.safe_add(&amount, "locked shares")?;
        Ok(())
    }
}
