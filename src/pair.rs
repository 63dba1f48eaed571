//! The constant-product pair.
//!
//! [`Pair`] owns its [`PairConfig`] and its [`PairState`] and is the only
//! public way to mutate either.  Every mutating method runs exactly one
//! transition and either commits it whole or returns an error with the
//! state untouched.
//!
//! # Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`mint`](Pair::mint) | deposit both assets, credit shares |
//! | [`burn`](Pair::burn) | destroy shares, release pro-rata assets |
//! | [`swap`](Pair::swap) | exchange under the fee-adjusted product check |
//! | [`begin_flash_swap`](Pair::begin_flash_swap) | release outputs, lock the pair |
//! | [`repay_flash_swap`](Pair::repay_flash_swap) | credit the repayment |
//! | [`verify_flash_swap`](Pair::verify_flash_swap) | check, commit reserves, unlock |
//!
//! Driving the three flash-swap phases by hand leaves rollback to the
//! caller.  [`ExecutionContext`](crate::context::ExecutionContext) runs
//! them as one all-or-nothing unit.

use crate::config::PairConfig;
use crate::domain::{
    AccountId, Amount, BurnOutcome, FlashSession, FlashSwapOutcome, Liquidity, MintOutcome,
    Phase, ReserveSnapshot, SessionId, SwapOutcome, SwapRequest,
};
use crate::engine;
#[cfg(doc)]
use crate::error::PairError;
use crate::error::Result;
use crate::math::U256;
use crate::state::PairState;
use crate::traits::FromConfig;

/// A constant-product pair of two assets.
///
/// Created empty from a [`PairConfig`] via [`FromConfig`].
///
/// # Example
///
/// ```rust
/// use hydra_pair::config::PairConfig;
/// use hydra_pair::domain::{AccountId, Amount, SwapRequest, TokenAddress, TokenPair};
/// use hydra_pair::pair::Pair;
/// use hydra_pair::traits::FromConfig;
///
/// let tokens = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct");
/// let mut pair = Pair::from_config(&PairConfig::new(tokens)).expect("valid config");
///
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let minted = pair
///     .mint(alice, Amount::new(1_000_000), Amount::new(1_000_000))
///     .expect("first mint");
/// assert_eq!(minted.liquidity.get(), 999_000);
///
/// let out = pair
///     .swap(SwapRequest::zero_for_one(Amount::new(1_000), Amount::new(996)))
///     .expect("swap ok");
/// assert_eq!(out.reserve0, Amount::new(1_001_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    config: PairConfig,
    state: PairState,
}

impl FromConfig<PairConfig> for Pair {
    /// Validates `config` and creates an empty pair.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PairConfig::validate`].
    fn from_config(config: &PairConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: *config,
            state: PairState::new(),
        })
    }
}

impl Pair {
    /// Deposits `amount0` and `amount1` for `to`.
    ///
    /// The amounts are taken as already transferred to the pair.
    ///
    /// # Errors
    ///
    /// - [`PairError::LockHeld`] if a flash swap is open.
    /// - [`PairError::Overflow`] if a reserve would exceed the ceiling.
    /// - [`PairError::InsufficientLiquidityMinted`] if the deposit rounds to
    ///   zero shares.
    pub fn mint(
        &mut self,
        to: AccountId,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<MintOutcome> {
        engine::mint(&mut self.state, &self.config, to, amount0, amount1)
    }

    /// Burns `liquidity` of `owner`'s shares.
    ///
    /// # Errors
    ///
    /// - [`PairError::LockHeld`] if a flash swap is open.
    /// - [`PairError::InsufficientShares`] if `owner` holds too few shares.
    /// - [`PairError::InsufficientLiquidityBurned`] if either released
    ///   amount rounds to zero.
    pub fn burn(&mut self, owner: AccountId, liquidity: Liquidity) -> Result<BurnOutcome> {
        engine::burn(&mut self.state, owner, liquidity)
    }

    /// Executes a single-step swap.
    ///
    /// The inputs in `request` are taken as already transferred.
    ///
    /// # Errors
    ///
    /// - [`PairError::LockHeld`] if a flash swap is open.
    /// - [`PairError::InsufficientOutputAmount`],
    ///   [`PairError::InsufficientLiquidity`],
    ///   [`PairError::InsufficientInputAmount`] for malformed requests.
    /// - [`PairError::Overflow`] if a balance would exceed the ceiling.
    /// - [`PairError::InvariantViolation`] if the fee-adjusted product would
    ///   decrease.
    pub fn swap(&mut self, request: SwapRequest) -> Result<SwapOutcome> {
        engine::swap(&mut self.state, &self.config, request)
    }

    /// Opens a flash swap releasing `amount0_out` and `amount1_out`.
    ///
    /// The pair stays locked until [`verify_flash_swap`](Self::verify_flash_swap)
    /// succeeds.
    ///
    /// # Errors
    ///
    /// - [`PairError::LockHeld`] if a flash swap is already open.
    /// - [`PairError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`PairError::InsufficientLiquidity`] if an output reaches its
    ///   reserve.
    pub fn begin_flash_swap(
        &mut self,
        amount0_out: Amount,
        amount1_out: Amount,
    ) -> Result<FlashSession> {
        engine::begin(&mut self.state, amount0_out, amount1_out)
    }

    /// Credits the repayment of session `id`.
    ///
    /// # Errors
    ///
    /// - [`PairError::InvalidPhase`] unless the pair awaits a callback.
    /// - [`PairError::SessionMismatch`] if `id` is not the open session.
    /// - [`PairError::Overflow`] if a balance would exceed the ceiling.
    pub fn repay_flash_swap(
        &mut self,
        id: SessionId,
        repay0: Amount,
        repay1: Amount,
    ) -> Result<()> {
        engine::callback(&mut self.state, &self.config, id, repay0, repay1)
    }

    /// Verifies session `id` and unlocks the pair.
    ///
    /// # Errors
    ///
    /// - [`PairError::InvalidPhase`] unless the pair awaits verification.
    /// - [`PairError::SessionMismatch`] if `id` is not the open session.
    /// - [`PairError::InsufficientInputAmount`] if nothing was repaid beyond
    ///   the reserves.
    /// - [`PairError::InvariantViolation`] if the repayment does not cover
    ///   the fee-adjusted product.
    pub fn verify_flash_swap(&mut self, id: SessionId) -> Result<FlashSwapOutcome> {
        engine::verify(&mut self.state, &self.config, id)
    }

    /// Reserves for a price observer, or `None` while a flash swap is open.
    #[must_use]
    pub fn reserve_snapshot(&self) -> Option<ReserveSnapshot> {
        if self.state.lock().is_held() {
            return None;
        }
        Some(ReserveSnapshot {
            reserve0: self.state.reserve0(),
            reserve1: self.state.reserve1(),
        })
    }

    /// Returns `(reserve0, reserve1)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.state.reserve0(), self.state.reserve1())
    }

    /// Returns `(balance0, balance1)`.
    #[must_use]
    pub const fn balances(&self) -> (Amount, Amount) {
        (self.state.balance0(), self.state.balance1())
    }

    /// Returns the total share supply, including the locked minimum.
    #[must_use]
    pub const fn total_supply(&self) -> Liquidity {
        self.state.total_supply()
    }

    /// Returns the reserve product recorded by the last mint or burn.
    ///
    /// Swaps and verified flash swaps do not update it.
    #[must_use]
    pub const fn k_last(&self) -> U256 {
        self.state.k_last()
    }

    /// Returns the current lock phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the open flash-swap session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&FlashSession> {
        self.state.lock().session()
    }

    /// Returns the shares credited to `account`.
    #[must_use]
    pub fn share_balance(&self, account: &AccountId) -> Liquidity {
        self.state.ledger().balance_of(account)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PairConfig {
        &self.config
    }

    /// Returns the full state store.
    #[must_use]
    pub const fn state(&self) -> &PairState {
        &self.state
    }

    /// Replaces the state with a checkpoint taken earlier from this pair.
    ///
    /// Session ids issued after the checkpoint stay consumed, so an id from
    /// a discarded session never names a later one.
    pub(crate) fn restore(&mut self, checkpoint: PairState) {
        self.state.rewind(checkpoint);
    }
}
