//! All-or-nothing execution boundary.
//!
//! A flash swap is three transitions with foreign code in the middle.  The
//! pair itself only guarantees that each transition is atomic; it is the
//! enclosing context that must make the sequence atomic, discarding the
//! optimistic debit of Begin if Verify is never reached.
//!
//! [`ExecutionContext`] models that boundary in-process.  It checkpoints
//! the pair's state when opened and restores the checkpoint unless the
//! caller [`commit`](ExecutionContext::commit)s with the pair `Idle`.
//! Dropping an uncommitted context restores the checkpoint as well.
//!
//! ```text
//!   open ─▶ checkpoint
//!    │
//!    ├─ flash_swap: begin ─▶ callee(handle) ─▶ verify
//!    │                    failure: restore to before begin
//!    │
//!    ├─ commit   (Idle)     ─▶ keep effects
//!    └─ abandon / drop      ─▶ restore checkpoint
//! ```

use tracing::{debug, warn};

use crate::domain::{Amount, FlashSession, FlashSwapOutcome, Phase};
use crate::error::{PairError, Result};
use crate::pair::Pair;
use crate::state::PairState;
use crate::traits::FlashSwapCallee;

/// Transaction-like scope over a [`Pair`].
///
/// Holds the pair by `&mut`, so nothing else can touch it while the
/// context is open.
///
/// # Example
///
/// ```rust
/// use hydra_pair::config::PairConfig;
/// use hydra_pair::context::{ExecutionContext, FlashSwapHandle};
/// use hydra_pair::domain::{AccountId, Amount, TokenAddress, TokenPair};
/// use hydra_pair::error::Result;
/// use hydra_pair::pair::Pair;
/// use hydra_pair::traits::{FlashSwapCallee, FromConfig};
///
/// struct Arbitrageur;
///
/// impl FlashSwapCallee for Arbitrageur {
///     fn on_flash_swap(&mut self, handle: &mut FlashSwapHandle<'_>) -> Result<()> {
///         let borrowed = handle.session().amount0_out.get();
///         // ... use the borrowed token0 elsewhere, then repay with a premium.
///         handle.repay(Amount::new(borrowed + borrowed / 100), Amount::ZERO)
///     }
/// }
///
/// let tokens = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct");
/// let mut pair = Pair::from_config(&PairConfig::new(tokens)).expect("valid config");
/// pair.mint(AccountId::from_bytes([7; 32]), Amount::new(100_000), Amount::new(100_000))
///     .expect("seed");
///
/// let mut ctx = ExecutionContext::open(&mut pair);
/// let out = ctx
///     .flash_swap(Amount::new(1_000), Amount::ZERO, &mut Arbitrageur)
///     .expect("repaid");
/// assert_eq!(out.amount0_in, Amount::new(10));
/// ctx.commit().expect("idle");
///
/// assert_eq!(pair.reserves().0, Amount::new(100_010));
/// ```
#[derive(Debug)]
pub struct ExecutionContext<'p> {
    pair: &'p mut Pair,
    checkpoint: Option<PairState>,
}

impl<'p> ExecutionContext<'p> {
    /// Opens a context over `pair`, checkpointing its current state.
    pub fn open(pair: &'p mut Pair) -> Self {
        let checkpoint = Some(pair.state().clone());
        Self { pair, checkpoint }
    }

    /// Read access to the pair.
    #[must_use]
    pub fn pair(&self) -> &Pair {
        self.pair
    }

    /// Mutable access to the pair for ordinary transitions inside the
    /// context.  Their effects are kept or discarded with the context.
    pub fn pair_mut(&mut self) -> &mut Pair {
        self.pair
    }

    /// Runs a complete flash swap against `callee`.
    ///
    /// Opens a session for `amount0_out` and `amount1_out`, hands `callee`
    /// a [`FlashSwapHandle`], then verifies.  If any step fails the pair is
    /// restored to its state before Begin and the error is returned; earlier
    /// effects inside this context are kept.
    ///
    /// # Errors
    ///
    /// - Any error from Begin ([`PairError::LockHeld`], …).
    /// - Any error returned by `callee`.
    /// - [`PairError::InvalidPhase`] if `callee` returned without repaying.
    /// - Any error from Verify ([`PairError::InvariantViolation`], …).
    pub fn flash_swap<C>(
        &mut self,
        amount0_out: Amount,
        amount1_out: Amount,
        callee: &mut C,
    ) -> Result<FlashSwapOutcome>
    where
        C: FlashSwapCallee + ?Sized,
    {
        let before = self.pair.state().clone();
        let session = self.pair.begin_flash_swap(amount0_out, amount1_out)?;

        let outcome = {
            let mut handle = FlashSwapHandle {
                pair: &mut *self.pair,
                session,
            };
            callee.on_flash_swap(&mut handle)
        }
        .and_then(|()| self.pair.verify_flash_swap(session.id));

        if let Err(err) = &outcome {
            warn!(session = %session.id, %err, "flash swap aborted; state restored");
            self.pair.restore(before);
        }
        outcome
    }

    /// Keeps every effect made inside the context.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidPhase`] if a flash-swap session is still
    /// open; the checkpoint is restored in that case.
    pub fn commit(mut self) -> Result<()> {
        let phase = self.pair.phase();
        if phase.is_held() {
            // Drop restores the checkpoint.
            return Err(PairError::InvalidPhase {
                expected: Phase::Idle,
                actual: phase,
            });
        }
        self.checkpoint = None;
        debug!("execution context committed");
        Ok(())
    }

    /// Discards every effect made inside the context, including an open
    /// flash-swap session.
    pub fn abandon(mut self) {
        self.rollback();
    }

    fn rollback(&mut self) {
        if let Some(checkpoint) = self.checkpoint.take() {
            if let Some(session) = self.pair.session() {
                warn!(session = %session.id, "open flash swap discarded");
            }
            self.pair.restore(checkpoint);
            debug!("execution context rolled back");
        }
    }
}

impl Drop for ExecutionContext<'_> {
    fn drop(&mut self) {
        self.rollback();
    }
}

/// Restricted view of a pair handed to a [`FlashSwapCallee`].
///
/// Allows reading the pair and repaying the open session, nothing else.
#[derive(Debug)]
pub struct FlashSwapHandle<'a> {
    pair: &'a mut Pair,
    session: FlashSession,
}

impl FlashSwapHandle<'_> {
    /// The open session and the amounts it released.
    #[must_use]
    pub const fn session(&self) -> &FlashSession {
        &self.session
    }

    /// Read access to the pair.
    #[must_use]
    pub fn pair(&self) -> &Pair {
        self.pair
    }

    /// Credits the repayment.  Callable once per session.
    ///
    /// # Errors
    ///
    /// - [`PairError::InvalidPhase`] if already repaid.
    /// - [`PairError::Overflow`] if a balance would exceed the ceiling.
    pub fn repay(&mut self, repay0: Amount, repay1: Amount) -> Result<()> {
        self.pair.repay_flash_swap(self.session.id, repay0, repay1)
    }
}
