//! Unified error types for the pair state machine.
//!
//! Every transition returns [`PairError`] on failure.  A failed transition
//! never commits partial state: the store is left exactly as it was before
//! the call.  The core performs no internal retry.

use thiserror::Error;

use crate::domain::{Liquidity, Phase, SessionId};

/// Errors produced by pair transitions, configuration and arithmetic.
///
/// Only [`PairError::LockHeld`] is recoverable by the caller (wait for the
/// open flash-swap session to finish and try again).  Every other variant
/// means a caller-supplied input violated a stated precondition and is
/// surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    /// A swap or flash swap requested no output at all.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A swap or verified flash swap supplied no input.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A requested output is greater than or equal to its reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The fee-adjusted constant product would decrease.
    #[error("fee-adjusted constant product would decrease")]
    InvariantViolation,

    /// A deposit rounds to zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A withdrawal rounds to zero on at least one side.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// The owner tried to burn more shares than it holds.
    #[error("insufficient shares: held {held}, requested {requested}")]
    InsufficientShares {
        /// Shares currently credited to the owner.
        held: Liquidity,
        /// Shares the owner asked to burn.
        requested: Liquidity,
    },

    /// A quantity exceeds the reserve ceiling or the width of its type.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would go below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A mutating transition was attempted while a flash-swap session holds
    /// the lock.
    #[error("pair is locked (phase {phase})")]
    LockHeld {
        /// Phase observed at entry.
        phase: Phase,
    },

    /// Callback or Verify was invoked out of sequence.
    #[error("invalid phase: expected {expected}, found {actual}")]
    InvalidPhase {
        /// Phase the transition requires.
        expected: Phase,
        /// Phase the pair is actually in.
        actual: Phase,
    },

    /// Callback or Verify was invoked with an id other than the open session.
    #[error("session mismatch: open session is {expected}, got {actual}")]
    SessionMismatch {
        /// The session currently holding the lock.
        expected: SessionId,
        /// The session id supplied by the caller.
        actual: SessionId,
    },

    /// A token identity is invalid for this pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Configuration parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl PairError {
    /// Returns `true` if the caller may retry the same call later.
    ///
    /// Only a held lock qualifies; it clears once the open session verifies
    /// or the enclosing context discards it.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::LockHeld { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PairError>;
