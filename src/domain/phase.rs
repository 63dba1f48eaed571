//! Lock phase and flash-swap session identity.

use core::fmt;

/// Where the pair stands in the flash-swap protocol.
///
/// `Idle` is the only phase in which Mint, Burn, Swap or Begin may run.
/// The other two phases hold the lock and admit exactly one transition:
///
/// ```text
///          begin              callback                verify
///  Idle ──────────► AwaitingCallback ──────► AwaitingVerification ──────► Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Lock free.
    #[default]
    Idle,
    /// Output has been optimistically released; repayment not yet received.
    AwaitingCallback,
    /// Repayment received; the invariant has not been checked yet.
    AwaitingVerification,
}

impl Phase {
    /// Returns `true` when the lock is held, i.e. the phase is not `Idle`.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::AwaitingCallback => write!(f, "AwaitingCallback"),
            Self::AwaitingVerification => write!(f, "AwaitingVerification"),
        }
    }
}

/// Identifier handed out by Begin and required by Callback and Verify.
///
/// Ids increase monotonically for the lifetime of a pair, so an id from a
/// finished or discarded session never matches a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a session id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
