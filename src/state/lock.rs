//! Reentrancy lock with an explicit phase.
//!
//! The lock is not a mutex: nothing ever waits on it.  A transition that
//! finds the pair in a phase it does not accept fails immediately, and the
//! caller decides what to do.  Only one flash-swap session can hold it.

use tracing::warn;

use crate::domain::{FlashSession, Phase, SessionId};
use crate::error::{PairError, Result};

/// Phase gate guarding every mutating transition.
///
/// Equality compares the phase and the open session only.  The id counter
/// moves forward across rollbacks, so two locks that gate the same way are
/// equal even when one has issued more ids.
#[derive(Debug, Clone, Default)]
pub struct ReentrancyLock {
    phase: Phase,
    session: Option<FlashSession>,
    next_session: u64,
}

impl ReentrancyLock {
    /// Creates a free lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` while a flash-swap session is open.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.phase.is_held()
    }

    /// The open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&FlashSession> {
        self.session.as_ref()
    }

    /// Admits entry if the current phase is one of `allowed`.
    ///
    /// Returns the phase observed at entry.
    ///
    /// # Errors
    ///
    /// - [`PairError::LockHeld`] if the caller would accept `Idle` but the
    ///   lock is held (a mutating transition racing an open session).
    /// - [`PairError::InvalidPhase`] otherwise (Callback or Verify out of
    ///   sequence).
    pub fn try_enter(&self, allowed: &[Phase]) -> Result<Phase> {
        if allowed.contains(&self.phase) {
            return Ok(self.phase);
        }
        if allowed.contains(&Phase::Idle) {
            warn!(phase = %self.phase, "transition rejected: lock held");
            return Err(PairError::LockHeld { phase: self.phase });
        }
        Err(PairError::InvalidPhase {
            expected: allowed.first().copied().unwrap_or_default(),
            actual: self.phase,
        })
    }

    /// Checks that `id` names the open session and returns it.
    ///
    /// # Errors
    ///
    /// - [`PairError::InvalidPhase`] if no session is open.
    /// - [`PairError::SessionMismatch`] if another session is open.
    pub fn expect_session(&self, id: SessionId) -> Result<FlashSession> {
        let Some(open) = self.session else {
            return Err(PairError::InvalidPhase {
                expected: Phase::AwaitingCallback,
                actual: self.phase,
            });
        };
        if open.id != id {
            return Err(PairError::SessionMismatch {
                expected: open.id,
                actual: id,
            });
        }
        Ok(open)
    }

    /// Id the next Begin will hand out.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Overflow`] once `u64::MAX` sessions have run.
    pub fn next_session_id(&self) -> Result<SessionId> {
        if self.next_session == u64::MAX {
            return Err(PairError::Overflow("session id"));
        }
        Ok(SessionId::new(self.next_session))
    }

    /// Moves to `phase` with `session` open (or none).
    ///
    /// Opening a session with a fresh id consumes that id.
    pub(crate) fn commit(&mut self, phase: Phase, session: Option<FlashSession>) {
        if let Some(opened) = session {
            if self.session.map(|s| s.id) != Some(opened.id) {
                self.next_session = opened.id.get().saturating_add(1);
            }
        }
        self.phase = phase;
        self.session = session;
    }

    /// Keeps every id `current` has issued when rewinding to `self`.
    pub(crate) fn keep_issued_ids(&mut self, current: &Self) {
        self.next_session = self.next_session.max(current.next_session);
    }
}

impl PartialEq for ReentrancyLock {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase && self.session == other.session
    }
}

impl Eq for ReentrancyLock {}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    fn session(id: u64) -> FlashSession {
        FlashSession {
            id: SessionId::new(id),
            amount0_out: Amount::new(1),
            amount1_out: Amount::ZERO,
        }
    }

    #[test]
    fn idle_admits_mutating_entry() {
        let lock = ReentrancyLock::new();
        assert_eq!(lock.try_enter(&[Phase::Idle]), Ok(Phase::Idle));
        assert!(!lock.is_held());
    }

    #[test]
    fn held_lock_rejects_mutating_entry() {
        let mut lock = ReentrancyLock::new();
        lock.commit(Phase::AwaitingCallback, Some(session(0)));
        assert_eq!(
            lock.try_enter(&[Phase::Idle]),
            Err(PairError::LockHeld {
                phase: Phase::AwaitingCallback
            })
        );
    }

    #[test]
    fn out_of_sequence_is_invalid_phase() {
        let lock = ReentrancyLock::new();
        assert_eq!(
            lock.try_enter(&[Phase::AwaitingVerification]),
            Err(PairError::InvalidPhase {
                expected: Phase::AwaitingVerification,
                actual: Phase::Idle,
            })
        );
    }

    #[test]
    fn session_ids_are_consumed_once() {
        let mut lock = ReentrancyLock::new();
        let Ok(first) = lock.next_session_id() else {
            panic!("expected Ok");
        };
        lock.commit(Phase::AwaitingCallback, Some(session(first.get())));
        lock.commit(Phase::AwaitingVerification, Some(session(first.get())));
        lock.commit(Phase::Idle, None);
        let Ok(second) = lock.next_session_id() else {
            panic!("expected Ok");
        };
        assert!(second > first);
    }

    #[test]
    fn rewound_lock_does_not_reissue_ids() {
        let checkpoint = ReentrancyLock::new();
        let mut current = checkpoint.clone();
        let Ok(issued) = current.next_session_id() else {
            panic!("expected Ok");
        };
        current.commit(Phase::AwaitingCallback, Some(session(issued.get())));

        let mut rewound = checkpoint;
        rewound.keep_issued_ids(&current);
        assert_eq!(rewound.phase(), Phase::Idle);
        assert!(rewound.session().is_none());
        let Ok(next) = rewound.next_session_id() else {
            panic!("expected Ok");
        };
        assert!(next > issued);
        assert_eq!(rewound, ReentrancyLock::new());
    }

    #[test]
    fn expect_session_checks_identity() {
        let mut lock = ReentrancyLock::new();
        assert!(matches!(
            lock.expect_session(SessionId::new(0)),
            Err(PairError::InvalidPhase { .. })
        ));
        lock.commit(Phase::AwaitingCallback, Some(session(3)));
        assert_eq!(lock.expect_session(SessionId::new(3)), Ok(session(3)));
        assert_eq!(
            lock.expect_session(SessionId::new(2)),
            Err(PairError::SessionMismatch {
                expected: SessionId::new(3),
                actual: SessionId::new(2),
            })
        );
    }
}
