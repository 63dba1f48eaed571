//! Construction from a validated configuration.
//!
//! [`FromConfig`] is the single entry point for building a
//! [`Pair`](crate::pair::Pair).  The registry supplies the two asset
//! identities once; everything else comes from the configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** re-validate the configuration, since a
//! deserialized config never passed through the `with_*` builders.  A
//! successfully constructed value starts in a valid initial state: empty
//! store, phase `Idle`.

use crate::error::PairError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation; each pairing is explicit.
///
/// # Errors
///
/// Returns [`PairError::InvalidConfiguration`] or
/// [`PairError::InvalidToken`] if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`PairError::InvalidConfiguration`] if a parameter is out of range.
    /// - [`PairError::InvalidToken`] if the token pair is degenerate.
    fn from_config(config: &C) -> Result<Self, PairError>
    where
        Self: Sized;
}
