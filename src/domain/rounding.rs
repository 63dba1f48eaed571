//! Explicit rounding direction for integer division.

/// Rounding direction for a division.
///
/// Every division in the pair names its direction.  Share and withdrawal
/// computations always use [`Rounding::Down`] so that truncation favours
/// existing holders; [`Rounding::Up`] appears only in quotes for the input
/// a trader must pay.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
