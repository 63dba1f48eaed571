//! The external counterparty of a flash swap.

use crate::context::FlashSwapHandle;
use crate::error::Result;

/// Code that runs between Begin and Verify of a flash swap.
///
/// The callee receives the borrowed amounts through
/// [`FlashSwapHandle::session`] and must repay through
/// [`FlashSwapHandle::repay`] before returning.  The handle exposes no other
/// mutation, so a callee cannot reenter the pair.
///
/// Returning an error aborts the flash swap; the enclosing
/// [`ExecutionContext`](crate::context::ExecutionContext) then discards
/// every effect since Begin.
///
/// # Examples
///
/// ```
/// use hydra_pair::context::FlashSwapHandle;
/// use hydra_pair::domain::Amount;
/// use hydra_pair::error::Result;
/// use hydra_pair::traits::FlashSwapCallee;
///
/// /// Repays what it borrowed plus a fixed premium on token0.
/// struct Premium(u128);
///
/// impl FlashSwapCallee for Premium {
///     fn on_flash_swap(&mut self, handle: &mut FlashSwapHandle<'_>) -> Result<()> {
///         let borrowed = handle.session().amount0_out;
///         handle.repay(Amount::new(borrowed.get() + self.0), Amount::ZERO)
///     }
/// }
/// ```
pub trait FlashSwapCallee {
    /// Uses the borrowed amounts and repays through `handle`.
    ///
    /// # Errors
    ///
    /// Any error aborts the flash swap.
    fn on_flash_swap(&mut self, handle: &mut FlashSwapHandle<'_>) -> Result<()>;
}
