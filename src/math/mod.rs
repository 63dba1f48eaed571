//! Integer arithmetic for the pair.
//!
//! - [`CheckedArithmetic`], [`add_within`] and [`settle_within`]: checked
//!   sums on domain quantities, reported as typed errors.
//! - [`U256`] and helpers: wide intermediates for every product.
//! - [`div_round`] and [`mul_div`]: every division, with an explicit
//!   [`Rounding`].
//! - [`check_fee_adjusted_product`]: the swap and flash-swap admission rule.
//! - [`quote`]: boundary quotes for sizing a swap.
//!
//! [`Rounding`]: crate::domain::Rounding

mod checked;
mod product;
pub mod quote;
mod rounding;
mod wide;

pub use checked::{add_within, settle_within, CheckedArithmetic};
pub use product::{check_fee_adjusted_product, reserve_product};
pub use rounding::{div_round, mul_div};
pub use wide::{isqrt, mul, narrow, widen, U256};
