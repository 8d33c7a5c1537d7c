//! The pool: reserve ledger, pricing engine, fee vault, and the
//! controller that orchestrates them into the public operations.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Reserves`] | tradeable balances and read-only price quotes |
//! | [`pricing`] helpers | fee split and constant-product output math |
//! | [`FeeVault`] | protocol fees held outside the swap invariant |
//! | [`Pool`] | state machine and public operations |

mod fees;
mod pool;
mod pricing;
mod reserves;

#[cfg(all(test, feature = "std"))]
mod proptest_properties;

pub use fees::FeeVault;
pub use pool::{DepositReceipt, Phase, Pool, WithdrawalReceipt};
pub use pricing::{constant_product_out, split_fee, FeeBreakdown};
pub use reserves::Reserves;

/// Fixed scaling constant for price and pool-share quotes.
///
/// A price of `2 * SCALE` means two output units per input unit; a pool
/// share of `SCALE / 4` means a quarter of the pool.
pub const SCALE: u128 = 1_000_000;
