//! In-memory reference implementations of the ledger capabilities.
//!
//! [`MemoryTokenLedger`] and [`MemoryShareLedger`] implement the
//! [`traits`](crate::traits) seams against plain maps, with allowance
//! bookkeeping and a transfer journal. They exist so the numeric core
//! can be exercised without a real chain: tests set up balances and
//! approvals, run pool operations, then assert on balances and on the
//! exact sequence of capability calls. Authorization failures are
//! simulated by simply not granting an allowance.

mod memory;

pub use memory::{MemoryShareLedger, MemoryTokenLedger, TransferRecord};
