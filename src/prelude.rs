//! Convenience re-exports for common types and traits.
//!
//! A single import brings the frequently used items into scope:
//!
//! ```rust
//! use cpswap::prelude::*;
//! ```

// Domain types
pub use crate::domain::{AccountId, Amount, Asset, BasisPoints, Shares, SwapOutcome, SwapRequest};

// Capability traits
pub use crate::traits::{ShareLedger, TokenLedger};

// Math utilities
pub use crate::math::{mul_div, CheckedArithmetic};

// Configuration
pub use crate::config::PoolConfig;

// Error types
pub use crate::error::{PoolError, Result};

// The pool and its pieces
pub use crate::pool::{
    DepositReceipt, FeeBreakdown, FeeVault, Phase, Pool, Reserves, WithdrawalReceipt, SCALE,
};

// In-memory ledgers
#[cfg(feature = "std")]
pub use crate::ledger::{MemoryShareLedger, MemoryTokenLedger};
