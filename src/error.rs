//! Unified error types for the pool accounting core.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every failure is a rejected operation: a returned error
//! guarantees the pool state is unchanged, byte for byte.

use core::fmt;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool operations.
///
/// Arithmetic variants carry a static context string naming the
/// computation that failed. There is no fatal or unrecoverable variant:
/// a failing operation leaves the pool untouched and the caller decides
/// whether to resubmit with adjusted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// An intermediate multiplication exceeded the working integer width
    /// before division could bring it back into range.
    Overflow(&'static str),
    /// A checked subtraction would have produced a negative value.
    Underflow(&'static str),
    /// Division by zero.
    DivisionByZero,
    /// Zero (or otherwise meaningless) input where a positive amount is
    /// required.
    InvalidAmount(&'static str),
    /// The computed output fell below the caller's slippage bound, or
    /// truncated to zero.
    InsufficientOutput,
    /// The caller asked to burn more LP shares than they hold.
    InsufficientShares,
    /// The caller could not supply the token amount the current reserve
    /// ratio requires, or the ledger refused the transfer.
    InsufficientTokenAmount,
    /// The caller is not authorized for this operation: only the fee
    /// recipient may withdraw fees, and only the privileged bootstrap
    /// identity may initialize the pool.
    Unauthorized,
    /// The pool has not been initialized yet.
    PoolNotInitialized,
    /// The pool was fully drained; only a privileged re-initialization
    /// can revive it.
    PoolDrained,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow(ctx) => write!(f, "arithmetic overflow: {ctx}"),
            Self::Underflow(ctx) => write!(f, "arithmetic underflow: {ctx}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidAmount(ctx) => write!(f, "invalid amount: {ctx}"),
            Self::InsufficientOutput => write!(f, "output below the acceptable minimum"),
            Self::InsufficientShares => write!(f, "insufficient LP shares"),
            Self::InsufficientTokenAmount => write!(f, "insufficient token amount"),
            Self::Unauthorized => write!(f, "caller not authorized"),
            Self::PoolNotInitialized => write!(f, "pool not initialized"),
            Self::PoolDrained => write!(f, "pool drained"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PoolError {}
