//! Capability interface to the base-token ledger.
//!
//! The pool consumes standard fungible-token semantics through this
//! trait instead of reimplementing a ledger. An implementation is
//! *bound to the pool*: [`TokenLedger::transfer`] spends the pool's own
//! balance, and [`TokenLedger::transfer_from`] acts with the pool as the
//! approved spender (pull pattern — the holder must have granted the
//! pool an allowance beforehand).
//!
//! # Atomicity Contract
//!
//! Transfer methods return a plain success flag rather than an error
//! type: the ledger is a trusted collaborator whose only interesting
//! failure modes are insufficient balance and missing authorization.
//! The pool performs every fallible ledger call *before* committing any
//! state change, so a `false` return aborts the operation with the pool
//! untouched.

use crate::domain::{AccountId, Amount};

/// Minimal view of the base-token ledger, as seen by the pool.
///
/// The pool never holds mint or burn authority for the base token; it
/// can only move balances it owns or has been approved to pull.
pub trait TokenLedger {
    /// Returns the token balance of `account`.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Moves `amount` from the pool's own balance to `to`.
    ///
    /// Returns `false` (and changes nothing) if the pool's balance is
    /// insufficient.
    #[must_use]
    fn transfer(&mut self, to: AccountId, amount: Amount) -> bool;

    /// Moves `amount` from `from` to `to`, spending the allowance `from`
    /// previously granted to the pool.
    ///
    /// Returns `false` (and changes nothing) if the allowance or the
    /// holder's balance is insufficient.
    #[must_use]
    fn transfer_from(&mut self, from: AccountId, to: AccountId, amount: Amount) -> bool;
}
