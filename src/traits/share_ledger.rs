//! Capability interface to the LP-share ledger.

use crate::domain::{AccountId, Shares};

/// Minimal view of the LP-share ledger, as seen by the pool.
///
/// LP shares are ordinary fungible balances with two extra operations,
/// [`mint`](Self::mint) and [`burn`](Self::burn), for which the pool is
/// the sole authority. Holders move shares freely between themselves via
/// the transfer methods; only the pool creates or destroys them, and it
/// does so exclusively inside liquidity operations whose amounts it has
/// already validated.
pub trait ShareLedger {
    /// Returns the share balance of `account`.
    fn balance_of(&self, account: AccountId) -> Shares;

    /// Moves `amount` from the pool's own share balance to `to`.
    ///
    /// The pool does not normally hold shares; this exists for ledger
    /// completeness and returns `false` on insufficient balance.
    #[must_use]
    fn transfer(&mut self, to: AccountId, amount: Shares) -> bool;

    /// Moves `amount` from `from` to `to`, spending the allowance `from`
    /// previously granted to the pool.
    ///
    /// Returns `false` (and changes nothing) if the allowance or the
    /// holder's balance is insufficient.
    #[must_use]
    fn transfer_from(&mut self, from: AccountId, to: AccountId, amount: Shares) -> bool;

    /// Creates `amount` new shares owned by `to`.
    ///
    /// The pool only mints amounts it has computed from a validated
    /// deposit, so the call carries no failure channel.
    fn mint(&mut self, to: AccountId, amount: Shares);

    /// Destroys `amount` shares held by `from`.
    ///
    /// Returns `false` (and changes nothing) if `from` holds fewer than
    /// `amount` shares. The pool checks [`balance_of`](Self::balance_of)
    /// first, so a `false` here aborts the operation before any state
    /// commit.
    #[must_use]
    fn burn(&mut self, from: AccountId, amount: Shares) -> bool;
}
