//! External capability seams.
//!
//! The pool's only boundary with the outside world is a pair of ledger
//! capabilities: [`TokenLedger`] for the base token and [`ShareLedger`]
//! for the LP-share token. The pool never initiates anything else — it
//! mutates its own state and calls these minimal interfaces.

mod share_ledger;
mod token_ledger;

pub use share_ledger::ShareLedger;
pub use token_ledger::TokenLedger;
