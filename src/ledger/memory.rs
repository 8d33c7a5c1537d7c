//! Map-backed ledgers with allowances and a transfer journal.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Shares};
use crate::traits::{ShareLedger, TokenLedger};

/// One recorded balance movement, in ledger-call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRecord {
    /// Source account.
    pub from: AccountId,
    /// Destination account.
    pub to: AccountId,
    /// Raw amount moved.
    pub amount: u128,
}

/// In-memory base-token ledger bound to a pool account.
///
/// `transfer` spends the pool's balance; `transfer_from` spends the
/// allowance a holder granted to the pool. Every successful movement is
/// appended to a journal for call-tracking assertions.
///
/// # Examples
///
/// ```
/// use cpswap::domain::{AccountId, Amount};
/// use cpswap::ledger::MemoryTokenLedger;
/// use cpswap::traits::TokenLedger;
///
/// let pool = AccountId::from_bytes([0xAA; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let mut ledger = MemoryTokenLedger::new(pool);
/// ledger.credit(alice, Amount::new(500));
/// ledger.approve(alice, Amount::new(200));
///
/// assert!(ledger.transfer_from(alice, pool, Amount::new(200)));
/// assert_eq!(ledger.balance_of(pool), Amount::new(200));
/// // the allowance is spent; a second pull is refused
/// assert!(!ledger.transfer_from(alice, pool, Amount::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryTokenLedger {
    pool: AccountId,
    balances: BTreeMap<AccountId, u128>,
    approvals: BTreeMap<AccountId, u128>,
    journal: Vec<TransferRecord>,
}

impl MemoryTokenLedger {
    /// Creates an empty ledger bound to `pool`.
    #[must_use]
    pub fn new(pool: AccountId) -> Self {
        Self {
            pool,
            balances: BTreeMap::new(),
            approvals: BTreeMap::new(),
            journal: Vec::new(),
        }
    }

    /// Conjures `amount` into `account`'s balance (test setup).
    pub fn credit(&mut self, account: AccountId, amount: Amount) {
        let entry = self.balances.entry(account).or_insert(0);
        *entry = entry.saturating_add(amount.get());
    }

    /// Records `holder`'s allowance toward the pool, replacing any
    /// previous value.
    pub fn approve(&mut self, holder: AccountId, amount: Amount) {
        self.approvals.insert(holder, amount.get());
    }

    /// Returns the remaining allowance `holder` has granted the pool.
    #[must_use]
    pub fn allowance(&self, holder: AccountId) -> Amount {
        Amount::new(self.approvals.get(&holder).copied().unwrap_or(0))
    }

    /// Returns every successful movement, in call order.
    #[must_use]
    pub fn journal(&self) -> &[TransferRecord] {
        &self.journal
    }

    fn move_balance(&mut self, from: AccountId, to: AccountId, amount: u128) -> bool {
        let Some(from_balance) = self.balances.get(&from).copied() else {
            return amount == 0;
        };
        let Some(remaining) = from_balance.checked_sub(amount) else {
            return false;
        };
        self.balances.insert(from, remaining);
        let entry = self.balances.entry(to).or_insert(0);
        *entry = entry.saturating_add(amount);
        self.journal.push(TransferRecord { from, to, amount });
        true
    }
}

impl TokenLedger for MemoryTokenLedger {
    fn balance_of(&self, account: AccountId) -> Amount {
        Amount::new(self.balances.get(&account).copied().unwrap_or(0))
    }

    fn transfer(&mut self, to: AccountId, amount: Amount) -> bool {
        self.move_balance(self.pool, to, amount.get())
    }

    fn transfer_from(&mut self, from: AccountId, to: AccountId, amount: Amount) -> bool {
        let allowance = self.approvals.get(&from).copied().unwrap_or(0);
        let Some(remaining) = allowance.checked_sub(amount.get()) else {
            return false;
        };
        if !self.move_balance(from, to, amount.get()) {
            return false;
        }
        self.approvals.insert(from, remaining);
        true
    }
}

/// In-memory LP-share ledger with the pool as sole mint/burn authority.
///
/// Tracks total supply alongside balances so tests can cross-check the
/// pool's own share accounting.
#[derive(Debug, Clone)]
pub struct MemoryShareLedger {
    pool: AccountId,
    balances: BTreeMap<AccountId, u128>,
    approvals: BTreeMap<AccountId, u128>,
    total: u128,
}

impl MemoryShareLedger {
    /// Creates an empty share ledger with `pool` as minter.
    #[must_use]
    pub fn new(pool: AccountId) -> Self {
        Self {
            pool,
            balances: BTreeMap::new(),
            approvals: BTreeMap::new(),
            total: 0,
        }
    }

    /// Records `holder`'s allowance toward the pool, replacing any
    /// previous value.
    pub fn approve(&mut self, holder: AccountId, amount: Shares) {
        self.approvals.insert(holder, amount.get());
    }

    /// Returns the total outstanding share supply.
    #[must_use]
    pub fn total_supply(&self) -> Shares {
        Shares::new(self.total)
    }

    fn move_balance(&mut self, from: AccountId, to: AccountId, amount: u128) -> bool {
        let Some(from_balance) = self.balances.get(&from).copied() else {
            return amount == 0;
        };
        let Some(remaining) = from_balance.checked_sub(amount) else {
            return false;
        };
        self.balances.insert(from, remaining);
        let entry = self.balances.entry(to).or_insert(0);
        *entry = entry.saturating_add(amount);
        true
    }
}

impl ShareLedger for MemoryShareLedger {
    fn balance_of(&self, account: AccountId) -> Shares {
        Shares::new(self.balances.get(&account).copied().unwrap_or(0))
    }

    fn transfer(&mut self, to: AccountId, amount: Shares) -> bool {
        self.move_balance(self.pool, to, amount.get())
    }

    fn transfer_from(&mut self, from: AccountId, to: AccountId, amount: Shares) -> bool {
        let allowance = self.approvals.get(&from).copied().unwrap_or(0);
        let Some(remaining) = allowance.checked_sub(amount.get()) else {
            return false;
        };
        if !self.move_balance(from, to, amount.get()) {
            return false;
        }
        self.approvals.insert(from, remaining);
        true
    }

    fn mint(&mut self, to: AccountId, amount: Shares) {
        let entry = self.balances.entry(to).or_insert(0);
        *entry = entry.saturating_add(amount.get());
        self.total = self.total.saturating_add(amount.get());
    }

    fn burn(&mut self, from: AccountId, amount: Shares) -> bool {
        let Some(balance) = self.balances.get(&from).copied() else {
            return amount.is_zero();
        };
        let Some(remaining) = balance.checked_sub(amount.get()) else {
            return false;
        };
        self.balances.insert(from, remaining);
        self.total = self.total.saturating_sub(amount.get());
        true
    }
}
