//! The pool controller: state machine and public operations.
//!
//! `Pool` owns the persisted entity — reserves, fee vault, total shares,
//! phase tag — and orchestrates the reserve ledger, pricing engine, and
//! fee vault into the five public operations: initialize, add liquidity,
//! remove liquidity, swap, and withdraw fees.
//!
//! # Execution model
//!
//! Every operation is atomic per call. Within one call the reserves are
//! read exactly once into a snapshot; all derived math uses that
//! snapshot. All fallible computation and every refusable capability
//! call happen *before* the first state assignment, so a failing
//! operation leaves the pool byte-for-byte unchanged. Serialization
//! across calls is the environment's job — the pool takes `&mut self`
//! and nothing else is needed.
//!
//! # Native currency
//!
//! The pool's capability boundary covers the base token and the LP-share
//! token only. Native currency movement is the environment's
//! responsibility: inbound amounts are parameters the environment has
//! already collected from the caller, and outbound amounts are returned
//! in receipts/outcomes for the environment to pay out.

use core::fmt;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, Shares, SwapOutcome, SwapRequest};
use crate::error::PoolError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::traits::{ShareLedger, TokenLedger};

use super::pricing::{constant_product_out, split_fee, FeeBreakdown};
use super::{FeeVault, Reserves, SCALE};

/// Lifecycle phase of the pool.
///
/// The transition is one-way: `Uninitialized -> Active` on the first
/// (privileged) deposit. A fully drained pool stays `Active` with zero
/// shares; only a fresh privileged initialization revives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No liquidity has ever been deposited.
    Uninitialized,
    /// The pool has been bootstrapped at least once.
    Active,
}

impl Phase {
    /// Returns `true` once the pool has been bootstrapped.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// What a liquidity deposit produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    /// LP shares minted to the depositor.
    pub shares_minted: Shares,
    /// Token actually pulled from the depositor.
    pub token_amount: Amount,
    /// Currency recorded from the depositor.
    pub currency_amount: Amount,
}

/// What a removal or fee withdrawal paid out.
///
/// The token side has already been transferred via the ledger capability;
/// the currency side is for the environment to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalReceipt {
    /// Token paid out through the ledger.
    pub token_amount: Amount,
    /// Currency owed to the receiver by the environment.
    pub currency_amount: Amount,
}

impl WithdrawalReceipt {
    /// A receipt that paid nothing.
    pub const EMPTY: Self = Self {
        token_amount: Amount::ZERO,
        currency_amount: Amount::ZERO,
    };

    /// Returns `true` if nothing was paid out.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token_amount.is_zero() && self.currency_amount.is_zero()
    }
}

/// A constant-product pool pairing the native currency with one token.
///
/// # Example
///
/// ```
/// use cpswap::config::PoolConfig;
/// use cpswap::domain::{AccountId, Amount, SwapRequest};
/// use cpswap::ledger::{MemoryShareLedger, MemoryTokenLedger};
/// use cpswap::pool::Pool;
///
/// let pool_acct = AccountId::from_bytes([0xAA; 32]);
/// let owner = AccountId::from_bytes([1; 32]);
/// let trader = AccountId::from_bytes([2; 32]);
///
/// let mut tokens = MemoryTokenLedger::new(pool_acct);
/// let mut shares = MemoryShareLedger::new(pool_acct);
/// tokens.credit(owner, Amount::new(200_000));
/// tokens.approve(owner, Amount::new(200_000));
///
/// let config = PoolConfig::standard(pool_acct, owner).expect("valid config");
/// let mut pool = Pool::new(config);
/// pool.initialize(owner, Amount::new(200_000), Amount::new(1_000), &mut tokens, &mut shares)
///     .expect("bootstrap");
///
/// // trade 10 currency for token
/// let request = SwapRequest::currency_in(Amount::new(10), Amount::ZERO).expect("non-zero");
/// let outcome = pool.swap(trader, request, &mut tokens).expect("swap");
/// assert_eq!(outcome.amount_out(), Amount::new(1_980));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    config: PoolConfig,
    phase: Phase,
    reserves: Reserves,
    vault: FeeVault,
    total_shares: Shares,
}

impl Pool {
    /// Creates an uninitialized pool with the given configuration.
    #[must_use]
    pub const fn new(config: PoolConfig) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            reserves: Reserves::EMPTY,
            vault: FeeVault::EMPTY,
            total_shares: Shares::ZERO,
        }
    }

    // -- read-only queries --------------------------------------------------

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current tradeable reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Returns the accrued, unwithdrawn protocol fees.
    #[must_use]
    pub const fn fee_vault(&self) -> FeeVault {
        self.vault
    }

    /// Returns the total outstanding LP shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Quotes the current marginal rate for swapping in `asset_in`,
    /// scaled by [`SCALE`].
    ///
    /// # Errors
    ///
    /// [`PoolError::PoolNotInitialized`] / [`PoolError::PoolDrained`]
    /// per the lifecycle; otherwise propagates reserve-ledger errors.
    pub fn price(&self, asset_in: Asset) -> crate::error::Result<Amount> {
        self.ensure_tradeable()?;
        self.reserves.price(asset_in)
    }

    /// Previews how an input would split into fee, protocol cut, and net
    /// input — identical to the split a real swap would apply.
    ///
    /// # Errors
    ///
    /// Lifecycle errors as for [`price`](Self::price);
    /// [`PoolError::InvalidAmount`] if `amount_in` is zero.
    pub fn quote_fee(&self, amount_in: Amount) -> crate::error::Result<FeeBreakdown> {
        self.ensure_tradeable()?;
        split_fee(amount_in, self.config.fee(), self.config.protocol_share())
    }

    /// Quotes the output a swap of `amount_in` on `asset_in` would
    /// produce right now, fee included.
    ///
    /// Computed by the exact code path [`swap`](Self::swap) uses, so a
    /// quote followed by a swap against unchanged reserves returns
    /// exactly the quoted amount.
    ///
    /// # Errors
    ///
    /// Lifecycle errors as for [`price`](Self::price);
    /// [`PoolError::InsufficientOutput`] if the output truncates to
    /// zero.
    pub fn quote_output(&self, asset_in: Asset, amount_in: Amount) -> crate::error::Result<Amount> {
        self.ensure_tradeable()?;
        let (_, amount_out) = self.project_swap(asset_in, amount_in)?;
        Ok(amount_out)
    }

    /// Returns `holder`'s fraction of the pool, scaled by [`SCALE`].
    ///
    /// # Errors
    ///
    /// [`PoolError::PoolNotInitialized`] / [`PoolError::PoolDrained`]
    /// when no shares are outstanding.
    pub fn share_of_pool(
        &self,
        holder: AccountId,
        shares: &impl ShareLedger,
    ) -> crate::error::Result<Amount> {
        self.ensure_tradeable()?;
        let held = shares.balance_of(holder);
        let fraction = mul_div(held.get(), SCALE, self.total_shares.get())?;
        Ok(Amount::new(fraction))
    }

    // -- mutating operations ------------------------------------------------

    /// Bootstraps the pool with its first liquidity, setting the initial
    /// price to `token_amount / currency_amount`.
    ///
    /// Only the configured fee recipient may call this, and only while
    /// the pool has no outstanding shares — at construction, or again
    /// after a full drain. Shares minted equal the currency contributed,
    /// establishing the share unit.
    ///
    /// The token side is pulled via `transfer_from` (the caller must
    /// have approved the pool); the currency side is attested by the
    /// environment.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if the caller is not the fee
    ///   recipient, or shares are still outstanding.
    /// - [`PoolError::InvalidAmount`] if either amount is zero.
    /// - [`PoolError::InsufficientTokenAmount`] if the token pull is
    ///   refused.
    pub fn initialize(
        &mut self,
        caller: AccountId,
        token_amount: Amount,
        currency_amount: Amount,
        tokens: &mut impl TokenLedger,
        shares: &mut impl ShareLedger,
    ) -> crate::error::Result<Shares> {
        if caller != self.config.fee_recipient() {
            return Err(PoolError::Unauthorized);
        }
        if !self.total_shares.is_zero() {
            // the one-time bootstrap path is closed while LPs exist
            return Err(PoolError::Unauthorized);
        }
        if token_amount.is_zero() || currency_amount.is_zero() {
            return Err(PoolError::InvalidAmount("bootstrap requires both assets"));
        }

        let minted = Shares::new(currency_amount.get());
        if !tokens.transfer_from(caller, self.config.pool_account(), token_amount) {
            return Err(PoolError::InsufficientTokenAmount);
        }
        shares.mint(caller, minted);

        self.reserves = Reserves::new(token_amount, currency_amount);
        self.total_shares = minted;
        self.phase = Phase::Active;
        Ok(minted)
    }

    /// Deposits liquidity at the current reserve ratio.
    ///
    /// The currency contribution fixes the deposit size; the matching
    /// token amount is `currency_in * token_reserve / currency_reserve`,
    /// and must not exceed `max_token`, the caller's ceiling. Shares
    /// minted are `currency_in * total_shares / currency_reserve`. No
    /// fee is charged on liquidity provision.
    ///
    /// # Errors
    ///
    /// - Lifecycle errors while uninitialized or drained.
    /// - [`PoolError::InvalidAmount`] if `currency_in` is zero or too
    ///   small to mint a share.
    /// - [`PoolError::InsufficientTokenAmount`] if the required token
    ///   exceeds `max_token` or the pull is refused.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        max_token: Amount,
        currency_in: Amount,
        tokens: &mut impl TokenLedger,
        shares: &mut impl ShareLedger,
    ) -> crate::error::Result<DepositReceipt> {
        self.ensure_tradeable()?;
        if currency_in.is_zero() {
            return Err(PoolError::InvalidAmount("deposit requires currency"));
        }

        let reserves = self.reserves;
        let token_required = Amount::new(mul_div(
            currency_in.get(),
            reserves.token().get(),
            reserves.currency().get(),
        )?);
        if token_required > max_token {
            return Err(PoolError::InsufficientTokenAmount);
        }
        let minted = Shares::new(mul_div(
            currency_in.get(),
            self.total_shares.get(),
            reserves.currency().get(),
        )?);
        if minted.is_zero() {
            return Err(PoolError::InvalidAmount("deposit too small to mint shares"));
        }

        let new_reserves = reserves
            .credit(Asset::Token, token_required)?
            .credit(Asset::Currency, currency_in)?;
        let new_total = self.total_shares.safe_add(&minted)?;

        if !tokens.transfer_from(caller, self.config.pool_account(), token_required) {
            return Err(PoolError::InsufficientTokenAmount);
        }
        shares.mint(caller, minted);

        self.reserves = new_reserves;
        self.total_shares = new_total;
        Ok(DepositReceipt {
            shares_minted: minted,
            token_amount: token_required,
            currency_amount: currency_in,
        })
    }

    /// Burns `amount` of the caller's shares and pays out the pro-rata
    /// slice of both reserves.
    ///
    /// Burning every outstanding share drains the pool to zero reserves;
    /// the pool stays `Active` and can only be revived through
    /// [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// - Lifecycle errors while uninitialized or drained.
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::InsufficientShares`] if the caller holds fewer
    ///   than `amount` shares.
    /// - [`PoolError::InsufficientTokenAmount`] if the token payout is
    ///   refused.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        amount: Shares,
        tokens: &mut impl TokenLedger,
        shares: &mut impl ShareLedger,
    ) -> crate::error::Result<WithdrawalReceipt> {
        self.ensure_tradeable()?;
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("cannot burn zero shares"));
        }
        if amount > shares.balance_of(caller) {
            return Err(PoolError::InsufficientShares);
        }

        let reserves = self.reserves;
        let total = self.total_shares;
        let token_out = Amount::new(mul_div(
            amount.get(),
            reserves.token().get(),
            total.get(),
        )?);
        let currency_out = Amount::new(mul_div(
            amount.get(),
            reserves.currency().get(),
            total.get(),
        )?);

        let new_reserves = reserves
            .debit(Asset::Token, token_out)?
            .debit(Asset::Currency, currency_out)?;
        let new_total = total.safe_sub(&amount)?;

        if !tokens.transfer(caller, token_out) {
            return Err(PoolError::InsufficientTokenAmount);
        }
        if !shares.burn(caller, amount) {
            // balance was checked above; a refusal here means the share
            // ledger disagrees with itself
            return Err(PoolError::InsufficientShares);
        }

        self.reserves = new_reserves;
        self.total_shares = new_total;
        Ok(WithdrawalReceipt {
            token_amount: token_out,
            currency_amount: currency_out,
        })
    }

    /// Executes a swap.
    ///
    /// The fee is deducted from the input before pricing; the protocol
    /// cut of the fee moves to the vault, the rest of the fee stays in
    /// the input reserve and compounds for LPs. For currency-in swaps
    /// the token output is transferred to the caller; for token-in swaps
    /// the input is pulled from the caller and the currency output is
    /// returned in the outcome for the environment to pay.
    ///
    /// # Errors
    ///
    /// - Lifecycle errors while uninitialized or drained.
    /// - [`PoolError::InsufficientOutput`] if the output truncates to
    ///   zero or falls below the request's slippage bound.
    /// - [`PoolError::InsufficientTokenAmount`] if a token movement is
    ///   refused.
    pub fn swap(
        &mut self,
        caller: AccountId,
        request: SwapRequest,
        tokens: &mut impl TokenLedger,
    ) -> crate::error::Result<SwapOutcome> {
        self.ensure_tradeable()?;
        let (split, amount_out) = self.project_swap(request.asset_in(), request.amount_in())?;
        if amount_out < request.min_out() {
            return Err(PoolError::InsufficientOutput);
        }

        // full fee leaves the priced input, the protocol cut leaves the
        // reserve as well; the remainder compounds for LPs
        let retained_in = request.amount_in().safe_sub(&split.protocol_cut())?;
        let new_reserves = self
            .reserves
            .credit(request.asset_in(), retained_in)?
            .debit(request.asset_out(), amount_out)?;
        let new_vault = self.vault.credit(request.asset_in(), split.protocol_cut())?;
        let outcome = SwapOutcome::new(
            request.asset_in(),
            request.amount_in(),
            amount_out,
            split.fee(),
            split.protocol_cut(),
        )?;

        let moved = match request.asset_in() {
            Asset::Currency => tokens.transfer(caller, amount_out),
            Asset::Token => {
                tokens.transfer_from(caller, self.config.pool_account(), request.amount_in())
            }
        };
        if !moved {
            return Err(PoolError::InsufficientTokenAmount);
        }

        self.reserves = new_reserves;
        self.vault = new_vault;
        Ok(outcome)
    }

    /// Transfers all accrued protocol fees to the fee recipient and
    /// resets the vault.
    ///
    /// An empty vault is a silent no-op, not an error. The token side is
    /// paid through the ledger; the currency side is returned in the
    /// receipt for the environment to pay. A drained pool can still
    /// withdraw fees accrued before the drain.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotInitialized`] before the first bootstrap.
    /// - [`PoolError::Unauthorized`] for any caller but the fee
    ///   recipient.
    /// - [`PoolError::InsufficientTokenAmount`] if the token payout is
    ///   refused.
    pub fn withdraw_fees(
        &mut self,
        caller: AccountId,
        tokens: &mut impl TokenLedger,
    ) -> crate::error::Result<WithdrawalReceipt> {
        if !self.phase.is_active() {
            return Err(PoolError::PoolNotInitialized);
        }
        if caller != self.config.fee_recipient() {
            return Err(PoolError::Unauthorized);
        }

        let vault = self.vault;
        if vault.is_empty() {
            return Ok(WithdrawalReceipt::EMPTY);
        }
        if !tokens.transfer(self.config.fee_recipient(), vault.token()) {
            return Err(PoolError::InsufficientTokenAmount);
        }

        self.vault = FeeVault::EMPTY;
        Ok(WithdrawalReceipt {
            token_amount: vault.token(),
            currency_amount: vault.currency(),
        })
    }

    // -- internals ----------------------------------------------------------

    /// Fails unless the pool is active with outstanding shares.
    const fn ensure_tradeable(&self) -> crate::error::Result<()> {
        match self.phase {
            Phase::Uninitialized => Err(PoolError::PoolNotInitialized),
            Phase::Active => {
                if self.total_shares.is_zero() {
                    Err(PoolError::PoolDrained)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// The one code path computing a swap's numbers, shared by
    /// [`quote_output`](Self::quote_output) and [`swap`](Self::swap).
    fn project_swap(
        &self,
        asset_in: Asset,
        amount_in: Amount,
    ) -> crate::error::Result<(FeeBreakdown, Amount)> {
        let reserves = self.reserves;
        let split = split_fee(amount_in, self.config.fee(), self.config.protocol_share())?;
        let amount_out = constant_product_out(
            split.net_in(),
            reserves.of(asset_in),
            reserves.of(asset_in.other()),
        )?;
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientOutput);
        }
        Ok((split, amount_out))
    }
}
