//! Pool configuration.

use crate::domain::{AccountId, BasisPoints};
use crate::error::PoolError;

/// Default swap fee: 0.30% (30 bp), the standard tier for volatile pairs.
pub const DEFAULT_FEE: BasisPoints = BasisPoints::new(30);

/// Default protocol share of the swap fee: one sixth, expressed in basis
/// points of the fee.
pub const DEFAULT_PROTOCOL_SHARE: BasisPoints = BasisPoints::new(1_667);

/// Immutable parameters of a pool, fixed at construction.
///
/// The fee recipient doubles as the privileged bootstrap identity: it is
/// the only account allowed to run the one-time initialization deposit
/// (which sets the pool's starting price) and the only account allowed to
/// withdraw accrued protocol fees. Neither role is transferable.
///
/// # Validation
///
/// - The swap fee must be strictly below 100% — at 10 000 bp the net
///   input of every swap would be zero.
/// - The protocol share must not exceed 100% of the fee.
///
/// # Examples
///
/// ```
/// use cpswap::config::PoolConfig;
/// use cpswap::domain::AccountId;
///
/// let pool = AccountId::from_bytes([0xAA; 32]);
/// let owner = AccountId::from_bytes([1; 32]);
/// let config = PoolConfig::standard(pool, owner);
/// assert!(config.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pool_account: AccountId,
    fee_recipient: AccountId,
    fee: BasisPoints,
    protocol_share: BasisPoints,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// `pool_account` is the pool's own identity on the token ledger —
    /// the destination of pulled deposits and the source of paid-out
    /// balances.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `fee` is 100% or more, or
    /// if `protocol_share` exceeds 100%.
    pub fn new(
        pool_account: AccountId,
        fee_recipient: AccountId,
        fee: BasisPoints,
        protocol_share: BasisPoints,
    ) -> Result<Self, PoolError> {
        let config = Self {
            pool_account,
            fee_recipient,
            fee,
            protocol_share,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config with the default fee tier ([`DEFAULT_FEE`]) and
    /// protocol share ([`DEFAULT_PROTOCOL_SHARE`]).
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`Self::new`] for
    /// uniform call sites.
    pub fn standard(pool_account: AccountId, fee_recipient: AccountId) -> Result<Self, PoolError> {
        Self::new(
            pool_account,
            fee_recipient,
            DEFAULT_FEE,
            DEFAULT_PROTOCOL_SHARE,
        )
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] on an out-of-range rate.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.fee.get() >= BasisPoints::ONE_HUNDRED_PERCENT.get() {
            return Err(PoolError::InvalidAmount("fee rate must be below 100%"));
        }
        if !self.protocol_share.is_valid_rate() {
            return Err(PoolError::InvalidAmount(
                "protocol share must not exceed 100%",
            ));
        }
        Ok(())
    }

    /// Returns the pool's own ledger identity.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the fee recipient (also the bootstrap identity).
    #[must_use]
    pub const fn fee_recipient(&self) -> AccountId {
        self.fee_recipient
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Returns the protocol's share of the swap fee.
    #[must_use]
    pub const fn protocol_share(&self) -> BasisPoints {
        self.protocol_share
    }
}
