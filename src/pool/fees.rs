//! The protocol fee vault.

use core::fmt;

use crate::domain::{Amount, Asset};
use crate::math::CheckedArithmetic;

/// Protocol fees accrued but not yet withdrawn, held per asset side.
///
/// Vault balances sit *outside* the constant-product invariant: crediting
/// the vault never moves the swap price, and draining it never touches
/// the reserves. Balances only grow (one credit per swap, in the input
/// asset) until the fee recipient withdraws, which resets both sides to
/// zero in the same operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeeVault {
    token: Amount,
    currency: Amount,
}

impl FeeVault {
    /// Both sides at zero.
    pub const EMPTY: Self = Self {
        token: Amount::ZERO,
        currency: Amount::ZERO,
    };

    /// Returns the accrued token-side fees.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Returns the accrued currency-side fees.
    pub const fn currency(&self) -> Amount {
        self.currency
    }

    /// Returns the accrued fees on the given side.
    pub const fn of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token => self.token,
            Asset::Currency => self.currency,
        }
    }

    /// Returns `(token, currency)` as a pair.
    #[must_use]
    pub const fn pair(&self) -> (Amount, Amount) {
        (self.token, self.currency)
    }

    /// Returns `true` if there is nothing to withdraw.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_zero() && self.currency.is_zero()
    }

    /// Returns a copy with `amount` added on the given side.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`](crate::error::PoolError::Overflow)
    /// if the side would exceed `u128`.
    pub(crate) fn credit(&self, asset: Asset, amount: Amount) -> crate::error::Result<Self> {
        Ok(match asset {
            Asset::Token => Self {
                token: self.token.safe_add(&amount)?,
                currency: self.currency,
            },
            Asset::Currency => Self {
                token: self.token,
                currency: self.currency.safe_add(&amount)?,
            },
        })
    }
}

impl fmt::Display for FeeVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vault {} token / {} currency", self.token, self.currency)
    }
}
