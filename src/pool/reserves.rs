//! The reserve ledger: tradeable balances of both assets.

use core::fmt;

use crate::domain::{Amount, Asset};
use crate::math::{mul_div, CheckedArithmetic};

use super::SCALE;

/// The pool's tradeable balances — the two quantities that participate
/// in the constant-product invariant.
///
/// `Reserves` is a passive ledger: it answers read-only queries and
/// produces *new* values via [`credit`](Self::credit) and
/// [`debit`](Self::debit), but never adjusts itself. Only the pool
/// controller assigns an updated value, after a whole operation has
/// been validated. Protocol fees held in the
/// [`FeeVault`](super::FeeVault) are *not* part of these balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    token: Amount,
    currency: Amount,
}

impl Reserves {
    /// Both reserves at zero.
    pub const EMPTY: Self = Self {
        token: Amount::ZERO,
        currency: Amount::ZERO,
    };

    /// Creates a reserve pair.
    pub(crate) const fn new(token: Amount, currency: Amount) -> Self {
        Self { token, currency }
    }

    /// Returns the token reserve.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Returns the currency reserve.
    pub const fn currency(&self) -> Amount {
        self.currency
    }

    /// Returns the reserve on the given side.
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

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_zero() && self.currency.is_zero()
    }

    /// Quotes the current rate for swapping *into* `asset_in`, scaled by
    /// [`SCALE`]: `other_reserve * SCALE / in_reserve`.
    ///
    /// This is a read-only marginal quote, not a commitment — an actual
    /// swap of any size executes at a worse rate because it moves the
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`](crate::error::PoolError::DivisionByZero)
    ///   if the input-side reserve is zero.
    /// - [`PoolError::Overflow`](crate::error::PoolError::Overflow) if
    ///   the scaled numerator overflows.
    pub const fn price(&self, asset_in: Asset) -> crate::error::Result<Amount> {
        let reserve_in = self.of(asset_in);
        let reserve_out = self.of(asset_in.other());
        match mul_div(reserve_out.get(), SCALE, reserve_in.get()) {
            Ok(rate) => Ok(Amount::new(rate)),
            Err(e) => Err(e),
        }
    }

    /// Returns a copy with `amount` added on the given side.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`](crate::error::PoolError::Overflow)
    /// if the side would exceed `u128`.
    pub(crate) fn credit(&self, asset: Asset, amount: Amount) -> crate::error::Result<Self> {
        Ok(match asset {
            Asset::Token => Self::new(self.token.safe_add(&amount)?, self.currency),
            Asset::Currency => Self::new(self.token, self.currency.safe_add(&amount)?),
        })
    }

    /// Returns a copy with `amount` removed from the given side.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`](crate::error::PoolError::Underflow)
    /// if the side holds less than `amount`.
    pub(crate) fn debit(&self, asset: Asset, amount: Amount) -> crate::error::Result<Self> {
        Ok(match asset {
            Asset::Token => Self::new(self.token.safe_sub(&amount)?, self.currency),
            Asset::Currency => Self::new(self.token, self.currency.safe_sub(&amount)?),
        })
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} token / {} currency", self.token, self.currency)
    }
}
