//! Basis-point representation for fee rates.

use core::fmt;

use super::Amount;
use crate::math::mul_div;

/// Denominator representing 100%.
const MAX_BPS: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for the swap fee rate and for the protocol's share of that fee.
/// All `u32` values are representable, but values above 10 000 are
/// nonsensical as rates; [`is_valid_rate`](Self::is_valid_rate) checks.
///
/// Applying a rate to an amount truncates toward zero, like every other
/// ratio in the pool: at 30 bp, inputs below 334 units pay zero fee.
///
/// # Examples
///
/// ```
/// use cpswap::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.get(), 30);
/// assert!(fee.is_valid_rate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const ONE_HUNDRED_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid rate range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_rate(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount * self / 10_000`, truncating toward zero.
    ///
    /// Funnels through [`mul_div`] so the whole crate shares one rounding
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`](crate::error::PoolError::Overflow)
    /// if the intermediate multiplication overflows `u128`.
    pub const fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        match mul_div(amount.get(), self.0 as u128, MAX_BPS as u128) {
            Ok(v) => Ok(Amount::new(v)),
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
