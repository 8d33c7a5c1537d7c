//! Swap request and outcome records.

use core::fmt;

use super::{Amount, Asset};
use crate::error::PoolError;

/// A single swap order: input side, input amount, and the caller's
/// slippage bound.
///
/// The request is ephemeral — it describes one atomic operation and is
/// discarded after execution. The output side is implied by
/// [`Asset::other`].
///
/// # Invariants
///
/// `amount_in` is always non-zero; `min_out` may be zero (no slippage
/// protection).
///
/// # Examples
///
/// ```
/// use cpswap::domain::{Amount, Asset, SwapRequest};
///
/// let req = SwapRequest::new(Asset::Currency, Amount::new(10), Amount::ZERO);
/// assert!(req.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    asset_in: Asset,
    amount_in: Amount,
    min_out: Amount,
}

impl SwapRequest {
    /// Creates a swap request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `amount_in` is zero.
    pub const fn new(
        asset_in: Asset,
        amount_in: Amount,
        min_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("swap input must be non-zero"));
        }
        Ok(Self {
            asset_in,
            amount_in,
            min_out,
        })
    }

    /// Shorthand for a currency-in, token-out request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `amount_in` is zero.
    pub const fn currency_in(amount_in: Amount, min_out: Amount) -> crate::error::Result<Self> {
        Self::new(Asset::Currency, amount_in, min_out)
    }

    /// Shorthand for a token-in, currency-out request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `amount_in` is zero.
    pub const fn token_in(amount_in: Amount, min_out: Amount) -> crate::error::Result<Self> {
        Self::new(Asset::Token, amount_in, min_out)
    }

    /// Returns the input side of the swap.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        self.asset_in
    }

    /// Returns the output side of the swap.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_in.other()
    }

    /// Returns the input amount (always non-zero).
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    pub const fn min_out(&self) -> Amount {
        self.min_out
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} {} (min out {})",
            self.amount_in, self.asset_in, self.min_out
        )
    }
}

/// The outcome of an executed swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in` — the fee is a strict fraction of the input.
/// - `protocol_cut <= fee` — the protocol takes a slice of the fee, never
///   more than the fee itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    asset_in: Asset,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    protocol_cut: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if either amount is zero, the
    /// fee reaches the input amount, or the protocol cut exceeds the fee.
    pub const fn new(
        asset_in: Asset,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        protocol_cut: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::InvalidAmount("amount_out must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(PoolError::InvalidAmount("fee must be below amount_in"));
        }
        if protocol_cut.get() > fee.get() {
            return Err(PoolError::InvalidAmount("protocol cut exceeds fee"));
        }
        Ok(Self {
            asset_in,
            amount_in,
            amount_out,
            fee,
            protocol_cut,
        })
    }

    /// Returns the input side of the executed swap.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        self.asset_in
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the total fee charged, in the input asset.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the slice of the fee routed to the protocol vault, in the
    /// input asset.
    pub const fn protocol_cut(&self) -> Amount {
        self.protocol_cut
    }

    /// Returns the part of the fee left compounding for LPs.
    pub const fn lp_fee(&self) -> Amount {
        // protocol_cut <= fee is a construction invariant
        Amount::new(self.fee.get() - self.protocol_cut.get())
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swapped {} {} for {} {} (fee {}, protocol {})",
            self.amount_in,
            self.asset_in,
            self.amount_out,
            self.asset_in.other(),
            self.fee,
            self.protocol_cut
        )
    }
}
