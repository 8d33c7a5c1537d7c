//! The pricing engine: fee split and constant-product output math.
//!
//! Everything here is a pure function of its arguments. The controller
//! feeds these functions a single reserve snapshot per operation, so a
//! quote computed before a swap and the swap itself produce identical
//! numbers — the property slippage protection relies on.
//!
//! # Swap algorithm
//!
//! For an input of `amount_in` against reserves `(r_in, r_out)`:
//!
//! 1. `fee = amount_in * FEE_BPS / 10_000` (truncating)
//! 2. `protocol_cut = fee * PROTOCOL_SHARE_BPS / 10_000` (truncating)
//! 3. `net_in = amount_in - fee`
//! 4. `amount_out = net_in * r_out / (r_in + net_in)`
//!
//! The fee minus the protocol cut stays inside the input reserve, which
//! is what grows `r_token * r_currency` over time and is the source of
//! LP yield. The protocol cut moves to the fee vault instead and never
//! enters the invariant.

use core::fmt;

use crate::domain::{Amount, BasisPoints};
use crate::error::PoolError;
use crate::math::{mul_div, CheckedArithmetic};

/// How one swap input splits into fee, protocol cut, and net input.
///
/// Produced by [`split_fee`]; the same split drives both fee previews
/// and real swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeBreakdown {
    amount_in: Amount,
    fee: Amount,
    protocol_cut: Amount,
    net_in: Amount,
}

impl FeeBreakdown {
    /// Returns the gross input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the total fee (protocol cut included).
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the slice of the fee routed to the protocol vault.
    pub const fn protocol_cut(&self) -> Amount {
        self.protocol_cut
    }

    /// Returns the part of the fee that stays in reserves for LPs.
    pub const fn lp_fee(&self) -> Amount {
        // protocol_cut <= fee by construction
        Amount::new(self.fee.get() - self.protocol_cut.get())
    }

    /// Returns the input net of the fee — the amount that prices the
    /// swap.
    pub const fn net_in(&self) -> Amount {
        self.net_in
    }
}

impl fmt::Display for FeeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in {} = net {} + fee {} (protocol {})",
            self.amount_in, self.net_in, self.fee, self.protocol_cut
        )
    }
}

/// Splits a swap input into its fee components.
///
/// Both rates truncate toward zero, so small inputs legitimately pay a
/// zero fee (at 30 bp, anything under 334 units).
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
/// - [`PoolError::Overflow`] if a rate application overflows.
pub fn split_fee(
    amount_in: Amount,
    fee_rate: BasisPoints,
    protocol_share: BasisPoints,
) -> crate::error::Result<FeeBreakdown> {
    if amount_in.is_zero() {
        return Err(PoolError::InvalidAmount("swap input must be non-zero"));
    }
    let fee = fee_rate.apply(amount_in)?;
    let protocol_cut = protocol_share.apply(fee)?;
    let net_in = amount_in.safe_sub(&fee)?;
    Ok(FeeBreakdown {
        amount_in,
        fee,
        protocol_cut,
        net_in,
    })
}

/// Computes the constant-product output for a net input.
///
/// `amount_out = net_in * reserve_out / (reserve_in + net_in)`, the
/// largest output satisfying
/// `(reserve_in + net_in) * (reserve_out - amount_out) >= reserve_in * reserve_out`.
///
/// The result may be zero for dust inputs against deep reserves; callers
/// that commit to a swap reject that case.
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `net_in` is zero.
/// - [`PoolError::Overflow`] if `net_in * reserve_out` overflows or the
///   denominator exceeds `u128`.
pub fn constant_product_out(
    net_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> crate::error::Result<Amount> {
    if net_in.is_zero() {
        return Err(PoolError::InvalidAmount("net input must be non-zero"));
    }
    let denominator = reserve_in.safe_add(&net_in)?;
    let out = mul_div(net_in.get(), reserve_out.get(), denominator.get())?;
    Ok(Amount::new(out))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn thirty_bp() -> BasisPoints {
        BasisPoints::new(30)
    }

    fn sixth() -> BasisPoints {
        BasisPoints::new(1_667)
    }

    // -- split_fee ----------------------------------------------------------

    #[test]
    fn split_standard_input() {
        // 10_000 at 30bp: fee 30, protocol floor(30 * 1667 / 10000) = 5
        let Ok(split) = split_fee(Amount::new(10_000), thirty_bp(), sixth()) else {
            panic!("expected Ok");
        };
        assert_eq!(split.amount_in(), Amount::new(10_000));
        assert_eq!(split.fee(), Amount::new(30));
        assert_eq!(split.protocol_cut(), Amount::new(5));
        assert_eq!(split.lp_fee(), Amount::new(25));
        assert_eq!(split.net_in(), Amount::new(9_970));
    }

    #[test]
    fn split_small_input_zero_fee() {
        // 10 at 30bp truncates to zero fee; whole input trades
        let Ok(split) = split_fee(Amount::new(10), thirty_bp(), sixth()) else {
            panic!("expected Ok");
        };
        assert_eq!(split.fee(), Amount::ZERO);
        assert_eq!(split.protocol_cut(), Amount::ZERO);
        assert_eq!(split.net_in(), Amount::new(10));
    }

    #[test]
    fn split_zero_input_rejected() {
        let result = split_fee(Amount::ZERO, thirty_bp(), sixth());
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn split_zero_rates() {
        let Ok(split) = split_fee(Amount::new(1_000), BasisPoints::ZERO, BasisPoints::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(split.fee(), Amount::ZERO);
        assert_eq!(split.net_in(), Amount::new(1_000));
    }

    #[test]
    fn split_full_protocol_share() {
        let Ok(split) = split_fee(
            Amount::new(10_000),
            thirty_bp(),
            BasisPoints::ONE_HUNDRED_PERCENT,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(split.protocol_cut(), split.fee());
        assert_eq!(split.lp_fee(), Amount::ZERO);
    }

    #[test]
    fn split_fee_components_sum() {
        let Ok(split) = split_fee(Amount::new(123_456), thirty_bp(), sixth()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            split.net_in().get() + split.fee().get(),
            split.amount_in().get()
        );
        assert_eq!(
            split.lp_fee().get() + split.protocol_cut().get(),
            split.fee().get()
        );
    }

    #[test]
    fn split_display() {
        let Ok(split) = split_fee(Amount::new(10_000), thirty_bp(), sixth()) else {
            panic!("expected Ok");
        };
        let text = format!("{split}");
        assert!(text.contains("net 9970"));
        assert!(text.contains("fee 30"));
    }

    // -- constant_product_out -----------------------------------------------

    #[test]
    fn output_spec_scenario() {
        // 200_000 token / 1_000 currency; 10 currency in (no fee at this size)
        // out = 10 * 200_000 / 1_010 = 1_980.19 -> 1_980
        let Ok(out) = constant_product_out(
            Amount::new(10),
            Amount::new(1_000),
            Amount::new(200_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(1_980));
    }

    #[test]
    fn output_preserves_invariant() {
        let (r_in, r_out) = (1_000_000u128, 2_000_000u128);
        let net = 10_000u128;
        let Ok(out) = constant_product_out(
            Amount::new(net),
            Amount::new(r_in),
            Amount::new(r_out),
        ) else {
            panic!("expected Ok");
        };
        let k_before = r_in * r_out;
        let k_after = (r_in + net) * (r_out - out.get());
        assert!(k_after >= k_before);
    }

    #[test]
    fn output_strictly_below_reserve() {
        // even a massive input cannot drain the output side
        let Ok(out) = constant_product_out(
            Amount::new(u64::MAX as u128),
            Amount::new(100),
            Amount::new(2_000),
        ) else {
            panic!("expected Ok");
        };
        assert!(out < Amount::new(2_000));
    }

    #[test]
    fn output_dust_truncates_to_zero() {
        // 1 in against deep reserves: 1 * 100 / (1_000_000 + 1) -> 0
        let Ok(out) = constant_product_out(
            Amount::new(1),
            Amount::new(1_000_000),
            Amount::new(100),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::ZERO);
    }

    #[test]
    fn output_zero_net_rejected() {
        let result =
            constant_product_out(Amount::ZERO, Amount::new(1_000), Amount::new(1_000));
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn output_numerator_overflow() {
        let result = constant_product_out(Amount::new(2), Amount::new(1), Amount::MAX);
        assert!(matches!(result, Err(PoolError::Overflow(_))));
    }

    #[test]
    fn quote_matches_recomputation() {
        // same inputs, same snapshot -> identical result
        let a = constant_product_out(Amount::new(997), Amount::new(12_345), Amount::new(67_890));
        let b = constant_product_out(Amount::new(997), Amount::new(12_345), Amount::new(67_890));
        assert_eq!(a, b);
    }
}
