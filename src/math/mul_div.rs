//! Multiply-then-divide with a single rounding policy.

use crate::error::PoolError;

/// Computes `a * b / denominator` in `u128`, truncating toward zero.
///
/// Every ratio in the pool funnels through this function, which pins the
/// crate to one rounding policy and one overflow policy:
///
/// - the quotient is the mathematical quotient rounded toward zero
///   (floor, since all operands are unsigned);
/// - the intermediate product is computed at full `u128` width and the
///   call fails if it would overflow *before* the division could bring
///   it back into range.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if `a * b` overflows `u128`.
///
/// # Examples
///
/// ```
/// use cpswap::math::mul_div;
///
/// // 7 * 9 / 4 = 15.75 -> 15
/// assert_eq!(mul_div(7, 9, 4), Ok(15));
/// ```
pub const fn mul_div(a: u128, b: u128, denominator: u128) -> crate::error::Result<u128> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }
    match a.checked_mul(b) {
        Some(product) => Ok(product / denominator),
        None => Err(PoolError::Overflow("mul_div intermediate product")),
    }
}
