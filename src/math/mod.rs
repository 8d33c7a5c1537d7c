//! Integer arithmetic utilities for pool calculations.
//!
//! This module provides [`mul_div`] — the single funnel through which
//! every ratio in the pool is evaluated — and the [`CheckedArithmetic`]
//! trait for overflow-safe operations on domain wrapper types.
//!
//! There is no floating point anywhere in the core: all ratios are
//! integer ratios, evaluated at the last possible moment with one
//! rounding policy (truncate toward zero).

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::mul_div;
