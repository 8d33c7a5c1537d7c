//! Fundamental domain value types used throughout the pool core.
//!
//! This module contains the value types that model the pool's world:
//! asset amounts, LP share units, basis-point rates, account identities,
//! the two asset sides of the pair, and swap request/outcome records.
//! All types are newtypes with validated constructors where an invariant
//! exists to enforce.

mod account;
mod amount;
mod asset;
mod basis_points;
mod shares;
mod swap;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::BasisPoints;
pub use shares::Shares;
pub use swap::{SwapOutcome, SwapRequest};
