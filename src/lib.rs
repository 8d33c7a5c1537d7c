//! # cpswap
//!
//! The accounting core of a constant-product automated market maker: a
//! single pool pairing the native chain currency with one fungible
//! token, supporting permissionless swaps, liquidity provision and
//! removal, and a two-tier fee scheme (LP-compounding plus a
//! protocol-withdrawable vault).
//!
//! The crate owns the numbers, nothing else. Token movement happens
//! through two injected capability traits
//! ([`TokenLedger`](traits::TokenLedger) and
//! [`ShareLedger`](traits::ShareLedger)); native-currency settlement is
//! the embedding environment's job. There is no floating point anywhere:
//! every ratio funnels through [`math::mul_div`] with one rounding
//! policy, truncate toward zero.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | yes | Standard library support and the in-memory ledgers |
//!
//! # Quick Start
//!
//! ```rust
//! use cpswap::config::PoolConfig;
//! use cpswap::domain::{AccountId, Amount, SwapRequest};
//! use cpswap::ledger::{MemoryShareLedger, MemoryTokenLedger};
//! use cpswap::pool::Pool;
//!
//! // identities
//! let pool_acct = AccountId::from_bytes([0xAA; 32]);
//! let owner = AccountId::from_bytes([1; 32]);
//! let trader = AccountId::from_bytes([2; 32]);
//!
//! // ledgers (in production these wrap the real token contracts)
//! let mut tokens = MemoryTokenLedger::new(pool_acct);
//! let mut shares = MemoryShareLedger::new(pool_acct);
//! tokens.credit(owner, Amount::new(200_000));
//! tokens.approve(owner, Amount::new(200_000));
//!
//! // bootstrap: 200_000 token against 1_000 currency sets the price
//! let config = PoolConfig::standard(pool_acct, owner).expect("valid config");
//! let mut pool = Pool::new(config);
//! pool.initialize(owner, Amount::new(200_000), Amount::new(1_000), &mut tokens, &mut shares)
//!     .expect("bootstrap");
//!
//! // quote, then swap — same reserves, same number
//! let quoted = pool
//!     .quote_output(cpswap::domain::Asset::Currency, Amount::new(10))
//!     .expect("quote");
//! let request = SwapRequest::currency_in(Amount::new(10), quoted).expect("non-zero");
//! let outcome = pool.swap(trader, request, &mut tokens).expect("swap");
//! assert_eq!(outcome.amount_out(), quoted);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Environment  │  serializes calls, settles native currency
//! └──────┬───────┘
//!        │ &mut Pool + capability handles
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  state machine, public operations
//! └──────┬───────┘
//!        │ one reserve snapshot per call
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │   Reserves    │     │   FeeVault    │  outside the invariant
//! └──────┬───────┘     └──────────────┘
//!        │ pure functions
//!        ▼
//! ┌──────────────┐
//! │ pricing, math │  split_fee, constant_product_out, mul_div
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AccountId`](domain::AccountId), … |
//! | [`traits`] | Capability seams: [`TokenLedger`](traits::TokenLedger), [`ShareLedger`](traits::ShareLedger) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): fee rates and identities |
//! | [`pool`]   | [`Pool`](pool::Pool), [`Reserves`](pool::Reserves), [`FeeVault`](pool::FeeVault), pricing |
//! | [`math`]   | [`mul_div`](math::mul_div) and checked arithmetic |
//! | [`ledger`] | In-memory ledger implementations (`std` only) |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod domain;
pub mod error;
#[cfg(feature = "std")]
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
