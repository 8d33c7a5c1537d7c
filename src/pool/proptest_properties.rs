//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the testable properties of the accounting core:
//!
//! 1. **Invariant preservation** — `token * currency` never decreases
//!    across any swap the pool accepts.
//! 2. **Value conservation** — reserve-plus-vault totals move by exactly
//!    the traded amounts.
//! 3. **Liquidity round-trip** — add then remove returns at most what
//!    was deposited.
//! 4. **Quote/execute consistency** — a quote equals the swap executed
//!    against the same reserves.
//! 5. **Fee monotonicity** — the vault only grows until a withdrawal
//!    empties it exactly.
//! 6. **Share fractions** — holder fractions sum to `SCALE` within
//!    truncation tolerance.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, Shares, SwapRequest};
use crate::error::PoolError;
use crate::ledger::{MemoryShareLedger, MemoryTokenLedger};
use crate::pool::{Pool, SCALE};
use crate::traits::ShareLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn pool_acct() -> AccountId {
    AccountId::from_bytes([0xAA; 32])
}

fn owner() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

struct Harness {
    pool: Pool,
    tokens: MemoryTokenLedger,
    shares: MemoryShareLedger,
}

fn bootstrap(token_reserve: u128, currency_reserve: u128) -> Harness {
    let Ok(config) = PoolConfig::standard(pool_acct(), owner()) else {
        panic!("valid config");
    };
    let mut pool = Pool::new(config);
    let mut tokens = MemoryTokenLedger::new(pool_acct());
    let mut shares = MemoryShareLedger::new(pool_acct());
    tokens.credit(owner(), Amount::new(token_reserve));
    tokens.approve(owner(), Amount::new(token_reserve));
    let Ok(_) = pool.initialize(
        owner(),
        Amount::new(token_reserve),
        Amount::new(currency_reserve),
        &mut tokens,
        &mut shares,
    ) else {
        panic!("bootstrap failed");
    };
    // unlimited trading balance for the property runs
    tokens.credit(trader(), Amount::new(u128::MAX / 4));
    tokens.approve(trader(), Amount::new(u128::MAX / 4));
    Harness {
        pool,
        tokens,
        shares,
    }
}

fn k_of(pool: &Pool) -> u128 {
    let r = pool.reserves();
    r.token().get() * r.currency().get()
}

/// Runs one swap, returning `None` when the pool rejected it (dust
/// output). Rejection must leave the pool untouched, which the property
/// bodies verify.
fn try_swap(h: &mut Harness, asset_in: Asset, amount: u128) -> Option<Amount> {
    let Ok(req) = SwapRequest::new(asset_in, Amount::new(amount), Amount::ZERO) else {
        panic!("non-zero amount");
    };
    let before = h.pool.clone();
    match h.pool.swap(trader(), req, &mut h.tokens) {
        Ok(outcome) => Some(outcome.amount_out()),
        Err(PoolError::InsufficientOutput) => {
            assert_eq!(h.pool, before, "rejected swap must not mutate the pool");
            None
        }
        Err(other) => panic!("unexpected swap failure: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve sizes away from extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap inputs from dust to reserve-scale.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

fn side_strategy() -> impl Strategy<Value = Asset> {
    prop_oneof![Just(Asset::Token), Just(Asset::Currency)]
}

// ---------------------------------------------------------------------------
// Property 1 & 2: Invariant preservation and value conservation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn swaps_never_shrink_the_invariant(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        amounts in proptest::collection::vec((side_strategy(), amount_strategy()), 1..12),
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let mut k = k_of(&h.pool);
        for (side, amount) in amounts {
            if try_swap(&mut h, side, amount).is_some() {
                let k_after = k_of(&h.pool);
                prop_assert!(k_after >= k, "k shrank from {k} to {k_after}");
                k = k_after;
            }
        }
    }

    #[test]
    fn swaps_conserve_traded_value(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        side in side_strategy(),
        amount in amount_strategy(),
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let r = h.pool.reserves();
        let v = h.pool.fee_vault();
        let in_before = r.of(side).get() + v.of(side).get();
        let out_before = r.of(side.other()).get() + v.of(side.other()).get();

        if let Some(out) = try_swap(&mut h, side, amount) {
            let r = h.pool.reserves();
            let v = h.pool.fee_vault();
            prop_assert_eq!(r.of(side).get() + v.of(side).get(), in_before + amount);
            prop_assert_eq!(
                r.of(side.other()).get() + v.of(side.other()).get(),
                out_before - out.get()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Liquidity round-trip never profits
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn liquidity_round_trip_returns_at_most_deposit(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        deposit in 1u128..=100_000u128,
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let lp = AccountId::from_bytes([7u8; 32]);
        h.tokens.credit(lp, Amount::new(u128::MAX / 4));
        h.tokens.approve(lp, Amount::new(u128::MAX / 4));

        let deposited = h.pool.add_liquidity(
            lp,
            Amount::MAX,
            Amount::new(deposit),
            &mut h.tokens,
            &mut h.shares,
        );
        let Ok(receipt) = deposited else {
            // deposit too small to mint a share; nothing to round-trip
            return Ok(());
        };
        let Ok(returned) = h.pool.remove_liquidity(
            lp,
            receipt.shares_minted,
            &mut h.tokens,
            &mut h.shares,
        ) else {
            panic!("removal of freshly minted shares failed");
        };
        prop_assert!(returned.token_amount <= receipt.token_amount);
        prop_assert!(returned.currency_amount <= receipt.currency_amount);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Quote/execute consistency
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn quote_equals_execution(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        side in side_strategy(),
        amount in amount_strategy(),
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let quote = h.pool.quote_output(side, Amount::new(amount));
        match try_swap(&mut h, side, amount) {
            Some(out) => prop_assert_eq!(quote, Ok(out)),
            None => prop_assert_eq!(quote, Err(PoolError::InsufficientOutput)),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Fee monotonicity and exact withdrawal
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn vault_grows_until_withdrawn_exactly(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        amounts in proptest::collection::vec((side_strategy(), amount_strategy()), 1..10),
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let mut prior = h.pool.fee_vault();
        for (side, amount) in amounts {
            let _ = try_swap(&mut h, side, amount);
            let vault = h.pool.fee_vault();
            prop_assert!(vault.token() >= prior.token());
            prop_assert!(vault.currency() >= prior.currency());
            prior = vault;
        }

        let accrued = h.pool.fee_vault();
        let Ok(receipt) = h.pool.withdraw_fees(owner(), &mut h.tokens) else {
            panic!("withdraw failed");
        };
        prop_assert_eq!(receipt.token_amount, accrued.token());
        prop_assert_eq!(receipt.currency_amount, accrued.currency());
        prop_assert!(h.pool.fee_vault().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Share fractions sum to SCALE
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn share_fractions_sum_to_scale(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        deposits in proptest::collection::vec(1_000u128..=100_000u128, 1..6),
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let mut holders = vec![owner()];
        for (i, deposit) in deposits.iter().enumerate() {
            let lp = AccountId::from_bytes([10 + i as u8; 32]);
            h.tokens.credit(lp, Amount::new(u128::MAX / 8));
            h.tokens.approve(lp, Amount::new(u128::MAX / 8));
            let Ok(_) = h.pool.add_liquidity(
                lp,
                Amount::MAX,
                Amount::new(*deposit),
                &mut h.tokens,
                &mut h.shares,
            ) else {
                panic!("deposit failed");
            };
            holders.push(lp);
        }

        let mut sum = 0u128;
        for holder in &holders {
            let Ok(fraction) = h.pool.share_of_pool(*holder, &h.shares) else {
                panic!("share query failed");
            };
            // cross-check against the ledger's own view
            prop_assert!(h.shares.balance_of(*holder).get() > 0);
            sum += fraction.get();
        }
        // each holder's fraction truncates by less than one unit
        let tolerance = holders.len() as u128;
        prop_assert!(sum <= SCALE);
        prop_assert!(sum >= SCALE - tolerance);
    }
}

// ---------------------------------------------------------------------------
// Pool/ledger supply agreement
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pool_total_matches_ledger_supply(
        token_reserve in reserve_strategy(),
        currency_reserve in reserve_strategy(),
        deposit in 1_000u128..=100_000u128,
        burn_fraction in 1u128..=100u128,
    ) {
        let mut h = bootstrap(token_reserve, currency_reserve);
        let lp = AccountId::from_bytes([7u8; 32]);
        h.tokens.credit(lp, Amount::new(u128::MAX / 4));
        h.tokens.approve(lp, Amount::new(u128::MAX / 4));
        let Ok(receipt) = h.pool.add_liquidity(
            lp,
            Amount::MAX,
            Amount::new(deposit),
            &mut h.tokens,
            &mut h.shares,
        ) else {
            panic!("deposit failed");
        };

        let burn = Shares::new((receipt.shares_minted.get() * burn_fraction) / 100);
        if !burn.is_zero() {
            let Ok(_) = h.pool.remove_liquidity(lp, burn, &mut h.tokens, &mut h.shares)
            else {
                panic!("removal failed");
            };
        }
        prop_assert_eq!(h.pool.total_shares(), h.shares.total_supply());
    }
}
