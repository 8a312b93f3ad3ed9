//! # Token Sale Contract
//!
//! This is the root crate of a phase-gated token sale. It exposes the single
//! Soroban contract `TokenSale` whose entry points cover the full sale
//! lifecycle:
//!
//! | Concern        | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`TokenSale::init`]                                   |
//! | Phase control  | `advance_phase`, `toggle_pause`                       |
//! | Allow-list     | `include_seed_investor`, `revoke_seed_investor`       |
//! | Purchase       | [`TokenSale::purchase`]                               |
//! | Redemption     | [`TokenSale::redeem`]                                 |
//! | Treasury       | `withdraw`, `transfer_owner`                          |
//! | Queries        | `phase`, `is_paused`, `owner`, `contribution_of`, `claimable_of`, `total_raised`, `unissued_tokens` |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`auth`]. Storage access is fully
//! delegated to [`storage`]. This file contains **only** the public entry
//! points, the cap arithmetic, and event emissions.
//!
//! The sale runs in three forward-only phases (`Seed → General → Open`),
//! each carrying its own per-investor and aggregate contribution caps as
//! data on the [`Phase`] variant. Purchases pull the payment asset into the
//! contract and accrue a claimable token balance; the sale token itself only
//! moves at redemption, which is permitted once the sale is fully open.
//! Every mutating call is gated on the pause flag before any other
//! validation, and every successful mutation emits exactly one structured
//! event.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env,
};

pub mod events;
pub mod auth;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use types::{
    InvestorAccount, Phase, PhaseCaps, EXCHANGE_RATE, GENERAL_AGGREGATE_CAP,
    GENERAL_INDIVIDUAL_CAP, SEED_AGGREGATE_CAP, SEED_INDIVIDUAL_CAP,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner = 1,
    Paused = 2,
    TerminalPhase = 3,
    AmountMismatch = 4,
    NotSeedInvestor = 5,
    ContributionLimitExceeded = 6,
    ReserveExhausted = 7,
    NotRedeemable = 8,
    NoTokensOwned = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    InvalidAmount = 12,
    Overflow = 13,
}

#[contract]
pub struct TokenSale;

#[contractimpl]
impl TokenSale {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the sale and set its owner.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` gains exclusive rights over phase advancement, the seed
    ///   allow-list, pausing, and withdrawal, and must sign the transaction.
    /// - `sale_token` is the token ledger credited at redemption. The sale
    ///   contract must end up holding `sale_supply` units of it for
    ///   redemptions to settle.
    /// - `payment_token` is the asset purchases are paid in.
    /// - `sale_supply` becomes the initial unissued token reserve; must be
    ///   positive.
    ///
    /// The sale starts in `Phase::Seed`, unpaused, with nothing raised.
    pub fn init(
        env: Env,
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        sale_supply: i128,
    ) {
        owner.require_auth();
        if sale_supply <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        auth::init_owner(&env, &owner);

        storage::set_phase(&env, &Phase::Seed);
        storage::set_paused(&env, false);
        storage::set_total_reserve(&env, 0);
        storage::set_unissued_tokens(&env, sale_supply);
        storage::set_sale_token(&env, &sale_token);
        storage::set_payment_token(&env, &payment_token);

        events::emit_sale_initialized(&env, owner, sale_token, payment_token, sale_supply);
    }

    // ─────────────────────────────────────────────────────────
    // Phase control
    // ─────────────────────────────────────────────────────────

    /// Advance the sale to the next phase (`Seed → General → Open`).
    ///
    /// - `caller` must be the owner.
    /// - Fails with `Error::TerminalPhase` once the sale is `Open`; the
    ///   phase never moves backward.
    ///
    /// Emits a `phase` event carrying the old phase, the new phase, and the
    /// caps now in force.
    pub fn advance_phase(env: Env, caller: Address) {
        caller.require_auth();
        Self::require_not_paused(&env);
        auth::require_owner(&env, &caller);

        let previous = storage::get_phase(&env);
        let current = match previous.next() {
            Some(phase) => phase,
            None => panic_with_error!(&env, Error::TerminalPhase),
        };
        storage::set_phase(&env, &current);

        let caps = current.caps();
        events::emit_phase_advanced(&env, previous, current, caps.aggregate, caps.individual);
    }

    /// Flip the pause switch, halting (or resuming) every mutating call.
    ///
    /// - `caller` must be the owner.
    /// - Valid in any phase and, unlike every other mutation, while paused;
    ///   otherwise the sale could never resume.
    ///
    /// Emits a `paused` event with the new state.
    pub fn toggle_pause(env: Env, caller: Address) {
        caller.require_auth();
        auth::require_owner(&env, &caller);

        let paused = !storage::is_paused(&env);
        storage::set_paused(&env, paused);
        events::emit_pause_toggled(&env, paused);
    }

    // ─────────────────────────────────────────────────────────
    // Seed allow-list
    // ─────────────────────────────────────────────────────────

    /// Add `investor` to the seed allow-list. Idempotent.
    ///
    /// - `caller` must be the owner.
    /// - Valid in any phase; membership is only consulted during `Seed`.
    pub fn include_seed_investor(env: Env, caller: Address, investor: Address) {
        caller.require_auth();
        Self::require_not_paused(&env);
        auth::require_owner(&env, &caller);

        let mut account = storage::load_investor(&env, &investor);
        account.is_seed_investor = true;
        storage::save_investor(&env, &investor, &account);

        events::emit_seed_investor_added(&env, investor);
    }

    /// Remove `investor` from the seed allow-list. Idempotent.
    ///
    /// - `caller` must be the owner.
    /// - Leaves the investor's contribution and claimable balances intact.
    pub fn revoke_seed_investor(env: Env, caller: Address, investor: Address) {
        caller.require_auth();
        Self::require_not_paused(&env);
        auth::require_owner(&env, &caller);

        let mut account = storage::load_investor(&env, &investor);
        account.is_seed_investor = false;
        storage::save_investor(&env, &investor, &account);

        events::emit_seed_investor_removed(&env, investor);
    }

    // ─────────────────────────────────────────────────────────
    // Purchase
    // ─────────────────────────────────────────────────────────

    /// Contribute `value` of the payment asset and accrue a token claim.
    ///
    /// `amount` must equal `value`: the caller declares exactly what they
    /// supply, which guards against value-confusion mistakes at the wallet
    /// boundary.
    ///
    /// Checks, in order: pause gate, declared/supplied equality, a positive
    /// value, then the active phase's rules (seed allow-list membership in
    /// `Seed` only, the per-investor cap, the aggregate cap, and finally
    /// the unissued token reserve). The caps come from [`Phase::caps`], so
    /// this path contains no per-phase branching beyond the allow-list
    /// check.
    ///
    /// On success the payment asset moves from `investor` to the contract,
    /// the investor's contribution and the sale-wide reserve grow by
    /// `value`, and `value * EXCHANGE_RATE` tokens move from the unissued
    /// reserve into the investor's claimable balance. The token ledger
    /// itself is untouched until [`TokenSale::redeem`].
    pub fn purchase(env: Env, investor: Address, amount: i128, value: i128) {
        investor.require_auth();
        Self::require_not_paused(&env);

        if amount != value {
            panic_with_error!(&env, Error::AmountMismatch);
        }
        if value <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let phase = storage::get_phase(&env);
        let caps = phase.caps();
        let mut account = storage::load_investor(&env, &investor);

        if phase == Phase::Seed && !account.is_seed_investor {
            panic_with_error!(&env, Error::NotSeedInvestor);
        }

        let contributed = match account.contributed_value.checked_add(value) {
            Some(total) => total,
            None => panic_with_error!(&env, Error::Overflow),
        };
        if contributed > caps.individual {
            panic_with_error!(&env, Error::ContributionLimitExceeded);
        }

        let raised = match storage::get_total_reserve(&env).checked_add(value) {
            Some(total) => total,
            None => panic_with_error!(&env, Error::Overflow),
        };
        if raised > caps.aggregate {
            panic_with_error!(&env, Error::ReserveExhausted);
        }

        let tokens = match value.checked_mul(EXCHANGE_RATE) {
            Some(tokens) => tokens,
            None => panic_with_error!(&env, Error::Overflow),
        };
        let unissued = storage::get_unissued_tokens(&env);
        if tokens > unissued {
            panic_with_error!(&env, Error::ReserveExhausted);
        }

        // Pull the contributed value into the sale. A failed transfer traps
        // the whole invocation, so no counter above can drift.
        let payment_token = storage::get_payment_token(&env);
        token::Client::new(&env, &payment_token).transfer(
            &investor,
            &env.current_contract_address(),
            &value,
        );

        account.contributed_value = contributed;
        account.claimable_tokens = match account.claimable_tokens.checked_add(tokens) {
            Some(claimable) => claimable,
            None => panic_with_error!(&env, Error::Overflow),
        };
        storage::save_investor(&env, &investor, &account);
        storage::set_total_reserve(&env, raised);
        storage::set_unissued_tokens(&env, unissued - tokens);

        events::emit_tokens_purchased(
            &env,
            env.current_contract_address(),
            investor,
            value,
            account.claimable_tokens,
        );
    }

    // ─────────────────────────────────────────────────────────
    // Redemption
    // ─────────────────────────────────────────────────────────

    /// Realize the caller's claimable tokens on the token ledger.
    ///
    /// - Permitted only once the sale is `Open`; fails with
    ///   `Error::NotRedeemable` before that.
    /// - Fails with `Error::NoTokensOwned` if nothing is claimable.
    ///
    /// Transfers the full claimable balance from the sale contract to
    /// `investor` and zeroes it. A ledger failure traps the call, so there
    /// is no partial credit.
    pub fn redeem(env: Env, investor: Address) {
        investor.require_auth();
        Self::require_not_paused(&env);

        if storage::get_phase(&env) != Phase::Open {
            panic_with_error!(&env, Error::NotRedeemable);
        }

        let mut account = storage::load_investor(&env, &investor);
        let amount = account.claimable_tokens;
        if amount == 0 {
            panic_with_error!(&env, Error::NoTokensOwned);
        }

        let sale_token = storage::get_sale_token(&env);
        token::Client::new(&env, &sale_token).transfer(
            &env.current_contract_address(),
            &investor,
            &amount,
        );

        account.claimable_tokens = 0;
        storage::save_investor(&env, &investor, &account);

        events::emit_tokens_redeemed(&env, investor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Treasury & ownership
    // ─────────────────────────────────────────────────────────

    /// Move `amount` of the raised payment asset from the sale to `to`.
    ///
    /// - `caller` must be the owner.
    /// - `amount` must be positive; the payment ledger itself rejects
    ///   withdrawals beyond what the sale holds.
    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        Self::require_not_paused(&env);
        auth::require_owner(&env, &caller);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let payment_token = storage::get_payment_token(&env);
        token::Client::new(&env, &payment_token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        events::emit_value_withdrawn(&env, to, amount);
    }

    /// Hand ownership of the sale to `new_owner`.
    ///
    /// - `current_owner` must authorize and be the owner.
    /// - The previous owner retains no rights.
    pub fn transfer_owner(env: Env, current_owner: Address, new_owner: Address) {
        current_owner.require_auth();
        auth::transfer_owner(&env, &current_owner, &new_owner);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Current phase of the sale.
    pub fn phase(env: Env) -> Phase {
        storage::get_phase(&env)
    }

    /// Whether the sale is paused.
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// The sale's owner.
    pub fn owner(env: Env) -> Address {
        match auth::get_owner(&env) {
            Some(owner) => owner,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }

    /// Whether `investor` is on the seed allow-list.
    pub fn is_seed_investor(env: Env, investor: Address) -> bool {
        storage::load_investor(&env, &investor).is_seed_investor
    }

    /// Cumulative value `investor` has contributed across all phases.
    pub fn contribution_of(env: Env, investor: Address) -> i128 {
        storage::load_investor(&env, &investor).contributed_value
    }

    /// Tokens `investor` has purchased but not yet redeemed.
    pub fn claimable_of(env: Env, investor: Address) -> i128 {
        storage::load_investor(&env, &investor).claimable_tokens
    }

    /// Cumulative value raised across all investors.
    pub fn total_raised(env: Env) -> i128 {
        storage::get_total_reserve(&env)
    }

    /// Tokens still held by the sale and not yet spoken for by purchases.
    pub fn unissued_tokens(env: Env) -> i128 {
        storage::get_unissued_tokens(&env)
    }

    /// The token ledger credited at redemption.
    pub fn sale_token(env: Env) -> Address {
        storage::get_sale_token(&env)
    }

    /// The asset purchases are paid in.
    pub fn payment_token(env: Env) -> Address {
        storage::get_payment_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_not_paused(env: &Env) {
        if storage::is_paused(env) {
            panic_with_error!(env, Error::Paused);
        }
    }
}
