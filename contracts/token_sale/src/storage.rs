//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the sale:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                              |
//! |-----------------|-----------|------------------------------------------|
//! | `Phase`         | `Phase`   | Current sale phase                       |
//! | `PausedFlag`    | `bool`    | Global pause switch                      |
//! | `TotalReserve`  | `i128`    | Cumulative value raised across phases    |
//! | `Unissued`      | `i128`    | Tokens held by the sale, not yet claimed |
//! | `SaleToken`     | `Address` | Token ledger realized at redemption      |
//! | `PaymentToken`  | `Address` | Asset contributed value is paid in       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key              | Type              | Description                     |
//! |------------------|-------------------|---------------------------------|
//! | `Investor(addr)` | `InvestorAccount` | Per-investor totals + allow-list|
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! The sale singleton lives on the instance tier because every mutating call
//! touches it; investor accounts are persistent so each investor's entry
//! carries its own TTL and archives independently.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{InvestorAccount, Phase};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All sale storage keys.
///
/// Instance-tier keys hold the sale singleton and are extended together.
/// The persistent-tier `Investor` key holds per-investor data with an
/// independent TTL.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Current phase of the sale (Instance).
    Phase,
    /// Pause switch applied to every mutating call (Instance).
    PausedFlag,
    /// Cumulative value raised across all investors (Instance).
    TotalReserve,
    /// Tokens still held by the sale and not yet spoken for (Instance).
    Unissued,
    /// Token ledger contract credited at redemption (Instance).
    SaleToken,
    /// Asset contract purchases are paid in (Instance).
    PaymentToken,
    /// Per-investor account keyed by address (Persistent).
    Investor(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Read an instance entry that must have been written by `init`.
/// Panics with `Error::NotInitialized` if the key is absent.
fn get_required<T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
) -> T {
    bump_instance(env);
    match env.storage().instance().get(key) {
        Some(v) => v,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

pub fn get_phase(env: &Env) -> Phase {
    get_required(env, &DataKey::Phase)
}

pub fn set_phase(env: &Env, phase: &Phase) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::Phase, phase);
}

pub fn is_paused(env: &Env) -> bool {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PausedFlag)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::PausedFlag, &paused);
}

pub fn get_total_reserve(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalReserve)
        .unwrap_or(0)
}

pub fn set_total_reserve(env: &Env, total: i128) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::TotalReserve, &total);
}

pub fn get_unissued_tokens(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Unissued)
        .unwrap_or(0)
}

pub fn set_unissued_tokens(env: &Env, remaining: i128) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::Unissued, &remaining);
}

pub fn get_sale_token(env: &Env) -> Address {
    get_required(env, &DataKey::SaleToken)
}

pub fn set_sale_token(env: &Env, token: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::SaleToken, token);
}

pub fn get_payment_token(env: &Env) -> Address {
    get_required(env, &DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Load the account for `investor`, defaulting to an empty account for
/// addresses the sale has never seen.
pub fn load_investor(env: &Env, investor: &Address) -> InvestorAccount {
    let key = DataKey::Investor(investor.clone());
    match env.storage().persistent().get(&key) {
        Some(account) => {
            bump_persistent(env, &key);
            account
        }
        None => InvestorAccount::empty(),
    }
}

/// Persist the account for `investor`.
pub fn save_investor(env: &Env, investor: &Address, account: &InvestorAccount) {
    let key = DataKey::Investor(investor.clone());
    env.storage().persistent().set(&key, account);
    bump_persistent(env, &key);
}
