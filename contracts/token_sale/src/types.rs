//! # Types
//!
//! Shared data structures used across all modules of the token sale.
//!
//! ## Design decisions
//!
//! ### Caps as data
//!
//! Each [`Phase`] variant carries its contribution limits as a [`PhaseCaps`]
//! value returned by [`Phase::caps`]. The purchase path performs the same
//! arithmetic against the active caps in every phase; adding a phase means
//! adding a variant and its caps, not another branch in the ledger logic.
//! The [`Open`](Phase::Open) phase uses `i128::MAX` for both caps, leaving
//! the remaining unissued token reserve as the only binding limit.
//!
//! ### Phase as a Finite-State Machine
//!
//! [`Phase`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Seed ──► General ──► Open
//! ```
//!
//! [`Phase::next`] returns `None` from `Open`; there is no transition beyond
//! it and no operation may regress the phase.

use soroban_sdk::contracttype;

/// Token sub-units credited per sub-unit of contributed value.
pub const EXCHANGE_RATE: i128 = 1;

/// Seed phase: per-investor contribution limit.
pub const SEED_INDIVIDUAL_CAP: i128 = 1_500;
/// Seed phase: aggregate raise limit.
pub const SEED_AGGREGATE_CAP: i128 = 15_000;
/// General phase: per-investor contribution limit (cumulative across phases).
pub const GENERAL_INDIVIDUAL_CAP: i128 = 1_000;
/// General phase: aggregate raise limit.
pub const GENERAL_AGGREGATE_CAP: i128 = 30_000;

/// Current lifecycle phase of the sale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Allow-listed investors only, tightest caps.
    Seed,
    /// Open to everyone, lower per-investor cap, larger aggregate cap.
    General,
    /// Fully open; purchases bounded only by the unissued reserve,
    /// redemption enabled.
    Open,
}

/// Contribution limits active during a phase.
///
/// Both values are cumulative: `individual` bounds a single investor's
/// lifetime contribution, `aggregate` bounds the sale-wide raise.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseCaps {
    pub individual: i128,
    pub aggregate: i128,
}

impl Phase {
    /// The phase that follows `self`, or `None` from the terminal phase.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Seed => Some(Phase::General),
            Phase::General => Some(Phase::Open),
            Phase::Open => None,
        }
    }

    /// The contribution limits active while `self` is the current phase.
    pub fn caps(&self) -> PhaseCaps {
        match self {
            Phase::Seed => PhaseCaps {
                individual: SEED_INDIVIDUAL_CAP,
                aggregate: SEED_AGGREGATE_CAP,
            },
            Phase::General => PhaseCaps {
                individual: GENERAL_INDIVIDUAL_CAP,
                aggregate: GENERAL_AGGREGATE_CAP,
            },
            Phase::Open => PhaseCaps {
                individual: i128::MAX,
                aggregate: i128::MAX,
            },
        }
    }
}

/// Per-investor bookkeeping, created lazily on first purchase or allow-list
/// addition.
///
/// `contributed_value` only ever grows; `claimable_tokens` grows on purchase
/// and is zeroed by redemption.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorAccount {
    /// Eligible to purchase during [`Phase::Seed`]. Owner-managed.
    pub is_seed_investor: bool,
    /// Cumulative value this investor has contributed across all phases.
    pub contributed_value: i128,
    /// Tokens purchased but not yet realized on the token ledger.
    pub claimable_tokens: i128,
}

impl InvestorAccount {
    /// A fresh account with no allow-list membership and zero balances.
    pub fn empty() -> Self {
        InvestorAccount {
            is_seed_investor: false,
            contributed_value: 0,
            claimable_tokens: 0,
        }
    }
}
