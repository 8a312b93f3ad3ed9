//! # Auth: owner capability
//!
//! The sale has a single privileged identity, the **owner**, with exclusive
//! rights to phase advancement, allow-list management, pausing, and
//! withdrawal. Rather than reading an implicit global, every entry point
//! passes the caller's `Address` down to an explicit check here.
//!
//! ## Storage layout
//!
//! - `AuthKey::Owner` → `Address`, the one and only owner.
//!
//! ## Threat model notes
//!
//! - The owner is set exactly once at initialisation; a second `init` fails
//!   with `AlreadyInitialized`.
//! - Ownership moves only through [`transfer_owner`], which requires the
//!   current owner's authorization and emits an event so observers can track
//!   the handover.

use soroban_sdk::{contracttype, Address, Env};

use crate::{events, Error};

/// Storage keys owned by this module.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthKey {
    /// The one and only owner address.
    Owner,
}

/// Read the owner address, returning `None` before init.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&AuthKey::Owner)
}

/// Set the initial owner. Must be called exactly once (during contract
/// initialisation). Panics with `Error::AlreadyInitialized` if called again.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().persistent().has(&AuthKey::Owner) {
        panic_with_error_auth(env, Error::AlreadyInitialized);
    }
    env.storage().persistent().set(&AuthKey::Owner, owner);
}

/// Assert that `address` is the owner.
/// Panics with `Error::NotOwner` on mismatch and `Error::NotInitialized`
/// before init.
pub fn require_owner(env: &Env, address: &Address) {
    match get_owner(env) {
        Some(ref owner) if owner == address => {}
        Some(_) => panic_with_error_auth(env, Error::NotOwner),
        None => panic_with_error_auth(env, Error::NotInitialized),
    }
}

/// Hand ownership to `new`.
///
/// - `current` must be the owner.
/// - Takes effect immediately; the previous owner retains no rights.
///
/// Emits an `owner` event.
pub fn transfer_owner(env: &Env, current: &Address, new: &Address) {
    require_owner(env, current);
    env.storage().persistent().set(&AuthKey::Owner, new);
    events::emit_owner_changed(env, current.clone(), new.clone());
}

/// Thin wrapper so we can call panic_with_error from inside auth.rs
/// without importing the macro from the parent.
#[inline(always)]
fn panic_with_error_auth(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
