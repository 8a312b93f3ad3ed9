use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Phase;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleInitialized {
    pub owner: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub sale_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseAdvanced {
    pub previous: Phase,
    pub current: Phase,
    pub aggregate_cap: i128,
    pub individual_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggled {
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeedInvestorAdded {
    pub investor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeedInvestorRemoved {
    pub investor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensPurchased {
    pub sale: Address,
    pub investor: Address,
    pub value: i128,
    pub claimable: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensRedeemed {
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChanged {
    pub previous: Address,
    pub current: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueWithdrawn {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_sale_initialized(
    env: &Env,
    owner: Address,
    sale_token: Address,
    payment_token: Address,
    sale_supply: i128,
) {
    let topics = (symbol_short!("init"),);
    let data = SaleInitialized {
        owner,
        sale_token,
        payment_token,
        sale_supply,
    };
    env.events().publish(topics, data);
}

pub fn emit_phase_advanced(
    env: &Env,
    previous: Phase,
    current: Phase,
    aggregate_cap: i128,
    individual_cap: i128,
) {
    let topics = (symbol_short!("phase"),);
    let data = PhaseAdvanced {
        previous,
        current,
        aggregate_cap,
        individual_cap,
    };
    env.events().publish(topics, data);
}

pub fn emit_pause_toggled(env: &Env, paused: bool) {
    let topics = (symbol_short!("paused"),);
    let data = PauseToggled { paused };
    env.events().publish(topics, data);
}

pub fn emit_seed_investor_added(env: &Env, investor: Address) {
    let topics = (symbol_short!("inv_add"), investor.clone());
    let data = SeedInvestorAdded { investor };
    env.events().publish(topics, data);
}

pub fn emit_seed_investor_removed(env: &Env, investor: Address) {
    let topics = (symbol_short!("inv_del"), investor.clone());
    let data = SeedInvestorRemoved { investor };
    env.events().publish(topics, data);
}

pub fn emit_tokens_purchased(
    env: &Env,
    sale: Address,
    investor: Address,
    value: i128,
    claimable: i128,
) {
    let topics = (symbol_short!("purchase"), investor.clone());
    let data = TokensPurchased {
        sale,
        investor,
        value,
        claimable,
    };
    env.events().publish(topics, data);
}

pub fn emit_tokens_redeemed(env: &Env, investor: Address, amount: i128) {
    let topics = (symbol_short!("redeem"), investor.clone());
    let data = TokensRedeemed { investor, amount };
    env.events().publish(topics, data);
}

pub fn emit_owner_changed(env: &Env, previous: Address, current: Address) {
    let topics = (symbol_short!("owner"),);
    let data = OwnerChanged { previous, current };
    env.events().publish(topics, data);
}

pub fn emit_value_withdrawn(env: &Env, to: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"),);
    let data = ValueWithdrawn { to, amount };
    env.events().publish(topics, data);
}
