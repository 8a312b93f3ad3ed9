extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{
    PauseToggled, PhaseAdvanced, SeedInvestorAdded, SeedInvestorRemoved, TokensPurchased,
    TokensRedeemed, ValueWithdrawn,
};
use crate::{
    Phase, TokenSale, TokenSaleClient, EXCHANGE_RATE, GENERAL_AGGREGATE_CAP,
    GENERAL_INDIVIDUAL_CAP,
};
use soroban_sdk::symbol_short;

const SALE_SUPPLY: i128 = 10_000;

fn setup() -> (Env, TokenSaleClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(TokenSale, ());
    let client = TokenSaleClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let sale_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let payment_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    client.init(
        &owner,
        &sale_token.address(),
        &payment_token.address(),
        &SALE_SUPPLY,
    );
    token::StellarAssetClient::new(&env, &sale_token.address()).mint(&contract_id, &SALE_SUPPLY);
    (env, client, owner)
}

fn funded_seed_investor(
    env: &Env,
    client: &TokenSaleClient,
    owner: &Address,
    funds: i128,
) -> Address {
    let investor = Address::generate(env);
    client.include_seed_investor(owner, &investor);
    token::StellarAssetClient::new(env, &client.payment_token()).mint(&investor, &funds);
    investor
}

#[test]
fn test_phase_advanced_event() {
    let (env, client, owner) = setup();

    client.advance_phase(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("phase"),)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("phase").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: PhaseAdvanced struct, carrying the new phase's caps.
    let event_data: PhaseAdvanced = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PhaseAdvanced {
            previous: Phase::Seed,
            current: Phase::General,
            aggregate_cap: GENERAL_AGGREGATE_CAP,
            individual_cap: GENERAL_INDIVIDUAL_CAP,
        }
    );
}

#[test]
fn test_pause_toggled_event() {
    let (env, client, owner) = setup();

    client.toggle_pause(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("paused").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PauseToggled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PauseToggled { paused: true });

    client.toggle_pause(&owner);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: PauseToggled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PauseToggled { paused: false });
}

#[test]
fn test_seed_investor_added_event() {
    let (env, client, owner) = setup();
    let investor = Address::generate(&env);

    client.include_seed_investor(&owner, &investor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("inv_add"), investor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("inv_add").into_val(&env),
        investor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SeedInvestorAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SeedInvestorAdded {
            investor: investor.clone(),
        }
    );
}

#[test]
fn test_seed_investor_removed_event() {
    let (env, client, owner) = setup();
    let investor = Address::generate(&env);
    client.include_seed_investor(&owner, &investor);

    client.revoke_seed_investor(&owner, &investor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("inv_del").into_val(&env),
        investor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SeedInvestorRemoved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SeedInvestorRemoved {
            investor: investor.clone(),
        }
    );
}

#[test]
fn test_tokens_purchased_event() {
    let (env, client, owner) = setup();
    let investor = funded_seed_investor(&env, &client, &owner, 1_000);
    let value = 750i128;

    client.purchase(&investor, &value, &value);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("purchase"), investor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("purchase").into_val(&env),
        investor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: sale contract, investor, value supplied, claimable so far.
    let event_data: TokensPurchased = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokensPurchased {
            sale: client.address.clone(),
            investor: investor.clone(),
            value,
            claimable: value * EXCHANGE_RATE,
        }
    );
}

#[test]
fn test_purchase_event_reports_cumulative_claimable() {
    let (env, client, owner) = setup();
    let investor = funded_seed_investor(&env, &client, &owner, 1_000);

    client.purchase(&investor, &400, &400);
    client.purchase(&investor, &300, &300);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: TokensPurchased = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.value, 300);
    assert_eq!(event_data.claimable, 700 * EXCHANGE_RATE);
}

#[test]
fn test_tokens_redeemed_event() {
    let (env, client, owner) = setup();
    let investor = funded_seed_investor(&env, &client, &owner, 1_000);
    client.purchase(&investor, &1_000, &1_000);
    client.advance_phase(&owner);
    client.advance_phase(&owner);

    client.redeem(&investor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("redeem").into_val(&env),
        investor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TokensRedeemed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokensRedeemed {
            investor: investor.clone(),
            amount: 1_000 * EXCHANGE_RATE,
        }
    );
}

#[test]
fn test_value_withdrawn_event() {
    let (env, client, owner) = setup();
    let investor = funded_seed_investor(&env, &client, &owner, 1_000);
    client.purchase(&investor, &1_000, &1_000);
    let treasury = Address::generate(&env);

    client.withdraw(&owner, &treasury, &600);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("withdraw").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ValueWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ValueWithdrawn {
            to: treasury.clone(),
            amount: 600,
        }
    );
}
