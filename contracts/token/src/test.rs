#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

fn setup() -> (Env, SlibTokenClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SlibToken, ());
    let client = SlibTokenClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

const AMOUNT: i128 = 20_000 * 1_000_000_000_000_000_000;

#[test]
fn test_metadata_after_deployment() {
    let (env, client, admin) = setup();

    assert_eq!(client.name(), String::from_str(&env, "SLIB Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "SLIB"));
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.total_supply(), 10_000_000_000_000_000_000_000_000_000);
    assert_eq!(client.balance(&admin), TOTAL_SUPPLY);
    assert_eq!(client.get_admin(), admin);
}

#[test]
#[should_panic(expected = "already initialized")]
fn test_initialize_twice_panics() {
    let (env, client, _admin) = setup();
    client.initialize(&Address::generate(&env));
}

#[test]
fn test_transfer_moves_value() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);

    client.transfer(&admin, &alice, &AMOUNT);

    assert_eq!(client.balance(&alice), AMOUNT);
    assert_eq!(client.balance(&admin), TOTAL_SUPPLY - AMOUNT);
}

#[test]
#[should_panic(expected = "ERC20: zero recipient")]
fn test_transfer_to_null_account_panics() {
    let (_env, client, admin) = setup();
    client.transfer(&admin, &client.address, &AMOUNT);
}

#[test]
fn test_transfer_to_null_account_reports_error() {
    let (_env, client, admin) = setup();
    let res = client.try_transfer(&admin, &client.address, &AMOUNT);
    assert!(res.is_err());
    assert_eq!(client.balance(&admin), TOTAL_SUPPLY);
}

#[test]
#[should_panic(expected = "ERC20: transfer amount exceeds balance")]
fn test_transfer_overdraft_panics() {
    let (env, client, _admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.transfer(&alice, &bob, &1);
}

#[test]
#[should_panic(expected = "negative amount")]
fn test_transfer_negative_amount_panics() {
    let (env, client, admin) = setup();
    client.transfer(&admin, &Address::generate(&env), &-1);
}

#[test]
fn test_supply_invariant_across_transfers() {
    let (env, client, admin) = setup();
    let accounts = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];

    for (i, account) in accounts.iter().enumerate() {
        client.transfer(&admin, account, &(AMOUNT * (i as i128 + 1)));
    }
    client.transfer(&accounts[3], &accounts[0], &AMOUNT);
    client.transfer(&accounts[1], &accounts[2], &(AMOUNT / 3));

    let sum: i128 = accounts.iter().map(|a| client.balance(a)).sum::<i128>() + client.balance(&admin);
    assert_eq!(sum, TOTAL_SUPPLY);
    assert_eq!(client.total_supply(), TOTAL_SUPPLY);
}

#[test]
fn test_approve_and_allowance() {
    let (env, client, admin) = setup();
    let spender = Address::generate(&env);

    client.approve(&admin, &spender, &AMOUNT, &1000);
    assert_eq!(client.allowance(&admin, &spender), AMOUNT);

    client.approve(&admin, &spender, &5, &1000);
    assert_eq!(client.allowance(&admin, &spender), 5);
}

#[test]
fn test_transfer_from_consumes_whole_allowance() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    client.transfer(&admin, &owner, &(AMOUNT * 2));

    client.approve(&owner, &spender, &AMOUNT, &1000);
    let allowed = client.allowance(&owner, &spender);
    client.transfer_from(&spender, &owner, &spender, &allowed);

    assert_eq!(client.allowance(&owner, &spender), 0);
    assert_eq!(client.balance(&spender), AMOUNT);
    assert_eq!(client.balance(&owner), AMOUNT);
}

#[test]
fn test_transfer_from_partial_decrements_allowance() {
    let (env, client, admin) = setup();
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.approve(&admin, &spender, &1_000, &1000);
    client.transfer_from(&spender, &admin, &recipient, &400);

    assert_eq!(client.allowance(&admin, &spender), 600);
    assert_eq!(client.balance(&recipient), 400);
}

#[test]
#[should_panic(expected = "ERC20: insufficient allowance")]
fn test_transfer_from_over_allowance_panics() {
    let (env, client, admin) = setup();
    let spender = Address::generate(&env);

    client.approve(&admin, &spender, &100, &1000);
    client.transfer_from(&spender, &admin, &spender, &101);
}

#[test]
fn test_expired_allowance_reads_zero() {
    let (env, client, admin) = setup();
    let spender = Address::generate(&env);

    let seq = env.ledger().sequence();
    client.approve(&admin, &spender, &100, &(seq + 10));
    assert_eq!(client.allowance(&admin, &spender), 100);

    env.ledger().with_mut(|li| li.sequence_number = seq + 11);
    assert_eq!(client.allowance(&admin, &spender), 0);
    assert!(client.try_transfer_from(&spender, &admin, &spender, &1).is_err());
}

#[test]
#[should_panic(expected = "expiration ledger in the past")]
fn test_approve_with_past_expiration_panics() {
    let (env, client, admin) = setup();
    env.ledger().with_mut(|li| li.sequence_number = 100);
    client.approve(&admin, &Address::generate(&env), &10, &99);
}

#[test]
fn test_set_logic() {
    let (env, client, _admin) = setup();
    assert_eq!(client.get_logic(), None);

    let logic = Address::generate(&env);
    client.set_logic(&logic);
    assert_eq!(client.get_logic(), Some(logic));
}

#[test]
fn test_set_admin() {
    let (env, client, _admin) = setup();
    let new_admin = Address::generate(&env);
    client.set_admin(&new_admin);
    assert_eq!(client.get_admin(), new_admin);
}

#[test]
fn test_balances_live_in_persistent_storage() {
    use soroban_sdk::testutils::storage::Persistent as _;

    let (env, client, admin) = setup();
    let to = Address::generate(&env);
    client.transfer(&admin, &to, &AMOUNT);

    let (in_instance, in_persistent, ttl) = env.as_contract(&client.address, || {
        let key = DataKey::Balance(to.clone());
        (
            env.storage().instance().has(&key),
            env.storage().persistent().has(&key),
            env.storage().persistent().get_ttl(&key),
        )
    });
    assert!(!in_instance);
    assert!(in_persistent);
    assert!(ttl > 120_960);
}
