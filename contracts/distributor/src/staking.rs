//! Stake ledger and staker/board tiers.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::{self, DataKey};

/// 20 000 SLIB.
pub const DEFAULT_STAKER_HOLD: i128 = 20_000 * 1_000_000_000_000_000_000;
/// 5 000 000 SLIB.
pub const DEFAULT_BOARD_HOLD: i128 = 5_000_000 * 1_000_000_000_000_000_000;

pub fn stake_of(env: &Env, staker: &Address) -> i128 {
    storage::read_balance(env, &DataKey::Stake(staker.clone()))
}

/// When the stake of `staker` last grew. Only stakes in place before a round
/// opened share in that round's pools.
pub fn staked_since(env: &Env, staker: &Address) -> u64 {
    storage::read_entry(env, &DataKey::StakeSince(staker.clone())).unwrap_or(0)
}

pub fn stakers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Stakers)
        .unwrap_or(Vec::new(env))
}

/// Add `amount` to the stake of `staker`; returns the new stake.
pub fn add_stake(env: &Env, staker: &Address, amount: i128) -> i128 {
    let current = stake_of(env, staker);
    let updated = current.checked_add(amount).expect("stake overflow");
    storage::write_balance(env, &DataKey::Stake(staker.clone()), updated);
    storage::write_entry(
        env,
        &DataKey::StakeSince(staker.clone()),
        &env.ledger().timestamp(),
    );

    if current == 0 {
        let mut list = stakers(env);
        list.push_back(staker.clone());
        env.storage().instance().set(&DataKey::Stakers, &list);
    }
    updated
}

/// Zero the stake of `staker`; returns what was staked.
pub fn clear_stake(env: &Env, staker: &Address) -> i128 {
    let current = stake_of(env, staker);
    assert!(current > 0, "No stake");
    storage::remove_entry(env, &DataKey::Stake(staker.clone()));
    storage::remove_entry(env, &DataKey::StakeSince(staker.clone()));

    let mut list = stakers(env);
    if let Some(pos) = list.iter().position(|a| a == *staker) {
        list.remove(pos as u32);
        env.storage().instance().set(&DataKey::Stakers, &list);
    }
    current
}

pub fn staker_hold(env: &Env) -> i128 {
    storage::get_i128(env, &DataKey::StakerHold)
}

pub fn board_hold(env: &Env) -> i128 {
    storage::get_i128(env, &DataKey::BoardHold)
}

pub fn set_staker_hold(env: &Env, amount: i128) {
    assert!(amount > 0, "Hold must be positive");
    storage::set_i128(env, &DataKey::StakerHold, amount);
}

pub fn set_board_hold(env: &Env, amount: i128) {
    assert!(amount > 0, "Hold must be positive");
    storage::set_i128(env, &DataKey::BoardHold, amount);
}
