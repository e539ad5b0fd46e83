//! Per-account reward ledgers and the contract reserve.

use soroban_sdk::{Address, Env};

use crate::storage::{self, DataKey};

pub fn reward_of(env: &Env, account: &Address) -> i128 {
    storage::read_balance(env, &DataKey::Reward(account.clone()))
}

pub fn referral_reward_of(env: &Env, account: &Address) -> i128 {
    storage::read_balance(env, &DataKey::ReferralReward(account.clone()))
}

pub fn reserve(env: &Env) -> i128 {
    storage::get_i128(env, &DataKey::Reserve)
}

fn credit(env: &Env, key: DataKey, amount: i128) {
    if amount == 0 {
        return;
    }
    let current = storage::read_balance(env, &key);
    storage::write_balance(env, &key, current + amount);
}

pub fn credit_reward(env: &Env, account: &Address, amount: i128) {
    credit(env, DataKey::Reward(account.clone()), amount);
}

pub fn credit_referral(env: &Env, account: &Address, amount: i128) {
    credit(env, DataKey::ReferralReward(account.clone()), amount);
}

pub fn credit_reserve(env: &Env, amount: i128) {
    if amount == 0 {
        return;
    }
    storage::set_i128(env, &DataKey::Reserve, reserve(env) + amount);
}

/// Take `amount` out of the reserve. Nothing else the distributor holds is
/// free to leave it.
pub fn draw_reserve(env: &Env, amount: i128) {
    let current = reserve(env);
    assert!(amount <= current, "Insufficeint balance");
    storage::set_i128(env, &DataKey::Reserve, current - amount);
}

/// Zero the non-referral reward of `account` and return it.
pub fn take_reward(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Reward(account.clone());
    let amount = storage::read_balance(env, &key);
    assert!(amount > 0, "No reward");
    storage::remove_entry(env, &key);
    amount
}

/// Zero the referral reward of `account` and return it.
pub fn take_referral_reward(env: &Env, account: &Address) -> i128 {
    let key = DataKey::ReferralReward(account.clone());
    let amount = storage::read_balance(env, &key);
    assert!(amount > 0, "No referral reward");
    storage::remove_entry(env, &key);
    amount
}
