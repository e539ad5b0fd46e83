//! Category rate vectors, the per-call fee split and round rollover.
//!
//! A call charge is split over seven slots (percentages summing to 100):
//!
//! | slot | destination                                             |
//! |------|---------------------------------------------------------|
//! | 0    | profile owner's reward (reserve when none)              |
//! | 1    | soulliber's reward                                      |
//! | 2    | referrer's referral reward (reserve when none)          |
//! | 3    | category staker pool                                    |
//! | 4    | category board pool                                     |
//! | 5    | router, paid out immediately                            |
//! | 6    | contract reserve                                        |
//!
//! The two pools make up the category's unclaimed fee. They are handed out
//! to stakers and board members, pro rata to stake, when a round rolls over
//! (the withdraw window has elapsed since the last release). A stake that
//! grew after the round opened sits that round out.

use soroban_sdk::{Address, Env, Vec, I256};

use crate::storage::{self, CategoryFees, ReleasedRound, SoulliberProfile};
use crate::{events, ledger, rewards, staking};

pub const CATEGORY_COUNT: u32 = 5;
pub const RATE_SLOTS: usize = 7;
pub const RATE_TOTAL: u32 = 100;

pub const SLOT_PROFILE: usize = 0;
pub const SLOT_SOULLIBER: usize = 1;
pub const SLOT_REFERRER: usize = 2;
pub const SLOT_STAKERS: usize = 3;
pub const SLOT_BOARD: usize = 4;
pub const SLOT_ROUTER: usize = 5;
pub const SLOT_RESERVE: usize = 6;

pub const DEFAULT_INDIVIDUAL_RATES: [u32; RATE_SLOTS] = [0, 60, 10, 15, 5, 5, 5];
pub const DEFAULT_PROFILE_RATES: [u32; RATE_SLOTS] = [20, 40, 0, 20, 10, 5, 5];

/// One week.
pub const DEFAULT_WITHDRAW_WINDOW: u64 = 7 * 24 * 60 * 60;

/// Split `charge` over the rate slots. Each slot gets its floor share; the
/// rounding dust lands in the reserve slot, so the parts sum to `charge`.
pub fn split_fee(charge: i128, rates: &[u32; RATE_SLOTS]) -> [i128; RATE_SLOTS] {
    let mut parts = [0i128; RATE_SLOTS];
    let mut assigned = 0i128;
    for (slot, rate) in rates.iter().enumerate() {
        let share = charge
            .checked_mul(*rate as i128)
            .expect("fee overflow")
            / RATE_TOTAL as i128;
        parts[slot] = share;
        assigned += share;
    }
    parts[SLOT_RESERVE] += charge - assigned;
    parts
}

pub fn validate_category(category: u32) {
    assert!(category < CATEGORY_COUNT, "Invalid category");
}

pub fn validate_rates(rates: &Vec<u32>) {
    assert!(rates.len() as usize == RATE_SLOTS, "Invalid rate length");
    let total: u32 = rates.iter().fold(0u32, |acc, r| acc.saturating_add(r));
    assert!(total == RATE_TOTAL, "Rates must sum to 100");
}

pub fn rates_from_array(env: &Env, rates: &[u32; RATE_SLOTS]) -> Vec<u32> {
    let mut out = Vec::new(env);
    for rate in rates.iter() {
        out.push_back(*rate);
    }
    out
}

pub fn rates_array(env: &Env, category: u32) -> [u32; RATE_SLOTS] {
    let stored = storage::get_rates(env, category);
    let mut out = [0u32; RATE_SLOTS];
    for (slot, rate) in stored.iter().enumerate().take(RATE_SLOTS) {
        out[slot] = rate;
    }
    out
}

/// Install default rates and open round 0 for every category.
pub fn install_defaults(env: &Env) {
    let now = env.ledger().timestamp();
    for category in 0..CATEGORY_COUNT {
        let defaults = if category == 0 {
            &DEFAULT_INDIVIDUAL_RATES
        } else {
            &DEFAULT_PROFILE_RATES
        };
        storage::set_rates(env, category, &rates_from_array(env, defaults));
        let mut fees = storage::get_category_fees(env, category);
        fees.last_released = now;
        storage::set_category_fees(env, category, &fees);
    }
}

/// Book a call charge already held by the distributor for `soulliber`.
pub fn accrue(env: &Env, soulliber: &Address, profile: &SoulliberProfile, charge: i128) {
    let parts = split_fee(charge, &rates_array(env, profile.category));

    match &profile.profile_owner {
        Some(owner) => rewards::credit_reward(env, owner, parts[SLOT_PROFILE]),
        None => rewards::credit_reserve(env, parts[SLOT_PROFILE]),
    }
    rewards::credit_reward(env, soulliber, parts[SLOT_SOULLIBER]);
    match &profile.referrer {
        Some(referrer) => rewards::credit_referral(env, referrer, parts[SLOT_REFERRER]),
        None => rewards::credit_reserve(env, parts[SLOT_REFERRER]),
    }
    rewards::credit_reserve(env, parts[SLOT_RESERVE]);

    let mut fees = storage::get_category_fees(env, profile.category);
    fees.staker_pool += parts[SLOT_STAKERS];
    fees.board_pool += parts[SLOT_BOARD];
    fees.gross_generated += charge;
    fees.round_generated += charge;
    storage::set_category_fees(env, profile.category, &fees);

    if parts[SLOT_ROUTER] > 0 {
        ledger::push(env, &storage::get_router(env), parts[SLOT_ROUTER]);
    }
}

fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> i128 {
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
        .expect("share overflow")
}

/// Credit `pool` to every staker holding at least `hold` since `opened_at`,
/// pro rata to stake. Returns the amount credited; the rest stays in the pool.
fn distribute_pool(env: &Env, pool: i128, hold: i128, opened_at: u64) -> i128 {
    if pool <= 0 {
        return 0;
    }
    let eligible = |holder: &Address| -> i128 {
        let stake = staking::stake_of(env, holder);
        if stake >= hold && staking::staked_since(env, holder) <= opened_at {
            stake
        } else {
            0
        }
    };

    let holders = staking::stakers(env);
    let mut weight = 0i128;
    for holder in holders.iter() {
        weight += eligible(&holder);
    }
    if weight == 0 {
        return 0;
    }

    let mut credited = 0i128;
    for holder in holders.iter() {
        let stake = eligible(&holder);
        if stake > 0 {
            let share = mul_div(env, pool, stake, weight);
            rewards::credit_reward(env, &holder, share);
            credited += share;
        }
    }
    credited
}

/// Roll the round of `category` over if its withdraw window has elapsed
/// and the round generated any fee.
pub fn release(env: &Env, category: u32) -> Option<ReleasedRound> {
    let mut fees: CategoryFees = storage::get_category_fees(env, category);
    let now = env.ledger().timestamp();
    let window = storage::get_withdraw_window(env);
    if fees.round_generated == 0 || now < fees.last_released.saturating_add(window) {
        return None;
    }

    storage::set_past_fee(env, category, fees.round, fees.round_generated);

    let opened_at = fees.last_released;
    fees.staker_pool -= distribute_pool(env, fees.staker_pool, staking::staker_hold(env), opened_at);
    fees.board_pool -= distribute_pool(env, fees.board_pool, staking::board_hold(env), opened_at);

    let released = ReleasedRound {
        category,
        round: fees.round,
        amount: fees.round_generated,
        released_at: now,
    };
    fees.round += 1;
    fees.round_generated = 0;
    fees.last_released = now;
    storage::set_category_fees(env, category, &fees);
    storage::set_last_release(env, &released);

    events::emit_round_released(env, category, released.round, released.amount);
    Some(released)
}

/// Empty the unclaimed pools of `category`; returns what they held.
pub fn drain_unclaimed(env: &Env, category: u32) -> i128 {
    let mut fees = storage::get_category_fees(env, category);
    let amount = fees.unclaimed();
    assert!(amount > 0, "No unclaimed reward");
    fees.staker_pool = 0;
    fees.board_pool = 0;
    storage::set_category_fees(env, category, &fees);
    amount
}
