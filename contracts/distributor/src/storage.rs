//! Storage keys, stored record types and typed accessors.

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};

pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Admin(Address),
    AdminCount,
    Paused,
    Token,
    Router,
    StakerHold,
    BoardHold,
    WithdrawWindow,
    CallCharge,
    Rates(u32),
    CategoryFees(u32),
    CategoryCounter(u32),
    /// (category, round) -> fee generated in that round
    PastFee(u32, u32),
    LastRelease,
    Stake(Address),
    /// Timestamp of the last stake increase
    StakeSince(Address),
    Stakers,
    Soulliber(Address),
    Soullibee(Address),
    NextCallId,
    Call(u64),
    CallLog(Address),
    SoullibeeCalls(Address),
    Reward(Address),
    ReferralReward(Address),
    Reserve,
}

/// Registration of a service-providing account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoulliberProfile {
    pub category: u32,
    /// Party that added the soulliber to a profile category.
    pub profile_owner: Option<Address>,
    /// Account credited with referral rewards for this soulliber.
    pub referrer: Option<Address>,
    pub joined_at: u64,
}

/// Registration of a service-consuming account.
///
/// Deleting the account only clears `active`; the record stays.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoullibeeAccount {
    pub active: bool,
    pub joined_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallRecord {
    pub id: u64,
    pub soullibee: Address,
    pub soulliber: Address,
    pub category: u32,
    pub fee: i128,
    pub timestamp: u64,
}

/// Fee accounting of one category.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryFees {
    /// All charges ever generated by calls in this category.
    pub gross_generated: i128,
    /// Charges generated since the last round rollover.
    pub round_generated: i128,
    pub staker_pool: i128,
    pub board_pool: i128,
    pub last_released: u64,
    pub round: u32,
}

impl CategoryFees {
    pub fn unclaimed(&self) -> i128 {
        self.staker_pool + self.board_pool
    }
}

/// The most recent round rollover across all categories.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleasedRound {
    pub category: u32,
    pub round: u32,
    pub amount: i128,
    pub released_at: u64,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).expect("not initialized")
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_router(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Router).expect("not initialized")
}

pub fn set_router(env: &Env, router: &Address) {
    env.storage().instance().set(&DataKey::Router, router);
}

pub fn get_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn set_i128(env: &Env, key: &DataKey, value: i128) {
    env.storage().instance().set(key, &value);
}

// Per-account and per-call entries live in persistent storage, one ledger
// entry each, so the instance entry only holds configuration and totals.

pub fn read_entry<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let persistent = env.storage().persistent();
    let value = persistent.get(key);
    if value.is_some() {
        persistent.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

pub fn write_entry<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let persistent = env.storage().persistent();
    persistent.set(key, value);
    persistent.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_entry(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}

pub fn read_balance(env: &Env, key: &DataKey) -> i128 {
    read_entry(env, key).unwrap_or(0)
}

pub fn write_balance(env: &Env, key: &DataKey, value: i128) {
    write_entry(env, key, &value);
}

pub fn get_withdraw_window(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::WithdrawWindow).unwrap_or(0)
}

pub fn set_withdraw_window(env: &Env, window: u64) {
    env.storage().instance().set(&DataKey::WithdrawWindow, &window);
}

pub fn get_rates(env: &Env, category: u32) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::Rates(category))
        .unwrap_or(Vec::new(env))
}

pub fn set_rates(env: &Env, category: u32, rates: &Vec<u32>) {
    env.storage().instance().set(&DataKey::Rates(category), rates);
}

pub fn get_category_fees(env: &Env, category: u32) -> CategoryFees {
    env.storage()
        .instance()
        .get(&DataKey::CategoryFees(category))
        .unwrap_or(CategoryFees {
            gross_generated: 0,
            round_generated: 0,
            staker_pool: 0,
            board_pool: 0,
            last_released: 0,
            round: 0,
        })
}

pub fn set_category_fees(env: &Env, category: u32, fees: &CategoryFees) {
    env.storage()
        .instance()
        .set(&DataKey::CategoryFees(category), fees);
}

pub fn get_category_counter(env: &Env, category: u32) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CategoryCounter(category))
        .unwrap_or(0)
}

pub fn set_category_counter(env: &Env, category: u32, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::CategoryCounter(category), &count);
}

pub fn get_past_fee(env: &Env, category: u32, round: u32) -> i128 {
    read_balance(env, &DataKey::PastFee(category, round))
}

pub fn set_past_fee(env: &Env, category: u32, round: u32, amount: i128) {
    write_balance(env, &DataKey::PastFee(category, round), amount);
}

pub fn get_last_release(env: &Env) -> ReleasedRound {
    env.storage()
        .instance()
        .get(&DataKey::LastRelease)
        .unwrap_or(ReleasedRound {
            category: 0,
            round: 0,
            amount: 0,
            released_at: 0,
        })
}

pub fn set_last_release(env: &Env, released: &ReleasedRound) {
    env.storage().instance().set(&DataKey::LastRelease, released);
}
