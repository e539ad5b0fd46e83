//! Soulliber and soullibee registrations.
//!
//! Category 0 holds individually signed-up soullibers. Categories
//! `1..CATEGORY_COUNT` are profile categories: another party (the profile
//! owner) adds soullibers to them and earns the profile share of their fees.

use soroban_sdk::{Address, Env};

use crate::fees::CATEGORY_COUNT;
use crate::storage::{self, DataKey, SoullibeeAccount, SoulliberProfile};

pub const INDIVIDUAL_CATEGORY: u32 = 0;

pub fn get_soulliber(env: &Env, account: &Address) -> Option<SoulliberProfile> {
    storage::read_entry(env, &DataKey::Soulliber(account.clone()))
}

pub fn require_soulliber(env: &Env, account: &Address) -> SoulliberProfile {
    get_soulliber(env, account).unwrap_or_else(|| panic!("Not a soulliber"))
}

pub fn add_soulliber(env: &Env, soulliber: &Address, profile: &SoulliberProfile) {
    assert!(
        get_soulliber(env, soulliber).is_none(),
        "Already a soulliber"
    );
    storage::write_entry(env, &DataKey::Soulliber(soulliber.clone()), profile);
    let count = storage::get_category_counter(env, profile.category);
    storage::set_category_counter(env, profile.category, count + 1);
}

/// Remove `soulliber`. `caller` must be the soulliber itself, its profile
/// owner, or an admin.
pub fn remove_soulliber(env: &Env, caller: &Address, soulliber: &Address, is_admin: bool) -> u32 {
    let profile = require_soulliber(env, soulliber);
    let owns_profile = profile.profile_owner.as_ref() == Some(caller);
    assert!(
        owns_profile || caller == soulliber || is_admin,
        "Not profile owner"
    );

    storage::remove_entry(env, &DataKey::Soulliber(soulliber.clone()));
    let count = storage::get_category_counter(env, profile.category);
    storage::set_category_counter(env, profile.category, count.saturating_sub(1));
    profile.category
}

pub fn validate_profile_category(category: u32) {
    assert!(
        category > INDIVIDUAL_CATEGORY && category < CATEGORY_COUNT,
        "Invalid category"
    );
}

pub fn get_soullibee(env: &Env, account: &Address) -> Option<SoullibeeAccount> {
    storage::read_entry(env, &DataKey::Soullibee(account.clone()))
}

pub fn is_active_soullibee(env: &Env, account: &Address) -> bool {
    get_soullibee(env, account).map(|a| a.active).unwrap_or(false)
}

pub fn sign_up_soullibee(env: &Env, account: &Address) {
    assert!(!is_active_soullibee(env, account), "Already registered");
    let joined_at = get_soullibee(env, account)
        .map(|a| a.joined_at)
        .unwrap_or(env.ledger().timestamp());
    storage::write_entry(
        env,
        &DataKey::Soullibee(account.clone()),
        &SoullibeeAccount {
            active: true,
            joined_at,
        },
    );
}

pub fn deactivate_soullibee(env: &Env, account: &Address) {
    let mut record = get_soullibee(env, account)
        .filter(|a| a.active)
        .unwrap_or_else(|| panic!("Not registered"));
    record.active = false;
    storage::write_entry(env, &DataKey::Soullibee(account.clone()), &record);
}
