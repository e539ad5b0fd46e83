//! Admin set and the global pause switch.

use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

/// `toggle_admin_role` command that grants the role.
pub const GRANT: u32 = 0;
/// `toggle_admin_role` command that revokes the role.
pub const REVOKE: u32 = 1;

pub fn is_admin(env: &Env, account: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Admin(account.clone()))
        .unwrap_or(false)
}

pub fn admin_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::AdminCount).unwrap_or(0)
}

pub fn grant_admin(env: &Env, account: &Address) {
    if is_admin(env, account) {
        return;
    }
    env.storage()
        .instance()
        .set(&DataKey::Admin(account.clone()), &true);
    env.storage()
        .instance()
        .set(&DataKey::AdminCount, &(admin_count(env) + 1));
}

pub fn revoke_admin(env: &Env, account: &Address) {
    if !is_admin(env, account) {
        return;
    }
    let count = admin_count(env);
    assert!(count > 1, "Cannot remove last admin");
    env.storage()
        .instance()
        .remove(&DataKey::Admin(account.clone()));
    env.storage().instance().set(&DataKey::AdminCount, &(count - 1));
}

pub fn require_admin(env: &Env, caller: &Address) {
    assert!(is_admin(env, caller), "Not an admin");
    caller.require_auth();
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn require_not_paused(env: &Env) {
    assert!(!is_paused(env), "Pausable: paused");
}

pub fn require_paused(env: &Env) {
    assert!(is_paused(env), "Pausable: not paused");
}
