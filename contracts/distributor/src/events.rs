use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

pub fn emit_initialized(env: &Env, admin: &Address, token: &Address, router: &Address) {
    const INITIALIZED: Symbol = symbol_short!("init");
    env.events()
        .publish((INITIALIZED, admin.clone()), (token.clone(), router.clone()));
}

pub fn emit_admin_toggled(env: &Env, target: &Address, granted: bool, caller: &Address) {
    const ADMIN: Symbol = symbol_short!("admin");
    env.events()
        .publish((ADMIN, target.clone()), (granted, caller.clone()));
}

pub fn emit_paused(env: &Env, caller: &Address) {
    const PAUSED: Symbol = symbol_short!("pause");
    env.events().publish((PAUSED,), caller.clone());
}

pub fn emit_unpaused(env: &Env, caller: &Address) {
    const UNPAUSED: Symbol = symbol_short!("unpause");
    env.events().publish((UNPAUSED,), caller.clone());
}

pub fn emit_staked(env: &Env, staker: &Address, amount: i128, total: i128) {
    const STAKED: Symbol = symbol_short!("stake");
    env.events().publish((STAKED, staker.clone()), (amount, total));
}

pub fn emit_unstaked(env: &Env, staker: &Address, amount: i128) {
    const UNSTAKED: Symbol = symbol_short!("unstake");
    env.events().publish((UNSTAKED, staker.clone()), amount);
}

pub fn emit_holds_set(env: &Env, staker_hold: i128, board_hold: i128) {
    const HOLDS: Symbol = symbol_short!("holds");
    env.events().publish((HOLDS,), (staker_hold, board_hold));
}

pub fn emit_soulliber_joined(env: &Env, soulliber: &Address, category: u32) {
    const JOINED: Symbol = symbol_short!("sl_join");
    env.events().publish((JOINED, soulliber.clone()), category);
}

pub fn emit_soulliber_removed(env: &Env, soulliber: &Address, category: u32) {
    const REMOVED: Symbol = symbol_short!("sl_remove");
    env.events().publish((REMOVED, soulliber.clone()), category);
}

pub fn emit_soullibee_joined(env: &Env, soullibee: &Address) {
    const JOINED: Symbol = symbol_short!("sb_join");
    env.events().publish((JOINED, soullibee.clone()), ());
}

pub fn emit_soullibee_deleted(env: &Env, soullibee: &Address) {
    const DELETED: Symbol = symbol_short!("sb_delete");
    env.events().publish((DELETED, soullibee.clone()), ());
}

pub fn emit_call_routed(env: &Env, id: u64, soullibee: &Address, soulliber: &Address, fee: i128) {
    const ROUTED: Symbol = symbol_short!("call");
    env.events()
        .publish((ROUTED, soullibee.clone(), soulliber.clone()), (id, fee));
}

pub fn emit_rates_set(env: &Env, category: u32, rates: &Vec<u32>) {
    const RATES: Symbol = symbol_short!("rates");
    env.events().publish((RATES, category), rates.clone());
}

pub fn emit_call_charge_set(env: &Env, fee: i128) {
    const CHARGE: Symbol = symbol_short!("charge");
    env.events().publish((CHARGE,), fee);
}

pub fn emit_withdraw_window_set(env: &Env, window: u64) {
    const WINDOW: Symbol = symbol_short!("window");
    env.events().publish((WINDOW,), window);
}

pub fn emit_round_released(env: &Env, category: u32, round: u32, amount: i128) {
    const RELEASED: Symbol = symbol_short!("released");
    env.events().publish((RELEASED, category), (round, amount));
}

pub fn emit_reward_claimed(env: &Env, account: &Address, amount: i128, referral: bool) {
    const CLAIMED: Symbol = symbol_short!("claimed");
    env.events()
        .publish((CLAIMED, account.clone()), (amount, referral));
}

pub fn emit_unclaimed_moved(env: &Env, category: u32, to: &Address, amount: i128) {
    const MOVED: Symbol = symbol_short!("moved");
    env.events().publish((MOVED, category), (to.clone(), amount));
}

pub fn emit_deposit(env: &Env, from: &Address, router: &Address, amount: i128) {
    const DEPOSIT: Symbol = symbol_short!("deposit");
    env.events()
        .publish((DEPOSIT, from.clone()), (router.clone(), amount));
}

pub fn emit_emergency_withdraw(env: &Env, to: &Address, amount: i128, caller: &Address) {
    const WITHDRAW: Symbol = symbol_short!("emergency");
    env.events()
        .publish((WITHDRAW, to.clone()), (amount, caller.clone()));
}
