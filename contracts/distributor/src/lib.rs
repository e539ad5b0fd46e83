//! # Soullib Distributor
//!
//! Holds SLIB stakes, routes calls from soullibees to soullibers, charges a
//! per-call fee and distributes it across reward slots per category.
//!
//! ## Flow
//! 1. Admin deploys the SLIB token, deploys this contract with the token and
//!    router addresses, then links it on the token with `set_logic`.
//! 2. Soullibers register individually (with a referrer) or are added to a
//!    profile category; soullibees sign up.
//! 3. `route_a_call` charges the soullibee and splits the charge (see
//!    [`fees`]). Staker and board pools are released per withdraw window.
//! 4. Accounts claim their rewards; referrers claim referral rewards.
//!
//! Every failure is a panic with a reason string; the host rolls back the
//! whole invocation.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub mod access_control;
pub mod events;
pub mod fees;
pub mod ledger;
pub mod registry;
pub mod rewards;
pub mod staking;
pub mod storage;

pub use access_control::{GRANT, REVOKE};
pub use fees::{split_fee, CATEGORY_COUNT, RATE_SLOTS};
pub use storage::{CallRecord, ReleasedRound, SoullibeeAccount, SoulliberProfile};

#[cfg(test)]
mod property_test;
#[cfg(test)]
mod test_setup;

#[contract]
pub struct SlibDistributor;

#[contractimpl]
impl SlibDistributor {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time setup.
    ///
    /// # Arguments
    /// * `admin` - First admin
    /// * `token` - SLIB token address
    /// * `router` - Receives the router share of fees and forwarded deposits
    pub fn initialize(env: Env, admin: Address, token: Address, router: Address) {
        if storage::is_initialized(&env) {
            panic!("already initialized");
        }
        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_token(&env, &token);
        storage::set_router(&env, &router);
        access_control::grant_admin(&env, &admin);

        staking::set_staker_hold(&env, staking::DEFAULT_STAKER_HOLD);
        staking::set_board_hold(&env, staking::DEFAULT_BOARD_HOLD);
        storage::set_withdraw_window(&env, fees::DEFAULT_WITHDRAW_WINDOW);
        fees::install_defaults(&env);

        events::emit_initialized(&env, &admin, &token, &router);
    }

    pub fn get_token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn get_router(env: Env) -> Address {
        storage::get_router(&env)
    }

    // ── Access control ──────────────────────────────────────────────

    /// Grant (`command == 0`) or revoke (`command == 1`) the admin role.
    pub fn toggle_admin_role(env: Env, caller: Address, target: Address, command: u32) {
        access_control::require_admin(&env, &caller);
        match command {
            GRANT => access_control::grant_admin(&env, &target),
            REVOKE => access_control::revoke_admin(&env, &target),
            _ => panic!("Invalid command"),
        }
        events::emit_admin_toggled(&env, &target, command == GRANT, &caller);
    }

    pub fn verify_admin(env: Env, target: Address) -> bool {
        access_control::is_admin(&env, &target)
    }

    // ── Emergency controls ──────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) {
        access_control::require_admin(&env, &caller);
        access_control::require_not_paused(&env);
        access_control::set_paused(&env, true);
        events::emit_paused(&env, &caller);
    }

    pub fn unpause(env: Env, caller: Address) {
        access_control::require_admin(&env, &caller);
        access_control::require_paused(&env);
        access_control::set_paused(&env, false);
        events::emit_unpaused(&env, &caller);
    }

    pub fn is_paused(env: Env) -> bool {
        access_control::is_paused(&env)
    }

    /// Admin: pay `amount` out of the reserve to `to`. Stakes, rewards and
    /// unclaimed pools are owed to accounts and cannot be withdrawn.
    pub fn emergency_withdraw(env: Env, caller: Address, to: Address, amount: i128) {
        access_control::require_admin(&env, &caller);
        assert!(amount > 0, "Amount must be positive");

        rewards::draw_reserve(&env, amount);
        ledger::push(&env, &to, amount);
        events::emit_emergency_withdraw(&env, &to, amount, &caller);
    }

    /// Value sent to the distributor goes straight on to the router.
    pub fn deposit(env: Env, from: Address, amount: i128) {
        from.require_auth();
        assert!(amount > 0, "Amount must be positive");
        let router = storage::get_router(&env);
        ledger::forward(&env, &from, &router, amount);
        events::emit_deposit(&env, &from, &router, amount);
    }

    // ── Staking ─────────────────────────────────────────────────────

    /// Lock `amount` of the staker's SLIB in the distributor.
    pub fn stake_slib(env: Env, staker: Address, amount: i128) {
        access_control::require_not_paused(&env);
        staker.require_auth();
        assert!(amount > 0, "Amount must be positive");

        ledger::pull(&env, &staker, amount);
        let total = staking::add_stake(&env, &staker, amount);
        events::emit_staked(&env, &staker, amount, total);
    }

    /// Return the whole stake to the staker.
    pub fn unstake_slib(env: Env, staker: Address) {
        staker.require_auth();
        let amount = staking::clear_stake(&env, &staker);
        ledger::push(&env, &staker, amount);
        events::emit_unstaked(&env, &staker, amount);
    }

    pub fn stakes(env: Env, target: Address) -> i128 {
        staking::stake_of(&env, &target)
    }

    pub fn has_stake(env: Env, target: Address) -> bool {
        staking::stake_of(&env, &target) > 0
    }

    pub fn set_minimum_hold_for_staker(env: Env, caller: Address, amount: i128) {
        access_control::require_admin(&env, &caller);
        staking::set_staker_hold(&env, amount);
        events::emit_holds_set(&env, amount, staking::board_hold(&env));
    }

    pub fn set_minimum_hold_for_board(env: Env, caller: Address, amount: i128) {
        access_control::require_admin(&env, &caller);
        staking::set_board_hold(&env, amount);
        events::emit_holds_set(&env, staking::staker_hold(&env), amount);
    }

    /// Returns `(staker_hold, board_hold)`.
    pub fn get_minimum_holds(env: Env) -> (i128, i128) {
        (staking::staker_hold(&env), staking::board_hold(&env))
    }

    // ── Registry ────────────────────────────────────────────────────

    /// Register `soulliber` in the individual category, referred by `referrer`.
    pub fn individual_soulliber_sign_up(env: Env, soulliber: Address, referrer: Address) {
        access_control::require_not_paused(&env);
        soulliber.require_auth();
        assert!(soulliber != referrer, "Cannot refer self");

        let profile = SoulliberProfile {
            category: registry::INDIVIDUAL_CATEGORY,
            profile_owner: None,
            referrer: Some(referrer),
            joined_at: env.ledger().timestamp(),
        };
        registry::add_soulliber(&env, &soulliber, &profile);
        events::emit_soulliber_joined(&env, &soulliber, profile.category);
    }

    /// `owner` adds `soulliber` to its profile in `category`.
    pub fn add_a_soulliber_to_profile(env: Env, owner: Address, category: u32, soulliber: Address) {
        access_control::require_not_paused(&env);
        owner.require_auth();
        registry::validate_profile_category(category);

        let profile = SoulliberProfile {
            category,
            profile_owner: Some(owner),
            referrer: None,
            joined_at: env.ledger().timestamp(),
        };
        registry::add_soulliber(&env, &soulliber, &profile);
        events::emit_soulliber_joined(&env, &soulliber, category);
    }

    /// The soulliber itself, its profile owner or an admin removes `soulliber`.
    pub fn remove_soulliber_from_profile(env: Env, caller: Address, soulliber: Address) {
        caller.require_auth();
        let is_admin = access_control::is_admin(&env, &caller);
        let category = registry::remove_soulliber(&env, &caller, &soulliber, is_admin);
        events::emit_soulliber_removed(&env, &soulliber, category);
    }

    pub fn sign_up_as_soullibee(env: Env, caller: Address) {
        access_control::require_not_paused(&env);
        caller.require_auth();
        registry::sign_up_soullibee(&env, &caller);
        events::emit_soullibee_joined(&env, &caller);
    }

    /// Deactivate the caller's soullibee account. The record is kept, so
    /// `is_soullibee` still reports `true`.
    pub fn delete_account_soullibee(env: Env, caller: Address) {
        caller.require_auth();
        registry::deactivate_soullibee(&env, &caller);
        events::emit_soullibee_deleted(&env, &caller);
    }

    pub fn is_soulliber(env: Env, target: Address) -> bool {
        registry::get_soulliber(&env, &target).is_some()
    }

    pub fn is_soullibee(env: Env, target: Address) -> bool {
        registry::get_soullibee(&env, &target).is_some()
    }

    pub fn is_active_soullibee(env: Env, target: Address) -> bool {
        registry::is_active_soullibee(&env, &target)
    }

    pub fn get_soulliber(env: Env, target: Address) -> Option<SoulliberProfile> {
        registry::get_soulliber(&env, &target)
    }

    pub fn get_user_category(env: Env, target: Address) -> u32 {
        registry::require_soulliber(&env, &target).category
    }

    pub fn get_counter_of_each_category(env: Env, category: u32) -> u32 {
        fees::validate_category(category);
        storage::get_category_counter(&env, category)
    }

    // ── Call routing ────────────────────────────────────────────────

    /// Route a call from the soullibee `caller` to the soulliber `to`.
    /// Returns the new call id.
    pub fn route_a_call(env: Env, caller: Address, to: Address) -> u64 {
        access_control::require_not_paused(&env);
        caller.require_auth();
        let profile = registry::require_soulliber(&env, &to);
        assert!(registry::is_active_soullibee(&env, &caller), "Not registered");
        assert!(caller != to, "Cannot call self");

        fees::release(&env, profile.category);

        let charge = storage::get_i128(&env, &storage::DataKey::CallCharge);
        if charge > 0 {
            ledger::pull(&env, &caller, charge);
            fees::accrue(&env, &to, &profile, charge);
        }

        let id: u64 = env
            .storage()
            .instance()
            .get(&storage::DataKey::NextCallId)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&storage::DataKey::NextCallId, &(id + 1));

        let log_key = storage::DataKey::CallLog(to.clone());
        let mut log: Vec<u64> = storage::read_entry(&env, &log_key).unwrap_or(Vec::new(&env));
        log.push_back(id);
        storage::write_entry(&env, &log_key, &log);

        let count_key = storage::DataKey::SoullibeeCalls(caller.clone());
        let count: u32 = storage::read_entry(&env, &count_key).unwrap_or(0);
        storage::write_entry(&env, &count_key, &(count + 1));

        let record = CallRecord {
            id,
            soullibee: caller.clone(),
            soulliber: to.clone(),
            category: profile.category,
            fee: charge,
            timestamp: env.ledger().timestamp(),
        };
        storage::write_entry(&env, &storage::DataKey::Call(id), &record);

        events::emit_call_routed(&env, id, &caller, &to, charge);
        id
    }

    /// Id of the `index`-th (0-based) call received by `soulliber`.
    pub fn get_call_id(env: Env, soulliber: Address, index: u32) -> u64 {
        let log: Vec<u64> = storage::read_entry(&env, &storage::DataKey::CallLog(soulliber))
            .unwrap_or(Vec::new(&env));
        log.get(index).unwrap_or_else(|| panic!("Call index out of range"))
    }

    pub fn get_call_count(env: Env, soulliber: Address) -> u32 {
        storage::read_entry::<Vec<u64>>(&env, &storage::DataKey::CallLog(soulliber))
            .map(|log| log.len())
            .unwrap_or(0)
    }

    pub fn get_soullibee_call_count(env: Env, soullibee: Address) -> u32 {
        storage::read_entry(&env, &storage::DataKey::SoullibeeCalls(soullibee)).unwrap_or(0)
    }

    pub fn get_call(env: Env, id: u64) -> Option<CallRecord> {
        storage::read_entry(&env, &storage::DataKey::Call(id))
    }

    // ── Fee configuration ───────────────────────────────────────────

    pub fn update_call_charge(env: Env, caller: Address, fee: i128) {
        access_control::require_admin(&env, &caller);
        assert!(fee >= 0, "Fee must be non-negative");
        storage::set_i128(&env, &storage::DataKey::CallCharge, fee);
        events::emit_call_charge_set(&env, fee);
    }

    pub fn get_call_charge(env: Env) -> i128 {
        storage::get_i128(&env, &storage::DataKey::CallCharge)
    }

    /// Admin: seconds that must pass between fee releases of a category.
    pub fn set_withdraw_window(env: Env, caller: Address, window: u64) {
        access_control::require_admin(&env, &caller);
        storage::set_withdraw_window(&env, window);
        events::emit_withdraw_window_set(&env, window);
    }

    pub fn get_withdraw_window(env: Env) -> u64 {
        storage::get_withdraw_window(&env)
    }

    /// Admin: replace the seven-slot rate vector of `category`.
    pub fn set_rate(env: Env, caller: Address, category: u32, rates: Vec<u32>) {
        access_control::require_admin(&env, &caller);
        fees::validate_category(category);
        fees::validate_rates(&rates);
        storage::set_rates(&env, category, &rates);
        events::emit_rates_set(&env, category, &rates);
    }

    pub fn get_rate(env: Env, category: u32) -> Vec<u32> {
        fees::validate_category(category);
        storage::get_rates(&env, category)
    }

    /// Roll the round of `category` over if due. Returns whether it did.
    pub fn release_fees(env: Env, category: u32) -> bool {
        access_control::require_not_paused(&env);
        fees::validate_category(category);
        fees::release(&env, category).is_some()
    }

    // ── Fee queries ─────────────────────────────────────────────────

    pub fn get_gross_generated_fee(env: Env, category: u32) -> i128 {
        fees::validate_category(category);
        storage::get_category_fees(&env, category).gross_generated
    }

    pub fn get_unclaimed_fee(env: Env, category: u32) -> i128 {
        fees::validate_category(category);
        storage::get_category_fees(&env, category).unclaimed()
    }

    pub fn get_last_fee_released_date(env: Env, category: u32) -> u64 {
        fees::validate_category(category);
        storage::get_category_fees(&env, category).last_released
    }

    pub fn get_current_round(env: Env, category: u32) -> u32 {
        fees::validate_category(category);
        storage::get_category_fees(&env, category).round
    }

    pub fn get_past_generated_fee(env: Env, round: u32, category: u32) -> i128 {
        fees::validate_category(category);
        storage::get_past_fee(&env, category, round)
    }

    pub fn get_last_unlocked_round(env: Env) -> ReleasedRound {
        storage::get_last_release(&env)
    }

    pub fn get_reserve(env: Env) -> i128 {
        rewards::reserve(&env)
    }

    // ── Rewards ─────────────────────────────────────────────────────

    /// Pay out the caller's reward, referral reward excluded.
    pub fn claim_reward_exempt_referee(env: Env, caller: Address) -> i128 {
        access_control::require_not_paused(&env);
        caller.require_auth();
        let amount = rewards::take_reward(&env, &caller);
        ledger::push(&env, &caller, amount);
        events::emit_reward_claimed(&env, &caller, amount, false);
        amount
    }

    /// Pay out the reward earned through referred soullibers.
    pub fn claim_referral_reward(env: Env, caller: Address) -> i128 {
        access_control::require_not_paused(&env);
        caller.require_auth();
        let amount = rewards::take_referral_reward(&env, &caller);
        ledger::push(&env, &caller, amount);
        events::emit_reward_claimed(&env, &caller, amount, true);
        amount
    }

    /// Admin: hand the unclaimed pools of category `index` to `to`.
    pub fn move_unclaimed_reward(env: Env, caller: Address, to: Address, index: u32) {
        access_control::require_admin(&env, &caller);
        fees::validate_category(index);
        let amount = fees::drain_unclaimed(&env, index);
        rewards::credit_reward(&env, &to, amount);
        events::emit_unclaimed_moved(&env, index, &to, amount);
    }

    pub fn get_reward(env: Env, target: Address) -> i128 {
        rewards::reward_of(&env, &target)
    }

    pub fn get_referral_reward(env: Env, target: Address) -> i128 {
        rewards::referral_reward_of(&env, &target)
    }
}
