//! # SLIB Token
//!
//! Fixed-supply fungible token backing the Soullib distributor. The whole
//! supply is minted to the admin at initialization; there is no mint or burn
//! afterwards, so `total_supply` never moves.
//!
//! The admin may link a "logic" contract (the distributor). The distributor
//! refuses to take custody of tokens unless it is the linked logic address.
//!
//! Soroban has no zero address. The token's own address plays that role: it
//! can never sign, so anything sent there would be lost, and it is rejected
//! as a recipient with the ERC-20 reason string.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol};

pub const NAME: &str = "SLIB Token";
pub const SYMBOL: &str = "SLIB";
pub const DECIMALS: u32 = 18;
/// 10 billion whole tokens at 18 decimals.
pub const TOTAL_SUPPLY: i128 = 10_000_000_000 * 1_000_000_000_000_000_000;

#[cfg(test)]
mod test;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Logic,
    Balance(Address),
    Allowance(AllowanceKey),
}

mod events {
    use super::*;

    pub fn emit_initialized(env: &Env, admin: &Address, supply: i128) {
        const INIT: Symbol = symbol_short!("init");
        env.events().publish((INIT, admin.clone()), supply);
    }

    pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        const TRANSFER: Symbol = symbol_short!("transfer");
        env.events().publish((TRANSFER, from.clone(), to.clone()), amount);
    }

    pub fn emit_approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
        const APPROVE: Symbol = symbol_short!("approve");
        env.events()
            .publish((APPROVE, from.clone(), spender.clone()), (amount, expiration_ledger));
    }

    pub fn emit_logic_set(env: &Env, logic: &Address) {
        const LOGIC: Symbol = symbol_short!("logic");
        env.events().publish((LOGIC,), logic.clone());
    }

    pub fn emit_admin_set(env: &Env, admin: &Address) {
        const ADMIN: Symbol = symbol_short!("admin");
        env.events().publish((ADMIN,), admin.clone());
    }
}

mod storage {
    use super::*;

    pub fn read_admin(env: &Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).expect("not initialized")
    }

    const LIFETIME_THRESHOLD: u32 = 120_960;
    const BUMP_AMOUNT: u32 = 1_051_200;

    /// Keeps a live balance or allowance entry from expiring.
    fn bump(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn read_balance(env: &Env, id: &Address) -> i128 {
        let key = DataKey::Balance(id.clone());
        match env.storage().persistent().get(&key) {
            Some(balance) => {
                bump(env, &key);
                balance
            }
            None => 0,
        }
    }

    pub fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
        bump(env, &key);
    }

    pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        match env.storage().persistent().get::<_, AllowanceValue>(&key) {
            Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
            Some(allowance) => AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            },
            None => AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
        }
    }

    pub fn write_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
        if value.amount > 0 {
            assert!(
                value.expiration_ledger >= env.ledger().sequence(),
                "expiration ledger in the past"
            );
        }
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        env.storage().persistent().set(&key, value);
        bump(env, &key);
    }
}

fn check_amount(amount: i128) {
    assert!(amount >= 0, "negative amount");
}

/// Moves `amount` between two balances. Sum of balances is unchanged.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    if *to == env.current_contract_address() {
        panic!("ERC20: zero recipient");
    }
    let from_balance = storage::read_balance(env, from);
    assert!(from_balance >= amount, "ERC20: transfer amount exceeds balance");
    storage::write_balance(env, from, from_balance - amount);
    let to_balance = storage::read_balance(env, to);
    storage::write_balance(env, to, to_balance + amount);
    events::emit_transfer(env, from, to, amount);
}

#[contract]
pub struct SlibToken;

#[contractimpl]
impl SlibToken {
    /// Mint the whole supply to `admin`. Callable once.
    pub fn initialize(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        storage::write_balance(&env, &admin, TOTAL_SUPPLY);
        events::emit_initialized(&env, &admin, TOTAL_SUPPLY);
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(_env: Env) -> i128 {
        TOTAL_SUPPLY
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_amount(amount);
        move_balance(&env, &from, &to, amount);
    }

    /// Set the allowance of `spender` over `from`'s tokens, replacing any
    /// previous value. A non-zero allowance must not already be expired.
    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_amount(amount);
        storage::write_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        events::emit_approve(&env, &from, &spender, amount, expiration_ledger);
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    /// Spend `amount` of the allowance `from` granted to `spender`.
    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_amount(amount);

        let allowance = storage::read_allowance(&env, &from, &spender);
        assert!(allowance.amount >= amount, "ERC20: insufficient allowance");
        if amount > 0 {
            storage::write_allowance(
                &env,
                &from,
                &spender,
                &AllowanceValue {
                    amount: allowance.amount - amount,
                    expiration_ledger: allowance.expiration_ledger,
                },
            );
        }
        move_balance(&env, &from, &to, amount);
    }

    /// Admin: link the distributor contract.
    pub fn set_logic(env: Env, logic: Address) {
        let admin = storage::read_admin(&env);
        admin.require_auth();
        env.storage().instance().set(&DataKey::Logic, &logic);
        events::emit_logic_set(&env, &logic);
    }

    pub fn get_logic(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Logic)
    }

    /// Admin: hand the admin role to `new_admin`.
    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = storage::read_admin(&env);
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &new_admin);
        events::emit_admin_set(&env, &new_admin);
    }

    pub fn get_admin(env: Env) -> Address {
        storage::read_admin(&env)
    }
}
