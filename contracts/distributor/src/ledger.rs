//! Token custody: every movement of SLIB in or out of the distributor.

use soroban_sdk::{token, Address, Env};

use crate::storage;

// Interface of the SLIB token beyond the standard token client.
#[soroban_sdk::contractclient(name = "SlibLogicClient")]
pub trait SlibLogicInterface {
    fn get_logic(env: Env) -> Option<Address>;
}

fn token_client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

/// The token must have linked this contract as its logic before the
/// distributor takes custody of any tokens.
pub fn require_linked(env: &Env) {
    let logic = SlibLogicClient::new(env, &storage::get_token(env)).get_logic();
    assert!(
        logic == Some(env.current_contract_address()),
        "Logic not linked"
    );
}

/// Pull `amount` from `from` into the distributor.
pub fn pull(env: &Env, from: &Address, amount: i128) {
    require_linked(env);
    token_client(env).transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` from the distributor to `to`.
pub fn push(env: &Env, to: &Address, amount: i128) {
    token_client(env).transfer(&env.current_contract_address(), to, &amount);
}

/// Move `amount` straight from `from` to `to` without touching the
/// distributor's balance.
pub fn forward(env: &Env, from: &Address, to: &Address, amount: i128) {
    token_client(env).transfer(from, to, &amount);
}
