//! Shared fixtures for the distributor tests: a live SLIB token linked to a
//! freshly initialized distributor.

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};
use soullib_token::{SlibToken, SlibTokenClient};

use crate::{SlibDistributor, SlibDistributorClient};

/// One whole SLIB.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

pub struct Fixture {
    pub env: Env,
    pub token: SlibTokenClient<'static>,
    pub distributor: SlibDistributorClient<'static>,
    pub admin: Address,
    pub router: Address,
}

impl Fixture {
    /// Token, distributor and the logic link between them.
    pub fn new() -> Self {
        let fixture = Self::unlinked();
        fixture.token.set_logic(&fixture.distributor.address);
        fixture
    }

    /// Token and distributor, without `set_logic`.
    pub fn unlinked() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let router = Address::generate(&env);

        let token_id = env.register(SlibToken, ());
        let token = SlibTokenClient::new(&env, &token_id);
        token.initialize(&admin);

        let distributor_id = env.register(SlibDistributor, ());
        let distributor = SlibDistributorClient::new(&env, &distributor_id);
        distributor.initialize(&admin, &token_id, &router);

        Fixture {
            env,
            token,
            distributor,
            admin,
            router,
        }
    }

    /// A new account holding `amount` SLIB.
    pub fn funded_account(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        if amount > 0 {
            self.token.transfer(&self.admin, &account, &amount);
        }
        account
    }

    pub fn set_timestamp(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// A soullibee with `balance` SLIB.
    pub fn soullibee(&self, balance: i128) -> Address {
        let account = self.funded_account(balance);
        self.distributor.sign_up_as_soullibee(&account);
        account
    }

    /// An individual soulliber referred by `referrer`.
    pub fn individual_soulliber(&self, referrer: &Address) -> Address {
        let account = Address::generate(&self.env);
        self.distributor.individual_soulliber_sign_up(&account, referrer);
        account
    }

    /// A soulliber added to `owner`'s profile in `category`.
    pub fn profile_soulliber(&self, owner: &Address, category: u32) -> Address {
        let account = Address::generate(&self.env);
        self.distributor
            .add_a_soulliber_to_profile(owner, &category, &account);
        account
    }
}
