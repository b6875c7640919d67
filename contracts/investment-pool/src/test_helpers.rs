//! Shared fixtures for contract tests. `setup()` registers a Stellar asset contract as
//! the pooled asset; `setup_with_token()` accepts a test double instead.

use crate::{InvestmentPool, InvestmentPoolClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Symbol, TryFromVal, Val,
};

/// One whole unit of the pooled asset (7 decimals)
pub const UNIT: i128 = 10_000_000;

/// 0.01 units
pub const MIN_DEPOSIT: i128 = UNIT / 100;

pub struct Setup {
    pub env: Env,
    pub client: InvestmentPoolClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: Address,
}

pub fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    setup_with_token(env, admin, token)
}

pub fn setup_with_token(env: Env, admin: Address, token: Address) -> Setup {
    let contract_id = env.register(InvestmentPool, ());
    let client = InvestmentPoolClient::new(&env, &contract_id);
    client.initialize(&admin, &token, &MIN_DEPOSIT);
    Setup {
        env,
        client,
        contract_id,
        admin,
        token,
    }
}

impl Setup {
    pub fn mint(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.token).mint(to, &amount);
    }

    pub fn token_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.token).balance(who)
    }

    /// Generate an address, fund it and deposit `amount` into the pool.
    pub fn new_member(&self, amount: i128) -> Address {
        let member = Address::generate(&self.env);
        self.mint(&member, amount);
        self.client.deposit(&member, &amount);
        member
    }

    /// Create, approve and return a proposal paying `amount` to `target`.
    pub fn approved_proposal(&self, proposer: &Address, target: &Address, amount: i128) -> u64 {
        let id = self.client.create_proposal(
            proposer,
            &soroban_sdk::String::from_str(&self.env, "Invest in protocol XYZ"),
            target,
            &amount,
        );
        self.client.approve_proposal(&self.admin, &id);
        id
    }

    /// Σ balances over the active members must equal the pool aggregate.
    pub fn assert_pool_consistent(&self) {
        let mut sum: i128 = 0;
        for member in self.client.get_active_members().iter() {
            let info = self.client.get_member_info(&member);
            assert!(info.is_active);
            assert!(info.balance > 0);
            sum += info.balance;
        }
        assert_eq!(sum, self.client.get_pool_balance());
        assert!(self.client.get_pool_balance() <= self.client.get_contract_balance());
    }

    /// Data payload of the most recent event named `name` emitted by the pool.
    pub fn last_event(&self, name: &str) -> Option<Val> {
        let topic = Symbol::new(&self.env, name);
        let mut found = None;
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.contract_id {
                continue;
            }
            let Some(first) = topics.get(0) else {
                continue;
            };
            if let Ok(symbol) = Symbol::try_from_val(&self.env, &first) {
                if symbol == topic {
                    found = Some(data);
                }
            }
        }
        found
    }
}
