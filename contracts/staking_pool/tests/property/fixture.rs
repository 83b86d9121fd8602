//! Shared deployment helpers for the property suites.

use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking_pool::constants::ONE_HUNDRED_PERCENT;
use staking_pool::{StakingPool, StakingPoolClient};

pub const START: u64 = 1_700_000_000;
pub const REWARD: i128 = 100_000_000_000;
pub const TEN_PERCENT: i128 = ONE_HUNDRED_PERCENT / 10;
pub const CAPACITY: i128 = 1_000_000_000_000;

pub struct Fixture {
    pub env: Env,
    pub client: StakingPoolClient<'static>,
    pub admin: Address,
    pub token: Address,
}

impl Fixture {
    /// Deployed but not initialized; the clock sits 100 s before `START`.
    pub fn deployed() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START - 100);

        let token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let admin = Address::generate(&env);
        let contract_id = env.register(StakingPool, (admin.clone(), token.clone()));
        let client = StakingPoolClient::new(&env, &contract_id);

        Fixture {
            env,
            client,
            admin,
            token,
        }
    }

    /// 10% a year on a `REWARD` budget, open from `START`.
    pub fn initialized() -> Self {
        let fixture = Self::deployed();
        fixture.fund(&fixture.admin, REWARD);
        fixture
            .client
            .initialize(&fixture.admin, &START, &REWARD, &TEN_PERCENT);
        fixture
    }

    /// Mint `amount` to `who` and approve the pool to pull all of it.
    pub fn fund(&self, who: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.token).mint(who, &amount);
        self.approve(who, amount);
    }

    /// Replace `who`'s allowance to the pool with `amount`.
    pub fn approve(&self, who: &Address, amount: i128) {
        TokenClient::new(&self.env, &self.token).approve(
            who,
            &self.client.address,
            &amount,
            &1_000,
        );
    }

    pub fn staker(&self, amount: i128) -> Address {
        let who = Address::generate(&self.env);
        self.fund(&who, amount);
        who
    }

    pub fn custody(&self) -> i128 {
        TokenClient::new(&self.env, &self.token).balance(&self.client.address)
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}
