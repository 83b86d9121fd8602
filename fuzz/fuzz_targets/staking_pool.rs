#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_pool::constants::ONE_HUNDRED_PERCENT;
use staking_pool::{ContractError, StakingPool, StakingPoolClient};

const START: u64 = 1_700_000_000;
const REWARD: i128 = 100_000_000_000;
const WALLET: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake,
    SweepExcess,
    Wait { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let admin = Address::generate(&env);
    let contract_id = env.register(StakingPool, (admin.clone(), token.clone()));
    let client = StakingPoolClient::new(&env, &contract_id);

    let fund = |who: &Address, amount: i128| {
        StellarAssetClient::new(&env, &token).mint(who, &amount);
        TokenClient::new(&env, &token).approve(who, &contract_id, &amount, &1_000);
    };

    fund(&admin, REWARD);
    client.initialize(&admin, &START, &REWARD, &(ONE_HUNDRED_PERCENT / 10));

    let mut users = Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        fund(&user, WALLET);
        users.push(user);
    }

    // Looking for arithmetic panics, for any sequence that breaks the
    // principal bookkeeping, and for positions that can no longer be closed.
    let mut now = START;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &(amount as i128));
            }
            FuzzAction::Unstake => {
                if let Err(Ok(e)) = client.try_unstake(caller) {
                    assert_ne!(e, ContractError::InsolvencyInvariantViolated);
                }
            }
            FuzzAction::SweepExcess => {
                let _ = client.try_sweep_excess_reserve(&admin);
            }
            FuzzAction::Wait { seconds } => {
                now = now.saturating_add(seconds as u64);
                env.ledger().set_timestamp(now);
            }
        }

        let pool = client.get_pool();
        let principal: i128 = users.iter().map(|u| client.get_account(u).principal).sum();
        assert_eq!(principal, pool.total_principal);
        assert!(pool.reward_budget >= 0);
    }

    for user in &users {
        if client.get_account(user).principal > 0 {
            assert!(matches!(client.try_unstake(user), Ok(Ok(_))));
        }
    }
    assert_eq!(client.get_pool().total_principal, 0);
});
