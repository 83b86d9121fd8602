use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::constants::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const TOKEN: Symbol = symbol_short!("TOKEN");
const POOL: Symbol = symbol_short!("POOL");

// Per-account persistent storage uses tuple keys: (prefix, staker_address)
const ACCOUNT: Symbol = symbol_short!("ACCT");

// ── Types ───────────────────────────────────────────────────────────────────

/// Global pool record, written once by `initialize` and updated by every
/// balance-changing call. Its presence in storage marks the pool as
/// initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Deposits are rejected before this ledger timestamp.
    pub start_time: u64,
    /// Rewards still reserved for stakers. Only shrinks.
    pub reward_budget: i128,
    /// `reward_budget` as funded at initialization.
    pub initial_reward: i128,
    /// Return over one staking period, `ONE_HUNDRED_PERCENT` = 100%.
    pub annual_rate: i128,
    /// Maximum `total_principal` the budget can back for one full period.
    pub staking_capacity: i128,
    /// `SCALE`-scaled tokens emitted per second at full capacity.
    pub reward_rate: i128,
    pub total_principal: i128,
    /// Lifetime reward per unit of principal, `SCALE`-scaled.
    pub reward_per_unit_stored: i128,
    pub last_accrual_time: u64,
}

/// Per-staker position. Absent accounts read as all-zero.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Account {
    pub principal: i128,
    /// Reward settled up to `reward_per_unit_paid` but not yet paid out.
    pub pending_reward: i128,
    pub reward_per_unit_paid: i128,
    /// Timestamp of the most recent deposit, `0` when not staking.
    pub last_stake_time: u64,
}

// ── Deployment record ───────────────────────────────────────────────────────

pub fn set_deployment(env: &Env, admin: &Address, token: &Address) {
    env.storage().instance().set(&ADMIN, admin);
    env.storage().instance().set(&TOKEN, token);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&TOKEN)
        .ok_or(ContractError::NotInitialized)
}

// ── Pool ────────────────────────────────────────────────────────────────────

pub fn has_pool(env: &Env) -> bool {
    env.storage().instance().has(&POOL)
}

/// Load the pool, failing with `NotInitialized` before `initialize` ran.
pub fn load_pool(env: &Env) -> Result<Pool, ContractError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Accounts ────────────────────────────────────────────────────────────────

fn account_key(staker: &Address) -> (Symbol, Address) {
    (ACCOUNT, staker.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Retrieve a staker's account, or a zeroed one when it was never written.
pub fn load_account(env: &Env, staker: &Address) -> Account {
    let key = account_key(staker);
    let account: Option<Account> = env.storage().persistent().get(&key);
    match account {
        Some(account) => {
            extend_ttl(env, &key);
            account
        }
        None => Account::default(),
    }
}

pub fn save_account(env: &Env, staker: &Address, account: &Account) {
    let key = account_key(staker);
    env.storage().persistent().set(&key, account);
    extend_ttl(env, &key);
}
