#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is configured and funded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsConfiguredEvent {
    pub start_time: u64,
    pub reward_amount: i128,
    pub annual_rate: i128,
    pub timestamp: u64,
}

/// Fired when a staker deposits principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a staker exits with principal plus reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin recovers a token other than the staking asset.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignTokensSweptEvent {
    pub admin: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin recovers staking-asset surplus above the reserve.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExcessReserveSweptEvent {
    pub admin: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_rewards_configured(
    env: &Env,
    start_time: u64,
    reward_amount: i128,
    annual_rate: i128,
) {
    env.events().publish(
        (symbol_short!("CONFIG"),),
        RewardsConfiguredEvent {
            start_time,
            reward_amount,
            annual_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_foreign_tokens_swept(env: &Env, admin: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("SWEPT"), admin.clone()),
        ForeignTokensSweptEvent {
            admin,
            token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_excess_reserve_swept(env: &Env, admin: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("SWEPT_XS"), admin.clone()),
        ExcessReserveSweptEvent {
            admin,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
