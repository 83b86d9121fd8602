use crate::constants::{
    EARLY_EXIT_KEEP_PERCENT, ONE_HUNDRED_PERCENT, SCALE, STAKING_PERIOD,
};
use crate::state::{Account, Pool};
use crate::ContractError;

// ── Derived parameters ──────────────────────────────────────────────────────

/// Largest total principal `reward` can pay `annual_rate` on for one period.
///
/// ```text
/// capacity = reward × ONE_HUNDRED_PERCENT / annual_rate
/// ```
pub fn staking_capacity(reward: i128, annual_rate: i128) -> Option<i128> {
    reward
        .checked_mul(ONE_HUNDRED_PERCENT)?
        .checked_div(annual_rate)
}

/// `SCALE`-scaled per-second emission of the initial budget.
///
/// Derived once at initialization; later payouts shrink the budget but never
/// this rate.
pub fn reward_rate(reward: i128) -> Option<i128> {
    reward
        .checked_mul(SCALE)?
        .checked_div(i128::from(STAKING_PERIOD))
}

// ── Core reward engine ──────────────────────────────────────────────────────

/// Advance the reward-per-unit accumulator by `elapsed` seconds.
///
/// ```text
/// Δrpu = elapsed × reward_rate / capacity
/// ```
///
/// The denominator is the capacity rather than the live total, so one unit
/// of principal earns the annual rate no matter how full the pool is. With
/// nothing staked the accumulator holds still.
pub fn compute_reward_per_unit(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_principal: i128,
    capacity: i128,
) -> Option<i128> {
    if total_principal <= 0 || elapsed == 0 {
        return Some(stored);
    }

    let delta = i128::from(elapsed)
        .checked_mul(reward_rate)?
        .checked_div(capacity)?;

    stored.checked_add(delta)
}

/// Rewards owed to `principal` since the `paid` checkpoint, added to what
/// was already settled.
///
/// ```text
/// earned = principal × (current − paid) / SCALE + pending
/// ```
pub fn earned(principal: i128, current: i128, paid: i128, pending: i128) -> Option<i128> {
    let new_rewards = principal
        .checked_mul(current.checked_sub(paid)?)?
        .checked_div(SCALE)?;

    pending.checked_add(new_rewards)
}

/// Last instant that earns reward: one staking period after `start_time`.
///
/// With `total_principal` bounded by the capacity, emission up to this point
/// is at most `reward_rate × STAKING_PERIOD / SCALE`, which never exceeds the
/// initial budget.
pub fn reward_period_end(pool: &Pool) -> u64 {
    pool.start_time.saturating_add(STAKING_PERIOD)
}

/// `now` clamped to the end of the reward period.
pub fn last_time_reward_applicable(pool: &Pool, now: u64) -> u64 {
    now.min(reward_period_end(pool))
}

/// Accumulator value as of `now`, without writing it back.
pub fn accumulator_at(pool: &Pool, now: u64) -> Option<i128> {
    compute_reward_per_unit(
        pool.reward_per_unit_stored,
        pool.reward_rate,
        last_time_reward_applicable(pool, now).saturating_sub(pool.last_accrual_time),
        pool.total_principal,
        pool.staking_capacity,
    )
}

/// Settle `account` against the pool at `now`.
///
/// Must run before any change to `pool.total_principal` or
/// `account.principal`, since both the accumulator step and the account
/// delta are priced on the balances that were in force while time elapsed.
pub fn settle(pool: &mut Pool, account: &mut Account, now: u64) -> Result<(), ContractError> {
    let current = accumulator_at(pool, now).ok_or(ContractError::ArithmeticOverflow)?;
    let accrued_to = last_time_reward_applicable(pool, now);

    pool.reward_per_unit_stored = current;
    pool.last_accrual_time = pool.last_accrual_time.max(accrued_to);

    account.pending_reward = earned(
        account.principal,
        current,
        account.reward_per_unit_paid,
        account.pending_reward,
    )
    .ok_or(ContractError::ArithmeticOverflow)?;
    account.reward_per_unit_paid = current;

    Ok(())
}

// ── Early exit ──────────────────────────────────────────────────────────────

/// True while less than one full staking period has passed since the last
/// deposit.
pub fn is_early_exit(last_stake_time: u64, now: u64) -> bool {
    now < last_stake_time.saturating_add(STAKING_PERIOD)
}

/// Pending reward left after the early-exit forfeit.
pub fn apply_early_exit_penalty(pending: i128) -> Option<i128> {
    pending
        .checked_mul(EARLY_EXIT_KEEP_PERCENT)?
        .checked_div(100)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
