#![no_std]

pub mod constants;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod state;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

use constants::{COOLDOWN_PERIOD, MAX_RATE, MAX_REWARD_CAP};
use state::{Account, Pool};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 3,
    StartTimeInPast = 4,
    ZeroAmount = 5,
    RewardCapExceeded = 6,
    ZeroRate = 7,
    RateCapExceeded = 8,
    NotStarted = 9,
    CooldownActive = 10,
    CapacityExceeded = 11,
    NotAStaker = 12,
    InsolvencyInvariantViolated = 13,
    InsufficientFunds = 14,
    InsufficientAllowance = 15,
    InsufficientPoolBalance = 16,
    ArithmeticOverflow = 17,
    ProtectedToken = 18,
    NothingToSweep = 19,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Deployment ──────────────────────────────────────────────────────────

    /// Record the administrator and the single asset that is both staked and
    /// paid out as reward.
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        state::set_deployment(&env, &admin, &token);
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Fund and configure the pool. Callable once, by the admin.
    ///
    /// * `start_time`    – first ledger timestamp at which deposits are accepted.
    /// * `reward_amount` – budget pulled from the admin (needs an allowance).
    /// * `annual_rate`   – return over one staking period, 1e20 = 100%.
    pub fn initialize(
        env: Env,
        caller: Address,
        start_time: u64,
        reward_amount: i128,
        annual_rate: i128,
    ) -> Result<(), ContractError> {
        if state::has_pool(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let now = env.ledger().timestamp();
        if start_time < now {
            return Err(ContractError::StartTimeInPast);
        }
        if reward_amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if reward_amount > MAX_REWARD_CAP {
            return Err(ContractError::RewardCapExceeded);
        }
        if annual_rate <= 0 {
            return Err(ContractError::ZeroRate);
        }
        if annual_rate > MAX_RATE {
            return Err(ContractError::RateCapExceeded);
        }

        let staking_capacity = rewards::staking_capacity(reward_amount, annual_rate)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let reward_rate =
            rewards::reward_rate(reward_amount).ok_or(ContractError::ArithmeticOverflow)?;

        let token = state::get_token(&env)?;
        ledger::transfer_in(&env, &token, &caller, reward_amount)?;

        let pool = Pool {
            start_time,
            reward_budget: reward_amount,
            initial_reward: reward_amount,
            annual_rate,
            staking_capacity,
            reward_rate,
            total_principal: 0,
            reward_per_unit_stored: 0,
            last_accrual_time: start_time,
        };
        state::save_pool(&env, &pool);

        log!(
            &env,
            "pool configured",
            start_time,
            reward_amount,
            annual_rate,
            staking_capacity
        );
        events::publish_rewards_configured(&env, start_time, reward_amount, annual_rate);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens as principal.
    ///
    /// The account is settled first so the new principal never earns
    /// retroactively. Any pending reward stays pending and is paid by
    /// `unstake`. Each deposit restarts both the cooldown and the early-exit
    /// window for the whole position.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let mut pool = state::load_pool(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        if now < pool.start_time {
            return Err(ContractError::NotStarted);
        }

        let mut account = state::load_account(&env, &staker);
        if account.last_stake_time != 0
            && account.last_stake_time.saturating_add(COOLDOWN_PERIOD) >= now
        {
            return Err(ContractError::CooldownActive);
        }

        // 1. Settle against the pre-deposit balances.
        rewards::settle(&mut pool, &mut account, now)?;

        // 2. Validate the deposit.
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        let new_total = pool
            .total_principal
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if new_total > pool.staking_capacity {
            return Err(ContractError::CapacityExceeded);
        }

        // 3. Pull the tokens, then commit.
        let token = state::get_token(&env)?;
        ledger::transfer_in(&env, &token, &staker, amount)?;

        pool.total_principal = new_total;
        account.principal = account
            .principal
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        account.last_stake_time = now;

        state::save_pool(&env, &pool);
        state::save_account(&env, &staker, &account);

        events::publish_staked(&env, staker, amount);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Withdraw the full position: principal plus pending reward.
    ///
    /// Exiting before one full staking period since the last deposit forfeits
    /// 40% of the pending reward; the forfeit stays in the reward budget.
    /// Returns the amount paid.
    pub fn unstake(env: Env, staker: Address) -> Result<i128, ContractError> {
        let mut pool = state::load_pool(&env)?;
        staker.require_auth();

        let mut account = state::load_account(&env, &staker);
        if account.principal <= 0 {
            return Err(ContractError::NotAStaker);
        }

        let now = env.ledger().timestamp();

        // 1. Settle before touching any balance.
        rewards::settle(&mut pool, &mut account, now)?;

        // 2. Early-exit forfeit, evaluated once on the settled reward.
        let mut reward = account.pending_reward;
        if rewards::is_early_exit(account.last_stake_time, now) {
            reward =
                rewards::apply_early_exit_penalty(reward).ok_or(ContractError::ArithmeticOverflow)?;
            log!(&env, "early exit", staker, account.pending_reward, reward);
        }

        // 3. Solvency guard: never pay out more than custody backs.
        let amount = account
            .principal
            .checked_add(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let custody = pool
            .total_principal
            .checked_add(pool.reward_budget)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if amount > custody {
            log!(&env, "insolvency guard tripped", staker, amount, custody);
            return Err(ContractError::InsolvencyInvariantViolated);
        }

        // 4. Commit, then pay.
        pool.total_principal = pool
            .total_principal
            .checked_sub(account.principal)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.reward_budget = pool
            .reward_budget
            .checked_sub(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;

        account.principal = 0;
        account.pending_reward = 0;
        account.last_stake_time = 0;

        state::save_pool(&env, &pool);
        state::save_account(&env, &staker, &account);

        let token = state::get_token(&env)?;
        ledger::transfer_out(&env, &token, &staker, amount)?;

        events::publish_unstaked(&env, staker, amount);

        Ok(amount)
    }

    // ── Administrative recovery ─────────────────────────────────────────────

    /// Send the pool's whole balance of a foreign `token` to the admin.
    ///
    /// The staking asset is refused with `ProtectedToken`; its surplus goes
    /// through `sweep_excess_reserve`.
    pub fn sweep_foreign_tokens(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<i128, ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if token == state::get_token(&env)? {
            return Err(ContractError::ProtectedToken);
        }

        let amount = ledger::custody_balance(&env, &token);
        if amount <= 0 {
            return Err(ContractError::NothingToSweep);
        }

        ledger::transfer_out(&env, &token, &caller, amount)?;

        log!(&env, "foreign tokens swept", token, amount);
        events::publish_foreign_tokens_swept(&env, caller, token, amount);

        Ok(amount)
    }

    /// Send staking-asset surplus above `total_principal + reward_budget` to
    /// the admin.
    pub fn sweep_excess_reserve(env: Env, caller: Address) -> Result<i128, ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let token = state::get_token(&env)?;
        let reserve = Self::required_reserve(&env)?;
        let balance = ledger::custody_balance(&env, &token);

        let surplus = balance
            .checked_sub(reserve)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if surplus <= 0 {
            return Err(ContractError::NothingToSweep);
        }

        ledger::transfer_out(&env, &token, &caller, surplus)?;

        log!(&env, "excess reserve swept", surplus, reserve);
        events::publish_excess_reserve_swept(&env, caller, surplus);

        Ok(surplus)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        state::has_pool(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        state::get_admin(&env)
    }

    /// The asset that is both staked and paid as reward.
    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        state::get_token(&env)
    }

    /// Return the stored pool record (accumulator as of the last settlement).
    pub fn get_pool(env: Env) -> Result<Pool, ContractError> {
        state::load_pool(&env)
    }

    /// Return the stored account record; zeroed for unknown stakers.
    pub fn get_account(env: Env, staker: Address) -> Account {
        state::load_account(&env, &staker)
    }

    /// Reward `staker` would have settled right now, before any early-exit
    /// forfeit. Does not mutate state.
    pub fn get_pending_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let mut pool = state::load_pool(&env)?;
        let mut account = state::load_account(&env, &staker);
        rewards::settle(&mut pool, &mut account, env.ledger().timestamp())?;
        Ok(account.pending_reward)
    }

    /// Reward-per-unit accumulator advanced to the current ledger time.
    pub fn get_reward_per_unit(env: Env) -> Result<i128, ContractError> {
        let pool = state::load_pool(&env)?;
        rewards::accumulator_at(&pool, env.ledger().timestamp())
            .ok_or(ContractError::ArithmeticOverflow)
    }

    /// Timestamp after which no further reward accrues.
    pub fn get_reward_period_end(env: Env) -> Result<u64, ContractError> {
        Ok(rewards::reward_period_end(&state::load_pool(&env)?))
    }

    pub fn get_staking_capacity(env: Env) -> Result<i128, ContractError> {
        Ok(state::load_pool(&env)?.staking_capacity)
    }

    pub fn get_total_principal(env: Env) -> Result<i128, ContractError> {
        Ok(state::load_pool(&env)?.total_principal)
    }

    pub fn get_reward_budget(env: Env) -> Result<i128, ContractError> {
        Ok(state::load_pool(&env)?.reward_budget)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if `caller` is not the admin recorded at deployment.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin = state::get_admin(env)?;
        if *caller != admin {
            return Err(ContractError::NotAuthorized);
        }
        Ok(())
    }

    /// Staking-asset balance the pool must keep: `total_principal +
    /// reward_budget`, or nothing before initialization.
    fn required_reserve(env: &Env) -> Result<i128, ContractError> {
        if !state::has_pool(env) {
            return Ok(0);
        }
        let pool = state::load_pool(env)?;
        pool.total_principal
            .checked_add(pool.reward_budget)
            .ok_or(ContractError::ArithmeticOverflow)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
