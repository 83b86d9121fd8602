//! Property-based tests for the pool lifecycle gates.
//!
//! Invariants tested:
//! - A second `initialize` always fails with `AlreadyInitialized`
//! - Deposits before `initialize` always fail with `NotInitialized`
//! - Deposits before `start_time` always fail with `NotStarted`
//! - `unstake` on an account without principal always fails with `NotAStaker`

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use staking_pool::constants::{MAX_RATE, MAX_REWARD_CAP};
use staking_pool::ContractError;

use crate::fixture::{Fixture, START};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever the arguments, re-initializing is refused before anything else.
    #[test]
    fn prop_double_initialize_always_fails(
        start_offset in 0u64..=1_000_000u64,
        reward in -10i128..=MAX_REWARD_CAP,
        rate in -10i128..=MAX_RATE,
    ) {
        let f = Fixture::initialized();
        let before = f.client.get_pool();

        let result = f.client.try_initialize(&f.admin, &(START + start_offset), &reward, &rate);
        match result {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::AlreadyInitialized),
            _ => prop_assert!(false, "Expected AlreadyInitialized error"),
        }
        prop_assert_eq!(f.client.get_pool(), before);
    }

    #[test]
    fn prop_stake_before_initialize_fails(
        amount in 1i128..=1_000_000_000i128,
        at in 0u64..=10_000_000u64,
    ) {
        let f = Fixture::deployed();
        let alice = f.staker(amount);
        f.set_time(START + at);

        match f.client.try_stake(&alice, &amount) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::NotInitialized),
            _ => prop_assert!(false, "Expected NotInitialized error"),
        }
    }

    #[test]
    fn prop_stake_before_start_fails(
        amount in 1i128..=1_000_000_000i128,
        early_by in 1u64..=100u64,
    ) {
        let f = Fixture::initialized();
        let alice = f.staker(amount);
        f.set_time(START - early_by);

        match f.client.try_stake(&alice, &amount) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::NotStarted),
            _ => prop_assert!(false, "Expected NotStarted error"),
        }
        prop_assert_eq!(f.client.get_total_principal(), 0);
    }

    /// Never-staked and fully-withdrawn accounts are both rejected.
    #[test]
    fn prop_unstake_without_principal_fails(
        amount in 1i128..=1_000_000_000i128,
        held in 0u64..=40_000_000u64,
    ) {
        let f = Fixture::initialized();
        let stranger = Address::generate(&f.env);
        let alice = f.staker(amount);

        f.set_time(START);
        f.client.stake(&alice, &amount);
        f.set_time(START + held);
        f.client.unstake(&alice);

        for who in [&stranger, &alice] {
            match f.client.try_unstake(who) {
                Err(Ok(e)) => prop_assert_eq!(e, ContractError::NotAStaker),
                _ => prop_assert!(false, "Expected NotAStaker error"),
            }
        }
    }
}
