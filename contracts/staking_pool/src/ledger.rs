//! Token movements in and out of pool custody.
//!
//! Balances and allowances are checked up front so a shortfall is reported as
//! a named [`ContractError`] instead of a trap inside the token contract.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Pull `amount` of `token` from `from` into the pool.
///
/// The pool spends an allowance `from` granted it beforehand via `approve`.
pub fn transfer_in(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    if client.balance(from) < amount {
        return Err(ContractError::InsufficientFunds);
    }
    if client.allowance(from, &pool) < amount {
        return Err(ContractError::InsufficientAllowance);
    }

    client.transfer_from(&pool, from, &pool, &amount);
    Ok(())
}

/// Push `amount` of `token` from the pool to `to`.
pub fn transfer_out(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    if client.balance(&pool) < amount {
        return Err(ContractError::InsufficientPoolBalance);
    }

    client.transfer(&pool, to, &amount);
    Ok(())
}

/// Balance of `token` currently held by the pool.
pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
