//! # Fund Transfer Guard
//!
//! The only code path that moves the custodied asset. Every transfer holds a lock in
//! temporary storage for its duration, so a recipient or token contract that calls
//! back into the pool cannot start a second guarded transfer. The lock is released on
//! every exit path when the guard is dropped.
//!
//! Callers commit their accounting changes before calling in here. A transfer failure
//! surfaces as `TransferFailed`, which fails the enclosing invocation and rolls those
//! changes back with it.

use soroban_sdk::{log, token, Address, Env, Symbol};

use crate::errors::PoolError;
use crate::storage::get_native_asset;

const LOCK_KEY: &str = "TRANSFER_LOCK";

pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PoolError> {
        let key = Symbol::new(env, LOCK_KEY);
        if env.storage().temporary().has(&key) {
            return Err(PoolError::Reentrancy);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        let key = Symbol::new(self.env, LOCK_KEY);
        self.env.storage().temporary().remove(&key);
    }
}

#[cfg(test)]
pub fn is_locked(env: &Env) -> bool {
    env.storage().temporary().has(&Symbol::new(env, LOCK_KEY))
}

/// Send `amount` of the pooled asset from the pool to `to`.
///
/// `amount` must already be debited from internal accounting.
pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;
    let asset = get_native_asset(env)?;
    let client = token::Client::new(env, &asset);

    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => {
            log!(env, "transfer_out {} amount={}", to, amount);
            Ok(())
        }
        _ => {
            log!(env, "transfer_out failed {} amount={}", to, amount);
            Err(PoolError::TransferFailed)
        }
    }
}

/// Pull `amount` of the pooled asset from `from` into the pool.
///
/// `from` must have authorized the enclosing invocation.
pub fn transfer_in(env: &Env, from: &Address, amount: i128) -> Result<(), PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;
    let asset = get_native_asset(env)?;
    let client = token::Client::new(env, &asset);

    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}

/// Tokens of the pooled asset actually held by the contract
pub fn custodied_balance(env: &Env) -> Result<i128, PoolError> {
    let asset = get_native_asset(env)?;
    Ok(token::Client::new(env, &asset).balance(&env.current_contract_address()))
}
