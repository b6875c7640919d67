use soroban_sdk::{contracttype, Address, Env, String};

use crate::errors::PoolError;

/// Greeting stored at initialization until an admin replaces it.
pub const DEFAULT_GREETING: &str = "Building Unstoppable Investment Pools!!!";

/// Storage keys for pool state.
///
/// Configuration and counters live in instance storage; member and proposal records
/// live in persistent storage so they are never evicted with the instance.
#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum DataKey {
    Initialized,
    NativeAsset,
    MinimumDeposit,
    Greeting,
    /// Aggregate of all member balances
    PoolBalance,
    TotalDepositCounter,
    ProposalCount,
    /// Addresses with a strictly positive balance, in activation order
    ActiveMembers,
    Member(Address),
    Proposal(u64),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn require_initialized(env: &Env) -> Result<(), PoolError> {
    if !is_initialized(env) {
        return Err(PoolError::NotInitialized);
    }
    Ok(())
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_native_asset(env: &Env) -> Result<Address, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&DataKey::NativeAsset, asset);
}

pub fn get_minimum_deposit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinimumDeposit)
        .unwrap_or(0)
}

pub fn set_minimum_deposit(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::MinimumDeposit, &amount);
}

pub fn get_greeting(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Greeting)
        .unwrap_or_else(|| String::from_str(env, DEFAULT_GREETING))
}

pub fn set_greeting(env: &Env, greeting: &String) {
    env.storage().instance().set(&DataKey::Greeting, greeting);
}

pub fn get_total_deposit_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDepositCounter)
        .unwrap_or(0)
}

pub fn set_total_deposit_counter(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDepositCounter, &count);
}
