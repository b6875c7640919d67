//! # Configuration Module
//!
//! Operator-tunable parameters. Neither value takes part in the financial
//! invariants; the minimum deposit only gates future deposits.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::errors::PoolError;
use crate::events::{emit_greeting_change, emit_minimum_deposit_changed};
use crate::roles::{require_role, Role};
use crate::storage::{self, get_greeting, get_minimum_deposit, get_native_asset};

/// Snapshot of the current configuration
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PoolConfig {
    pub native_asset: Address,
    pub minimum_deposit: i128,
    pub greeting: String,
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    Ok(PoolConfig {
        native_asset: get_native_asset(env)?,
        minimum_deposit: get_minimum_deposit(env),
        greeting: get_greeting(env),
    })
}

/// Set the minimum deposit (admin only)
///
/// # Errors
/// * `Unauthorized` - caller is not an admin
/// * `InvalidAmount` - new minimum is negative
pub fn set_minimum_deposit(env: &Env, admin: Address, new_minimum: i128) -> Result<(), PoolError> {
    require_role(env, &admin, Role::Admin)?;
    if new_minimum < 0 {
        return Err(PoolError::InvalidAmount);
    }
    storage::set_minimum_deposit(env, new_minimum);
    emit_minimum_deposit_changed(env, &admin, new_minimum);
    Ok(())
}

/// Set the greeting (admin only)
pub fn set_greeting(env: &Env, admin: Address, new_greeting: String) -> Result<(), PoolError> {
    require_role(env, &admin, Role::Admin)?;
    storage::set_greeting(env, &new_greeting);
    emit_greeting_change(env, &admin, &new_greeting);
    Ok(())
}
