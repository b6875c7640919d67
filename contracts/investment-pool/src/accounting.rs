//! # Pool Accounting
//!
//! Maintains the pool aggregate: the running total of value custodied on behalf of
//! all members. The aggregate always equals the sum of member balances, so every
//! change to it goes through a function here that also touches the member records.

use soroban_sdk::{Env, Vec};

use crate::errors::PoolError;
use crate::membership::{active_members, get_member, save_member, set_active_members};
use crate::storage::DataKey;

pub fn get_pool_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::PoolBalance)
        .unwrap_or(0)
}

fn set_pool_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::PoolBalance, &amount);
}

pub fn increase_pool_balance(env: &Env, amount: i128) -> Result<i128, PoolError> {
    let new_total = get_pool_balance(env)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    set_pool_balance(env, new_total);
    Ok(new_total)
}

pub fn decrease_pool_balance(env: &Env, amount: i128) -> Result<i128, PoolError> {
    let current = get_pool_balance(env);
    if amount > current {
        return Err(PoolError::InsufficientPoolFunds);
    }
    let new_total = current.checked_sub(amount).ok_or(PoolError::Overflow)?;
    set_pool_balance(env, new_total);
    Ok(new_total)
}

/// Fails with `InsufficientPoolFunds` unless the aggregate covers `amount`.
pub fn require_affordable(env: &Env, amount: i128) -> Result<(), PoolError> {
    if amount > get_pool_balance(env) {
        return Err(PoolError::InsufficientPoolFunds);
    }
    Ok(())
}

/// Debit `amount` from the pool for a proposal payout.
///
/// The debit is spread over active members in proportion to their balances so the
/// aggregate keeps matching the sum of member balances. Each member first pays
/// `floor(balance * amount / aggregate)`; the rounding leftover is then taken one
/// unit at a time from members with remaining headroom, in active-list order.
/// Members driven to zero are deactivated.
pub fn debit_pool_pro_rata(env: &Env, amount: i128) -> Result<(), PoolError> {
    let total = get_pool_balance(env);
    if amount > total {
        return Err(PoolError::InsufficientPoolFunds);
    }
    if amount == 0 {
        return Ok(());
    }

    let members = active_members(env);
    let mut records = Vec::new(env);
    let mut charged: i128 = 0;

    for address in members.iter() {
        let record = get_member(env, &address);
        let share = record
            .balance
            .checked_mul(amount)
            .ok_or(PoolError::Overflow)?
            .checked_div(total)
            .ok_or(PoolError::Overflow)?;
        charged = charged.checked_add(share).ok_or(PoolError::Overflow)?;
        records.push_back((address, record.balance - share));
    }

    let mut leftover = amount.checked_sub(charged).ok_or(PoolError::Overflow)?;
    while leftover > 0 {
        let mut progressed = false;
        for i in 0..records.len() {
            if leftover == 0 {
                break;
            }
            let Some((address, remaining)) = records.get(i) else {
                continue;
            };
            if remaining > 0 {
                records.set(i, (address, remaining - 1));
                leftover -= 1;
                progressed = true;
            }
        }
        // Σ balances == aggregate >= amount, so headroom always covers the leftover.
        if !progressed {
            return Err(PoolError::InsufficientPoolFunds);
        }
    }

    let mut still_active = Vec::new(env);
    for (address, remaining) in records.iter() {
        let mut record = get_member(env, &address);
        record.balance = remaining;
        record.is_active = remaining > 0;
        save_member(env, &address, &record);
        if record.is_active {
            still_active.push_back(address);
        }
    }
    set_active_members(env, &still_active);

    decrease_pool_balance(env, amount)?;
    Ok(())
}
