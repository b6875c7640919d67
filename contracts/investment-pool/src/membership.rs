//! # Membership Ledger
//!
//! Per-address pooled balances and the active member set. Deposits and withdrawals
//! are the only paths that move value in and out of member accounts.
//!
//! ## Invariants
//! - `is_active` is true exactly when `balance > 0`; the active list holds exactly
//!   the active addresses, in the order they last became active.
//! - Every credit or debit of a member balance changes the pool aggregate by the
//!   same amount within the same invocation.
//! - Withdrawals commit the debit before the guarded transfer starts, so anything
//!   the recipient does during the transfer sees the reduced balance.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::accounting::{decrease_pool_balance, increase_pool_balance};
use crate::errors::PoolError;
use crate::events::{emit_deposited, emit_withdrawn};
use crate::storage::{
    get_minimum_deposit, get_total_deposit_counter, require_initialized,
    set_total_deposit_counter, DataKey,
};
use crate::transfer::{transfer_in, transfer_out};

/// A member's pooled position
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberRecord {
    pub balance: i128,
    /// Ledger timestamp of the most recent deposit
    pub deposited_at: u64,
    pub is_active: bool,
    /// Number of successful deposits by this address
    pub deposit_counter: u64,
}

pub fn get_member(env: &Env, member: &Address) -> MemberRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Member(member.clone()))
        .unwrap_or_default()
}

pub(crate) fn save_member(env: &Env, member: &Address, record: &MemberRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Member(member.clone()), record);
}

pub fn active_members(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveMembers)
        .unwrap_or_else(|| Vec::new(env))
}

pub(crate) fn set_active_members(env: &Env, members: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::ActiveMembers, members);
}

fn mark_active(env: &Env, member: &Address) {
    let mut members = active_members(env);
    if !members.contains(member) {
        members.push_back(member.clone());
        set_active_members(env, &members);
    }
}

fn mark_inactive(env: &Env, member: &Address) {
    let mut members = active_members(env);
    if let Some(index) = members.first_index_of(member) {
        members.remove(index);
        set_active_members(env, &members);
    }
}

pub fn is_member(env: &Env, member: &Address) -> bool {
    get_member(env, member).is_active
}

/// Fails with `NotMember` unless `member` currently holds a positive balance.
pub fn require_member(env: &Env, member: &Address) -> Result<MemberRecord, PoolError> {
    let record = get_member(env, member);
    if !record.is_active {
        return Err(PoolError::NotMember);
    }
    Ok(record)
}

/// Credit `amount` to `member` and the pool aggregate.
///
/// Shared by the explicit `deposit` entrypoint and the token receiver hook. The
/// caller is responsible for the value actually arriving in custody.
///
/// # Returns
/// The member's balance after the credit
pub(crate) fn credit_deposit(env: &Env, member: &Address, amount: i128) -> Result<i128, PoolError> {
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    if amount < get_minimum_deposit(env) {
        return Err(PoolError::InsufficientDeposit);
    }

    let mut record = get_member(env, member);
    record.balance = record
        .balance
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    record.deposit_counter = record
        .deposit_counter
        .checked_add(1)
        .ok_or(PoolError::Overflow)?;
    record.deposited_at = env.ledger().timestamp();
    record.is_active = true;

    let total_deposits = get_total_deposit_counter(env)
        .checked_add(1)
        .ok_or(PoolError::Overflow)?;

    increase_pool_balance(env, amount)?;
    save_member(env, member, &record);
    mark_active(env, member);
    set_total_deposit_counter(env, total_deposits);

    emit_deposited(env, member, amount, record.balance);
    Ok(record.balance)
}

/// Deposit `amount` of the pooled asset from `member`.
///
/// # Errors
/// * `InvalidAmount` - amount is zero or negative
/// * `InsufficientDeposit` - amount is below the configured minimum
/// * `TransferFailed` - the member's tokens could not be pulled into the pool
pub fn deposit(env: &Env, member: Address, amount: i128) -> Result<i128, PoolError> {
    member.require_auth();
    require_initialized(env)?;

    let new_balance = credit_deposit(env, &member, amount)?;
    transfer_in(env, &member, amount)?;

    Ok(new_balance)
}

/// Withdraw `amount` from the caller's pooled balance.
///
/// # Errors
/// * `NotMember` - caller is not an active member
/// * `InvalidAmount` - amount is zero or negative
/// * `InsufficientBalance` - amount exceeds the caller's balance
/// * `TransferFailed` - the payout could not be delivered; nothing is debited
///
/// # Returns
/// The remaining balance
pub fn withdraw(env: &Env, member: Address, amount: i128) -> Result<i128, PoolError> {
    member.require_auth();
    require_initialized(env)?;

    let mut record = require_member(env, &member)?;
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    if amount > record.balance {
        return Err(PoolError::InsufficientBalance);
    }

    record.balance = record
        .balance
        .checked_sub(amount)
        .ok_or(PoolError::Overflow)?;
    record.is_active = record.balance > 0;

    decrease_pool_balance(env, amount)?;
    save_member(env, &member, &record);
    if !record.is_active {
        mark_inactive(env, &member);
    }

    transfer_out(env, &member, amount)?;

    emit_withdrawn(env, &member, amount, record.balance);
    Ok(record.balance)
}
