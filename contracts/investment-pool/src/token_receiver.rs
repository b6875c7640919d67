//! # Token Receiver Hook
//!
//! Handles value that arrives without a `deposit` call. A token contract invokes
//! `receive` after moving tokens into the pool:
//! - an empty payload, or a payload of `[Symbol("deposit")]`, credits `from` through
//!   the normal deposit path;
//! - any other payload is rejected, which fails the token transfer as a whole.
//!
//! `from` must authorize the call, so only the sender can claim tokens it moved into
//! custody.

use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val, Vec};

use crate::accounting::get_pool_balance;
use crate::errors::PoolError;
use crate::membership::credit_deposit;
use crate::storage::{get_native_asset, require_initialized};
use crate::transfer::custodied_balance;

/// Instruction carried in the first payload slot
enum Instruction {
    Deposit,
}

fn parse_instruction(env: &Env, payload: &Vec<Val>) -> Result<Instruction, PoolError> {
    if payload.is_empty() {
        return Ok(Instruction::Deposit);
    }
    if payload.len() > 1 {
        return Err(PoolError::UnrecognizedInstruction);
    }

    let raw = payload.get(0).ok_or(PoolError::UnrecognizedInstruction)?;
    let action =
        Symbol::try_from_val(env, &raw).map_err(|_| PoolError::UnrecognizedInstruction)?;
    if action == Symbol::new(env, "deposit") {
        Ok(Instruction::Deposit)
    } else {
        Err(PoolError::UnrecognizedInstruction)
    }
}

/// Token receiver hook
///
/// # Arguments
/// * `token_asset` - Token contract that moved the funds (must be the pooled asset)
/// * `from` - Address the tokens came from; credited as the depositor (must authorize)
/// * `amount` - Amount already transferred into the pool
/// * `payload` - Optional instruction
///
/// # Errors
/// * `UnsupportedAsset` - tokens are not the pooled asset
/// * `UnrecognizedInstruction` - payload is not empty and not `deposit`
/// * `InsufficientCustody` - the pool does not actually hold the credited value
/// * `InvalidAmount` / `InsufficientDeposit` - as for `deposit`
pub fn receive(
    env: &Env,
    token_asset: Address,
    from: Address,
    amount: i128,
    payload: Vec<Val>,
) -> Result<i128, PoolError> {
    from.require_auth();
    require_initialized(env)?;
    if token_asset != get_native_asset(env)? {
        return Err(PoolError::UnsupportedAsset);
    }

    match parse_instruction(env, &payload)? {
        Instruction::Deposit => {
            let credited_total = get_pool_balance(env)
                .checked_add(amount)
                .ok_or(PoolError::Overflow)?;
            if custodied_balance(env)? < credited_total {
                return Err(PoolError::InsufficientCustody);
            }
            credit_deposit(env, &from, amount)
        }
    }
}
