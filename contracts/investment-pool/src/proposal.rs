//! # Proposal Registry
//!
//! Members propose transfers of pooled funds to a recipient; admins review them.
//!
//! ## Lifecycle
//! 1. An active member calls [`create_proposal`]; the proposal is stored `Pending`
//!    under the next sequential id, starting at 0.
//! 2. An admin moves it to `Approved` ([`approve_proposal`]) or `Rejected`
//!    ([`reject_proposal`]). Only `Pending` proposals can be reviewed.
//! 3. An admin executes an `Approved` proposal ([`execute_proposal`]): the pool is
//!    debited, the status becomes `Executed`, then the funds are sent to `target`.
//!
//! `Rejected` and `Executed` are terminal. Proposals are never deleted.

use soroban_sdk::{contracttype, log, Address, Env, String, Vec};

use crate::accounting::{debit_pool_pro_rata, require_affordable};
use crate::errors::PoolError;
use crate::events::{emit_proposal_created, emit_proposal_executed, emit_proposal_status_changed};
use crate::membership::require_member;
use crate::roles::{require_role, Role};
use crate::storage::{require_initialized, DataKey};
use crate::transfer::transfer_out;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
    Executed = 3,
}

impl ProposalStatus {
    /// Pending and Approved proposals still need admin attention.
    pub fn is_open(self) -> bool {
        matches!(self, ProposalStatus::Pending | ProposalStatus::Approved)
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
    pub proposer: Address,
    pub target: Address,
    pub amount: i128,
    pub created_at: u64,
    pub status: ProposalStatus,
    /// Mirrors `status == Executed`; checked before any payout
    pub executed: bool,
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, id: u64) -> Result<Proposal, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(PoolError::NotFound)
}

fn save_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

/// All proposals in id order
pub fn get_all_proposals(env: &Env) -> Vec<Proposal> {
    let mut proposals = Vec::new(env);
    for id in 0..proposal_count(env) {
        if let Ok(proposal) = get_proposal(env, id) {
            proposals.push_back(proposal);
        }
    }
    proposals
}

/// Pending and approved proposals in id order
pub fn get_active_proposals(env: &Env) -> Vec<Proposal> {
    let mut proposals = Vec::new(env);
    for proposal in get_all_proposals(env).iter() {
        if proposal.status.is_open() {
            proposals.push_back(proposal);
        }
    }
    proposals
}

/// Create a transfer proposal
///
/// # Arguments
/// * `proposer` - Active member submitting the proposal (must authorize)
/// * `description` - Free-text rationale
/// * `target` - Recipient of the funds if executed
/// * `amount` - Requested value; must not exceed the current pool aggregate
///
/// # Errors
/// * `NotMember` - proposer has no pooled balance
/// * `InvalidAddress` - target is the pool itself
/// * `InvalidAmount` - amount is zero or negative
/// * `InsufficientPoolFunds` - amount exceeds the pool aggregate
///
/// # Returns
/// The new proposal id
pub fn create_proposal(
    env: &Env,
    proposer: Address,
    description: String,
    target: Address,
    amount: i128,
) -> Result<u64, PoolError> {
    proposer.require_auth();
    require_initialized(env)?;
    require_member(env, &proposer)?;

    if target == env.current_contract_address() {
        return Err(PoolError::InvalidAddress);
    }
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    require_affordable(env, amount)?;

    let id = proposal_count(env);
    let next = id.checked_add(1).ok_or(PoolError::Overflow)?;

    let proposal = Proposal {
        id,
        description,
        proposer: proposer.clone(),
        target: target.clone(),
        amount,
        created_at: env.ledger().timestamp(),
        status: ProposalStatus::Pending,
        executed: false,
    };
    save_proposal(env, &proposal);
    set_proposal_count(env, next);

    emit_proposal_created(env, id, &proposer, &target, amount);
    Ok(id)
}

fn review(env: &Env, admin: Address, id: u64, outcome: ProposalStatus) -> Result<(), PoolError> {
    require_role(env, &admin, Role::Admin)?;

    let mut proposal = get_proposal(env, id)?;
    if proposal.status != ProposalStatus::Pending {
        return Err(PoolError::InvalidState);
    }
    proposal.status = outcome;
    save_proposal(env, &proposal);

    emit_proposal_status_changed(env, id, outcome);
    Ok(())
}

/// Approve a pending proposal (admin only)
pub fn approve_proposal(env: &Env, admin: Address, id: u64) -> Result<(), PoolError> {
    review(env, admin, id, ProposalStatus::Approved)
}

/// Reject a pending proposal (admin only)
pub fn reject_proposal(env: &Env, admin: Address, id: u64) -> Result<(), PoolError> {
    review(env, admin, id, ProposalStatus::Rejected)
}

/// Execute an approved proposal (admin only)
///
/// Affordability is checked again against the current aggregate, since
/// withdrawals may have shrunk the pool after approval.
///
/// # Errors
/// * `Unauthorized` - caller is not an admin
/// * `NotFound` - unknown id
/// * `ProposalAlreadyExecuted` - the proposal already paid out
/// * `ProposalNotApproved` - the proposal is pending or rejected
/// * `InsufficientPoolFunds` - the aggregate no longer covers the amount
/// * `TransferFailed` - the payout could not be delivered; nothing is debited
pub fn execute_proposal(env: &Env, admin: Address, id: u64) -> Result<(), PoolError> {
    require_role(env, &admin, Role::Admin)?;

    let mut proposal = get_proposal(env, id)?;
    if proposal.executed || proposal.status == ProposalStatus::Executed {
        return Err(PoolError::ProposalAlreadyExecuted);
    }
    if proposal.status != ProposalStatus::Approved {
        return Err(PoolError::ProposalNotApproved);
    }

    debit_pool_pro_rata(env, proposal.amount)?;
    proposal.status = ProposalStatus::Executed;
    proposal.executed = true;
    save_proposal(env, &proposal);

    transfer_out(env, &proposal.target, proposal.amount)?;

    emit_proposal_executed(env, id, &proposal.target, proposal.amount);
    log!(env, "proposal executed id={} amount={}", id, proposal.amount);
    Ok(())
}
