//! # Investment Pool Contract
//!
//! A pooled-fund treasury for a single Stellar asset. Members deposit into a shared
//! pool and may propose transfers of pooled funds to third parties. Admins approve,
//! reject and execute those proposals.
//!
//! - **Membership ledger**: per-member balances, deposit counters and the active set
//! - **Pool accounting**: an aggregate that always equals the sum of member balances
//! - **Proposal registry**: append-only proposals with a review state machine
//! - **Roles**: super-admins manage admins; admins review proposals and configuration
//! - **Transfer guard**: the single reentrancy-locked path for moving funds

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Val, Vec};

mod accounting;
mod config;
mod errors;
mod events;
mod membership;
mod proposal;
mod roles;
mod storage;
mod token_receiver;
mod transfer;

pub use config::PoolConfig;
pub use errors::PoolError;
pub use membership::MemberRecord;
pub use proposal::{Proposal, ProposalStatus};
pub use roles::Role;

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod events_test;

#[contract]
pub struct InvestmentPool;

#[contractimpl]
impl InvestmentPool {
    /// Initialize the pool
    ///
    /// Binds the pool to the asset it custodies and makes `admin` both super-admin
    /// and admin. Can only be called once.
    ///
    /// # Arguments
    /// * `admin` - First super-admin (must authorize)
    /// * `native_asset` - Token contract of the pooled asset
    /// * `minimum_deposit` - Smallest accepted deposit
    ///
    /// # Errors
    /// - `AlreadyInitialized` - The pool is already initialized
    /// - `InvalidAmount` - `minimum_deposit` is negative
    pub fn initialize(
        env: Env,
        admin: Address,
        native_asset: Address,
        minimum_deposit: i128,
    ) -> Result<(), PoolError> {
        admin.require_auth();
        if storage::is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if minimum_deposit < 0 {
            return Err(PoolError::InvalidAmount);
        }

        storage::set_native_asset(&env, &native_asset);
        storage::set_minimum_deposit(&env, minimum_deposit);
        storage::set_greeting(&env, &String::from_str(&env, storage::DEFAULT_GREETING));
        storage::set_total_deposit_counter(&env, 0);
        roles::assign(&env, Role::SuperAdmin, &admin);
        roles::assign(&env, Role::Admin, &admin);
        storage::set_initialized(&env);

        events::emit_initialized(&env, &admin, &native_asset, minimum_deposit);
        log!(&env, "initialize admin={}", admin);
        Ok(())
    }

    // ── Membership ───────────────────────────────────────────────────────────

    /// Deposit into the pool
    ///
    /// Pulls `amount` of the pooled asset from `member` and credits their balance.
    /// The first deposit makes the address an active member.
    ///
    /// # Returns
    /// The member's balance after the deposit
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `InsufficientDeposit` - Amount is below the minimum deposit
    /// - `TransferFailed` - Tokens could not be pulled from `member`
    pub fn deposit(env: Env, member: Address, amount: i128) -> Result<i128, PoolError> {
        membership::deposit(&env, member, amount)
    }

    /// Withdraw from the caller's pooled balance
    ///
    /// # Returns
    /// The remaining balance
    ///
    /// # Errors
    /// - `NotMember` - Caller is not an active member
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `InsufficientBalance` - Amount exceeds the caller's balance
    /// - `TransferFailed` - The payout failed
    pub fn withdraw(env: Env, member: Address, amount: i128) -> Result<i128, PoolError> {
        membership::withdraw(&env, member, amount)
    }

    /// Token receiver hook
    ///
    /// Credits tokens sent to the pool without a `deposit` call. An empty payload or
    /// `[Symbol("deposit")]` is treated as a deposit from `from`, who must authorize
    /// the call; anything else is rejected.
    pub fn receive(
        env: Env,
        token_asset: Address,
        from: Address,
        amount: i128,
        payload: Vec<Val>,
    ) -> Result<i128, PoolError> {
        token_receiver::receive(&env, token_asset, from, amount, payload)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Propose a transfer of pooled funds (active members only)
    ///
    /// # Returns
    /// The id of the new proposal
    ///
    /// # Errors
    /// - `NotMember` - Proposer is not an active member
    /// - `InvalidAddress` - Target is the pool contract itself
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `InsufficientPoolFunds` - Amount exceeds the pool balance
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        description: String,
        target: Address,
        amount: i128,
    ) -> Result<u64, PoolError> {
        proposal::create_proposal(&env, proposer, description, target, amount)
    }

    /// Approve a pending proposal (admin only)
    pub fn approve_proposal(env: Env, admin: Address, id: u64) -> Result<(), PoolError> {
        proposal::approve_proposal(&env, admin, id)
    }

    /// Reject a pending proposal (admin only)
    pub fn reject_proposal(env: Env, admin: Address, id: u64) -> Result<(), PoolError> {
        proposal::reject_proposal(&env, admin, id)
    }

    /// Execute an approved proposal (admin only)
    ///
    /// Debits the pool and sends `amount` to the proposal target.
    ///
    /// # Errors
    /// - `ProposalNotApproved` - Proposal is pending or rejected
    /// - `ProposalAlreadyExecuted` - Proposal already paid out
    /// - `InsufficientPoolFunds` - Pool balance fell below the amount since approval
    /// - `TransferFailed` - The payout failed
    pub fn execute_proposal(env: Env, admin: Address, id: u64) -> Result<(), PoolError> {
        proposal::execute_proposal(&env, admin, id)
    }

    // ── Configuration ────────────────────────────────────────────────────────

    pub fn set_minimum_deposit(env: Env, admin: Address, new_minimum: i128) -> Result<(), PoolError> {
        config::set_minimum_deposit(&env, admin, new_minimum)
    }

    pub fn set_greeting(env: Env, admin: Address, new_greeting: String) -> Result<(), PoolError> {
        config::set_greeting(&env, admin, new_greeting)
    }

    // ── Roles ────────────────────────────────────────────────────────────────

    /// Grant a role (super-admin only)
    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), PoolError> {
        roles::grant_role(&env, caller, role, account)
    }

    /// Revoke a role (super-admin only). Callers cannot revoke their own roles.
    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), PoolError> {
        roles::revoke_role(&env, caller, role, account)
    }

    pub fn add_admin(env: Env, caller: Address, account: Address) -> Result<(), PoolError> {
        roles::add_admin(&env, caller, account)
    }

    pub fn remove_admin(env: Env, caller: Address, account: Address) -> Result<(), PoolError> {
        roles::remove_admin(&env, caller, account)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Aggregate of all member balances
    pub fn get_pool_balance(env: Env) -> i128 {
        accounting::get_pool_balance(&env)
    }

    /// Tokens of the pooled asset actually held by the contract
    pub fn get_contract_balance(env: Env) -> Result<i128, PoolError> {
        transfer::custodied_balance(&env)
    }

    pub fn get_member_balance(env: Env, member: Address) -> i128 {
        membership::get_member(&env, &member).balance
    }

    /// Full member record; all-zero for addresses that never deposited
    pub fn get_member_info(env: Env, member: Address) -> MemberRecord {
        membership::get_member(&env, &member)
    }

    pub fn is_member(env: Env, member: Address) -> bool {
        membership::is_member(&env, &member)
    }

    /// Number of active members
    pub fn get_total_members(env: Env) -> u32 {
        membership::active_members(&env).len()
    }

    /// Active member addresses in activation order
    pub fn get_active_members(env: Env) -> Vec<Address> {
        membership::active_members(&env)
    }

    pub fn total_deposit_counter(env: Env) -> u64 {
        storage::get_total_deposit_counter(&env)
    }

    pub fn user_deposit_counter(env: Env, member: Address) -> u64 {
        membership::get_member(&env, &member).deposit_counter
    }

    /// # Errors
    /// - `NotFound` - No proposal with this id
    pub fn get_proposal(env: Env, id: u64) -> Result<Proposal, PoolError> {
        proposal::get_proposal(&env, id)
    }

    pub fn get_all_proposals(env: Env) -> Vec<Proposal> {
        proposal::get_all_proposals(&env)
    }

    /// Pending and approved proposals in id order
    pub fn get_active_proposals(env: Env) -> Vec<Proposal> {
        proposal::get_active_proposals(&env)
    }

    pub fn proposal_count(env: Env) -> u64 {
        proposal::proposal_count(&env)
    }

    pub fn minimum_deposit(env: Env) -> i128 {
        storage::get_minimum_deposit(&env)
    }

    pub fn greeting(env: Env) -> String {
        storage::get_greeting(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        config::get_config(&env)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        roles::has_role(&env, Role::Admin, &account)
    }
}
