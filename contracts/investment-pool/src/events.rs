/// # Investment Pool – Notifications
///
/// Every state-changing operation publishes exactly one notification describing the
/// committed outcome. Each notification is a `#[contractevent]` struct, so the
/// snake_case struct name is the leading topic and the fields form a map payload.
///
/// Events are only published after storage writes succeed. A failed invocation is
/// rolled back by the host together with any event it produced.
use soroban_sdk::{contractevent, Address, Env, String};

use crate::proposal::ProposalStatus;
use crate::roles::Role;

// ─────────────────────────────────────────────────────────────────────────────
// Membership and accounting
// ─────────────────────────────────────────────────────────────────────────────

/// Emitted once when the pool is bound to its asset and first super-admin.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Initialized {
    pub admin: Address,
    pub native_asset: Address,
    pub minimum_deposit: i128,
    pub timestamp: u64,
}

/// Emitted for every successful deposit, explicit or via the receiver hook.
///
/// # Fields
/// * `member` – The depositor.
/// * `amount` – Value credited by this deposit.
/// * `new_balance` – Member balance after the credit.
/// * `timestamp` – Ledger timestamp of the deposit.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Deposited {
    pub member: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Emitted when a member withdraws part or all of their balance.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Withdrawn {
    pub member: Address,
    pub amount: i128,
    pub remaining_balance: i128,
    pub timestamp: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Proposals
// ─────────────────────────────────────────────────────────────────────────────

#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalCreated {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub amount: i128,
}

/// Emitted on approval or rejection of a pending proposal.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalStatusChanged {
    pub id: u64,
    pub status: ProposalStatus,
}

/// Emitted after the pool debit is committed and the funds reached `target`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalExecuted {
    pub id: u64,
    pub target: Address,
    pub amount: i128,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration and roles
// ─────────────────────────────────────────────────────────────────────────────

#[contractevent]
#[derive(Clone, Debug)]
pub struct MinimumDepositChanged {
    pub admin: Address,
    pub new_minimum: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct GreetingChange {
    pub admin: Address,
    pub new_greeting: String,
    pub timestamp: u64,
}

/// Emitted by `add_admin`.
///
/// # Fields
/// * `account` – The new admin.
/// * `actor` – The super-admin who granted the role.
/// * `timestamp` – Ledger timestamp of the grant.
#[contractevent]
#[derive(Clone, Debug)]
pub struct AdminAdded {
    pub account: Address,
    pub actor: Address,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AdminRemoved {
    pub account: Address,
    pub actor: Address,
    pub timestamp: u64,
}

/// Emitted by the generic `grant_role` entrypoint.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RoleGranted {
    pub role: Role,
    pub account: Address,
    pub actor: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Address,
    pub actor: Address,
}

// ─────────────────────────────────────────────────────────────────────────────
// Emitter helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn emit_initialized(e: &Env, admin: &Address, native_asset: &Address, minimum_deposit: i128) {
    Initialized {
        admin: admin.clone(),
        native_asset: native_asset.clone(),
        minimum_deposit,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

/// Emit a deposit notification.
/// Call this after the member record and the aggregate are written.
pub fn emit_deposited(e: &Env, member: &Address, amount: i128, new_balance: i128) {
    Deposited {
        member: member.clone(),
        amount,
        new_balance,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

/// Emit a withdrawal notification.
/// Call this after the guarded transfer has returned.
pub fn emit_withdrawn(e: &Env, member: &Address, amount: i128, remaining_balance: i128) {
    Withdrawn {
        member: member.clone(),
        amount,
        remaining_balance,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

pub fn emit_proposal_created(e: &Env, id: u64, proposer: &Address, target: &Address, amount: i128) {
    ProposalCreated {
        id,
        proposer: proposer.clone(),
        target: target.clone(),
        amount,
    }
    .publish(e);
}

pub fn emit_proposal_status_changed(e: &Env, id: u64, status: ProposalStatus) {
    ProposalStatusChanged { id, status }.publish(e);
}

pub fn emit_proposal_executed(e: &Env, id: u64, target: &Address, amount: i128) {
    ProposalExecuted {
        id,
        target: target.clone(),
        amount,
    }
    .publish(e);
}

pub fn emit_minimum_deposit_changed(e: &Env, admin: &Address, new_minimum: i128) {
    MinimumDepositChanged {
        admin: admin.clone(),
        new_minimum,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

pub fn emit_greeting_change(e: &Env, admin: &Address, new_greeting: &String) {
    GreetingChange {
        admin: admin.clone(),
        new_greeting: new_greeting.clone(),
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

pub fn emit_admin_added(e: &Env, account: &Address, actor: &Address) {
    AdminAdded {
        account: account.clone(),
        actor: actor.clone(),
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

pub fn emit_admin_removed(e: &Env, account: &Address, actor: &Address) {
    AdminRemoved {
        account: account.clone(),
        actor: actor.clone(),
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);
}

pub fn emit_role_granted(e: &Env, role: Role, account: &Address, actor: &Address) {
    RoleGranted {
        role,
        account: account.clone(),
        actor: actor.clone(),
    }
    .publish(e);
}

pub fn emit_role_revoked(e: &Env, role: Role, account: &Address, actor: &Address) {
    RoleRevoked {
        role,
        account: account.clone(),
        actor: actor.clone(),
    }
    .publish(e);
}
