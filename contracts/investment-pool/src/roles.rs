//! # Role Registry
//!
//! Two independent role sets guard privileged operations:
//! - **SuperAdmin**: grants and revokes roles. The initializing address is the first one.
//! - **Admin**: reviews and executes proposals and changes pool configuration.
//!
//! Holding `SuperAdmin` does not imply `Admin`; each check names exactly the role it
//! needs. No caller can revoke a role from their own address, which keeps at least
//! one super-admin in place.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::errors::PoolError;
use crate::events::{emit_admin_added, emit_admin_removed, emit_role_granted, emit_role_revoked};
use crate::storage::require_initialized;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    SuperAdmin = 0,
    Admin = 1,
}

/// Storage keys for role assignments: Assignment(Role, Address) -> bool
#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum RoleDataKey {
    Assignment(Role, Address),
}

/// Check if an address holds a role
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&RoleDataKey::Assignment(role, account.clone()))
        .unwrap_or(false)
}

/// Authenticate `caller` and require that they hold `role`.
///
/// This is the single authorization point for every privileged entrypoint.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), PoolError> {
    caller.require_auth();
    require_initialized(env)?;
    if !has_role(env, role, caller) {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}

/// Write a role assignment with no authorization check. Used during initialization.
pub(crate) fn assign(env: &Env, role: Role, account: &Address) {
    env.storage()
        .persistent()
        .set(&RoleDataKey::Assignment(role, account.clone()), &true);
}

fn unassign(env: &Env, role: Role, account: &Address) {
    env.storage()
        .persistent()
        .remove(&RoleDataKey::Assignment(role, account.clone()));
}

fn check_grant(env: &Env, caller: &Address) -> Result<(), PoolError> {
    require_role(env, caller, Role::SuperAdmin)
}

fn check_revoke(env: &Env, caller: &Address, account: &Address) -> Result<(), PoolError> {
    require_role(env, caller, Role::SuperAdmin)?;
    if caller == account {
        return Err(PoolError::SelfRemoval);
    }
    Ok(())
}

/// Grant a role to an address (super-admin only)
pub fn grant_role(env: &Env, caller: Address, role: Role, account: Address) -> Result<(), PoolError> {
    check_grant(env, &caller)?;
    assign(env, role, &account);
    emit_role_granted(env, role, &account, &caller);
    log!(env, "role granted {} by {}", account, caller);
    Ok(())
}

/// Revoke a role from an address (super-admin only)
///
/// # Errors
/// * `Unauthorized` - caller is not a super-admin
/// * `SelfRemoval` - caller targets their own address
pub fn revoke_role(
    env: &Env,
    caller: Address,
    role: Role,
    account: Address,
) -> Result<(), PoolError> {
    check_revoke(env, &caller, &account)?;
    unassign(env, role, &account);
    emit_role_revoked(env, role, &account, &caller);
    log!(env, "role revoked {} by {}", account, caller);
    Ok(())
}

pub fn add_admin(env: &Env, caller: Address, account: Address) -> Result<(), PoolError> {
    check_grant(env, &caller)?;
    assign(env, Role::Admin, &account);
    emit_admin_added(env, &account, &caller);
    log!(env, "admin added {} by {}", account, caller);
    Ok(())
}

pub fn remove_admin(env: &Env, caller: Address, account: Address) -> Result<(), PoolError> {
    check_revoke(env, &caller, &account)?;
    unassign(env, Role::Admin, &account);
    emit_admin_removed(env, &account, &caller);
    log!(env, "admin removed {} by {}", account, caller);
    Ok(())
}
