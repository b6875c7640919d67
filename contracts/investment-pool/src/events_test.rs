//! Every state-changing entrypoint publishes one notification, decodable from
//! `env.events().all()` with a mirrored `#[contracttype]` struct.

use crate::test_helpers::{setup, MIN_DEPOSIT, UNIT};
use crate::{ProposalStatus, Role};
use soroban_sdk::{
    contracttype,
    testutils::{Address as _, Ledger},
    Address, String, TryFromVal,
};

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestInitialized {
    pub admin: Address,
    pub native_asset: Address,
    pub minimum_deposit: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestDeposited {
    pub member: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestWithdrawn {
    pub member: Address,
    pub amount: i128,
    pub remaining_balance: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestProposalCreated {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestProposalStatusChanged {
    pub id: u64,
    pub status: ProposalStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestProposalExecuted {
    pub id: u64,
    pub target: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestMinimumDepositChanged {
    pub admin: Address,
    pub new_minimum: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestGreetingChange {
    pub admin: Address,
    pub new_greeting: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestAdminChange {
    pub account: Address,
    pub actor: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestRoleChange {
    pub role: Role,
    pub account: Address,
    pub actor: Address,
}

#[test]
fn test_initialized_event() {
    let s = setup();
    let data = s.last_event("initialized").expect("initialized event");
    let decoded = TestInitialized::try_from_val(&s.env, &data).unwrap();

    assert_eq!(decoded.admin, s.admin);
    assert_eq!(decoded.native_asset, s.token);
    assert_eq!(decoded.minimum_deposit, MIN_DEPOSIT);
}

#[test]
fn test_deposited_event() {
    let s = setup();
    s.env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);
    let member = s.new_member(UNIT);

    let data = s.last_event("deposited").expect("deposited event");
    let decoded = TestDeposited::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.member, member);
    assert_eq!(decoded.amount, UNIT);
    assert_eq!(decoded.new_balance, UNIT);
    assert_eq!(decoded.timestamp, 1_700_000_000);

    s.mint(&member, UNIT);
    s.client.deposit(&member, &UNIT);
    let data = s.last_event("deposited").expect("second deposited event");
    let decoded = TestDeposited::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.new_balance, 2 * UNIT);
}

#[test]
fn test_withdrawn_event() {
    let s = setup();
    let member = s.new_member(3 * UNIT);
    s.client.withdraw(&member, &UNIT);

    let data = s.last_event("withdrawn").expect("withdrawn event");
    let decoded = TestWithdrawn::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.member, member);
    assert_eq!(decoded.amount, UNIT);
    assert_eq!(decoded.remaining_balance, 2 * UNIT);
}

#[test]
fn test_proposal_lifecycle_events() {
    let s = setup();
    let member = s.new_member(5 * UNIT);
    let target = Address::generate(&s.env);

    let id = s.client.create_proposal(
        &member,
        &String::from_str(&s.env, "Invest in protocol XYZ"),
        &target,
        &UNIT,
    );
    let data = s.last_event("proposal_created").expect("created event");
    let created = TestProposalCreated::try_from_val(&s.env, &data).unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.proposer, member);
    assert_eq!(created.target, target);
    assert_eq!(created.amount, UNIT);

    s.client.approve_proposal(&s.admin, &id);
    let data = s.last_event("proposal_status_changed").expect("status event");
    let changed = TestProposalStatusChanged::try_from_val(&s.env, &data).unwrap();
    assert_eq!(changed.id, id);
    assert_eq!(changed.status, ProposalStatus::Approved);

    s.client.execute_proposal(&s.admin, &id);
    let data = s.last_event("proposal_executed").expect("executed event");
    let executed = TestProposalExecuted::try_from_val(&s.env, &data).unwrap();
    assert_eq!(executed.id, id);
    assert_eq!(executed.target, target);
    assert_eq!(executed.amount, UNIT);
}

#[test]
fn test_rejection_event() {
    let s = setup();
    let member = s.new_member(5 * UNIT);
    let id = s.client.create_proposal(
        &member,
        &String::from_str(&s.env, "Too risky"),
        &Address::generate(&s.env),
        &UNIT,
    );
    s.client.reject_proposal(&s.admin, &id);

    let data = s.last_event("proposal_status_changed").expect("status event");
    let changed = TestProposalStatusChanged::try_from_val(&s.env, &data).unwrap();
    assert_eq!(changed.status, ProposalStatus::Rejected);
}

#[test]
fn test_config_events() {
    let s = setup();

    s.client.set_minimum_deposit(&s.admin, &(UNIT / 20));
    let data = s.last_event("minimum_deposit_changed").expect("minimum event");
    let decoded = TestMinimumDepositChanged::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.admin, s.admin);
    assert_eq!(decoded.new_minimum, UNIT / 20);

    let greeting = String::from_str(&s.env, "New Investment Strategy 2025!");
    s.client.set_greeting(&s.admin, &greeting);
    let data = s.last_event("greeting_change").expect("greeting event");
    let decoded = TestGreetingChange::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.admin, s.admin);
    assert_eq!(decoded.new_greeting, greeting);
}

#[test]
fn test_admin_events() {
    let s = setup();
    let account = Address::generate(&s.env);

    s.client.add_admin(&s.admin, &account);
    let data = s.last_event("admin_added").expect("admin_added event");
    let decoded = TestAdminChange::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.account, account);
    assert_eq!(decoded.actor, s.admin);

    s.client.remove_admin(&s.admin, &account);
    let data = s.last_event("admin_removed").expect("admin_removed event");
    let decoded = TestAdminChange::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.account, account);
}

#[test]
fn test_role_events() {
    let s = setup();
    let account = Address::generate(&s.env);

    s.client.grant_role(&s.admin, &Role::SuperAdmin, &account);
    let data = s.last_event("role_granted").expect("role_granted event");
    let decoded = TestRoleChange::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.role, Role::SuperAdmin);
    assert_eq!(decoded.account, account);
    assert_eq!(decoded.actor, s.admin);

    s.client.revoke_role(&s.admin, &Role::SuperAdmin, &account);
    let data = s.last_event("role_revoked").expect("role_revoked event");
    let decoded = TestRoleChange::try_from_val(&s.env, &data).unwrap();
    assert_eq!(decoded.role, Role::SuperAdmin);
}

#[test]
fn test_failed_operation_publishes_nothing() {
    let s = setup();
    let member = s.new_member(UNIT);

    assert!(s.client.try_withdraw(&member, &(2 * UNIT)).is_err());
    assert!(s.last_event("withdrawn").is_none());
}
