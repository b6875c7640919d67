use soroban_sdk::contracterror;

/// Errors returned by every pool entrypoint.
///
/// Any `Err` aborts the whole invocation and the host discards its storage writes,
/// so no variant ever describes a partially applied operation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Deposit is below the configured minimum
    InsufficientDeposit = 1,
    /// Amount is zero or negative
    InvalidAmount = 2,
    /// Recipient address cannot receive pool funds
    InvalidAddress = 3,
    /// Proposal is not in the state the transition requires
    InvalidState = 4,
    /// No proposal with the given id
    NotFound = 5,
    /// Caller is not an active member
    NotMember = 6,
    /// Caller lacks the required role
    Unauthorized = 7,
    /// Caller attempted to revoke their own role
    SelfRemoval = 8,
    /// Member is withdrawing more than they hold
    InsufficientBalance = 9,
    /// Requested amount exceeds the pool aggregate
    InsufficientPoolFunds = 10,
    /// Proposal must be approved before execution
    ProposalNotApproved = 11,
    /// Proposal was already executed
    ProposalAlreadyExecuted = 12,
    /// Outbound or inbound token transfer failed
    TransferFailed = 13,
    /// A guarded transfer is already in progress
    Reentrancy = 14,
    /// Arithmetic overflow
    Overflow = 15,
    /// Contract has not been initialized
    NotInitialized = 16,
    /// Contract was already initialized
    AlreadyInitialized = 17,
    /// Token is not the asset this pool custodies
    UnsupportedAsset = 18,
    /// Inbound transfer carried an instruction the pool does not understand
    UnrecognizedInstruction = 19,
    /// Credited value would exceed the tokens actually held by the pool
    InsufficientCustody = 20,
}
