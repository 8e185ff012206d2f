use anchor_lang::prelude::*;

/// Custom error codes for the EPIX claim ledger.
#[error_code]
pub enum VestingError {
    #[msg("Allocation already exists")]
    DuplicateAllocation,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Vesting has not started")]
    NotStarted,

    #[msg("Vesting has already started")]
    AlreadyStarted,

    #[msg("No tokens available to claim")]
    NothingToClaim,

    #[msg("Bizdev claiming is paused")]
    ClaimingPaused,

    #[msg("Claiming must be paused first")]
    NotPaused,

    #[msg("Bonus is not unlocked yet")]
    BonusLocked,

    #[msg("Bonus already claimed")]
    BonusAlreadyClaimed,

    #[msg("Unauthorized caller")]
    Unauthorized,

    #[msg("Custody balance cannot fund this transfer")]
    InsufficientCustody,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Vesting period must be greater than zero")]
    InvalidPeriod,

    #[msg("Addresses and amounts differ in length")]
    BatchLengthMismatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Allocation account does not match the beneficiary PDA")]
    InvalidAllocationAccount,

    #[msg("Claimed amount would exceed the allocation")]
    ClaimExceedsAllocation,

    #[msg("First custody deposit must cover the rent-exempt reserve")]
    DepositBelowRentReserve,

    #[msg("Math overflow")]
    MathOverflow,
}
