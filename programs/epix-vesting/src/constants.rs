//! Program-wide constants.

use anchor_lang::prelude::*;

/// Seed of the singleton ledger PDA.
#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed of the custody PDA (system account holding payout lamports).
#[constant]
pub const CUSTODY_SEED: &[u8] = b"custody";

/// Seed prefix of per-beneficiary allocation PDAs.
#[constant]
pub const ALLOCATION_SEED: &[u8] = b"allocation";

/// Max entries accepted by a single `add_allocations_batch` call.
/// Bounded by the account list a transaction can carry.
pub const MAX_BATCH_ALLOCATIONS: usize = 20;
