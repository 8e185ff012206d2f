use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, LEDGER_SEED};
use crate::error::VestingError;
use crate::state::{AllocationBatch, BatchReport, EntryOutcome, Ledger};
use crate::utils::accounts;

/// Add allocations pairwise from `beneficiaries` and `amounts`.
///
/// `remaining_accounts[i]` must be the allocation PDA of `beneficiaries[i]`.
/// Duplicate and zero-amount entries are skipped and reported; anything
/// malformed about the request itself fails the whole batch.
pub fn add_allocations_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, AddAllocationsBatch<'info>>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<BatchReport> {
    let mut batch = AllocationBatch::new(&beneficiaries, &amounts)?;
    require!(
        ctx.remaining_accounts.len() == batch.len(),
        VestingError::InvalidAllocationAccount
    );

    let admin = ctx.accounts.admin.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let ledger_key = ctx.accounts.ledger.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.ensure_admin(admin.key)?;

    for (i, target) in ctx.remaining_accounts.iter().enumerate() {
        let (beneficiary, amount) = batch.entry(i);
        let (expected, bump) = Pubkey::find_program_address(
            &[ALLOCATION_SEED, ledger_key.as_ref(), beneficiary.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(*target.key, expected, VestingError::InvalidAllocationAccount);
        require!(target.is_writable, VestingError::InvalidAllocationAccount);

        match batch.admit(ledger, admin.key, i, accounts::is_initialized(target))? {
            EntryOutcome::Added => accounts::open_allocation(
                &admin,
                target,
                &system_program,
                ledger_key,
                beneficiary,
                amount,
                bump,
            )?,
            skipped => msg!("Skipped allocation for {}: {:?}", beneficiary, skipped),
        }
    }

    let entries = u32::try_from(batch.len()).map_err(|_| VestingError::MathOverflow)?;
    let (report, digest) = batch.finish();

    emit!(AllocationsBatchAdded {
        entries,
        added: report.added,
        added_amount: report.added_amount,
        digest,
        total_users: ledger.stats.total_users,
        total_allocated: ledger.stats.total_allocated,
    });

    Ok(report)
}

#[derive(Accounts)]
pub struct AddAllocationsBatch<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllocationsBatchAdded {
    pub entries: u32,
    pub added: u32,
    pub added_amount: u64,
    /// blake3 over the added `(beneficiary, amount)` pairs, in batch order.
    pub digest: [u8; 32],
    pub total_users: u64,
    pub total_allocated: u64,
}
