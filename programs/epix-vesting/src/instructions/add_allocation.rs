use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::accounts;

pub fn add_allocation(ctx: Context<AddAllocation>, beneficiary: Pubkey, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.to_account_info();
    let allocation = ctx.accounts.allocation.to_account_info();
    let ledger_key = ctx.accounts.ledger.key();

    let ledger = &mut ctx.accounts.ledger;
    ledger.admit_allocation(
        admin.key,
        &beneficiary,
        amount,
        accounts::is_initialized(&allocation),
    )?;

    accounts::open_allocation(
        &admin,
        &allocation,
        &ctx.accounts.system_program.to_account_info(),
        ledger_key,
        beneficiary,
        amount,
        ctx.bumps.allocation,
    )?;

    emit!(AllocationAdded {
        beneficiary,
        amount,
        total_users: ledger.stats.total_users,
        total_allocated: ledger.stats.total_allocated,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct AddAllocation<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Created and written in-handler; an existing account is rejected
    /// as a duplicate allocation.
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, ledger.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllocationAdded {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_users: u64,
    pub total_allocated: u64,
}
