//! Read-only queries. Results are returned through Anchor return data so
//! clients can `simulate` them; nothing here mutates state.

use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, CUSTODY_SEED, LEDGER_SEED};
use crate::state::{
    AllocationView, BizdevAllocationView, CustodyStatus, GlobalStatsView, Ledger,
    VestingScheduleView,
};
use crate::utils::{accounts, custody};

pub fn get_allocation(ctx: Context<AllocationLookup>, _beneficiary: Pubkey) -> Result<AllocationView> {
    let allocation = accounts::load_allocation(&ctx.accounts.allocation.to_account_info())?;
    Ok(allocation.map(|a| a.view()).unwrap_or_default())
}

pub fn get_claimable_amount(ctx: Context<AllocationLookup>, beneficiary: Pubkey) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let allocation = accounts::load_allocation(&ctx.accounts.allocation.to_account_info())?;
    let ledger = &ctx.accounts.ledger;
    let claimable = ledger.claimable_amount(&beneficiary, allocation.as_ref(), now)?;

    emit!(ClaimableQuote {
        beneficiary,
        now,
        started: ledger.schedule.started,
        claimable,
    });

    Ok(claimable)
}

pub fn get_bizdev_claimable_amount(ctx: Context<LedgerView>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.ledger.bizdev_claimable_amount(now)?)
}

pub fn get_bizdev_allocation(ctx: Context<LedgerView>) -> Result<BizdevAllocationView> {
    Ok(ctx.accounts.ledger.bizdev.view())
}

pub fn get_global_stats(ctx: Context<LedgerView>) -> Result<GlobalStatsView> {
    Ok(ctx.accounts.ledger.stats.view())
}

pub fn get_vesting_schedule(ctx: Context<LedgerView>) -> Result<VestingScheduleView> {
    Ok(ctx.accounts.ledger.schedule.view())
}

pub fn get_custody_status(ctx: Context<CustodyView>) -> Result<CustodyStatus> {
    let custody_ai = ctx.accounts.custody.to_account_info();
    let available = custody::available_lamports(&custody_ai)?;
    Ok(ctx.accounts.ledger.custody_status(custody_ai.lamports(), available))
}

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct AllocationLookup<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: Read only; an uninitialized PDA reads as "no allocation".
    #[account(seeds = [ALLOCATION_SEED, ledger.key().as_ref(), beneficiary.as_ref()], bump)]
    pub allocation: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct CustodyView<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [CUSTODY_SEED, ledger.key().as_ref()], bump = ledger.custody_bump)]
    pub custody: SystemAccount<'info>,
}

#[event]
pub struct ClaimableQuote {
    pub beneficiary: Pubkey,
    pub now: i64,
    pub started: bool,
    pub claimable: u64,
}
