use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::custody;

pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let available = custody::available_lamports(&ctx.accounts.custody.to_account_info())?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.start_vesting(&ctx.accounts.admin.key(), now, available)?;

    emit!(VestingStarted {
        start_time: ledger.schedule.start_time,
        period: ledger.schedule.period,
        total_allocated: ledger.stats.total_allocated,
        custody_available: available,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [CUSTODY_SEED, ledger.key().as_ref()], bump = ledger.custody_bump)]
    pub custody: SystemAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub start_time: i64,
    pub period: i64,
    pub total_allocated: u64,
    pub custody_available: u64,
}
