use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::instructions::{ClaimKind, TokensClaimed};
use crate::state::Ledger;
use crate::utils::custody;

pub fn claim_bizdev(ctx: Context<ClaimBizdev>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let bizdev = ctx.accounts.bizdev.key();
    let ledger_key = ctx.accounts.ledger.key();
    let custody_ai = ctx.accounts.custody.to_account_info();
    let available = custody::available_lamports(&custody_ai)?;

    let ledger = &mut ctx.accounts.ledger;
    let amount = ledger.claim_bizdev(&bizdev, now, available)?;

    custody::pay_out(
        ctx.accounts.system_program.to_account_info(),
        custody_ai,
        ctx.accounts.bizdev.to_account_info(),
        &ledger_key,
        ledger.custody_bump,
        amount,
    )?;

    emit!(TokensClaimed {
        claimant: bizdev,
        kind: ClaimKind::BizdevBase,
        amount,
        claimed_total: ledger.bizdev.claimed_amount,
        total_times_claimed: ledger.stats.total_times_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimBizdev<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, ledger.key().as_ref()],
        bump = ledger.custody_bump
    )]
    pub custody: SystemAccount<'info>,

    #[account(mut)]
    pub bizdev: Signer<'info>,

    pub system_program: Program<'info, System>,
}
