use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::custody;

/// Sweep vested, unclaimed bizdev base tokens to the admin. Returns the amount.
pub fn claw_back_bizdev_remaining(ctx: Context<ClawBackBizdevRemaining>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let ledger_key = ctx.accounts.ledger.key();
    let custody_ai = ctx.accounts.custody.to_account_info();
    let available = custody::available_lamports(&custody_ai)?;

    let ledger = &mut ctx.accounts.ledger;
    let amount = ledger.claw_back_bizdev_remaining(&admin, now, available)?;

    custody::pay_out(
        ctx.accounts.system_program.to_account_info(),
        custody_ai,
        ctx.accounts.admin.to_account_info(),
        &ledger_key,
        ledger.custody_bump,
        amount,
    )?;

    emit!(BizdevRemainingClawedBack {
        admin,
        amount,
        bizdev_claimed_amount: ledger.bizdev.claimed_amount,
    });

    Ok(amount)
}

#[derive(Accounts)]
pub struct ClawBackBizdevRemaining<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, ledger.key().as_ref()],
        bump = ledger.custody_bump
    )]
    pub custody: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BizdevRemainingClawedBack {
    pub admin: Pubkey,
    pub amount: u64,
    pub bizdev_claimed_amount: u64,
}
