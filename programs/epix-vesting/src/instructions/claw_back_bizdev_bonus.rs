use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::custody;

/// Return the unpaid bizdev bonus to the admin. Returns the amount.
pub fn claw_back_bizdev_bonus(ctx: Context<ClawBackBizdevBonus>) -> Result<u64> {
    let admin = ctx.accounts.admin.key();
    let ledger_key = ctx.accounts.ledger.key();
    let custody_ai = ctx.accounts.custody.to_account_info();
    let available = custody::available_lamports(&custody_ai)?;

    let ledger = &mut ctx.accounts.ledger;
    let bonus = ledger.claw_back_bizdev_bonus(&admin, available)?;

    custody::pay_out(
        ctx.accounts.system_program.to_account_info(),
        custody_ai,
        ctx.accounts.admin.to_account_info(),
        &ledger_key,
        ledger.custody_bump,
        bonus,
    )?;

    emit!(BizdevBonusClawedBack {
        admin,
        amount: bonus,
        total_allocated: ledger.stats.total_allocated,
    });

    Ok(bonus)
}

#[derive(Accounts)]
pub struct ClawBackBizdevBonus<'info> {
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
pub struct BizdevBonusClawedBack {
    pub admin: Pubkey,
    pub amount: u64,
    pub total_allocated: u64,
}
