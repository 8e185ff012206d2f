use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn resume_bizdev_claiming(ctx: Context<ResumeBizdevClaiming>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.resume_bizdev_claiming(&ctx.accounts.admin.key())?;
    emit!(BizdevClaimingResumed { admin: ledger.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct ResumeBizdevClaiming<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct BizdevClaimingResumed {
    pub admin: Pubkey,
}
