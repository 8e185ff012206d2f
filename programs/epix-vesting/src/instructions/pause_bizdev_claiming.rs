use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn pause_bizdev_claiming(ctx: Context<PauseBizdevClaiming>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.pause_bizdev_claiming(&ctx.accounts.admin.key())?;
    emit!(BizdevClaimingPaused { admin: ledger.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct PauseBizdevClaiming<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct BizdevClaimingPaused {
    pub admin: Pubkey,
}
