use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn unlock_bizdev_bonus(ctx: Context<UnlockBizdevBonus>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    if !ledger.unlock_bizdev_bonus(&ctx.accounts.admin.key())? {
        msg!("Bizdev bonus already unlocked");
        return Ok(());
    }
    emit!(BizdevBonusUnlocked {
        admin: ledger.admin,
        bonus_amount: ledger.bizdev.bonus_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UnlockBizdevBonus<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct BizdevBonusUnlocked {
    pub admin: Pubkey,
    pub bonus_amount: u64,
}
