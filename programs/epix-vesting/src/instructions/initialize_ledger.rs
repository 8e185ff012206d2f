use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    bizdev: Pubkey,
    bizdev_amount: u64,
    bizdev_bonus: u64,
    vesting_period: i64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.initialize(
        admin,
        bizdev,
        bizdev_amount,
        bizdev_bonus,
        vesting_period,
        ctx.bumps.ledger,
        ctx.bumps.custody,
    )?;

    emit!(LedgerInitialized {
        admin,
        bizdev,
        bizdev_amount,
        bizdev_bonus,
        vesting_period,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = Ledger::SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [CUSTODY_SEED, ledger.key().as_ref()], bump)]
    pub custody: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub bizdev: Pubkey,
    pub bizdev_amount: u64,
    pub bizdev_bonus: u64,
    pub vesting_period: i64,
}
