use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::custody;

/// Deposit `amount` lamports from the admin into custody. The first deposit
/// into an empty custody must cover its rent-exempt reserve.
pub fn fund_custody(ctx: Context<FundCustody>, amount: u64) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    ledger.ensure_admin(&ctx.accounts.admin.key())?;

    let reserve = Rent::get()?.minimum_balance(0);
    custody::check_deposit(ctx.accounts.custody.to_account_info().lamports(), amount, reserve)?;

    custody::deposit(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.custody.to_account_info(),
        amount,
    )?;

    emit!(CustodyFunded {
        admin: ledger.admin,
        amount,
        custody_balance: ctx.accounts.custody.to_account_info().lamports(),
        outstanding: ledger.outstanding(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundCustody<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
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
pub struct CustodyFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub custody_balance: u64,
    pub outstanding: u64,
}
