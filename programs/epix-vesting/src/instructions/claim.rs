use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, CUSTODY_SEED, LEDGER_SEED};
use crate::state::Ledger;
use crate::utils::{accounts, custody};

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();
    let ledger_key = ctx.accounts.ledger.key();
    let custody_ai = ctx.accounts.custody.to_account_info();
    let available = custody::available_lamports(&custody_ai)?;

    // The bizdev address has no allocation PDA; it claims its base here.
    let allocation_ai = ctx.accounts.allocation.to_account_info();
    let mut allocation = accounts::load_allocation(&allocation_ai)?;

    let ledger = &mut ctx.accounts.ledger;
    let amount = ledger.claim(&claimant, allocation.as_mut(), now, available)?;

    let (kind, claimed_total) = match &allocation {
        Some(a) => {
            accounts::store_allocation(&allocation_ai, a)?;
            (ClaimKind::Regular, a.claimed_amount)
        }
        None => (ClaimKind::BizdevBase, ledger.bizdev.claimed_amount),
    };

    custody::pay_out(
        ctx.accounts.system_program.to_account_info(),
        custody_ai,
        ctx.accounts.claimant.to_account_info(),
        &ledger_key,
        ledger.custody_bump,
        amount,
    )?;

    emit!(TokensClaimed {
        claimant,
        kind,
        amount,
        claimed_total,
        total_times_claimed: ledger.stats.total_times_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: The claimant's allocation PDA; may be uninitialized (bizdev, or
    /// an address that was never allocated).
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, ledger.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, ledger.key().as_ref()],
        bump = ledger.custody_bump
    )]
    pub custody: SystemAccount<'info>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimKind {
    Regular,
    BizdevBase,
    BizdevBonus,
}

#[event]
pub struct TokensClaimed {
    pub claimant: Pubkey,
    pub kind: ClaimKind,
    pub amount: u64,
    /// Claimant's cumulative claimed amount after this claim.
    pub claimed_total: u64,
    pub total_times_claimed: u64,
}
