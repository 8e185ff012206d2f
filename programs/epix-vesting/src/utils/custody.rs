//! Native-lamport custody held by the `["custody", ledger]` PDA.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::CUSTODY_SEED;
use crate::error::VestingError;

/// Lamports custody can pay out without dropping below the rent-exempt
/// reserve of a zero-data account.
pub fn available_lamports(custody: &AccountInfo) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(0);
    Ok(custody.lamports().saturating_sub(reserve))
}

/// Move `amount` lamports from custody to `recipient`, signed by the custody PDA.
pub fn pay_out<'info>(
    system_program: AccountInfo<'info>,
    custody: AccountInfo<'info>,
    recipient: AccountInfo<'info>,
    ledger: &Pubkey,
    custody_bump: u8,
    amount: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[CUSTODY_SEED, ledger.as_ref(), &[custody_bump]]];
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program,
            Transfer {
                from: custody,
                to: recipient,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// A deposit must be non-zero, and one that brings custody into existence must
/// cover the rent-exempt `reserve` of a zero-data account.
pub fn check_deposit(balance: u64, amount: u64, reserve: u64) -> std::result::Result<(), VestingError> {
    if amount == 0 {
        return Err(VestingError::InvalidAmount);
    }
    if balance == 0 && amount < reserve {
        return Err(VestingError::DepositBelowRentReserve);
    }
    Ok(())
}

/// Move `amount` lamports from a signing `funder` into custody.
pub fn deposit<'info>(
    system_program: AccountInfo<'info>,
    funder: AccountInfo<'info>,
    custody: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program,
            Transfer {
                from: funder,
                to: custody,
            },
        ),
        amount,
    )
}
