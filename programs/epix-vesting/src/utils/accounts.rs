//! Allocation PDAs are created in-handler rather than with `init` so that an
//! existing allocation surfaces as `DuplicateAllocation` and a batch can skip
//! it instead of failing the transaction.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::ALLOCATION_SEED;
use crate::state::Allocation;

/// True once this program owns the account and has written it.
pub fn is_initialized(info: &AccountInfo) -> bool {
    info.owner == &crate::ID && !info.data_is_empty()
}

pub fn load_allocation(info: &AccountInfo) -> Result<Option<Allocation>> {
    if !is_initialized(info) {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    Ok(Some(Allocation::try_deserialize(&mut bytes)?))
}

pub fn store_allocation(info: &AccountInfo, allocation: &Allocation) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    allocation.try_serialize(&mut writer)
}

/// Create and write the allocation PDA for `beneficiary`.
pub fn open_allocation<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    ledger: Pubkey,
    beneficiary: Pubkey,
    amount: u64,
    bump: u8,
) -> Result<()> {
    let signer_seeds: &[&[u8]] = &[
        ALLOCATION_SEED,
        ledger.as_ref(),
        beneficiary.as_ref(),
        &[bump],
    ];
    create_program_account(payer, target, system_program, Allocation::SPACE, signer_seeds)?;
    store_allocation(target, &Allocation::new(ledger, beneficiary, amount, bump))
}

/// Rent-exempt PDA creation owned by this program. Mirrors what `init`
/// expands to, including the case where someone pre-funded the address.
fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                &[signer_seeds],
            ),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            &[signer_seeds],
        ),
        &crate::ID,
    )
}
