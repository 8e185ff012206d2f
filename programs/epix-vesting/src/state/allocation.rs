use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::VestingError;
use crate::state::record::VestingPosition;

/// Per-beneficiary allocation PDA: `["allocation", ledger, beneficiary]`.
///
/// Created once by the admin and never closed. `total_amount` never changes
/// after creation; `claimed_amount` only grows, up to `total_amount`.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Allocation {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub bump: u8,
}

impl Allocation {
    /// Space for discriminator + fields.
    pub const SPACE: usize = 8 + Allocation::INIT_SPACE;

    pub fn new(ledger: Pubkey, beneficiary: Pubkey, total_amount: u64, bump: u8) -> Self {
        Self {
            ledger,
            beneficiary,
            total_amount,
            claimed_amount: 0,
            bump,
        }
    }

    pub fn vesting_position(&self) -> VestingPosition {
        VestingPosition {
            total: self.total_amount,
            claimed: self.claimed_amount,
            paused: false,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.claimed_amount)
    }

    pub(crate) fn add_claimed(&mut self, amount: u64) -> Result<(), VestingError> {
        let claimed = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.total_amount {
            return Err(VestingError::ClaimExceedsAllocation);
        }
        self.claimed_amount = claimed;
        Ok(())
    }

    pub fn view(&self) -> AllocationView {
        AllocationView {
            total_amount: self.total_amount,
            claimed_amount: self.claimed_amount,
            exists: true,
        }
    }
}

/// Return data of `get_allocation`. All-zero with `exists = false` for an
/// address that was never allocated.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocationView {
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub exists: bool,
}

/// Per-entry result of `add_allocations_batch`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    Added,
    Duplicate,
    InvalidAmount,
}

/// Return data of `add_allocations_batch`, in input order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<EntryOutcome>,
    pub added: u32,
    pub added_amount: u64,
}

impl BatchReport {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Record one entry. Errors other than the per-entry rejections abort
    /// the batch.
    pub fn push(&mut self, amount: u64, result: Result<(), VestingError>) -> Result<EntryOutcome, VestingError> {
        let outcome = match result {
            Ok(()) => {
                self.added = self.added.checked_add(1).ok_or(VestingError::MathOverflow)?;
                self.added_amount = self
                    .added_amount
                    .checked_add(amount)
                    .ok_or(VestingError::MathOverflow)?;
                EntryOutcome::Added
            }
            Err(VestingError::DuplicateAllocation) => EntryOutcome::Duplicate,
            Err(VestingError::InvalidAmount) => EntryOutcome::InvalidAmount,
            Err(e) => return Err(e),
        };
        self.outcomes.push(outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claimed_never_exceeds_total() {
        let mut a = Allocation::new(Pubkey::new_from_array([1; 32]), Pubkey::new_from_array([2; 32]), 100, 255);
        a.add_claimed(60).unwrap();
        assert!(matches!(a.add_claimed(41), Err(VestingError::ClaimExceedsAllocation)));
        assert_eq!(a.claimed_amount, 60);
        assert_eq!(a.remaining(), 40);
    }

    #[test]
    fn report_tracks_outcomes_in_order() {
        let mut r = BatchReport::with_capacity(3);
        r.push(5, Ok(())).unwrap();
        r.push(0, Err(VestingError::InvalidAmount)).unwrap();
        r.push(7, Err(VestingError::DuplicateAllocation)).unwrap();
        assert_eq!(
            r.outcomes,
            vec![EntryOutcome::Added, EntryOutcome::InvalidAmount, EntryOutcome::Duplicate]
        );
        assert_eq!(r.added, 1);
        assert_eq!(r.added_amount, 5);

        assert!(matches!(
            r.push(1, Err(VestingError::MathOverflow)),
            Err(VestingError::MathOverflow)
        ));
    }
}
