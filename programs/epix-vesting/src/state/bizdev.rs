use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::VestingError;
use crate::state::record::VestingPosition;

/// The singleton business-development allocation, embedded in the ledger.
///
/// Base tokens vest on the shared schedule. The bonus sits outside the
/// schedule: it is paid in one piece once unlocked, or returned to the admin
/// by clawback, and either way `bonus_amount` drops to zero exactly once.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct BizdevAllocation {
    pub address: Pubkey,
    /// Base allocation vesting on the shared schedule.
    pub total_amount: u64,
    /// Base claims plus the bonus once paid.
    pub claimed_amount: u64,
    /// Unpaid bonus; `original_bonus` until paid or clawed back, then 0.
    pub bonus_amount: u64,
    pub original_bonus: u64,
    /// Bonus paid to `address` (0 or `original_bonus`).
    pub bonus_paid: u64,
    pub bonus_unlocked: bool,
    pub is_paused: bool,
}

impl BizdevAllocation {
    pub fn new(address: Pubkey, total_amount: u64, bonus: u64) -> Self {
        Self {
            address,
            total_amount,
            claimed_amount: 0,
            bonus_amount: bonus,
            original_bonus: bonus,
            bonus_paid: 0,
            bonus_unlocked: false,
            is_paused: false,
        }
    }

    /// Portion of `claimed_amount` drawn against the vesting schedule.
    pub fn base_claimed(&self) -> u64 {
        self.claimed_amount.saturating_sub(self.bonus_paid)
    }

    pub fn vesting_position(&self) -> VestingPosition {
        VestingPosition {
            total: self.total_amount,
            claimed: self.base_claimed(),
            paused: self.is_paused,
        }
    }

    /// Returns false if the bonus was already unlocked (no-op).
    pub fn unlock_bonus(&mut self) -> bool {
        if self.bonus_unlocked {
            return false;
        }
        self.bonus_unlocked = true;
        true
    }

    pub fn pause(&mut self) -> Result<(), VestingError> {
        if self.is_paused {
            return Err(VestingError::ClaimingPaused);
        }
        self.is_paused = true;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), VestingError> {
        if !self.is_paused {
            return Err(VestingError::NotPaused);
        }
        self.is_paused = false;
        Ok(())
    }

    /// Bonus the bizdev address may claim right now.
    pub fn claimable_bonus(&self) -> Result<u64, VestingError> {
        if !self.bonus_unlocked {
            return Err(VestingError::BonusLocked);
        }
        if self.bonus_amount == 0 {
            return Err(VestingError::BonusAlreadyClaimed);
        }
        if self.is_paused {
            return Err(VestingError::ClaimingPaused);
        }
        Ok(self.bonus_amount)
    }

    /// Bonus the admin may claw back right now.
    pub fn reclaimable_bonus(&self) -> Result<u64, VestingError> {
        if !self.is_paused {
            return Err(VestingError::NotPaused);
        }
        if self.bonus_amount == 0 {
            return Err(VestingError::BonusAlreadyClaimed);
        }
        Ok(self.bonus_amount)
    }

    pub(crate) fn add_base_claimed(&mut self, amount: u64) -> Result<(), VestingError> {
        let base = self
            .base_claimed()
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if base > self.total_amount {
            return Err(VestingError::ClaimExceedsAllocation);
        }
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub(crate) fn pay_bonus(&mut self) -> Result<u64, VestingError> {
        let bonus = self.claimable_bonus()?;
        let claimed = self
            .claimed_amount
            .checked_add(bonus)
            .ok_or(VestingError::MathOverflow)?;
        self.claimed_amount = claimed;
        self.bonus_paid = bonus;
        self.bonus_amount = 0;
        Ok(bonus)
    }

    pub(crate) fn forfeit_bonus(&mut self) -> Result<u64, VestingError> {
        let bonus = self.reclaimable_bonus()?;
        self.bonus_amount = 0;
        Ok(bonus)
    }

    pub fn view(&self) -> BizdevAllocationView {
        BizdevAllocationView {
            address: self.address,
            total_amount: self.total_amount,
            claimed_amount: self.claimed_amount,
            bonus_amount: self.bonus_amount,
            bonus_unlocked: self.bonus_unlocked,
            is_paused: self.is_paused,
            original_bonus: self.original_bonus,
        }
    }
}

/// Return data of `get_bizdev_allocation`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BizdevAllocationView {
    pub address: Pubkey,
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub bonus_amount: u64,
    pub bonus_unlocked: bool,
    pub is_paused: bool,
    pub original_bonus: u64,
}
