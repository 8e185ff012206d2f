use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::VestingError;
use crate::state::{
    Allocation, BizdevAllocation, ClaimableRecord, GlobalStats, VestingSchedule,
};

/// Singleton ledger PDA: `["ledger"]`.
///
/// Every operation takes the caller, the current time and the custody balance
/// as explicit inputs and either commits all of its changes or none.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Ledger {
    /// Sole administrative identity.
    pub admin: Pubkey,
    pub schedule: VestingSchedule,
    pub bizdev: BizdevAllocation,
    pub stats: GlobalStats,
    pub bump: u8,
    pub custody_bump: u8,
}

impl Ledger {
    /// Space for discriminator + fields.
    pub const SPACE: usize = 8 + Ledger::INIT_SPACE;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        bizdev_address: Pubkey,
        bizdev_amount: u64,
        bizdev_bonus: u64,
        period: i64,
        bump: u8,
        custody_bump: u8,
    ) -> Result<(), VestingError> {
        if bizdev_address == Pubkey::default() || bizdev_address == admin {
            return Err(VestingError::InvalidConfig);
        }
        if bizdev_amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        let schedule = VestingSchedule::new(period)?;
        let mut stats = GlobalStats::default();
        stats.seed_bizdev(bizdev_amount, bizdev_bonus)?;

        *self = Ledger {
            admin,
            schedule,
            bizdev: BizdevAllocation::new(bizdev_address, bizdev_amount, bizdev_bonus),
            stats,
            bump,
            custody_bump,
        };
        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    fn ensure_bizdev(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.bizdev.address {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Account for a new regular allocation. `exists` reports whether the
    /// beneficiary's allocation account is already initialized.
    pub fn admit_allocation(
        &mut self,
        caller: &Pubkey,
        beneficiary: &Pubkey,
        amount: u64,
        exists: bool,
    ) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        if exists || *beneficiary == self.bizdev.address {
            return Err(VestingError::DuplicateAllocation);
        }
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        self.stats.record_allocation(amount)
    }

    /// Start vesting at `now`. Custody must already cover every outstanding
    /// allocation.
    pub fn start_vesting(
        &mut self,
        caller: &Pubkey,
        now: i64,
        custody_available: u64,
    ) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        if self.schedule.started {
            return Err(VestingError::AlreadyStarted);
        }
        if custody_available < self.outstanding() {
            return Err(VestingError::InsufficientCustody);
        }
        self.schedule.start(now)
    }

    /// Claimable amount for `beneficiary`, routing the bizdev address to its
    /// base allocation.
    pub fn claimable_amount(
        &self,
        beneficiary: &Pubkey,
        allocation: Option<&Allocation>,
        now: i64,
    ) -> Result<u64, VestingError> {
        if *beneficiary == self.bizdev.address {
            return self.bizdev_claimable_amount(now);
        }
        match allocation {
            Some(a) => a.vesting_position().claimable(&self.schedule, now),
            None => Ok(0),
        }
    }

    pub fn bizdev_claimable_amount(&self, now: i64) -> Result<u64, VestingError> {
        self.bizdev.vesting_position().claimable(&self.schedule, now)
    }

    /// Regular claim entry point. The bizdev address claims its base
    /// allocation here; everyone else needs an allocation.
    pub fn claim(
        &mut self,
        claimant: &Pubkey,
        allocation: Option<&mut Allocation>,
        now: i64,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        let mut record = if *claimant == self.bizdev.address {
            ClaimableRecord::Bizdev(&mut self.bizdev)
        } else {
            match allocation {
                Some(a) => ClaimableRecord::Regular(a),
                None if self.schedule.started => return Err(VestingError::NothingToClaim),
                None => return Err(VestingError::NotStarted),
            }
        };
        record.settle(&self.schedule, &mut self.stats, now, custody_available)
    }

    pub fn claim_bizdev(
        &mut self,
        caller: &Pubkey,
        now: i64,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        self.ensure_bizdev(caller)?;
        if !self.schedule.started {
            return Err(VestingError::NotStarted);
        }
        if self.bizdev.is_paused {
            return Err(VestingError::ClaimingPaused);
        }
        ClaimableRecord::Bizdev(&mut self.bizdev).settle(
            &self.schedule,
            &mut self.stats,
            now,
            custody_available,
        )
    }

    pub fn claim_bizdev_bonus(
        &mut self,
        caller: &Pubkey,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        self.ensure_bizdev(caller)?;
        let bonus = self.bizdev.claimable_bonus()?;
        if bonus > custody_available {
            return Err(VestingError::InsufficientCustody);
        }
        let mut staged = self.stats;
        staged.record_claim(bonus)?;
        self.bizdev.pay_bonus()?;
        self.stats = staged;
        Ok(bonus)
    }

    /// Returns false when the bonus was already unlocked.
    pub fn unlock_bizdev_bonus(&mut self, caller: &Pubkey) -> Result<bool, VestingError> {
        self.ensure_admin(caller)?;
        Ok(self.bizdev.unlock_bonus())
    }

    pub fn pause_bizdev_claiming(&mut self, caller: &Pubkey) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        self.bizdev.pause()
    }

    pub fn resume_bizdev_claiming(&mut self, caller: &Pubkey) -> Result<(), VestingError> {
        self.ensure_admin(caller)?;
        self.bizdev.resume()
    }

    /// Sweep the bizdev base tokens vested by `now` but not yet claimed to the
    /// admin and mark them claimed. Unvested tokens stay in custody.
    pub fn claw_back_bizdev_remaining(
        &mut self,
        caller: &Pubkey,
        now: i64,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        self.ensure_admin(caller)?;
        if !self.bizdev.is_paused {
            return Err(VestingError::NotPaused);
        }
        let vested = self.schedule.vested(self.bizdev.total_amount, now)?;
        let amount = vested.saturating_sub(self.bizdev.base_claimed());
        if amount == 0 {
            return Err(VestingError::NothingToClaim);
        }
        if amount > custody_available {
            return Err(VestingError::InsufficientCustody);
        }
        let mut staged = self.stats;
        staged.record_vested_clawback(amount)?;
        self.bizdev.add_base_claimed(amount)?;
        self.stats = staged;
        Ok(amount)
    }

    /// Return the unpaid bonus to the admin. Terminal for the bonus.
    pub fn claw_back_bizdev_bonus(
        &mut self,
        caller: &Pubkey,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        self.ensure_admin(caller)?;
        let bonus = self.bizdev.reclaimable_bonus()?;
        if bonus > custody_available {
            return Err(VestingError::InsufficientCustody);
        }
        let mut staged = self.stats;
        staged.record_bonus_clawback(bonus)?;
        self.bizdev.forfeit_bonus()?;
        self.stats = staged;
        Ok(bonus)
    }

    /// Lamports custody still owes to allocations.
    pub fn outstanding(&self) -> u64 {
        self.stats.remaining_claimable()
    }

    pub fn custody_status(&self, balance: u64, available: u64) -> CustodyStatus {
        let outstanding = self.outstanding();
        CustodyStatus {
            balance,
            available,
            outstanding,
            shortfall: outstanding.saturating_sub(available),
        }
    }
}

/// Return data of `get_custody_status`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustodyStatus {
    /// Raw custody lamports.
    pub balance: u64,
    /// Balance above the rent-exempt reserve.
    pub available: u64,
    pub outstanding: u64,
    pub shortfall: u64,
}
