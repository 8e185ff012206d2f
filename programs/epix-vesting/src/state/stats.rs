use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::VestingError;

/// Running totals over every allocation in the ledger.
///
/// Updated in the same step as the ledger mutation they summarize, never by
/// a scan. `total_allocated - total_claimed` is the custody liability still
/// owed to beneficiaries.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct GlobalStats {
    pub total_allocated: u64,
    pub total_claimed: u64,
    /// Distinct regular allocations created.
    pub total_users: u64,
    /// Successful claim operations (regular, bizdev, bonus).
    pub total_times_claimed: u64,
}

impl GlobalStats {
    /// Seed with the bizdev base allocation and bonus. The bizdev record is
    /// not a regular user.
    pub fn seed_bizdev(&mut self, base: u64, bonus: u64) -> Result<(), VestingError> {
        self.total_allocated = base.checked_add(bonus).ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_allocation(&mut self, amount: u64) -> Result<(), VestingError> {
        let allocated = self
            .total_allocated
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let users = self
            .total_users
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        self.total_allocated = allocated;
        self.total_users = users;
        Ok(())
    }

    /// A payout to a beneficiary.
    pub fn record_claim(&mut self, amount: u64) -> Result<(), VestingError> {
        let claimed = self.checked_claimed(amount)?;
        let times = self
            .total_times_claimed
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        self.total_claimed = claimed;
        self.total_times_claimed = times;
        Ok(())
    }

    /// Vested bizdev tokens swept to the admin. They leave custody against the
    /// allocation, so they count as claimed, but not as a claim.
    pub fn record_vested_clawback(&mut self, amount: u64) -> Result<(), VestingError> {
        self.total_claimed = self.checked_claimed(amount)?;
        Ok(())
    }

    /// An unpaid bonus returned to the admin is no longer allocated.
    pub fn record_bonus_clawback(&mut self, amount: u64) -> Result<(), VestingError> {
        self.total_allocated = self
            .total_allocated
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn remaining_claimable(&self) -> u64 {
        // total_claimed <= total_allocated holds for every reachable state.
        self.total_allocated.saturating_sub(self.total_claimed)
    }

    pub fn view(&self) -> GlobalStatsView {
        GlobalStatsView {
            total_allocated: self.total_allocated,
            total_claimed: self.total_claimed,
            total_users: self.total_users,
            remaining_claimable: self.remaining_claimable(),
            total_times_claimed: self.total_times_claimed,
        }
    }

    fn checked_claimed(&self, amount: u64) -> Result<u64, VestingError> {
        let claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.total_allocated {
            return Err(VestingError::ClaimExceedsAllocation);
        }
        Ok(claimed)
    }
}

/// Return data of `get_global_stats`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalStatsView {
    pub total_allocated: u64,
    pub total_claimed: u64,
    pub total_users: u64,
    pub remaining_claimable: u64,
    pub total_times_claimed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_and_clawbacks_keep_remaining_consistent() {
        let mut s = GlobalStats::default();
        s.seed_bizdev(15, 5).unwrap();
        s.record_allocation(1).unwrap();
        s.record_allocation(2).unwrap();
        assert_eq!(s.total_users, 2);
        assert_eq!(s.remaining_claimable(), 23);

        s.record_claim(1).unwrap();
        s.record_vested_clawback(4).unwrap();
        s.record_bonus_clawback(5).unwrap();

        let v = s.view();
        assert_eq!(v.total_allocated, 18);
        assert_eq!(v.total_claimed, 5);
        assert_eq!(v.remaining_claimable, 13);
        assert_eq!(v.total_times_claimed, 1);
    }

    #[test]
    fn over_claim_is_rejected_without_mutation() {
        let mut s = GlobalStats::default();
        s.record_allocation(10).unwrap();
        assert!(matches!(s.record_claim(11), Err(VestingError::ClaimExceedsAllocation)));
        assert_eq!(s.total_claimed, 0);
        assert_eq!(s.total_times_claimed, 0);
    }
}
