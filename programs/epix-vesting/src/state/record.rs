use crate::error::VestingError;
use crate::state::{Allocation, BizdevAllocation, GlobalStats, VestingSchedule};

/// The inputs of the vesting formula for one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingPosition {
    pub total: u64,
    /// Claimed against the schedule (excludes any bizdev bonus).
    pub claimed: u64,
    /// Paused records have nothing claimable regardless of elapsed time.
    pub paused: bool,
}

impl VestingPosition {
    pub fn claimable(&self, schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
        if self.paused {
            return Ok(0);
        }
        schedule.claimable(self.total, self.claimed, now)
    }
}

/// A record that can be claimed against the shared vesting schedule.
pub enum ClaimableRecord<'a> {
    Regular(&'a mut Allocation),
    Bizdev(&'a mut BizdevAllocation),
}

impl ClaimableRecord<'_> {
    pub fn position(&self) -> VestingPosition {
        match self {
            ClaimableRecord::Regular(a) => a.vesting_position(),
            ClaimableRecord::Bizdev(b) => b.vesting_position(),
        }
    }

    /// Pay out everything vested and unclaimed at `now`.
    ///
    /// Validates before mutating: on error neither the record nor `stats`
    /// has changed.
    pub fn settle(
        &mut self,
        schedule: &VestingSchedule,
        stats: &mut GlobalStats,
        now: i64,
        custody_available: u64,
    ) -> Result<u64, VestingError> {
        if !schedule.started {
            return Err(VestingError::NotStarted);
        }
        let amount = self.position().claimable(schedule, now)?;
        if amount == 0 {
            return Err(VestingError::NothingToClaim);
        }
        if amount > custody_available {
            return Err(VestingError::InsufficientCustody);
        }

        let mut staged = *stats;
        staged.record_claim(amount)?;
        match self {
            ClaimableRecord::Regular(a) => a.add_claimed(amount)?,
            ClaimableRecord::Bizdev(b) => b.add_base_claimed(amount)?,
        }
        *stats = staged;
        Ok(amount)
    }
}
