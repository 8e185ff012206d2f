use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::VestingError;
use crate::utils::vesting;

/// Process-wide vesting configuration, embedded in the ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct VestingSchedule {
    /// First claim-eligible timestamp (Unix seconds). 0 until started.
    pub start_time: i64,
    /// Seconds over which every allocation vests linearly to 100%.
    pub period: i64,
    /// One-way latch.
    pub started: bool,
}

impl VestingSchedule {
    pub fn new(period: i64) -> Result<Self, VestingError> {
        if period <= 0 {
            return Err(VestingError::InvalidPeriod);
        }
        Ok(Self {
            start_time: 0,
            period,
            started: false,
        })
    }

    pub fn start(&mut self, now: i64) -> Result<(), VestingError> {
        if self.started {
            return Err(VestingError::AlreadyStarted);
        }
        self.start_time = now;
        self.started = true;
        Ok(())
    }

    /// Amount of `total` vested at `now`; zero before the schedule starts.
    pub fn vested(&self, total: u64, now: i64) -> Result<u64, VestingError> {
        if !self.started {
            return Ok(0);
        }
        vesting::vested_amount(total, self.start_time, self.period, now)
    }

    pub fn claimable(&self, total: u64, claimed: u64, now: i64) -> Result<u64, VestingError> {
        if !self.started {
            return Ok(0);
        }
        vesting::claimable_amount(total, claimed, self.start_time, self.period, now)
    }

    /// Timestamp at which every allocation is fully vested.
    pub fn end_time(&self) -> Option<i64> {
        if !self.started {
            return None;
        }
        self.start_time.checked_add(self.period)
    }

    pub fn view(&self) -> VestingScheduleView {
        VestingScheduleView {
            started: self.started,
            start_time: self.start_time,
            period: self.period,
            end_time: self.end_time().unwrap_or(0),
        }
    }
}

/// Return data of `get_vesting_schedule`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingScheduleView {
    pub started: bool,
    pub start_time: i64,
    pub period: i64,
    /// 0 while not started.
    pub end_time: i64,
}
