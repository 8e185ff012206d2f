//! Linear vesting math.
//!
//! vested(t)    = total                                  if t - start >= period
//!              = floor(total * (t - start) / period)    otherwise
//! claimable(t) = max(vested(t) - claimed, 0)
//!
//! Pure functions of their arguments; `now` is always supplied by the caller.
//! A `now` earlier than `start_time` counts as zero elapsed time.

use crate::error::VestingError;

/// Amount of `total` vested at `now` for a schedule starting at `start_time`.
pub fn vested_amount(
    total: u64,
    start_time: i64,
    period: i64,
    now: i64,
) -> Result<u64, VestingError> {
    if period <= 0 {
        return Err(VestingError::InvalidPeriod);
    }
    let elapsed = now.saturating_sub(start_time).max(0);
    if elapsed >= period {
        return Ok(total);
    }
    let v = (total as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / (period as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Vested-but-unclaimed amount, clamped at zero.
pub fn claimable_amount(
    total: u64,
    claimed: u64,
    start_time: i64,
    period: i64,
    now: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(total, start_time, period, now)?;
    Ok(vested.saturating_sub(claimed))
}
