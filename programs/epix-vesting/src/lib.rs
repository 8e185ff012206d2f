use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("J48Dfm4HoRMzbameyoTGVTmg26GGATeCkjRWXGdeMiaB");

/// EPIX claim ledger: linear vesting of native-lamport allocations from a
/// program-owned custody, plus the bizdev allocation with its pausable,
/// claw-back-able bonus.
#[program]
pub mod epix_vesting {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        bizdev: Pubkey,
        bizdev_amount: u64,
        bizdev_bonus: u64,
        vesting_period: i64,
    ) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(
            ctx,
            bizdev,
            bizdev_amount,
            bizdev_bonus,
            vesting_period,
        )
    }

    pub fn add_allocation(ctx: Context<AddAllocation>, beneficiary: Pubkey, amount: u64) -> Result<()> {
        instructions::add_allocation::add_allocation(ctx, beneficiary, amount)
    }

    pub fn add_allocations_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, AddAllocationsBatch<'info>>,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<BatchReport> {
        instructions::add_allocations_batch::add_allocations_batch(ctx, beneficiaries, amounts)
    }

    pub fn fund_custody(ctx: Context<FundCustody>, amount: u64) -> Result<()> {
        instructions::fund_custody::fund_custody(ctx, amount)
    }

    pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
        instructions::start_vesting::start_vesting(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn claim_bizdev(ctx: Context<ClaimBizdev>) -> Result<()> {
        instructions::claim_bizdev::claim_bizdev(ctx)
    }

    pub fn claim_bizdev_bonus(ctx: Context<ClaimBizdevBonus>) -> Result<()> {
        instructions::claim_bizdev_bonus::claim_bizdev_bonus(ctx)
    }

    pub fn unlock_bizdev_bonus(ctx: Context<UnlockBizdevBonus>) -> Result<()> {
        instructions::unlock_bizdev_bonus::unlock_bizdev_bonus(ctx)
    }

    pub fn pause_bizdev_claiming(ctx: Context<PauseBizdevClaiming>) -> Result<()> {
        instructions::pause_bizdev_claiming::pause_bizdev_claiming(ctx)
    }

    pub fn resume_bizdev_claiming(ctx: Context<ResumeBizdevClaiming>) -> Result<()> {
        instructions::resume_bizdev_claiming::resume_bizdev_claiming(ctx)
    }

    pub fn claw_back_bizdev_remaining(ctx: Context<ClawBackBizdevRemaining>) -> Result<u64> {
        instructions::claw_back_bizdev_remaining::claw_back_bizdev_remaining(ctx)
    }

    pub fn claw_back_bizdev_bonus(ctx: Context<ClawBackBizdevBonus>) -> Result<u64> {
        instructions::claw_back_bizdev_bonus::claw_back_bizdev_bonus(ctx)
    }

    pub fn get_allocation(ctx: Context<AllocationLookup>, beneficiary: Pubkey) -> Result<AllocationView> {
        instructions::queries::get_allocation(ctx, beneficiary)
    }

    pub fn get_claimable_amount(ctx: Context<AllocationLookup>, beneficiary: Pubkey) -> Result<u64> {
        instructions::queries::get_claimable_amount(ctx, beneficiary)
    }

    pub fn get_bizdev_claimable_amount(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::queries::get_bizdev_claimable_amount(ctx)
    }

    pub fn get_bizdev_allocation(ctx: Context<LedgerView>) -> Result<BizdevAllocationView> {
        instructions::queries::get_bizdev_allocation(ctx)
    }

    pub fn get_global_stats(ctx: Context<LedgerView>) -> Result<GlobalStatsView> {
        instructions::queries::get_global_stats(ctx)
    }

    pub fn get_vesting_schedule(ctx: Context<LedgerView>) -> Result<VestingScheduleView> {
        instructions::queries::get_vesting_schedule(ctx)
    }

    pub fn get_custody_status(ctx: Context<CustodyView>) -> Result<CustodyStatus> {
        instructions::queries::get_custody_status(ctx)
    }
}
