use anchor_lang::prelude::Pubkey;
use epix_vesting::error::VestingError;
use epix_vesting::constants::MAX_BATCH_ALLOCATIONS;
use epix_vesting::state::{Allocation, AllocationBatch, BatchReport, EntryOutcome, Ledger};
use epix_vesting::utils::digest::BatchDigest;

const EPIX: u64 = 1_000_000_000;
const T0: i64 = 1_750_000_000;
const PERIOD: i64 = 60;
/// Plenty of custody for every scenario that isn't about funding.
const FUNDED: u64 = 1_000 * EPIX;

fn admin() -> Pubkey {
    Pubkey::new_from_array([1; 32])
}

fn bizdev() -> Pubkey {
    Pubkey::new_from_array([2; 32])
}

fn user(n: u8) -> Pubkey {
    Pubkey::new_from_array([10 + n; 32])
}

fn ledger() -> Ledger {
    let mut l = Ledger::default();
    l.initialize(admin(), bizdev(), 15 * EPIX, 5 * EPIX, PERIOD, 254, 253)
        .unwrap();
    l
}

/// Admit and materialize an allocation the way the handler does.
fn allocate(l: &mut Ledger, who: Pubkey, amount: u64) -> Allocation {
    l.admit_allocation(&admin(), &who, amount, false).unwrap();
    Allocation::new(Pubkey::new_from_array([7; 32]), who, amount, 255)
}

/// Run a batch the way the handler does: an entry's account exists once an
/// earlier transaction, or an earlier entry of this batch, created it.
fn run_batch(
    l: &mut Ledger,
    created: &mut Vec<Pubkey>,
    beneficiaries: &[Pubkey],
    amounts: &[u64],
) -> Result<(BatchReport, [u8; 32]), VestingError> {
    let mut batch = AllocationBatch::new(beneficiaries, amounts)?;
    for i in 0..batch.len() {
        let (who, _) = batch.entry(i);
        let exists = created.contains(&who);
        if batch.admit(l, &admin(), i, exists)? == EntryOutcome::Added {
            created.push(who);
        }
    }
    Ok(batch.finish())
}

#[test]
fn user_claims_a_quarter_then_the_rest() {
    let mut l = ledger();
    let mut a = allocate(&mut l, user(1), EPIX);
    l.start_vesting(&admin(), T0, FUNDED).unwrap();

    let t = T0 + 15;
    assert_eq!(l.claimable_amount(&user(1), Some(&a), t).unwrap(), EPIX / 4);
    assert_eq!(l.claim(&user(1), Some(&mut a), t, FUNDED).unwrap(), EPIX / 4);
    assert_eq!(a.claimed_amount, EPIX / 4);
    assert_eq!(l.stats.total_times_claimed, 1);

    let t = T0 + 61;
    assert_eq!(l.claimable_amount(&user(1), Some(&a), t).unwrap(), 3 * EPIX / 4);
    l.claim(&user(1), Some(&mut a), t, FUNDED).unwrap();
    assert_eq!(a.claimed_amount, EPIX);
    assert!(matches!(
        l.claim(&user(1), Some(&mut a), t, FUNDED),
        Err(VestingError::NothingToClaim)
    ));
    assert_eq!(l.stats.total_times_claimed, 2);
}

#[test]
fn bizdev_bonus_pays_once() {
    let mut l = ledger();
    assert!(matches!(
        l.claim_bizdev_bonus(&bizdev(), FUNDED),
        Err(VestingError::BonusLocked)
    ));
    assert!(l.unlock_bizdev_bonus(&admin()).unwrap());

    assert_eq!(l.claim_bizdev_bonus(&bizdev(), FUNDED).unwrap(), 5 * EPIX);
    assert_eq!(l.bizdev.bonus_amount, 0);
    assert_eq!(l.bizdev.claimed_amount, 5 * EPIX);
    assert!(matches!(
        l.claim_bizdev_bonus(&bizdev(), FUNDED),
        Err(VestingError::BonusAlreadyClaimed)
    ));

    let stats = l.stats.view();
    assert_eq!(stats.total_allocated, 20 * EPIX);
    assert_eq!(stats.total_claimed, 5 * EPIX);
    assert_eq!(stats.total_times_claimed, 1);
}

#[test]
fn clawback_after_pause_takes_vested_portion() {
    let mut l = ledger();
    l.start_vesting(&admin(), T0, FUNDED).unwrap();

    let t = T0 + 15;
    l.pause_bizdev_claiming(&admin()).unwrap();
    let swept = l.claw_back_bizdev_remaining(&admin(), t, FUNDED).unwrap();
    assert_eq!(swept, 15 * EPIX / 4);
    assert_eq!(l.bizdev.claimed_amount, 15 * EPIX / 4);
    assert_eq!(l.stats.total_times_claimed, 0);

    assert!(matches!(
        l.claim(&bizdev(), None, t, FUNDED),
        Err(VestingError::NothingToClaim)
    ));
    assert!(matches!(
        l.claw_back_bizdev_remaining(&admin(), t, FUNDED),
        Err(VestingError::NothingToClaim)
    ));
}

#[test]
fn unvested_bizdev_tokens_vest_again_after_resume() {
    let mut l = ledger();
    l.start_vesting(&admin(), T0, FUNDED).unwrap();
    l.pause_bizdev_claiming(&admin()).unwrap();
    l.claw_back_bizdev_remaining(&admin(), T0 + 15, FUNDED).unwrap();
    l.resume_bizdev_claiming(&admin()).unwrap();

    let t = T0 + 30;
    assert_eq!(l.bizdev_claimable_amount(t).unwrap(), 15 * EPIX / 4);
    assert_eq!(l.claim_bizdev(&bizdev(), t, FUNDED).unwrap(), 15 * EPIX / 4);
    assert_eq!(l.bizdev.claimed_amount, 15 * EPIX / 2);
}

#[test]
fn pause_forces_zero_on_both_bizdev_paths() {
    let mut l = ledger();
    l.unlock_bizdev_bonus(&admin()).unwrap();
    l.start_vesting(&admin(), T0, FUNDED).unwrap();
    l.pause_bizdev_claiming(&admin()).unwrap();

    let t = T0 + PERIOD;
    assert_eq!(l.bizdev_claimable_amount(t).unwrap(), 0);
    assert_eq!(l.claimable_amount(&bizdev(), None, t).unwrap(), 0);
    assert!(matches!(
        l.claim_bizdev(&bizdev(), t, FUNDED),
        Err(VestingError::ClaimingPaused)
    ));
    assert!(matches!(
        l.claim_bizdev_bonus(&bizdev(), FUNDED),
        Err(VestingError::ClaimingPaused)
    ));
    assert!(matches!(
        l.claim(&bizdev(), None, t, FUNDED),
        Err(VestingError::NothingToClaim)
    ));
}

#[test]
fn bonus_clawback_reduces_allocated_supply() {
    let mut l = ledger();
    assert!(matches!(
        l.claw_back_bizdev_bonus(&admin(), FUNDED),
        Err(VestingError::NotPaused)
    ));
    l.pause_bizdev_claiming(&admin()).unwrap();
    assert_eq!(l.claw_back_bizdev_bonus(&admin(), FUNDED).unwrap(), 5 * EPIX);
    assert_eq!(l.stats.total_allocated, 15 * EPIX);
    assert_eq!(l.bizdev.original_bonus, 5 * EPIX);

    l.resume_bizdev_claiming(&admin()).unwrap();
    l.unlock_bizdev_bonus(&admin()).unwrap();
    assert_eq!(l.bizdev.bonus_amount, 0);
    assert!(matches!(
        l.claim_bizdev_bonus(&bizdev(), FUNDED),
        Err(VestingError::BonusAlreadyClaimed)
    ));
}

#[test]
fn allocations_are_unique_and_positive() {
    let mut l = ledger();
    allocate(&mut l, user(1), EPIX);
    assert!(matches!(
        l.admit_allocation(&admin(), &user(1), EPIX, true),
        Err(VestingError::DuplicateAllocation)
    ));
    assert!(matches!(
        l.admit_allocation(&admin(), &bizdev(), EPIX, false),
        Err(VestingError::DuplicateAllocation)
    ));
    assert!(matches!(
        l.admit_allocation(&admin(), &user(2), 0, false),
        Err(VestingError::InvalidAmount)
    ));
    assert_eq!(l.stats.total_users, 1);
    assert_eq!(l.stats.total_allocated, 21 * EPIX);
}

#[test]
fn admin_and_bizdev_operations_check_the_caller() {
    let mut l = ledger();
    let stranger = user(9);
    let before = l.stats;

    assert!(matches!(
        l.admit_allocation(&stranger, &user(1), EPIX, false),
        Err(VestingError::Unauthorized)
    ));
    assert!(matches!(
        l.start_vesting(&stranger, T0, FUNDED),
        Err(VestingError::Unauthorized)
    ));
    assert!(matches!(
        l.unlock_bizdev_bonus(&stranger),
        Err(VestingError::Unauthorized)
    ));
    assert!(matches!(
        l.pause_bizdev_claiming(&bizdev()),
        Err(VestingError::Unauthorized)
    ));
    assert!(matches!(
        l.claim_bizdev(&stranger, T0, FUNDED),
        Err(VestingError::Unauthorized)
    ));
    assert!(matches!(
        l.claim_bizdev_bonus(&admin(), FUNDED),
        Err(VestingError::Unauthorized)
    ));
    assert_eq!(l.stats, before);
    assert!(!l.bizdev.bonus_unlocked);
}

#[test]
fn start_requires_funded_custody_and_happens_once() {
    let mut l = ledger();
    allocate(&mut l, user(1), EPIX);
    let owed = l.outstanding();
    assert_eq!(owed, 21 * EPIX);

    assert!(matches!(
        l.start_vesting(&admin(), T0, owed - 1),
        Err(VestingError::InsufficientCustody)
    ));
    assert!(!l.schedule.started);

    l.start_vesting(&admin(), T0, owed).unwrap();
    assert_eq!(l.schedule.view().end_time, T0 + PERIOD);
    assert!(matches!(
        l.start_vesting(&admin(), T0 + 1, owed),
        Err(VestingError::AlreadyStarted)
    ));
    assert!(matches!(
        l.admit_allocation(&admin(), &user(2), EPIX, false),
        Ok(())
    ));
}

#[test]
fn claims_before_start_fail() {
    let mut l = ledger();
    let mut a = allocate(&mut l, user(1), EPIX);
    assert_eq!(l.claimable_amount(&user(1), Some(&a), T0).unwrap(), 0);
    assert!(matches!(
        l.claim(&user(1), Some(&mut a), T0, FUNDED),
        Err(VestingError::NotStarted)
    ));
    assert!(matches!(
        l.claim(&user(2), None, T0, FUNDED),
        Err(VestingError::NotStarted)
    ));
    assert!(matches!(
        l.claim_bizdev(&bizdev(), T0, FUNDED),
        Err(VestingError::NotStarted)
    ));

    l.start_vesting(&admin(), T0, FUNDED).unwrap();
    assert!(matches!(
        l.claim(&user(2), None, T0 + 10, FUNDED),
        Err(VestingError::NothingToClaim)
    ));
}

#[test]
fn short_custody_leaves_state_untouched() {
    let mut l = ledger();
    let mut a = allocate(&mut l, user(1), EPIX);
    l.start_vesting(&admin(), T0, FUNDED).unwrap();
    let before = l.stats;

    assert!(matches!(
        l.claim(&user(1), Some(&mut a), T0 + PERIOD, EPIX - 1),
        Err(VestingError::InsufficientCustody)
    ));
    assert_eq!(a.claimed_amount, 0);
    assert_eq!(l.stats, before);

    let status = l.custody_status(EPIX, EPIX - 1);
    assert_eq!(status.outstanding, 21 * EPIX);
    assert_eq!(status.shortfall, 20 * EPIX + 1);
}

#[test]
fn totals_stay_conserved_across_claims() {
    let mut l = ledger();
    let mut users: Vec<(Pubkey, Allocation)> = (1..=3u8)
        .map(|n| {
            let who = user(n);
            let a = allocate(&mut l, who, u64::from(n) * 7 * EPIX / 3);
            (who, a)
        })
        .collect();
    l.unlock_bizdev_bonus(&admin()).unwrap();
    l.start_vesting(&admin(), T0, FUNDED).unwrap();

    let mut last_claimed = 0;
    for step in [7, 19, 33, 59, 90] {
        let t = T0 + step;
        for (who, a) in users.iter_mut() {
            let before = a.claimed_amount;
            match l.claim(who, Some(&mut *a), t, FUNDED) {
                Ok(paid) => assert_eq!(a.claimed_amount, before + paid),
                Err(e) => assert!(matches!(e, VestingError::NothingToClaim)),
            }
            assert!(a.claimed_amount <= a.total_amount);
        }
        let _ = l.claim_bizdev(&bizdev(), t, FUNDED);
        if step == 33 {
            l.claim_bizdev_bonus(&bizdev(), FUNDED).unwrap();
        }

        let s = l.stats.view();
        let per_record: u64 =
            users.iter().map(|(_, a)| a.claimed_amount).sum::<u64>() + l.bizdev.claimed_amount;
        assert_eq!(s.total_claimed, per_record);
        assert!(s.total_claimed >= last_claimed);
        assert_eq!(s.remaining_claimable, s.total_allocated - s.total_claimed);
        last_claimed = s.total_claimed;
    }

    // Fully vested and fully claimed.
    assert_eq!(l.stats.remaining_claimable(), 0);
    assert_eq!(l.bizdev.claimed_amount, 20 * EPIX);
}

#[test]
fn skipped_entry_does_not_shadow_a_valid_repeat() {
    let mut l = ledger();
    let mut created = Vec::new();
    let (report, _) = run_batch(&mut l, &mut created, &[user(1), user(1)], &[0, 5]).unwrap();

    assert_eq!(
        report.outcomes,
        vec![EntryOutcome::InvalidAmount, EntryOutcome::Added]
    );
    assert_eq!(report.added_amount, 5);
    assert_eq!(created, vec![user(1)]);
    assert_eq!(l.stats.total_users, 1);
}

#[test]
fn mixed_batch_adds_only_fresh_positive_entries() {
    let mut l = ledger();
    let mut created = Vec::new();
    run_batch(&mut l, &mut created, &[user(1)], &[EPIX]).unwrap();

    let beneficiaries = [user(1), user(2), user(3), user(3), bizdev(), user(4)];
    let amounts = [EPIX, 0, 2 * EPIX, 3 * EPIX, EPIX, 4 * EPIX];
    let (report, digest) = run_batch(&mut l, &mut created, &beneficiaries, &amounts).unwrap();

    assert_eq!(
        report.outcomes,
        vec![
            EntryOutcome::Duplicate,
            EntryOutcome::InvalidAmount,
            EntryOutcome::Added,
            EntryOutcome::Duplicate,
            EntryOutcome::Duplicate,
            EntryOutcome::Added,
        ]
    );
    assert_eq!(report.added, 2);
    assert_eq!(report.added_amount, 6 * EPIX);
    assert_eq!(l.stats.total_users, 3);
    assert_eq!(l.stats.total_allocated, 20 * EPIX + 7 * EPIX);

    let mut expected = BatchDigest::new();
    expected.add(&user(3), 2 * EPIX);
    expected.add(&user(4), 4 * EPIX);
    assert_eq!(digest, expected.finalize());
}

#[test]
fn malformed_batches_abort_before_any_entry() {
    let mut l = ledger();
    let mut created = Vec::new();
    let before = l.stats;

    assert!(matches!(
        run_batch(&mut l, &mut created, &[], &[]),
        Err(VestingError::EmptyBatch)
    ));
    assert!(matches!(
        run_batch(&mut l, &mut created, &[user(1), user(2)], &[EPIX]),
        Err(VestingError::BatchLengthMismatch)
    ));
    let many: Vec<Pubkey> = (0..=MAX_BATCH_ALLOCATIONS as u8).map(user).collect();
    let amounts = vec![EPIX; many.len()];
    assert!(matches!(
        run_batch(&mut l, &mut created, &many, &amounts),
        Err(VestingError::BatchTooLarge)
    ));

    assert_eq!(l.stats, before);
    assert!(created.is_empty());
}

#[test]
fn batch_from_a_stranger_is_rejected() {
    let mut l = ledger();
    let beneficiaries = [user(1)];
    let mut batch = AllocationBatch::new(&beneficiaries, &[EPIX]).unwrap();
    assert!(matches!(
        batch.admit(&mut l, &user(9), 0, false),
        Err(VestingError::Unauthorized)
    ));
    assert_eq!(l.stats.total_users, 0);
}
