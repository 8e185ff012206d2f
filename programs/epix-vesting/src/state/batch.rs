use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_ALLOCATIONS;
use std::result::Result;

use crate::error::VestingError;
use crate::state::{BatchReport, EntryOutcome, Ledger};
use crate::utils::digest::BatchDigest;

/// A validated `add_allocations_batch` request, admitted entry by entry.
///
/// Only entries that were actually added count as taken for later entries
/// of the same batch, so a skipped entry never shadows a valid repeat.
pub struct AllocationBatch<'a> {
    beneficiaries: &'a [Pubkey],
    amounts: &'a [u64],
    report: BatchReport,
    digest: BatchDigest,
}

impl<'a> AllocationBatch<'a> {
    pub fn new(beneficiaries: &'a [Pubkey], amounts: &'a [u64]) -> Result<Self, VestingError> {
        if beneficiaries.is_empty() {
            return Err(VestingError::EmptyBatch);
        }
        if beneficiaries.len() != amounts.len() {
            return Err(VestingError::BatchLengthMismatch);
        }
        if beneficiaries.len() > MAX_BATCH_ALLOCATIONS {
            return Err(VestingError::BatchTooLarge);
        }
        Ok(Self {
            beneficiaries,
            amounts,
            report: BatchReport::with_capacity(beneficiaries.len()),
            digest: BatchDigest::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.beneficiaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty()
    }

    pub fn entry(&self, index: usize) -> (Pubkey, u64) {
        (self.beneficiaries[index], self.amounts[index])
    }

    /// Decide entry `index`. `exists` reports whether the beneficiary's
    /// allocation account is already initialized.
    pub fn admit(
        &mut self,
        ledger: &mut Ledger,
        caller: &Pubkey,
        index: usize,
        exists: bool,
    ) -> Result<EntryOutcome, VestingError> {
        let (beneficiary, amount) = self.entry(index);
        let taken = exists || self.added_earlier(index, &beneficiary);
        let admitted = ledger.admit_allocation(caller, &beneficiary, amount, taken);
        let outcome = self.report.push(amount, admitted)?;
        if outcome == EntryOutcome::Added {
            self.digest.add(&beneficiary, amount);
        }
        Ok(outcome)
    }

    fn added_earlier(&self, index: usize, beneficiary: &Pubkey) -> bool {
        self.beneficiaries[..index]
            .iter()
            .zip(&self.report.outcomes)
            .any(|(b, o)| b == beneficiary && *o == EntryOutcome::Added)
    }

    pub fn finish(self) -> (BatchReport, [u8; 32]) {
        let digest = self.digest.finalize();
        (self.report, digest)
    }
}
