//! Digest of the allocations a batch actually added.
//!
//! blake3 over fixed 40-byte leaves `beneficiary (32) || amount (u64 LE)`, in
//! batch order, behind a domain tag. An off-chain loader recomputes it from
//! the entries reported `Added` to reconcile its input file.

use anchor_lang::prelude::Pubkey;
use bytemuck::{Pod, Zeroable};

const DOMAIN: &[u8] = b"epix-vesting/allocation-batch/v1";

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct AllocationLeaf {
    beneficiary: [u8; 32],
    amount: [u8; 8],
}

pub struct BatchDigest(blake3::Hasher);

impl Default for BatchDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchDigest {
    pub fn new() -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN);
        Self(hasher)
    }

    pub fn add(&mut self, beneficiary: &Pubkey, amount: u64) {
        let leaf = AllocationLeaf {
            beneficiary: beneficiary.to_bytes(),
            amount: amount.to_le_bytes(),
        };
        self.0.update(bytemuck::bytes_of(&leaf));
    }

    pub fn finalize(&self) -> [u8; 32] {
        *self.0.finalize().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_manual_leaf_encoding() {
        let a = Pubkey::new_from_array([1; 32]);
        let mut d = BatchDigest::new();
        d.add(&a, 42);

        let mut expected = blake3::Hasher::new();
        expected.update(DOMAIN);
        expected.update(&[1u8; 32]);
        expected.update(&42u64.to_le_bytes());
        assert_eq!(d.finalize(), *expected.finalize().as_bytes());
    }

    #[test]
    fn order_sensitive() {
        let a = Pubkey::new_from_array([1; 32]);
        let b = Pubkey::new_from_array([2; 32]);

        let mut ab = BatchDigest::new();
        ab.add(&a, 1);
        ab.add(&b, 2);
        let mut ba = BatchDigest::new();
        ba.add(&b, 2);
        ba.add(&a, 1);

        assert_ne!(ab.finalize(), ba.finalize());
    }

    #[test]
    fn leaf_is_forty_bytes() {
        assert_eq!(core::mem::size_of::<AllocationLeaf>(), 40);
    }
}
