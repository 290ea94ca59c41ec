use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Individual claim account
 *
 * Entitles `beneficiary` to withdraw `amount` of `token` once approved.
 *
 * Derivation: ["claim", ledger_key, beneficiary, claim_id]
 *
 * Lifecycle:
 * 1. Created unapproved by a whitelisted issuer
 * 2. Approval toggled by the administrator, any number of times
 * 3. Amount set to zero exactly once, on payout or removal
 * 4. Never closed, the id is burnt for good
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Sequential id, part of the PDA seeds
    pub claim_id: u64,
    /// Account entitled to the claim
    pub beneficiary: Pubkey,
    /// Token mint the claim is denominated in
    pub token: Pubkey,
    /// Outstanding amount, zero once paid or removed
    pub amount: u64,
    /// Set by the administrator before the claim becomes payable
    pub approved: bool,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + id + beneficiary + token + amount + approved + bump
    pub const LEN: usize = 8 + 8 + 32 + 32 + 8 + 1 + 1;

    /// Amount a claim call would pay right now
    pub fn claimable(&self) -> u64 {
        if self.approved {
            self.amount
        } else {
            0
        }
    }
}

/**
 * Claim store
 *
 * The claim records one call works on, keyed by claim id. On chain it holds
 * only the claim accounts passed to the instruction; in tests it can hold a
 * whole ledger.
 *
 * Claims are addressed by (beneficiary, claim_id). A record that belongs to
 * another beneficiary resolves to nothing, the same as an id that was never
 * allocated.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimStore {
    /// Records sorted by claim id
    pub claims: Vec<ClaimRecord>,
}

impl ClaimStore {
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    fn search(&self, claim_id: u64) -> std::result::Result<usize, usize> {
        self.claims.binary_search_by_key(&claim_id, |record| record.claim_id)
    }

    /// Adds a record, keeping the first copy when the id is already present
    pub fn insert(&mut self, record: ClaimRecord) {
        if let Err(index) = self.search(record.claim_id) {
            self.claims.insert(index, record);
        }
    }

    /// Stores a new unapproved claim under `claim_id`
    pub fn create(&mut self, claim_id: u64, beneficiary: Pubkey, token: Pubkey, amount: u64) {
        self.insert(ClaimRecord {
            claim_id,
            beneficiary,
            token,
            amount,
            approved: false,
            bump: 0,
        });
    }

    /// Record for `claim_id` regardless of its beneficiary
    pub fn record(&self, claim_id: u64) -> Option<&ClaimRecord> {
        self.search(claim_id).ok().map(|index| &self.claims[index])
    }

    /// Record for `claim_id` if it belongs to `beneficiary`
    pub fn get(&self, beneficiary: &Pubkey, claim_id: u64) -> Option<&ClaimRecord> {
        self.record(claim_id)
            .filter(|record| record.beneficiary == *beneficiary)
    }

    pub fn get_mut(&mut self, beneficiary: &Pubkey, claim_id: u64) -> Option<&mut ClaimRecord> {
        let index = self.search(claim_id).ok()?;
        Some(&mut self.claims[index]).filter(|record| record.beneficiary == *beneficiary)
    }

    /// Sets the approval flag. Returns false when the target does not resolve.
    pub fn set_approved(&mut self, beneficiary: &Pubkey, claim_id: u64, approved: bool) -> bool {
        match self.get_mut(beneficiary, claim_id) {
            Some(record) => {
                record.approved = approved;
                true
            }
            None => false,
        }
    }

    /// Zeros the outstanding amount and returns what it was, `None` when the
    /// target does not resolve
    pub fn zero_amount(&mut self, beneficiary: &Pubkey, claim_id: u64) -> Option<u64> {
        self.get_mut(beneficiary, claim_id)
            .map(|record| std::mem::take(&mut record.amount))
    }

    /// Puts back an amount taken by `zero_amount`, used to undo a failed call
    pub fn restore_amount(&mut self, claim_id: u64, amount: u64) {
        if let Ok(index) = self.search(claim_id) {
            self.claims[index].amount = amount;
        }
    }

    /// Amount `beneficiary` could claim from `claim_id` right now
    pub fn claimable(&self, beneficiary: &Pubkey, claim_id: u64) -> u64 {
        self.get(beneficiary, claim_id)
            .map(ClaimRecord::claimable)
            .unwrap_or(0)
    }

    /// Claimable amount of each id, in input order. Unknown, foreign, removed
    /// and unapproved claims contribute 0.
    pub fn claimable_for_ids(&self, beneficiary: &Pubkey, claim_ids: &[u64]) -> Vec<u64> {
        claim_ids
            .iter()
            .map(|claim_id| self.claimable(beneficiary, *claim_id))
            .collect()
    }

    /// Total a claim call over `claim_ids` would pay right now, optionally
    /// restricted to one token. Repeated ids are counted once.
    pub fn claimable_for_user(
        &self,
        beneficiary: &Pubkey,
        claim_ids: &[u64],
        token: Option<&Pubkey>,
    ) -> Result<u64> {
        let mut unique_ids = claim_ids.to_vec();
        unique_ids.sort_unstable();
        unique_ids.dedup();

        unique_ids
            .into_iter()
            .filter_map(|claim_id| self.get(beneficiary, claim_id))
            .filter(|record| token.map_or(true, |token| record.token == *token))
            .try_fold(0u64, |total, record| {
                total
                    .checked_add(record.claimable())
                    .ok_or_else(|| error!(ClaimLedgerError::ArithmeticOverflow))
            })
    }
}
