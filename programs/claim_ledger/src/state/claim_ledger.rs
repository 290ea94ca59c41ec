use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::AccessRegistry;

/**
 * Claim ledger state account
 *
 * Holds the roles of one claim-distribution ledger and the claim id counter.
 * Claims and payout totals live in their own PDAs (see ClaimRecord and
 * PayoutTotal), so the size of this account does not depend on how many
 * claims the ledger has issued.
 *
 * Derivation: ["ledger", creator]
 *
 * Lifecycle:
 * 1. Created during initialize_ledger at its final size
 * 2. Counter advanced by every add_to_claims call
 * 3. Never closed: claim ids must stay unique for the life of the ledger
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimLedger {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when the ledger signs vault transfers
    pub bump: u8,

    /// Account that created the ledger
    /// - Part of the PDA seeds, never changes
    pub creator: Pubkey,

    /// Administrator and issuer whitelist
    pub registry: AccessRegistry,

    /// Id the next created claim will receive
    /// - Starts at FIRST_CLAIM_ID, only ever increases
    pub next_claim_id: u64,
}

impl ClaimLedger {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + bump + creator + registry at capacity + counter
    pub const LEN: usize = 8 + 1 + 32 + AccessRegistry::MAX_LEN + 8;

    pub fn new(bump: u8, creator: Pubkey, admin: Pubkey) -> Result<Self> {
        Ok(Self {
            bump,
            creator,
            registry: AccessRegistry::new(admin)?,
            next_claim_id: FIRST_CLAIM_ID,
        })
    }

    /// Allocates `count` sequential ids and returns the first one
    pub fn reserve_claim_ids(&mut self, count: usize) -> Result<u64> {
        let first = self.next_claim_id;
        self.next_claim_id = first
            .checked_add(count as u64)
            .ok_or(ClaimLedgerError::ArithmeticOverflow)?;
        Ok(first)
    }
}
