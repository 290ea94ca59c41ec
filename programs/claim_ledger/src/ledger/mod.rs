pub mod engine;

pub use engine::*;

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// One claim to create: `amount` of `token` for `beneficiary`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimEntry {
    pub beneficiary: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}

/// Address of an existing claim
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimTarget {
    pub beneficiary: Pubkey,
    pub claim_id: u64,
}

/**
 * Bookkeeping metadata of a creation call
 *
 * Carried into every ClaimAdded event (e.g. epoch 42, "staking rewards") so
 * off-chain indexers can group claims. Never stored in the ledger and never
 * checked beyond its length.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EpochTag {
    pub epoch: u64,
    pub tag: String,
}

impl EpochTag {
    pub fn new(epoch: u64, tag: impl Into<String>) -> Self {
        Self {
            epoch,
            tag: tag.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.tag.len() <= MAX_EPOCH_TAG_LEN,
            ClaimLedgerError::EpochTagTooLong
        );
        Ok(())
    }
}

/// Moves tokens out of the ledger's custody on payout.
///
/// A call either moves exactly `amount` of `token` to `to` and returns `Ok`,
/// or returns an error and moves nothing.
pub trait TokenTransfer {
    fn transfer(&mut self, token: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}
