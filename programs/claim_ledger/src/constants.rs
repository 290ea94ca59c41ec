use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the claim ledger program.
 * These constants control claim identity, per-call limits, and PDA derivation.
 */

#[constant]
/// ===== CLAIM IDENTITY CONSTANTS =====

/// Identifier assigned to the very first claim of a ledger
/// - Every later claim gets the previous id + 1
/// - Ids are never reused, removed and paid claims keep their slot
pub const FIRST_CLAIM_ID: u64 = 1;

/// ===== PER-CALL LIMITS =====

/// Maximum number of claims touched by a single add, approve, remove, claim or query call
/// - Bounds the claim accounts loaded into memory by one instruction
/// - 32 claims * 90 bytes = 2,880 bytes of heap for the working set
pub const MAX_ENTRIES_PER_CALL: usize = 32;

/// Maximum number of issuers whitelisted at the same time
/// - The whitelist lives inside the ledger account, which has a fixed size
/// - 64 entries * 33 bytes = 2,112 bytes
pub const MAX_WHITELIST_LEN: usize = 64;

/// Maximum length in bytes of the free-text tag attached to a creation call
pub const MAX_EPOCH_TAG_LEN: usize = 64;

/// ===== PDA SEED CONSTANTS =====

/// Seed for ledger PDA derivation
/// - Used in: ["ledger", creator]
/// - The creator is fixed at initialization, so the PDA survives admin transfers
pub const LEDGER_SEED: &str = "ledger";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", ledger_key, token_mint]
/// - One vault per (ledger, mint) pair, owned by the ledger PDA
/// - Claims denominated in a mint are paid out of that mint's vault
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", ledger_key, beneficiary, claim_id (little endian)]
/// - One account per claim, created by the issuer that adds it
pub const CLAIM_SEED: &str = "claim";

/// Seed for payout total PDA derivation
/// - Used in: ["payout", ledger_key, beneficiary, token_mint]
/// - Created on the first payout of a mint to a beneficiary
pub const PAYOUT_SEED: &str = "payout";
