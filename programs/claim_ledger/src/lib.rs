use anchor_lang::prelude::*;

declare_id!("5QmBvbVUqCkMTFTGY9Tk3ZDrX3U3iMnTt6NqqRK8Jkz2");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use ledger::{ClaimEntry, ClaimTarget, EpochTag};

/**
 * Claim Ledger Program
 *
 * A Solana program for permissioned claim distribution. Trusted issuers register
 * token-denominated claims for beneficiaries, an administrator approves them, and
 * beneficiaries withdraw each approved claim exactly once.
 *
 * Key Features:
 * - Issuer whitelist managed by a single, transferable administrator
 * - Per-claim approval, revocation and removal
 * - Sequential claim ids, starting at 1 and never reused
 * - Idempotent claiming: paid or removed claims pay 0 without failing
 * - All-or-nothing claim calls: any failure rolls the whole call back
 * - Cumulative payout totals per (beneficiary, token) for audits
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Ledger PDA: Access registry and claim id counter of one ledger
 * - Claim PDAs: One account per claim, passed as remaining accounts
 * - Payout PDAs: Cumulative payout per (ledger, beneficiary, mint)
 * - Vault PDAs: One token vault per (ledger, mint), holding the tokens to pay out
 *
 * Workflow:
 * 1. Creator initializes a ledger and names its administrator
 * 2. Administrator whitelists issuers; anyone funds the vaults
 * 3. Issuers add claims; administrator approves (or removes) them
 * 4. Beneficiaries claim approved amounts, one instruction per mint
 * 5. Administrator withdraws what no claim will pay out
 */
#[program]
pub mod claim_ledger {
    use super::*;

    /**
     * Creates a new claim ledger
     *
     * @param ctx - Account context containing ledger and creator accounts
     * @param admin - Administrator of the new ledger
     *
     * Access Control: Anyone (creator pays rent)
     */
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, admin: Pubkey) -> Result<()> {
        handle_initialize_ledger(ctx, admin)
    }

    /**
     * Whitelists or de-whitelists an issuer
     *
     * @param issuer - Issuer account
     * @param whitelisted - New status
     *
     * Access Control: Administrator only
     */
    pub fn set_whitelisted(ctx: Context<SetWhitelisted>, issuer: Pubkey, whitelisted: bool) -> Result<()> {
        handle_set_whitelisted(ctx, issuer, whitelisted)
    }

    /**
     * Hands the administrator role to another account in one step
     *
     * @param new_admin - The next administrator
     *
     * Access Control: Administrator only
     */
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        handle_transfer_admin(ctx, new_admin)
    }

    /**
     * Deposits tokens into the ledger vault of a mint
     *
     * @param amount - Amount of tokens to deposit
     *
     * Access Control: Anyone
     */
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        handle_fund_vault(ctx, amount)
    }

    /**
     * Takes tokens out of the ledger vault of a mint
     *
     * @param amount - Amount of tokens to withdraw
     *
     * Access Control: Administrator only
     */
    pub fn withdraw_from_vault(ctx: Context<WithdrawFromVault>, amount: u64) -> Result<()> {
        handle_withdraw_from_vault(ctx, amount)
    }

    /**
     * Registers new unapproved claims
     *
     * @param entries - (beneficiary, token, amount) triples
     * @param epoch_tag - Epoch and free-text tag emitted with every created claim
     *
     * Access Control: Whitelisted issuers only
     */
    pub fn add_to_claims<'info>(
        ctx: Context<'_, '_, '_, 'info, AddToClaims<'info>>,
        entries: Vec<ClaimEntry>,
        epoch_tag: EpochTag,
    ) -> Result<()> {
        handle_add_to_claims(ctx, entries, epoch_tag)
    }

    /**
     * Registers new unapproved claims of a single token from parallel arrays
     *
     * Access Control: Whitelisted issuers only
     * Note: Fails with InvalidArrayLength when the arrays differ in length
     */
    pub fn add_to_claims_batch<'info>(
        ctx: Context<'_, '_, '_, 'info, AddToClaimsBatch<'info>>,
        token: Pubkey,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<u64>,
        epoch_tag: EpochTag,
    ) -> Result<()> {
        handle_add_to_claims_batch(ctx, token, beneficiaries, amounts, epoch_tag)
    }

    /**
     * Approves or revokes approval of claims
     *
     * @param targets - (beneficiary, claim_id) pairs
     * @param approved - New approval flag
     *
     * Access Control: Administrator only
     */
    pub fn approve_claims<'info>(
        ctx: Context<'_, '_, '_, 'info, ApproveClaims<'info>>,
        targets: Vec<ClaimTarget>,
        approved: bool,
    ) -> Result<()> {
        handle_approve_claims(ctx, targets, approved)
    }

    /**
     * Cancels the outstanding amount of claims
     *
     * @param targets - (beneficiary, claim_id) pairs
     *
     * Access Control: Administrator only
     */
    pub fn remove_claims<'info>(
        ctx: Context<'_, '_, '_, 'info, RemoveClaims<'info>>,
        targets: Vec<ClaimTarget>,
    ) -> Result<()> {
        handle_remove_claims(ctx, targets)
    }

    /**
     * Pays out the claimant's approved claims of one mint
     *
     * @param claim_ids - Ids of the claimant's claims
     *
     * Access Control: Beneficiaries, for their own claims
     * Note: Claiming an already paid claim succeeds and pays nothing
     */
    pub fn claim<'info>(ctx: Context<'_, '_, '_, 'info, Claim<'info>>, claim_ids: Vec<u64>) -> Result<()> {
        handle_claim(ctx, claim_ids)
    }

    /// Claimable amount of each id for `beneficiary`
    pub fn get_claimable_for_ids<'info>(
        ctx: Context<'_, '_, '_, 'info, ReadLedger<'info>>,
        beneficiary: Pubkey,
        claim_ids: Vec<u64>,
    ) -> Result<Vec<u64>> {
        handle_get_claimable_for_ids(ctx, beneficiary, claim_ids)
    }

    /// Total claimable by `beneficiary` over `claim_ids`, optionally for one token
    pub fn get_claimable_for_user<'info>(
        ctx: Context<'_, '_, '_, 'info, ReadLedger<'info>>,
        beneficiary: Pubkey,
        claim_ids: Vec<u64>,
        token: Option<Pubkey>,
    ) -> Result<u64> {
        handle_get_claimable_for_user(ctx, beneficiary, claim_ids, token)
    }

    /// Cumulative amount paid to `beneficiary` in `token`
    pub fn get_total_paid(ctx: Context<ReadPayoutTotal>, beneficiary: Pubkey, token: Pubkey) -> Result<u64> {
        handle_get_total_paid(ctx, beneficiary, token)
    }
}
