use anchor_lang::prelude::*;
use crate::constants::*;
use crate::ledger::ClaimTarget;
use crate::state::*;
use crate::utils::{load_claims, load_payout_total};

/// Read-only account context shared by the claim queries
///
/// Remaining accounts: the claim PDA of each queried id, in id order.
#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,
}

fn load_beneficiary_claims(
    ledger: &Pubkey,
    beneficiary: Pubkey,
    claim_ids: &[u64],
    accounts: &[AccountInfo],
) -> Result<ClaimStore> {
    let targets: Vec<ClaimTarget> = claim_ids
        .iter()
        .map(|claim_id| ClaimTarget {
            beneficiary,
            claim_id: *claim_id,
        })
        .collect();
    load_claims(ledger, &targets, accounts)
}

pub fn handle_get_claimable_for_ids<'info>(
    ctx: Context<'_, '_, '_, 'info, ReadLedger<'info>>,
    beneficiary: Pubkey,
    claim_ids: Vec<u64>,
) -> Result<Vec<u64>> {
    let store = load_beneficiary_claims(
        &ctx.accounts.ledger.key(),
        beneficiary,
        &claim_ids,
        ctx.remaining_accounts,
    )?;
    Ok(store.claimable_for_ids(&beneficiary, &claim_ids))
}

pub fn handle_get_claimable_for_user<'info>(
    ctx: Context<'_, '_, '_, 'info, ReadLedger<'info>>,
    beneficiary: Pubkey,
    claim_ids: Vec<u64>,
    token: Option<Pubkey>,
) -> Result<u64> {
    let store = load_beneficiary_claims(
        &ctx.accounts.ledger.key(),
        beneficiary,
        &claim_ids,
        ctx.remaining_accounts,
    )?;
    store.claimable_for_user(&beneficiary, &claim_ids, token.as_ref())
}

/// Read-only account context of the payout total query
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, token: Pubkey)]
pub struct ReadPayoutTotal<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// CHECK: address checked by seeds; absent until the first payout, read only when owned by this program
    #[account(
        seeds = [PAYOUT_SEED.as_bytes(), ledger.key().as_ref(), beneficiary.as_ref(), token.as_ref()],
        bump,
    )]
    pub payout_total: UncheckedAccount<'info>,
}

pub fn handle_get_total_paid(ctx: Context<ReadPayoutTotal>, _beneficiary: Pubkey, _token: Pubkey) -> Result<u64> {
    let total = load_payout_total(&ctx.accounts.payout_total.to_account_info())?;
    Ok(total.map_or(0, |total| total.total_paid))
}
