use anchor_lang::prelude::*;
use crate::constants::*;
use crate::ledger::*;
use crate::state::*;
use crate::utils::{load_claims, store_claims};

/**
 * Account context for approving or revoking claims
 *
 * Access Control: Administrator only (checked by the access registry)
 *
 * Remaining Accounts:
 * - One writable claim PDA per target, in target order
 * - A claim that does not exist is passed as its empty PDA
 *
 * Business Logic:
 * - Approval is per (beneficiary, claim_id), independent of other claims
 *   created in the same call
 * - Approving twice changes nothing; unknown claims are skipped
 * - Revoking an approval makes the claim unpayable again, its amount is kept
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ApproveClaims<'info> {
    /// The ledger the claims belong to
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Must be the administrator
    pub caller: Signer<'info>,
}

/**
 * Sets the approval flag of each target
 *
 * @param targets - (beneficiary, claim_id) pairs
 * @param approved - true to approve, false to revoke
 */
pub fn handle_approve_claims<'info>(
    ctx: Context<'_, '_, '_, 'info, ApproveClaims<'info>>,
    targets: Vec<ClaimTarget>,
    approved: bool,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let ledger_key = ctx.accounts.ledger.key();
    let mut ledger = (*ctx.accounts.ledger).clone();

    let mut store = load_claims(&ledger_key, &targets, ctx.remaining_accounts)?;
    let changed = ClaimLedgerEngine::new(&mut ledger, &mut store, &mut PayoutAccounting::default())
        .approve_claims(&caller, &targets, approved)?;
    store_claims(&store, &targets, ctx.remaining_accounts)?;

    for event in changed {
        emit_cpi!(event);
    }

    Ok(())
}
