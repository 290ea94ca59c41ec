use anchor_lang::prelude::*;
use crate::constants::*;
use crate::ledger::*;
use crate::state::*;
use crate::utils::{load_claims, store_claims};

/**
 * Account context for removing claims
 *
 * Access Control: Administrator only (checked by the access registry).
 * Whitelisted issuers can create claims but cannot cancel them.
 *
 * Remaining Accounts: one writable claim PDA per target, in target order
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RemoveClaims<'info> {
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
 * Cancels the outstanding amount of each target
 *
 * @param targets - (beneficiary, claim_id) pairs
 *
 * The approval flag is not touched. Each ClaimRemoved event carries the
 * amount that was cancelled, 0 for claims that were already empty or do not exist.
 * The cancelled tokens stay in the vault until withdraw_from_vault.
 */
pub fn handle_remove_claims<'info>(
    ctx: Context<'_, '_, '_, 'info, RemoveClaims<'info>>,
    targets: Vec<ClaimTarget>,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let ledger_key = ctx.accounts.ledger.key();
    let mut ledger = (*ctx.accounts.ledger).clone();

    let mut store = load_claims(&ledger_key, &targets, ctx.remaining_accounts)?;
    let removed = ClaimLedgerEngine::new(&mut ledger, &mut store, &mut PayoutAccounting::default())
        .remove_claims(&caller, &targets)?;
    store_claims(&store, &targets, ctx.remaining_accounts)?;

    for event in removed {
        emit_cpi!(event);
    }

    Ok(())
}
