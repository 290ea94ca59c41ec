use anchor_lang::prelude::*;
use crate::constants::*;
use crate::ledger::*;
use crate::state::*;
use crate::utils::create_claim_accounts;

/**
 * Account context for creating claims
 *
 * This instruction lets a whitelisted issuer register claims for any number
 * of beneficiaries (up to MAX_ENTRIES_PER_CALL). Each entry becomes an
 * independent, unapproved claim with its own sequential id and its own
 * claim account.
 *
 * Remaining Accounts:
 * - One writable claim PDA per entry, in entry order
 * - Derived from: ["claim", ledger_key, beneficiary, claim_id], where the
 *   ids continue from the ledger's next_claim_id
 *
 * Access Control: Whitelisted issuers only (checked by the access registry)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddToClaims<'info> {
    /// The ledger receiving the claims
    /// - Its id counter advances by one per entry
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// The issuer, pays the rent of the new claim accounts
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for claim account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates one claim per entry
 *
 * @param entries - (beneficiary, token, amount) triples
 * @param epoch_tag - Bookkeeping metadata copied into every ClaimAdded event
 */
pub fn handle_add_to_claims<'info>(
    ctx: Context<'_, '_, '_, 'info, AddToClaims<'info>>,
    entries: Vec<ClaimEntry>,
    epoch_tag: EpochTag,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let ledger_key = ctx.accounts.ledger.key();

    let mut store = ClaimStore::default();
    let added = ClaimLedgerEngine::new(
        &mut ctx.accounts.ledger,
        &mut store,
        &mut PayoutAccounting::default(),
    )
    .add_to_claims(&caller, &entries, &epoch_tag)?;

    create_claim_accounts(
        &ledger_key,
        &store,
        ctx.remaining_accounts,
        &ctx.accounts.caller.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    for event in added {
        emit_cpi!(event);
    }

    Ok(())
}

/**
 * Account context for creating claims from parallel arrays
 *
 * Batch form of add_to_claims: one token for the whole call, with
 * beneficiaries and amounts passed as two arrays of equal length.
 *
 * Remaining Accounts: one writable claim PDA per beneficiary, as for add_to_claims
 *
 * Access Control: Whitelisted issuers only (checked by the access registry)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddToClaimsBatch<'info> {
    /// The ledger receiving the claims
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// The issuer, pays the rent of the new claim accounts
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for claim account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates one claim of `token` per (beneficiary, amount) pair
 *
 * Validation Rules:
 * - beneficiaries and amounts must have the same length
 */
pub fn handle_add_to_claims_batch<'info>(
    ctx: Context<'_, '_, '_, 'info, AddToClaimsBatch<'info>>,
    token: Pubkey,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
    epoch_tag: EpochTag,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let ledger_key = ctx.accounts.ledger.key();

    let mut store = ClaimStore::default();
    let added = ClaimLedgerEngine::new(
        &mut ctx.accounts.ledger,
        &mut store,
        &mut PayoutAccounting::default(),
    )
    .add_to_claims_batch(&caller, token, &beneficiaries, &amounts, &epoch_tag)?;

    create_claim_accounts(
        &ledger_key,
        &store,
        ctx.remaining_accounts,
        &ctx.accounts.caller.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    for event in added {
        emit_cpi!(event);
    }

    Ok(())
}
