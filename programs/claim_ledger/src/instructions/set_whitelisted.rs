use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for whitelisting or de-whitelisting an issuer
 *
 * At most MAX_WHITELIST_LEN issuers can be whitelisted at the same time;
 * de-whitelisting an issuer frees its slot.
 *
 * Access Control: Administrator only (checked by the access registry)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetWhitelisted<'info> {
    /// The ledger to update
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Must be the administrator
    pub caller: Signer<'info>,
}

/**
 * Sets the whitelist status of an issuer
 *
 * @param issuer - Issuer to update
 * @param whitelisted - New status; false blocks new claims but keeps existing ones
 */
pub fn handle_set_whitelisted(
    ctx: Context<SetWhitelisted>,
    issuer: Pubkey,
    whitelisted: bool,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let changed = ctx
        .accounts
        .ledger
        .registry
        .set_whitelisted(&caller, issuer, whitelisted)?;

    emit_cpi!(changed);

    Ok(())
}
