use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for handing over the administrator role
 *
 * Access Control: Administrator only (checked by the access registry)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    /// The ledger to update
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Must be the current administrator
    pub caller: Signer<'info>,
}

/**
 * Transfers the administrator role in a single step
 *
 * @param new_admin - The next administrator, must not be the default key
 */
pub fn handle_transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let transferred = ctx
        .accounts
        .ledger
        .registry
        .transfer_admin(&caller, new_admin)?;

    emit_cpi!(transferred);

    Ok(())
}
