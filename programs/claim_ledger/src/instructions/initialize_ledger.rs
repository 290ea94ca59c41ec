use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new claim ledger
 *
 * This instruction initializes an empty ledger:
 * - Creates the ledger PDA at its final size (whitelist at capacity)
 * - Records the creator, which fixes the PDA address for good
 * - Installs the initial administrator and starts the id counter
 *
 * Access Control: Anyone can create a ledger; the creator pays the rent
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    /// The ledger account (PDA)
    /// - Stores the access registry and the claim id counter
    /// - Derived from: ["ledger", creator]
    #[account(
        init,
        payer = creator,
        space = ClaimLedger::LEN,
        seeds = [LEDGER_SEED.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// The account creating and paying for the ledger
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes a claim ledger
 *
 * @param ctx - The account context containing the ledger and creator accounts
 * @param admin - Administrator of the new ledger, must not be the default key
 */
pub fn handle_initialize_ledger(ctx: Context<InitializeLedger>, admin: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.set_inner(ClaimLedger::new(
        ctx.bumps.ledger,
        ctx.accounts.creator.key(),
        admin,
    )?);

    emit_cpi!(LedgerInitialized {
        ledger: ledger.key(),
        creator: ctx.accounts.creator.key(),
        admin,
    });

    Ok(())
}
