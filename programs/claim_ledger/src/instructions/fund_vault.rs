use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for depositing tokens into a ledger vault
 *
 * Claims are paid out of one vault per mint. The vault is created on the
 * first deposit of a mint and is controlled by the ledger PDA.
 *
 * Access Control: Anyone can fund a vault
 */
#[event_cpi]
#[derive(Accounts)]
pub struct FundVault<'info> {
    /// The ledger owning the vault
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Token vault (PDA) for this mint
    /// - Controlled by the ledger PDA as token authority
    /// - Derived from: ["vault", ledger_key, token_mint]
    #[account(
        init_if_needed,
        payer = funder,
        token::mint = token_mint,
        token::authority = ledger,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref(), token_mint.key().as_ref()],
        bump,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint of the vault
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Funder's token account the deposit is taken from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The account depositing the tokens
    #[account(mut)]
    pub funder: Signer<'info>,

    /// System program for vault creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Deposits tokens into the ledger vault of a mint
 *
 * @param amount - Amount to deposit, must be positive
 */
pub fn handle_fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, ClaimLedgerError::InvalidAmount);

    transfer_token(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for funder-signed transfer
    )?;

    emit_cpi!(VaultFunded {
        ledger: ctx.accounts.ledger.key(),
        token: ctx.accounts.token_mint.key(),
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
