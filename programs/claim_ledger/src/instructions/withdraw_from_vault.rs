use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::ledger::*;
use crate::state::*;
use crate::utils::VaultTransfer;

/**
 * Account context for taking tokens out of a ledger vault
 *
 * This instruction lets the administrator recover tokens that no claim will
 * pay out: amounts cancelled by remove_claims and any over-funding.
 *
 * Access Control: Administrator only (checked by the access registry)
 *
 * Business Logic:
 * - The vault stays open, it can be funded and paid out of again
 * - Withdrawing tokens still owed to approved claims is possible; those
 *   claims fail with TransferFailed until the vault is refilled
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFromVault<'info> {
    /// The ledger owning the vault
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Token vault to withdraw from
    /// - Derived from: ["vault", ledger_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref(), token_mint.key().as_ref()],
        bump,
        constraint = token_vault.mint == token_mint.key() @ ClaimLedgerError::TokenMintMismatch,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Administrator's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint of the vault
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must be the administrator
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers `amount` from the vault to the administrator
 *
 * @param amount - Amount to withdraw, must be positive and covered by the vault
 */
pub fn handle_withdraw_from_vault(ctx: Context<WithdrawFromVault>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.token_mint.key();

    // Prepare PDA signing seeds for the vault transfer
    let creator = ctx.accounts.ledger.creator;
    let ledger_bump = ctx.accounts.ledger.bump;
    let seeds = &[LEDGER_SEED.as_bytes(), creator.as_ref(), &[ledger_bump]];
    let signer = &[&seeds[..]];

    let mut vault_transfer = VaultTransfer {
        ledger: ctx.accounts.ledger.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        destination: ctx.accounts.admin_token_account.to_account_info(),
        destination_owner: admin,
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let mut ledger = (*ctx.accounts.ledger).clone();
    let withdrawn = ClaimLedgerEngine::new(
        &mut ledger,
        &mut ClaimStore::default(),
        &mut PayoutAccounting::default(),
    )
    .withdraw_from_vault(&admin, &mint, amount, &mut vault_transfer)?;

    emit_cpi!(withdrawn);

    Ok(())
}
