use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::ledger::*;
use crate::state::*;
use crate::utils::{load_claims, store_claims, VaultTransfer};

/**
 * Account context for claiming tokens
 *
 * This instruction pays the claimant every approved, outstanding claim among
 * the given ids, out of the vault of one mint. Claims in several mints are
 * paid with one instruction per mint.
 *
 * Access Control: Any beneficiary, for their own claims only
 *
 * Remaining Accounts:
 * - One writable claim PDA per claim id, in id order
 * - Derived from: ["claim", ledger_key, claimant, claim_id]
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The ledger the claims belong to
    /// - Signs the vault transfer, never modified
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// Token vault holding the tokens to be paid
    /// - Controlled by the ledger PDA
    /// - Derived from: ["vault", ledger_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref(), token_mint.key().as_ref()],
        bump,
        constraint = token_vault.mint == token_mint.key() @ ClaimLedgerError::TokenMintMismatch,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the vault's token mint
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being paid out
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The beneficiary claiming their tokens
    /// - Must sign the transaction
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Cumulative payout of this mint to the claimant
    /// - Derived from: ["payout", ledger_key, claimant, token_mint]
    #[account(
        init_if_needed,
        payer = claimant,
        space = PayoutTotal::LEN,
        seeds = [PAYOUT_SEED.as_bytes(), ledger.key().as_ref(), claimant.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub payout_total: Account<'info, PayoutTotal>,

    /// System program for payout total creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim over a list of claim ids
 *
 * @param ctx - The account context containing all required accounts
 * @param claim_ids - Ids of the claimant's claims to pay
 *
 * Validation Process:
 * 1. Any unapproved claim among the ids fails the whole instruction
 * 2. Claims that are empty, or not the claimant's, are skipped
 * 3. Each remaining claim is zeroed and recorded before its transfer
 */
pub fn handle_claim<'info>(
    ctx: Context<'_, '_, '_, 'info, Claim<'info>>,
    claim_ids: Vec<u64>,
) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let claimant = ctx.accounts.claimant.key();
    let mint = ctx.accounts.token_mint.key();

    // Load the claim accounts and the running total this call works on
    let targets: Vec<ClaimTarget> = claim_ids
        .iter()
        .map(|claim_id| ClaimTarget {
            beneficiary: claimant,
            claim_id: *claim_id,
        })
        .collect();
    let mut store = load_claims(&ledger_key, &targets, ctx.remaining_accounts)?;
    let mut payouts = PayoutAccounting::default();
    payouts.insert(PayoutTotal {
        beneficiary: claimant,
        token: mint,
        total_paid: ctx.accounts.payout_total.total_paid,
        bump: ctx.bumps.payout_total,
    });

    // Prepare PDA signing seeds for vault transfers
    let creator = ctx.accounts.ledger.creator;
    let ledger_bump = ctx.accounts.ledger.bump;
    let seeds = &[LEDGER_SEED.as_bytes(), creator.as_ref(), &[ledger_bump]];
    let signer = &[&seeds[..]];

    let mut vault_transfer = VaultTransfer {
        ledger: ctx.accounts.ledger.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        destination_owner: claimant,
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let mut ledger = (*ctx.accounts.ledger).clone();
    let paid = ClaimLedgerEngine::new(&mut ledger, &mut store, &mut payouts).claim(
        &claimant,
        &claim_ids,
        &mut vault_transfer,
    )?;

    // Persist zeroed claims and the new running total
    store_claims(&store, &targets, ctx.remaining_accounts)?;
    let payout_total = &mut ctx.accounts.payout_total;
    payout_total.beneficiary = claimant;
    payout_total.token = mint;
    payout_total.total_paid = payouts.total_paid(&claimant, &mint);
    payout_total.bump = ctx.bumps.payout_total;

    // Emit events for off-chain indexing and monitoring
    for event in paid {
        emit_cpi!(event);
    }

    Ok(())
}
