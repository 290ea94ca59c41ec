use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};
use crate::error::*;
use crate::ledger::TokenTransfer;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/**
 * Payout collaborator backed by a ledger vault
 *
 * Pays claims out of the vault PDA of one mint into one destination token
 * account, signing with the ledger PDA. An instruction carries a single
 * vault, so a claim in any other mint, or a payout to anyone but the
 * destination owner, is refused as a failed transfer.
 */
pub struct VaultTransfer<'a, 'info> {
    /// Ledger PDA, authority of the vault
    pub ledger: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    /// Authority of the destination token account
    pub destination_owner: Pubkey,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl TokenTransfer for VaultTransfer<'_, '_> {
    fn transfer(&mut self, token: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        if *token != self.mint.key() {
            msg!("claim token {} is not the vault mint {}", token, self.mint.key());
            return err!(ClaimLedgerError::TransferFailed);
        }
        if *to != self.destination_owner {
            msg!("payout to {} does not match destination owner {}", to, self.destination_owner);
            return err!(ClaimLedgerError::TransferFailed);
        }

        transfer_token(
            self.ledger.clone(),
            self.vault.clone(),
            self.destination.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds), // PDA signing for secure transfer
        )
        .map_err(|error| {
            msg!("vault transfer of {} failed: {}", amount, error);
            error!(ClaimLedgerError::TransferFailed)
        })
    }
}
