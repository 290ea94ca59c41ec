use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;

/**
 * Issuer whitelist entry
 *
 * Present while the issuer is allowed to create claims. Setting the status
 * back to false removes the entry, so the capacity of the whitelist counts
 * only issuers that are currently whitelisted.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WhitelistEntry {
    /// Issuer account
    pub issuer: Pubkey,
    /// Whether the issuer may create claims
    pub whitelisted: bool,
}

impl WhitelistEntry {
    /// Serialized size: issuer + flag
    pub const LEN: usize = 32 + 1;
}

/**
 * Access registry
 *
 * Tracks the two independent roles of the ledger:
 * - A single administrator, fixed at initialization and transferable in one step
 * - A set of at most MAX_WHITELIST_LEN issuers allowed to create claims
 *
 * Design Notes:
 * - Entries are kept sorted by issuer so lookups are a binary search
 * - Pure lookup and mutation, no claim logic lives here
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessRegistry {
    /// Current administrator
    pub admin: Pubkey,
    /// Whitelist entries, sorted by issuer
    pub whitelist: Vec<WhitelistEntry>,
}

impl AccessRegistry {
    /// Serialized size with a full whitelist: admin + vector prefix + entries
    pub const MAX_LEN: usize = 32 + 4 + MAX_WHITELIST_LEN * WhitelistEntry::LEN;

    pub fn new(admin: Pubkey) -> Result<Self> {
        require!(admin != Pubkey::default(), ClaimLedgerError::InvalidAdmin);
        Ok(Self {
            admin,
            whitelist: Vec::new(),
        })
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn is_whitelisted(&self, issuer: &Pubkey) -> bool {
        self.whitelist
            .binary_search_by_key(issuer, |entry| entry.issuer)
            .map(|index| self.whitelist[index].whitelisted)
            .unwrap_or(false)
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_admin(caller) {
            msg!("caller {} is not the administrator", caller);
            return err!(ClaimLedgerError::Unauthorized);
        }
        Ok(())
    }

    pub fn require_whitelisted(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_whitelisted(caller) {
            msg!("caller {} is not a whitelisted issuer", caller);
            return err!(ClaimLedgerError::NotWhitelisted);
        }
        Ok(())
    }

    /// Sets the whitelist status of `issuer`. Administrator only.
    pub fn set_whitelisted(
        &mut self,
        caller: &Pubkey,
        issuer: Pubkey,
        whitelisted: bool,
    ) -> Result<WhitelistChanged> {
        self.require_admin(caller)?;

        match self.whitelist.binary_search_by_key(&issuer, |entry| entry.issuer) {
            Ok(index) if !whitelisted => {
                self.whitelist.remove(index);
            }
            Ok(_) => {}
            Err(_) if !whitelisted => {}
            Err(index) => {
                if self.whitelist.len() >= MAX_WHITELIST_LEN {
                    msg!("whitelist already holds {} issuers", self.whitelist.len());
                    return err!(ClaimLedgerError::WhitelistFull);
                }
                self.whitelist.insert(index, WhitelistEntry { issuer, whitelisted });
            }
        }

        Ok(WhitelistChanged { issuer, whitelisted })
    }

    /// Hands the administrator role to `new_admin` in a single step.
    ///
    /// The default key is refused so the role cannot be renounced by accident.
    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<AdminTransferred> {
        self.require_admin(caller)?;
        require!(new_admin != Pubkey::default(), ClaimLedgerError::InvalidAdmin);

        let previous_admin = std::mem::replace(&mut self.admin, new_admin);

        Ok(AdminTransferred {
            previous_admin,
            new_admin,
        })
    }
}
