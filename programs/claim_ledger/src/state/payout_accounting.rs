use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Payout total account
 *
 * Cumulative amount paid to one beneficiary in one token.
 *
 * Derivation: ["payout", ledger_key, beneficiary, token_mint]
 *
 * Lifecycle:
 * 1. Created on the first claim of the mint by the beneficiary (init_if_needed)
 * 2. Increased by every successful payout, never decreased
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PayoutTotal {
    pub beneficiary: Pubkey,
    pub token: Pubkey,
    /// Never decreases
    pub total_paid: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PayoutTotal {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + beneficiary + token + total + bump
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;
}

/**
 * Payout accounting
 *
 * Running totals of everything successfully paid out, per (beneficiary, token),
 * for the payout total accounts one call works on. Entries are created lazily
 * on the first payout and never reset. The claim records stay the primary
 * double-pay guard; these totals exist for audits.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayoutAccounting {
    /// Totals, sorted by (beneficiary, token)
    pub totals: Vec<PayoutTotal>,
}

impl PayoutAccounting {
    fn search(&self, beneficiary: &Pubkey, token: &Pubkey) -> std::result::Result<usize, usize> {
        self.totals
            .binary_search_by(|entry| (&entry.beneficiary, &entry.token).cmp(&(beneficiary, token)))
    }

    /// Adds a loaded total, replacing any entry for the same pair
    pub fn insert(&mut self, total: PayoutTotal) {
        match self.search(&total.beneficiary, &total.token) {
            Ok(index) => self.totals[index] = total,
            Err(index) => self.totals.insert(index, total),
        }
    }

    /// Everything paid so far to `beneficiary` in `token`
    pub fn total_paid(&self, beneficiary: &Pubkey, token: &Pubkey) -> u64 {
        self.search(beneficiary, token)
            .map(|index| self.totals[index].total_paid)
            .unwrap_or(0)
    }

    /// Adds `amount` to the running total and returns the previous total,
    /// `None` when the entry did not exist yet
    pub fn record(&mut self, beneficiary: Pubkey, token: Pubkey, amount: u64) -> Result<Option<u64>> {
        match self.search(&beneficiary, &token) {
            Ok(index) => {
                let entry = &mut self.totals[index];
                let previous = entry.total_paid;
                entry.total_paid = previous
                    .checked_add(amount)
                    .ok_or(ClaimLedgerError::ArithmeticOverflow)?;
                Ok(Some(previous))
            }
            Err(index) => {
                self.totals.insert(
                    index,
                    PayoutTotal {
                        beneficiary,
                        token,
                        total_paid: amount,
                        bump: 0,
                    },
                );
                Ok(None)
            }
        }
    }

    /// Reverts a `record` call given the value it returned
    pub fn restore(&mut self, beneficiary: &Pubkey, token: &Pubkey, previous: Option<u64>) {
        if let Ok(index) = self.search(beneficiary, token) {
            match previous {
                Some(total_paid) => self.totals[index].total_paid = total_paid,
                None => {
                    self.totals.remove(index);
                }
            }
        }
    }
}
