use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::ledger::{ClaimEntry, ClaimTarget, EpochTag, TokenTransfer};
use crate::state::*;

/// Undo record for one mutation made by a claim call
enum Undo {
    Amount {
        claim_id: u64,
        amount: u64,
    },
    Payout {
        beneficiary: Pubkey,
        token: Pubkey,
        previous: Option<u64>,
    },
}

/**
 * Claim ledger engine
 *
 * Runs the public operations of the ledger against the ledger account and the
 * claim records and payout totals of one call, combining the access registry
 * checks with claim store mutations.
 *
 * Guarantees:
 * - Every operation either commits all of its mutations or none of them
 * - Events are only returned for committed operations
 * - A claim pays out at most once: its amount is zeroed before the transfer
 */
pub struct ClaimLedgerEngine<'a> {
    ledger: &'a mut ClaimLedger,
    store: &'a mut ClaimStore,
    payouts: &'a mut PayoutAccounting,
}

impl<'a> ClaimLedgerEngine<'a> {
    pub fn new(
        ledger: &'a mut ClaimLedger,
        store: &'a mut ClaimStore,
        payouts: &'a mut PayoutAccounting,
    ) -> Self {
        Self {
            ledger,
            store,
            payouts,
        }
    }

    /**
     * Creates one unapproved claim per entry
     *
     * @param caller - Must be a whitelisted issuer
     * @param entries - (beneficiary, token, amount) triples, no deduplication
     * @param epoch_tag - Bookkeeping metadata copied into every event
     *
     * All checks run before the first insert, so a failing call creates nothing.
     */
    pub fn add_to_claims(
        &mut self,
        caller: &Pubkey,
        entries: &[ClaimEntry],
        epoch_tag: &EpochTag,
    ) -> Result<Vec<ClaimAdded>> {
        // ===== VALIDATION PHASE =====
        self.ledger.registry.require_whitelisted(caller)?;
        require!(
            entries.len() <= MAX_ENTRIES_PER_CALL,
            ClaimLedgerError::TooManyEntries
        );
        epoch_tag.validate()?;
        let first_id = self.ledger.reserve_claim_ids(entries.len())?;

        // ===== EFFECTS PHASE =====
        let store = &mut *self.store;
        let added = entries
            .iter()
            .zip(first_id..)
            .map(|(entry, claim_id)| {
                store.create(claim_id, entry.beneficiary, entry.token, entry.amount);
                ClaimAdded {
                    token: entry.token,
                    beneficiary: entry.beneficiary,
                    amount: entry.amount,
                    claim_id,
                    epoch: epoch_tag.epoch,
                    tag: epoch_tag.tag.clone(),
                }
            })
            .collect();

        Ok(added)
    }

    /// Batch form of `add_to_claims`: one token, parallel beneficiary and amount arrays.
    pub fn add_to_claims_batch(
        &mut self,
        caller: &Pubkey,
        token: Pubkey,
        beneficiaries: &[Pubkey],
        amounts: &[u64],
        epoch_tag: &EpochTag,
    ) -> Result<Vec<ClaimAdded>> {
        self.ledger.registry.require_whitelisted(caller)?;
        if beneficiaries.len() != amounts.len() {
            msg!(
                "array lengths differ: {} beneficiaries, {} amounts",
                beneficiaries.len(),
                amounts.len()
            );
            return err!(ClaimLedgerError::InvalidArrayLength);
        }

        let entries: Vec<ClaimEntry> = beneficiaries
            .iter()
            .zip(amounts)
            .map(|(beneficiary, amount)| ClaimEntry {
                beneficiary: *beneficiary,
                token,
                amount: *amount,
            })
            .collect();

        self.add_to_claims(caller, &entries, epoch_tag)
    }

    /// Sets the approval flag of every target. Administrator only.
    ///
    /// Targets that do not resolve to a claim are skipped without an event.
    pub fn approve_claims(
        &mut self,
        caller: &Pubkey,
        targets: &[ClaimTarget],
        approved: bool,
    ) -> Result<Vec<ClaimApproved>> {
        self.ledger.registry.require_admin(caller)?;
        require!(
            targets.len() <= MAX_ENTRIES_PER_CALL,
            ClaimLedgerError::TooManyEntries
        );

        let store = &mut *self.store;
        let events = targets
            .iter()
            .filter(|target| store.set_approved(&target.beneficiary, target.claim_id, approved))
            .map(|target| ClaimApproved {
                beneficiary: target.beneficiary,
                claim_id: target.claim_id,
                approved,
            })
            .collect();

        Ok(events)
    }

    /// Cancels the outstanding amount of every target. Administrator only.
    ///
    /// The approval flag is left as it is. Removing an empty or unknown claim
    /// removes 0.
    pub fn remove_claims(
        &mut self,
        caller: &Pubkey,
        targets: &[ClaimTarget],
    ) -> Result<Vec<ClaimRemoved>> {
        self.ledger.registry.require_admin(caller)?;
        require!(
            targets.len() <= MAX_ENTRIES_PER_CALL,
            ClaimLedgerError::TooManyEntries
        );

        let store = &mut *self.store;
        let events = targets
            .iter()
            .map(|target| ClaimRemoved {
                beneficiary: target.beneficiary,
                claim_id: target.claim_id,
                amount_removed: store
                    .zero_amount(&target.beneficiary, target.claim_id)
                    .unwrap_or(0),
            })
            .collect();

        Ok(events)
    }

    /**
     * Takes tokens out of a vault. Administrator only.
     *
     * @param caller - Must be the administrator, receives the tokens
     * @param token - Mint of the vault
     * @param amount - Must be positive
     *
     * Used to recover removed claims and over-funding. Nothing stops the
     * administrator from taking tokens still owed to approved claims; those
     * claims then fail with TransferFailed until the vault is funded again.
     */
    pub fn withdraw_from_vault<T: TokenTransfer>(
        &mut self,
        caller: &Pubkey,
        token: &Pubkey,
        amount: u64,
        transfer: &mut T,
    ) -> Result<VaultWithdrawn> {
        self.ledger.registry.require_admin(caller)?;
        require!(amount > 0, ClaimLedgerError::InvalidAmount);

        transfer.transfer(token, caller, amount)?;

        Ok(VaultWithdrawn {
            token: *token,
            admin: *caller,
            amount,
        })
    }

    /**
     * Pays out the caller's claims
     *
     * @param caller - The beneficiary; claims of other accounts resolve to nothing
     * @param claim_ids - Claims to pay, processed in order
     * @param transfer - Moves the tokens once the ledger has been updated
     *
     * Per claim:
     * - not resolved, or already zero: skipped
     * - not approved: the whole call fails with ClaimNotApproved
     * - otherwise: amount zeroed, payout total increased, then transferred
     *
     * Any error rolls back every mutation made by the call.
     */
    pub fn claim<T: TokenTransfer>(
        &mut self,
        caller: &Pubkey,
        claim_ids: &[u64],
        transfer: &mut T,
    ) -> Result<Vec<Claimed>> {
        require!(
            claim_ids.len() <= MAX_ENTRIES_PER_CALL,
            ClaimLedgerError::TooManyEntries
        );

        let mut journal = Vec::new();
        let result = self.pay_claims(caller, claim_ids, transfer, &mut journal);
        if result.is_err() {
            self.roll_back(journal);
        }
        result
    }

    fn pay_claims<T: TokenTransfer>(
        &mut self,
        caller: &Pubkey,
        claim_ids: &[u64],
        transfer: &mut T,
        journal: &mut Vec<Undo>,
    ) -> Result<Vec<Claimed>> {
        let mut paid = Vec::new();

        for &claim_id in claim_ids {
            let (token, approved, amount) = match self.store.get(caller, claim_id) {
                Some(record) => (record.token, record.approved, record.amount),
                None => continue,
            };

            // ===== VALIDATION PHASE =====
            if !approved {
                msg!("claim {} is not approved", claim_id);
                return err!(ClaimLedgerError::ClaimNotApproved);
            }
            if amount == 0 {
                continue;
            }

            // ===== EFFECTS PHASE (State Updates) =====
            self.store.zero_amount(caller, claim_id);
            journal.push(Undo::Amount { claim_id, amount });

            let previous = self.payouts.record(*caller, token, amount)?;
            journal.push(Undo::Payout {
                beneficiary: *caller,
                token,
                previous,
            });

            // ===== INTERACTIONS PHASE (Token Transfer) =====
            transfer.transfer(&token, caller, amount)?;

            paid.push(Claimed {
                token,
                beneficiary: *caller,
                claim_id,
                amount,
            });
        }

        Ok(paid)
    }

    fn roll_back(&mut self, journal: Vec<Undo>) {
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Amount { claim_id, amount } => {
                    self.store.restore_amount(claim_id, amount)
                }
                Undo::Payout {
                    beneficiary,
                    token,
                    previous,
                } => self.payouts.restore(&beneficiary, &token, previous),
            }
        }
    }
}
