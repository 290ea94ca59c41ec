use anchor_lang::prelude::*;
use crate::error::ClaimLedgerError;
use crate::ledger::*;
use crate::state::*;
use crate::utils::claim_address;

/// Transfer collaborator that records every payout and can be told to fail
#[derive(Default)]
pub struct RecordingTransfer {
    /// (token, to, amount) of every successful transfer
    pub transfers: Vec<(Pubkey, Pubkey, u64)>,
    /// Zero-based index of the call that fails
    pub fail_on_call: Option<usize>,
    calls: usize,
}

impl RecordingTransfer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn total(&self) -> u64 {
        self.transfers.iter().map(|(_, _, amount)| amount).sum()
    }
}

impl TokenTransfer for RecordingTransfer {
    fn transfer(&mut self, token: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on_call == Some(call) {
            return err!(ClaimLedgerError::TransferFailed);
        }
        self.transfers.push((*token, *to, amount));
        Ok(())
    }
}

/// A ledger with an administrator and one whitelisted issuer, with every
/// claim and payout total it creates kept in memory
pub struct LedgerFixture {
    pub ledger: ClaimLedger,
    pub store: ClaimStore,
    pub payouts: PayoutAccounting,
    pub admin: Pubkey,
    pub issuer: Pubkey,
}

impl LedgerFixture {
    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        let issuer = Pubkey::new_unique();
        let mut ledger = ClaimLedger::new(254, Pubkey::new_unique(), admin).unwrap();
        ledger.registry.set_whitelisted(&admin, issuer, true).unwrap();

        Self {
            ledger,
            store: ClaimStore::default(),
            payouts: PayoutAccounting::default(),
            admin,
            issuer,
        }
    }

    pub fn engine(&mut self) -> ClaimLedgerEngine<'_> {
        ClaimLedgerEngine::new(&mut self.ledger, &mut self.store, &mut self.payouts)
    }

    /// Adds (beneficiary, token, amount) claims as the issuer, returns their ids
    pub fn add(&mut self, claims: &[(Pubkey, Pubkey, u64)]) -> Vec<u64> {
        let issuer = self.issuer;
        let entries: Vec<ClaimEntry> = claims
            .iter()
            .map(|(beneficiary, token, amount)| ClaimEntry {
                beneficiary: *beneficiary,
                token: *token,
                amount: *amount,
            })
            .collect();

        self.engine()
            .add_to_claims(&issuer, &entries, &EpochTag::new(1, "test"))
            .unwrap()
            .into_iter()
            .map(|added| added.claim_id)
            .collect()
    }

    /// Sets the approval flag of `beneficiary`'s `claim_ids` as the administrator
    pub fn approve(&mut self, beneficiary: Pubkey, claim_ids: &[u64], approved: bool) {
        let admin = self.admin;
        let claim_targets = targets(beneficiary, claim_ids);
        self.engine().approve_claims(&admin, &claim_targets, approved).unwrap();
    }

    /// Claims as `beneficiary`, returns the paid amounts
    pub fn claim(
        &mut self,
        beneficiary: Pubkey,
        claim_ids: &[u64],
        transfer: &mut RecordingTransfer,
    ) -> Result<Vec<u64>> {
        let paid = self.engine().claim(&beneficiary, claim_ids, transfer)?;
        Ok(paid.into_iter().map(|claimed| claimed.amount).collect())
    }
}

/// Owned storage behind an in-memory `AccountInfo`
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

impl TestAccount {
    /// A system-owned account without data, like an address nobody created yet
    pub fn empty(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports: 0,
            data: Vec::new(),
        }
    }

    /// The program-owned claim account of `record` in `ledger`
    pub fn claim(ledger: &Pubkey, record: ClaimRecord) -> Self {
        let (key, bump) = claim_address(ledger, &record.beneficiary, record.claim_id);
        Self::program_owned(key, &ClaimRecord { bump, ..record })
    }

    pub fn program_owned<T: AccountSerialize>(key: Pubkey, account: &T) -> Self {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        Self {
            key,
            owner: crate::ID,
            lamports: 1_000_000,
            data,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

pub fn targets(beneficiary: Pubkey, claim_ids: &[u64]) -> Vec<ClaimTarget> {
    claim_ids
        .iter()
        .map(|claim_id| ClaimTarget {
            beneficiary,
            claim_id: *claim_id,
        })
        .collect()
}

/// Asserts that `result` failed with exactly `expected`
pub fn assert_ledger_error<T>(result: Result<T>, expected: ClaimLedgerError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(error)) => {
            assert_eq!(
                error.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                error.error_name
            );
        }
        Err(other) => panic!("expected {:?}, got {:?}", expected, other),
        Ok(_) => panic!("expected {:?}, call succeeded", expected),
    }
}
