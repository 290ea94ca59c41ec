#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use anchor_lang::solana_program::entrypoint::{HEAP_LENGTH, MAX_PERMITTED_DATA_INCREASE};
    use crate::constants::*;
    use crate::error::ClaimLedgerError;
    use crate::ledger::*;
    use crate::state::*;
    use crate::test::fixture::*;

    fn serialized_len<T: AccountSerialize>(account: &T) -> usize {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data.len()
    }

    fn fill_whitelist(fixture: &mut LedgerFixture) {
        let admin = fixture.admin;
        while fixture.ledger.registry.whitelist.len() < MAX_WHITELIST_LEN {
            fixture
                .ledger
                .registry
                .set_whitelisted(&admin, Pubkey::new_unique(), true)
                .unwrap();
        }
    }

    #[test]
    fn test_account_sizes_match_serialized_layout() {
        let mut fixture = LedgerFixture::new();
        fill_whitelist(&mut fixture);

        assert_eq!(serialized_len(&fixture.ledger), ClaimLedger::LEN);
        assert_eq!(serialized_len(&ClaimRecord::default()), ClaimRecord::LEN);
        assert_eq!(serialized_len(&PayoutTotal::default()), PayoutTotal::LEN);
    }

    #[test]
    fn test_ledger_size_does_not_grow_with_claims() {
        let mut fixture = LedgerFixture::new();
        fill_whitelist(&mut fixture);
        let token = Pubkey::new_unique();
        let issuer = fixture.issuer;

        for _ in 0..40 {
            // Every call starts from an empty working set, like an instruction does
            let mut store = ClaimStore::default();
            let entries: Vec<ClaimEntry> = (0..MAX_ENTRIES_PER_CALL)
                .map(|_| ClaimEntry {
                    beneficiary: Pubkey::new_unique(),
                    token,
                    amount: 1,
                })
                .collect();
            ClaimLedgerEngine::new(&mut fixture.ledger, &mut store, &mut fixture.payouts)
                .add_to_claims(&issuer, &entries, &EpochTag::new(1, "bulk"))
                .unwrap();
            assert_eq!(store.len(), MAX_ENTRIES_PER_CALL);
        }

        assert_eq!(fixture.ledger.next_claim_id, 40 * MAX_ENTRIES_PER_CALL as u64 + 1);
        assert_eq!(serialized_len(&fixture.ledger), ClaimLedger::LEN);
    }

    #[test]
    fn test_largest_call_fits_runtime_limits() {
        // The ledger is created by a single system program call
        assert!(ClaimLedger::LEN <= MAX_PERMITTED_DATA_INCREASE);

        // Serialized and deserialized copies of everything one claim call loads,
        // with room for a vector doubling its capacity
        let working_set = MAX_ENTRIES_PER_CALL
            * (ClaimRecord::LEN + std::mem::size_of::<ClaimRecord>())
            * 2;
        let ledger_copies = ClaimLedger::LEN * 3;
        let payout = PayoutTotal::LEN + std::mem::size_of::<PayoutTotal>();
        assert!(working_set + ledger_copies + payout < HEAP_LENGTH);
    }

    #[test]
    fn test_whitelist_is_capped_at_fixed_size() {
        let mut fixture = LedgerFixture::new();
        fill_whitelist(&mut fixture);
        let admin = fixture.admin;

        assert_ledger_error(
            fixture.ledger.registry.set_whitelisted(&admin, Pubkey::new_unique(), true),
            ClaimLedgerError::WhitelistFull,
        );
        assert_eq!(serialized_len(&fixture.ledger), ClaimLedger::LEN);
    }
}
