#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use proptest::prelude::*;
    use crate::constants::*;
    use crate::test::fixture::*;

    /// Up to one full call of (amount, approved, token index) triples
    fn claim_specs() -> impl Strategy<Value = Vec<(u64, bool, usize)>> {
        prop::collection::vec((0u64..1_000_000_000, any::<bool>(), 0usize..3), 1..=MAX_ENTRIES_PER_CALL)
    }

    proptest! {
        #[test]
        fn prop_created_amounts_are_conserved(
            calls in prop::collection::vec(prop::collection::vec(0u64..u32::MAX as u64, 0..=MAX_ENTRIES_PER_CALL), 1..5)
        ) {
            let mut fixture = LedgerFixture::new();
            let beneficiary = Pubkey::new_unique();
            let token = Pubkey::new_unique();

            let mut expected_ids = FIRST_CLAIM_ID;
            for amounts in &calls {
                let claims: Vec<_> = amounts.iter().map(|amount| (beneficiary, token, *amount)).collect();
                for claim_id in fixture.add(&claims) {
                    prop_assert_eq!(claim_id, expected_ids);
                    expected_ids += 1;
                }
            }

            let created: u128 = fixture.store.claims.iter().map(|record| record.amount as u128).sum();
            let requested: u128 = calls.iter().flatten().map(|amount| *amount as u128).sum();
            prop_assert_eq!(created, requested);
        }

        #[test]
        fn prop_each_claim_pays_at_most_once(specs in claim_specs(), attempts in 2usize..5) {
            let mut fixture = LedgerFixture::new();
            let beneficiary = Pubkey::new_unique();
            let tokens = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];

            let claims: Vec<_> = specs.iter().map(|(amount, _, token)| (beneficiary, tokens[*token], *amount)).collect();
            let ids = fixture.add(&claims);
            let approved_ids: Vec<u64> = ids
                .iter()
                .zip(&specs)
                .filter(|(_, (_, approved, _))| *approved)
                .map(|(claim_id, _)| *claim_id)
                .collect();
            fixture.approve(beneficiary, &approved_ids, true);

            let expected: u64 = specs.iter().filter(|(_, approved, _)| *approved).map(|(amount, _, _)| amount).sum();

            let mut transfer = RecordingTransfer::default();
            for _ in 0..attempts {
                fixture.claim(beneficiary, &approved_ids, &mut transfer).unwrap();
            }

            prop_assert_eq!(transfer.total(), expected);
            prop_assert!(transfer.transfers.iter().all(|(_, to, amount)| *to == beneficiary && *amount > 0));

            let paid_total: u64 = tokens.iter().map(|token| fixture.payouts.total_paid(&beneficiary, token)).sum();
            prop_assert_eq!(paid_total, expected);
        }

        #[test]
        fn prop_query_matches_payout(specs in claim_specs(), removed in prop::collection::vec(any::<bool>(), MAX_ENTRIES_PER_CALL)) {
            let mut fixture = LedgerFixture::new();
            let admin = fixture.admin;
            let beneficiary = Pubkey::new_unique();
            let token = Pubkey::new_unique();

            let claims: Vec<_> = specs.iter().map(|(amount, _, _)| (beneficiary, token, *amount)).collect();
            let ids = fixture.add(&claims);
            let approved_ids: Vec<u64> = ids
                .iter()
                .zip(&specs)
                .filter(|(_, (_, approved, _))| *approved)
                .map(|(claim_id, _)| *claim_id)
                .collect();
            fixture.approve(beneficiary, &approved_ids, true);

            let removed_ids: Vec<u64> = ids.iter().zip(&removed).filter(|(_, removed)| **removed).map(|(claim_id, _)| *claim_id).collect();
            fixture.engine().remove_claims(&admin, &targets(beneficiary, &removed_ids)).unwrap();

            // Unapproved ids are harmless in a query and fatal in a claim call
            let quoted = fixture.store.claimable_for_user(&beneficiary, &ids, None).unwrap();
            let per_id: u64 = fixture.store.claimable_for_ids(&beneficiary, &ids).iter().sum();
            prop_assert_eq!(quoted, per_id);

            let mut transfer = RecordingTransfer::default();
            fixture.claim(beneficiary, &approved_ids, &mut transfer).unwrap();
            prop_assert_eq!(transfer.total(), quoted);
        }

        #[test]
        fn prop_unapproved_claims_never_pay(amounts in prop::collection::vec(0u64..1_000_000, 1..=MAX_ENTRIES_PER_CALL)) {
            let mut fixture = LedgerFixture::new();
            let beneficiary = Pubkey::new_unique();
            let token = Pubkey::new_unique();

            let claims: Vec<_> = amounts.iter().map(|amount| (beneficiary, token, *amount)).collect();
            let ids = fixture.add(&claims);
            let before = fixture.store.clone();

            let mut transfer = RecordingTransfer::default();
            let result = fixture.claim(beneficiary, &ids, &mut transfer);

            prop_assert!(result.is_err());
            prop_assert!(transfer.transfers.is_empty());
            prop_assert_eq!(&fixture.store, &before);
        }
    }
}
