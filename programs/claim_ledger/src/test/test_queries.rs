#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use crate::test::fixture::*;

    #[test]
    fn test_claimable_ignores_every_non_payable_claim() {
        let mut fixture = LedgerFixture::new();
        let admin = fixture.admin;
        let beneficiary = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let token = Pubkey::new_unique();

        // approved, unapproved, removed, claimed, someone else's
        let ids = fixture.add(&[
            (beneficiary, token, 10),
            (beneficiary, token, 20),
            (beneficiary, token, 30),
            (beneficiary, token, 40),
            (other, token, 50),
        ]);
        fixture.approve(beneficiary, &[ids[0], ids[2], ids[3]], true);
        fixture.approve(other, &ids[4..], true);
        fixture
            .engine()
            .remove_claims(&admin, &targets(beneficiary, &ids[2..3]))
            .unwrap();
        let mut transfer = RecordingTransfer::default();
        fixture.claim(beneficiary, &ids[3..4], &mut transfer).unwrap();

        assert_eq!(
            fixture.store.claimable_for_ids(&beneficiary, &ids),
            vec![10, 0, 0, 0, 0]
        );
        // Nonexistent ids, including one below the first id
        assert_eq!(fixture.store.claimable_for_ids(&beneficiary, &[0, 1_000]), vec![0, 0]);
        assert_eq!(
            fixture.store.claimable_for_user(&beneficiary, &ids, None).unwrap(),
            10
        );
    }

    #[test]
    fn test_claimable_for_user_filters_by_token() {
        let mut fixture = LedgerFixture::new();
        let beneficiary = Pubkey::new_unique();
        let token_a = Pubkey::new_unique();
        let token_b = Pubkey::new_unique();
        let ids = fixture.add(&[
            (beneficiary, token_a, 100),
            (beneficiary, token_b, 50),
            (beneficiary, token_a, 7),
        ]);
        fixture.approve(beneficiary, &ids, true);

        let store = &fixture.store;
        assert_eq!(store.claimable_for_user(&beneficiary, &ids, None).unwrap(), 157);
        assert_eq!(store.claimable_for_user(&beneficiary, &ids, Some(&token_a)).unwrap(), 107);
        assert_eq!(store.claimable_for_user(&beneficiary, &ids, Some(&token_b)).unwrap(), 50);
        assert_eq!(
            store
                .claimable_for_user(&beneficiary, &ids, Some(&Pubkey::new_unique()))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_claimable_for_user_matches_next_payout() {
        let mut fixture = LedgerFixture::new();
        let beneficiary = Pubkey::new_unique();
        let token = Pubkey::new_unique();
        let ids = fixture.add(&[(beneficiary, token, 64), (beneficiary, token, 36)]);
        fixture.approve(beneficiary, &ids, true);

        // Repeated ids count once, exactly like a claim call pays once
        let query_ids = [ids[0], ids[1], ids[0]];
        let quoted = fixture
            .store
            .claimable_for_user(&beneficiary, &query_ids, None)
            .unwrap();

        let mut transfer = RecordingTransfer::default();
        fixture.claim(beneficiary, &query_ids, &mut transfer).unwrap();

        assert_eq!(quoted, 100);
        assert_eq!(transfer.total(), quoted);
        assert_eq!(
            fixture.store.claimable_for_user(&beneficiary, &query_ids, None).unwrap(),
            0
        );
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut fixture = LedgerFixture::new();
        let beneficiary = Pubkey::new_unique();
        let token = Pubkey::new_unique();
        let ids = fixture.add(&[(beneficiary, token, 5)]);
        fixture.approve(beneficiary, &ids, true);
        let before = fixture.store.clone();

        let _ = fixture.store.claimable_for_ids(&beneficiary, &ids);
        let _ = fixture.store.claimable_for_user(&beneficiary, &ids, Some(&token));
        let _ = fixture.payouts.total_paid(&beneficiary, &token);

        assert_eq!(fixture.store, before);
        assert!(fixture.payouts.totals.is_empty());
    }

    #[test]
    fn test_claimable_for_user_reports_overflow() {
        let mut fixture = LedgerFixture::new();
        let beneficiary = Pubkey::new_unique();
        let token = Pubkey::new_unique();
        let ids = fixture.add(&[(beneficiary, token, u64::MAX), (beneficiary, token, 1)]);
        fixture.approve(beneficiary, &ids, true);

        assert_ledger_error(
            fixture.store.claimable_for_user(&beneficiary, &ids, None),
            crate::error::ClaimLedgerError::ArithmeticOverflow,
        );
        assert_eq!(
            fixture.store.claimable_for_ids(&beneficiary, &ids),
            vec![u64::MAX, 1]
        );
    }
}
