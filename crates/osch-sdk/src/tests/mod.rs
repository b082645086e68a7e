//! Test module for the osch SDK.

#[cfg(test)]
mod integration_tests {
    use crate::account::Account;
    use crate::transaction::{TransactionBuilder, TransactionOptions};
    use crate::types::{AccountId, Asset, Memo};
    use crate::{Network, Operation};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_end_to_end_envelope() {
        let id = AccountId::new([21u8; 32]).to_string();
        let mut account = Account::new(&id, "100").unwrap();

        let mut builder = TransactionBuilder::new(
            &mut account,
            TransactionOptions {
                fee: Some(100),
                ..Default::default()
            },
        );
        builder.add_operation(Operation::from_encoded(vec![0x01]));
        builder.set_timeout(30).unwrap();

        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let tx = builder.build().unwrap();

        assert_eq!(tx.fee(), 100);
        assert_eq!(tx.sequence_number(), 101);
        let max_time = tx.time_bounds().unwrap().max_time;
        assert!(max_time >= before + 30 && max_time <= before + 35);
        assert_eq!(account.sequence_number(), "101");
    }

    #[test]
    fn test_builder_consumes_account_exclusively() {
        // The account is usable again once the builder is gone, one
        // envelope and one increment later.
        let id = AccountId::new([22u8; 32]).to_string();
        let mut account = Account::new(&id, "0").unwrap();
        {
            let mut builder =
                TransactionBuilder::new(&mut account, TransactionOptions::default());
            builder.set_timeout(0).unwrap();
            builder.build().unwrap();
        }
        assert_eq!(account.sequence_number(), "1");
    }

    #[test]
    fn test_memo_flows_into_envelope() {
        let id = AccountId::new([23u8; 32]).to_string();
        let mut account = Account::new(&id, "0").unwrap();
        let mut builder = TransactionBuilder::new(
            &mut account,
            TransactionOptions {
                memo: Some(Memo::text("payment ref 9").unwrap()),
                ..Default::default()
            },
        );
        builder.set_timeout(0).unwrap();
        let tx = builder.build().unwrap();
        assert_eq!(tx.memo(), &Memo::Text("payment ref 9".to_string()));
    }

    #[test]
    fn test_asset_issuer_uses_identity_codec() {
        let issuer = AccountId::new([24u8; 32]);
        let asset = Asset::new("USDC", Some(&issuer.to_string())).unwrap();
        assert_eq!(asset.issuer(), Some(&issuer));
    }

    #[test]
    fn test_network_domain_separation() {
        // Different ledger instances must never share a signature domain.
        let ids = [
            Network::public().network_id(),
            Network::test().network_id(),
            Network::new("standalone osch network").network_id(),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
        assert_ne!(ids[1], ids[2]);
    }
}

#[cfg(test)]
mod property_tests {
    use crate::account::Account;
    use crate::types::{AccountId, Asset};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_identity_round_trip(key in any::<[u8; 32]>()) {
            let id = AccountId::new(key);
            let encoded = id.to_string();
            prop_assert_eq!(encoded.len(), 56);
            prop_assert!(encoded.starts_with('G'));
            prop_assert_eq!(AccountId::from_string(&encoded).unwrap(), id);
        }

        #[test]
        fn prop_asset_canonical_round_trip(
            code in "[A-Za-z0-9]{1,12}",
            key in any::<[u8; 32]>(),
        ) {
            let issuer = AccountId::new(key).to_string();
            let asset = Asset::new(&code, Some(&issuer)).unwrap();
            let decoded = Asset::from_canonical_form(&asset.to_canonical_form()).unwrap();
            prop_assert_eq!(decoded, asset);
        }

        #[test]
        fn prop_sequence_string_round_trip(seq in any::<u128>()) {
            let id = AccountId::new([25u8; 32]).to_string();
            let account = Account::new(&id, &seq.to_string()).unwrap();
            prop_assert_eq!(account.sequence_number(), seq.to_string());
        }

        #[test]
        fn prop_increment_adds_exactly_one(seq in any::<u64>()) {
            let id = AccountId::new([26u8; 32]).to_string();
            let mut account = Account::new(&id, &seq.to_string()).unwrap();
            account.increment_sequence_number();
            prop_assert_eq!(account.sequence_number(), (u128::from(seq) + 1).to_string());
        }
    }
}
