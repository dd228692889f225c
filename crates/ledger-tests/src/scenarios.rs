//! End-to-end scenarios, run as a signer M/I/A/B would submit them
//! against a shared ledger.

#[cfg(test)]
mod tests {
    use ledger_core::adapters::MemoryStateStore;
    use ledger_core::address;
    use ledger_core::ports::inbound::*;
    use ledger_core::service::CASH_TOKEN;
    use ledger_core::{apply, Ledger};
    use ledger_types::{Attribute, AssetAmount, LedgerError};

    const MANAGER: &str = "pk-m";
    const ISSUER: &str = "pk-i";
    const ALICE: &str = "pk-a";
    const BOB: &str = "pk-b";

    fn bootstrap(ledger: &Ledger<'_, MemoryStateStore>) {
        apply(
            Payload::SetManager(SetManagerBody {
                name: "m".into(),
                endorsement: vec![],
            }),
            MANAGER,
            ledger,
        )
        .unwrap();
    }

    #[test]
    fn scenario_1_bootstrapping() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        bootstrap(&ledger);

        assert_eq!(
            ledger.manager().unwrap().unwrap().public_key,
            MANAGER.to_string()
        );

        let err = apply(
            Payload::SetManager(SetManagerBody {
                name: "m2".into(),
                endorsement: vec![],
            }),
            ALICE,
            &ledger,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Conflict(_)));
    }

    #[test]
    fn scenario_2_issuer_plus_cash() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        bootstrap(&ledger);

        apply(
            Payload::SetIssuer(SetIssuerBody {
                name: "i".into(),
                endorsement: vec![],
            }),
            ISSUER,
            &ledger,
        )
        .unwrap();

        assert_eq!(
            ledger.issuer().unwrap().unwrap().public_key,
            ISSUER.to_string()
        );
        let cash_hex = address::token_address(CASH_TOKEN);
        let balance = ledger.balance(ISSUER, &cash_hex).unwrap().unwrap();
        assert_eq!(balance.asset.total_supply, 1_000_000_000.0);
    }

    fn setup_mint_and_accounts(ledger: &Ledger<'_, MemoryStateStore>) {
        bootstrap(ledger);
        apply(
            Payload::SetAccount(SetAccountBody {
                name: "a".into(),
                endorsement: vec![],
            }),
            ALICE,
            ledger,
        )
        .unwrap();
        apply(
            Payload::SetAccount(SetAccountBody {
                name: "b".into(),
                endorsement: vec![],
            }),
            BOB,
            ledger,
        )
        .unwrap();
        apply(
            Payload::IssueToken(IssueTokenBody {
                name: "T".into(),
                total_supply: 100.0,
                attributes: vec![],
            }),
            MANAGER,
            ledger,
        )
        .unwrap();
    }

    #[test]
    fn scenario_3_mint_and_transfer() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_mint_and_accounts(&ledger);

        let token_hex = address::token_address("T");
        assert_eq!(
            ledger.token("T").unwrap().unwrap().issuer_pkey,
            MANAGER.to_string()
        );

        apply(
            Payload::Transfer(TransferBody {
                receiver_pkey: BOB.into(),
                asset: AssetAmount {
                    name: "T".into(),
                    total_supply: 30.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            MANAGER,
            &ledger,
        )
        .unwrap();

        assert_eq!(
            ledger.balance(MANAGER, &token_hex).unwrap().unwrap().asset.total_supply,
            70.0
        );
        assert_eq!(
            ledger.balance(BOB, &token_hex).unwrap().unwrap().asset.total_supply,
            30.0
        );
    }

    #[test]
    fn scenario_4_endorsement_deny() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_mint_and_accounts(&ledger);

        apply(
            Payload::SetEndorsement(SetEndorsementBody {
                public_key: BOB.into(),
                endorsement: vec![Attribute::flag("blacklist")],
            }),
            MANAGER,
            &ledger,
        )
        .unwrap();

        let err = apply(
            Payload::Transfer(TransferBody {
                receiver_pkey: BOB.into(),
                asset: AssetAmount {
                    name: "T".into(),
                    total_supply: 1.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            MANAGER,
            &ledger,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::NotEndorsed(_)));
    }

    #[test]
    fn scenario_5_heartbeat_payout() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_mint_and_accounts(&ledger);
        apply(
            Payload::SetIssuer(SetIssuerBody {
                name: "i".into(),
                endorsement: vec![],
            }),
            ISSUER,
            &ledger,
        )
        .unwrap();

        apply(
            Payload::Transfer(TransferBody {
                receiver_pkey: BOB.into(),
                asset: AssetAmount {
                    name: "T".into(),
                    total_supply: 30.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            MANAGER,
            &ledger,
        )
        .unwrap();

        let mut token = ledger.token("T").unwrap().unwrap();
        token.attributes.push(Attribute {
            key: "payments".into(),
            value: vec![ledger_types::AttributeValue {
                key: "05/01/2025".into(),
                value: "10".into(),
            }],
        });
        ledger.put_token(&token).unwrap();

        apply(
            Payload::Heartbeat(HeartbeatBody {
                token_name: "T".into(),
                date: "1746057600.0".into(), // 05/01/2025 UTC midnight
                receivers_pkey: vec![MANAGER.into(), BOB.into()],
            }),
            ISSUER,
            &ledger,
        )
        .unwrap();

        let cash_hex = address::token_address(CASH_TOKEN);
        let manager_cash = ledger.balance(MANAGER, &cash_hex).unwrap().unwrap();
        let bob_cash = ledger.balance(BOB, &cash_hex).unwrap().unwrap();
        assert_eq!(manager_cash.asset.total_supply, 7.0);
        assert_eq!(bob_cash.asset.total_supply, 3.0);
    }

    #[test]
    fn scenario_6_insufficient_balance() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_mint_and_accounts(&ledger);

        let err = apply(
            Payload::Transfer(TransferBody {
                receiver_pkey: BOB.into(),
                asset: AssetAmount {
                    name: "T".into(),
                    total_supply: 1000.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            MANAGER,
            &ledger,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }
}
