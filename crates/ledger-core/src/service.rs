//! # Operation Handlers
//!
//! One handler per [`Payload`] variant, dispatched from [`apply`]. Mirrors
//! `TokenTransactionHandler::apply` in the reference implementation's
//! `handler.py`, restructured as an exhaustive Rust `match`.

use ledger_types::{Account, AssetAmount, Attribute, Balance, LedgerError, Token, TokenStatus};

use crate::address;
use crate::domain::rules;
use crate::dates::heartbeat_calendar_date;
use crate::ports::inbound::*;
use crate::ports::outbound::StateStore;
use crate::state::Ledger;

/// The token auto-minted when the Issuer is registered.
pub const CASH_TOKEN: &str = "Cash Token";

/// Apply one decoded payload against `ledger`, on behalf of `signer`.
pub fn apply<S: StateStore + ?Sized>(
    payload: Payload,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    match payload {
        Payload::SetManager(body) => set_manager(body, signer, ledger),
        Payload::SetIssuer(body) => set_issuer(body, signer, ledger),
        Payload::SetAccount(body) => set_account(body, signer, ledger),
        Payload::SetEndorsement(body) => set_endorsement(body, signer, ledger),
        Payload::AddImmutable(body) => add_immutable(body, signer, ledger),
        Payload::IssueToken(body) => issue_token(body, signer, ledger),
        Payload::SetTokenStatus(body) => set_token_status(body, signer, ledger),
        Payload::Transfer(body) => transfer(body, signer, ledger),
        Payload::Heartbeat(body) => heartbeat(body, ledger),
        Payload::SetBalanceAttributes(body) => set_balance_attributes(body, ledger),
    }
}

fn set_manager<S: StateStore + ?Sized>(
    body: SetManagerBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::singleton_absent(&ledger.manager()?, "Manager")?;
    ledger.put_manager(&Account {
        public_key: signer.to_string(),
        name: body.name,
        endorsement: body.endorsement,
    })
}

fn set_issuer<S: StateStore + ?Sized>(
    body: SetIssuerBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::singleton_absent(&ledger.issuer()?, "Issuer")?;
    ledger.put_issuer(&Account {
        public_key: signer.to_string(),
        name: body.name,
        endorsement: body.endorsement,
    })?;
    mint_token(
        Token {
            name: CASH_TOKEN.to_string(),
            issuer_pkey: signer.to_string(),
            total_supply: 1_000_000_000.0,
            status: TokenStatus::Active,
            attributes: vec![],
            immutables: vec![],
        },
        ledger,
    )
}

fn set_account<S: StateStore + ?Sized>(
    body: SetAccountBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::account_absent(&ledger.account(signer)?)?;
    ledger.put_account(&Account {
        public_key: signer.to_string(),
        name: body.name,
        endorsement: body.endorsement,
    })
}

fn set_endorsement<S: StateStore + ?Sized>(
    body: SetEndorsementBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::manager_only(&ledger.manager()?, signer)?;
    let mut target = rules::require_account(&ledger.account(&body.public_key)?, &body.public_key)?
        .clone();
    target.endorsement = body.endorsement;
    ledger.put_account(&target)
}

fn add_immutable<S: StateStore + ?Sized>(
    body: AddImmutableBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    if body.immutables.is_empty() {
        return Err(LedgerError::BadPayload(
            "immutables list is empty, nothing to add".into(),
        ));
    }
    rules::manager_only(&ledger.manager()?, signer)?;

    let token_opt = ledger.token(&body.name)?;
    let token = rules::require_token(&token_opt, &body.name)?;
    rules::token_active(token)?;

    let mut duplicated = Vec::new();
    for attr in &body.immutables {
        if token.immutables.iter().any(|existing| existing.key == attr.key) {
            duplicated.push(attr.key.clone());
        }
    }
    if !duplicated.is_empty() {
        return Err(LedgerError::Conflict(format!(
            "immutables already exist: {duplicated:?}"
        )));
    }

    let mut new_token = token.clone();
    let mut merged = body.immutables;
    merged.extend(token.immutables.clone());
    new_token.immutables = merged;
    ledger.put_token(&new_token)
}

fn issue_token<S: StateStore + ?Sized>(
    body: IssueTokenBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::manager_only(&ledger.manager()?, signer)?;
    rules::token_absent(&ledger.token(&body.name)?, &body.name)?;
    rules::positive_amount(body.total_supply)?;

    mint_token(
        Token {
            name: body.name,
            issuer_pkey: signer.to_string(),
            total_supply: body.total_supply,
            status: TokenStatus::Active,
            attributes: body.attributes,
            immutables: vec![],
        },
        ledger,
    )
}

/// Write a freshly-issued token and credit its full supply to the
/// issuer's balance, per `TokenState.issue_token`.
fn mint_token<S: StateStore + ?Sized>(token: Token, ledger: &Ledger<'_, S>) -> Result<(), LedgerError> {
    let token_hex = address::token_address(&token.name);
    let balance = Balance {
        owner_pkey: token.issuer_pkey.clone(),
        asset: AssetAmount {
            name: token.name.clone(),
            total_supply: token.total_supply,
        },
        attributes: vec![],
    };
    ledger.put_token(&token)?;
    ledger.put_balance(&balance, &token_hex)
}

fn set_token_status<S: StateStore + ?Sized>(
    body: SetTokenStatusBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    rules::manager_only(&ledger.manager()?, signer)?;
    let token_opt = ledger.token(&body.name)?;
    let mut token = rules::require_token(&token_opt, &body.name)?.clone();
    token.status = body.status;
    ledger.put_token(&token)
}

fn transfer<S: StateStore + ?Sized>(
    body: TransferBody,
    signer: &str,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    let sender = rules::require_account(&ledger.account(signer)?, signer)?.clone();
    let receiver =
        rules::require_account(&ledger.account(&body.receiver_pkey)?, &body.receiver_pkey)?
            .clone();

    let token_opt = ledger.token(&body.asset.name)?;
    let token = rules::require_token(&token_opt, &body.asset.name)?;
    rules::token_active(token)?;

    let token_hex = address::token_address(&token.name);
    let sender_balance = rules::require_balance(&ledger.balance(signer, &token_hex)?, signer)?
        .clone();

    rules::positive_amount(body.asset.total_supply)?;
    rules::sufficient_balance(&sender_balance, body.asset.total_supply)?;
    rules::transfer_allowed(&receiver, token)?;

    ledger.transfer(
        &token_hex,
        &sender.public_key,
        &sender.name,
        &receiver.public_key,
        &receiver.name,
        &body.asset,
        &body.timestamp,
        false,
    )
}

fn heartbeat<S: StateStore + ?Sized>(
    body: HeartbeatBody,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    let issuer = rules::require_issuer(&ledger.issuer()?)?.clone();

    let mut receiver_names = std::collections::HashMap::new();
    for receiver_pkey in &body.receivers_pkey {
        let account_opt = ledger.account(receiver_pkey)?;
        let receiver = rules::require_account(&account_opt, receiver_pkey)?;
        receiver_names.insert(receiver.public_key.clone(), receiver.name.clone());
        let token_hex = address::token_address(&body.token_name);
        rules::require_balance(&ledger.balance(receiver_pkey, &token_hex)?, receiver_pkey)?;
    }

    let cash_token_opt = ledger.token(CASH_TOKEN)?;
    let cash_token = rules::require_token(&cash_token_opt, CASH_TOKEN)?.clone();
    rules::token_active(&cash_token)?;

    let token_opt = ledger.token(&body.token_name)?;
    let token = rules::require_token(&token_opt, &body.token_name)?.clone();
    rules::token_active(&token)?;

    let payments: Vec<&Attribute> = token
        .attributes
        .iter()
        .filter(|a| a.key == "payments")
        .collect();
    if payments.iter().all(|p| p.value.is_empty()) {
        return Err(LedgerError::ScheduleEmpty(format!(
            "\"payments\" attribute does not exist for token: {}",
            token.name
        )));
    }

    let ts_date = heartbeat_calendar_date(&body.date)?;
    let token_hex = address::token_address(&token.name);
    let cash_token_hex = address::token_address(CASH_TOKEN);

    for payment_group in &payments {
        for payment in &payment_group.value {
            let payment_date = &payment.key;
            let amount: f64 = payment.value.parse().map_err(|_| {
                LedgerError::BadPayload(format!("non-numeric payment amount: {}", payment.value))
            })?;
            if &ts_date != payment_date {
                continue;
            }

            let issuer_balance_opt = ledger.balance(&cash_token.issuer_pkey, &cash_token_hex)?;
            let issuer_cash_balance =
                rules::require_balance(&issuer_balance_opt, &cash_token.issuer_pkey)?;
            if issuer_cash_balance.asset.total_supply < amount {
                return Err(LedgerError::InvalidAmount(format!(
                    "issuer does not have enough balance to pay the heartbeat: required {amount}, available {}",
                    issuer_cash_balance.asset.total_supply
                )));
            }

            for receiver_pkey in &body.receivers_pkey {
                let receiver_token_balance = ledger
                    .balance(receiver_pkey, &token_hex)?
                    .map(|b| b.asset.total_supply)
                    .unwrap_or(0.0);
                let share = receiver_token_balance / token.total_supply * amount;

                ledger.transfer(
                    &cash_token_hex,
                    &issuer.public_key,
                    &issuer.name,
                    receiver_pkey,
                    receiver_names.get(receiver_pkey).map(String::as_str).unwrap_or(""),
                    &AssetAmount {
                        name: CASH_TOKEN.to_string(),
                        total_supply: share,
                    },
                    &body.date,
                    false,
                )?;
            }
        }
    }
    Ok(())
}

fn set_balance_attributes<S: StateStore + ?Sized>(
    body: SetBalanceAttributesBody,
    ledger: &Ledger<'_, S>,
) -> Result<(), LedgerError> {
    for identifier in &body.identifiers {
        let token_hex = address::token_address(identifier);
        let mut balance = ledger
            .balance(&body.owner_pkey, &token_hex)?
            .ok_or_else(|| {
                LedgerError::NotFound(format!(
                    "balance does not exist for account {} and token {identifier}",
                    body.owner_pkey
                ))
            })?;
        balance.attributes = body.attributes.clone();
        ledger.put_balance(&balance, &token_hex)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStateStore;

    fn apply_ok<S: StateStore + ?Sized>(payload: Payload, signer: &str, ledger: &Ledger<'_, S>) {
        apply(payload, signer, ledger).unwrap();
    }

    #[test]
    fn set_manager_then_duplicate_is_conflict() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        apply_ok(
            Payload::SetManager(SetManagerBody {
                name: "mgr".into(),
                endorsement: vec![],
            }),
            "pk-mgr",
            &ledger,
        );
        let err = apply(
            Payload::SetManager(SetManagerBody {
                name: "mgr2".into(),
                endorsement: vec![],
            }),
            "pk-other",
            &ledger,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Conflict(_)));
    }

    #[test]
    fn set_issuer_mints_cash_token_with_full_supply_credited() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        apply_ok(
            Payload::SetIssuer(SetIssuerBody {
                name: "issuer".into(),
                endorsement: vec![],
            }),
            "pk-issuer",
            &ledger,
        );
        let cash = ledger.token(CASH_TOKEN).unwrap().unwrap();
        assert_eq!(cash.total_supply, 1_000_000_000.0);
        let cash_hex = address::token_address(CASH_TOKEN);
        let balance = ledger.balance("pk-issuer", &cash_hex).unwrap().unwrap();
        assert_eq!(balance.asset.total_supply, 1_000_000_000.0);
    }

    fn setup_transferable_token(ledger: &Ledger<'_, MemoryStateStore>) {
        apply_ok(
            Payload::SetManager(SetManagerBody {
                name: "mgr".into(),
                endorsement: vec![],
            }),
            "pk-mgr",
            ledger,
        );
        apply_ok(
            Payload::SetAccount(SetAccountBody {
                name: "alice".into(),
                endorsement: vec![],
            }),
            "pk-alice",
            ledger,
        );
        apply_ok(
            Payload::SetAccount(SetAccountBody {
                name: "bob".into(),
                endorsement: vec![],
            }),
            "pk-bob",
            ledger,
        );
        apply_ok(
            Payload::IssueToken(IssueTokenBody {
                name: "Gold".into(),
                total_supply: 100.0,
                attributes: vec![],
            }),
            "pk-mgr",
            ledger,
        );
    }

    #[test]
    fn transfer_moves_balance_and_records_event() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_transferable_token(&ledger);

        apply_ok(
            Payload::Transfer(TransferBody {
                receiver_pkey: "pk-bob".into(),
                asset: AssetAmount {
                    name: "Gold".into(),
                    total_supply: 40.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            "pk-mgr",
            &ledger,
        );

        let token_hex = address::token_address("Gold");
        let sender_balance = ledger.balance("pk-mgr", &token_hex).unwrap().unwrap();
        let receiver_balance = ledger.balance("pk-bob", &token_hex).unwrap().unwrap();
        assert_eq!(sender_balance.asset.total_supply, 60.0);
        assert_eq!(receiver_balance.asset.total_supply, 40.0);
    }

    #[test]
    fn transfer_denies_blacklisted_receiver() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        setup_transferable_token(&ledger);
        apply_ok(
            Payload::SetEndorsement(SetEndorsementBody {
                public_key: "pk-bob".into(),
                endorsement: vec![Attribute::flag("blacklist")],
            }),
            "pk-mgr",
            &ledger,
        );

        let err = apply(
            Payload::Transfer(TransferBody {
                receiver_pkey: "pk-bob".into(),
                asset: AssetAmount {
                    name: "Gold".into(),
                    total_supply: 10.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            "pk-mgr",
            &ledger,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::NotEndorsed(_)));
    }

    #[test]
    fn heartbeat_pays_out_proportionally_on_scheduled_date() {
        let store = MemoryStateStore::new();
        let ledger = Ledger::new(&store);
        apply_ok(
            Payload::SetManager(SetManagerBody {
                name: "mgr".into(),
                endorsement: vec![],
            }),
            "pk-mgr",
            &ledger,
        );
        apply_ok(
            Payload::SetIssuer(SetIssuerBody {
                name: "issuer".into(),
                endorsement: vec![],
            }),
            "pk-issuer",
            &ledger,
        );
        apply_ok(
            Payload::SetAccount(SetAccountBody {
                name: "alice".into(),
                endorsement: vec![],
            }),
            "pk-alice",
            &ledger,
        );
        apply_ok(
            Payload::IssueToken(IssueTokenBody {
                name: "Gold".into(),
                total_supply: 100.0,
                attributes: vec![Attribute {
                    key: "payments".into(),
                    value: vec![ledger_types::AttributeValue {
                        key: "05/01/2025".into(),
                        value: "1000".into(),
                    }],
                }],
            }),
            "pk-mgr",
            &ledger,
        );
        apply_ok(
            Payload::Transfer(TransferBody {
                receiver_pkey: "pk-alice".into(),
                asset: AssetAmount {
                    name: "Gold".into(),
                    total_supply: 25.0,
                },
                timestamp: "1700000000.0".into(),
            }),
            "pk-mgr",
            &ledger,
        );

        apply_ok(
            Payload::Heartbeat(HeartbeatBody {
                token_name: "Gold".into(),
                date: "1746100800.0".into(),
                receivers_pkey: vec!["pk-alice".into()],
            }),
            "anyone",
            &ledger,
        );

        let cash_hex = address::token_address(CASH_TOKEN);
        let alice_cash = ledger.balance("pk-alice", &cash_hex).unwrap().unwrap();
        assert_eq!(alice_cash.asset.total_supply, 250.0);
    }
}
