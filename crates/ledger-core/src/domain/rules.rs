//! # Validation & Rules Engine
//!
//! Shared predicates used by the operation handlers in
//! [`crate::service`]. Pure functions over already-fetched entities; no
//! state-store access happens here.

use ledger_types::{Account, Balance, LedgerError, Token, TokenStatus};

/// Manager must exist and the signer must hold its public key.
pub fn manager_only(manager: &Option<Account>, signer: &str) -> Result<(), LedgerError> {
    let manager = manager
        .as_ref()
        .ok_or_else(|| LedgerError::NotFound("manager not registered".into()))?;
    if manager.public_key != signer {
        return Err(LedgerError::Forbidden(format!(
            "account {signer} does not hold the manager role"
        )));
    }
    Ok(())
}

/// Issuer must exist; returns it for convenience.
pub fn require_issuer(issuer: &Option<Account>) -> Result<&Account, LedgerError> {
    issuer
        .as_ref()
        .ok_or_else(|| LedgerError::NotFound("issuer not registered".into()))
}

/// A Manager/Issuer singleton must not already be populated.
pub fn singleton_absent(existing: &Option<Account>, what: &str) -> Result<(), LedgerError> {
    if let Some(account) = existing {
        return Err(LedgerError::Conflict(format!(
            "{what} already exists: {}",
            account.name
        )));
    }
    Ok(())
}

/// An account must not already exist at this address.
pub fn account_absent(existing: &Option<Account>) -> Result<(), LedgerError> {
    if let Some(account) = existing {
        return Err(LedgerError::Conflict(format!(
            "account already exists: {}",
            account.name
        )));
    }
    Ok(())
}

/// An account must exist; returns it for convenience.
pub fn require_account<'a>(
    account: &'a Option<Account>,
    pkey: &str,
) -> Result<&'a Account, LedgerError> {
    account
        .as_ref()
        .ok_or_else(|| LedgerError::NotFound(format!("account not registered: {pkey}")))
}

/// A token must not already be issued.
pub fn token_absent(existing: &Option<Token>, name: &str) -> Result<(), LedgerError> {
    if existing.is_some() {
        return Err(LedgerError::Conflict(format!(
            "token already issued: {name}"
        )));
    }
    Ok(())
}

/// A token must exist; returns it for convenience.
pub fn require_token<'a>(token: &'a Option<Token>, name: &str) -> Result<&'a Token, LedgerError> {
    token
        .as_ref()
        .ok_or_else(|| LedgerError::NotFound(format!("token not issued: {name}")))
}

/// A token must be ACTIVE.
pub fn token_active(token: &Token) -> Result<(), LedgerError> {
    match token.status {
        TokenStatus::Active => Ok(()),
        TokenStatus::Inactive => Err(LedgerError::InactiveToken(format!(
            "token has INACTIVE status: {}",
            token.name
        ))),
    }
}

/// An amount must be strictly positive.
pub fn positive_amount(amount: f64) -> Result<(), LedgerError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(
            "cannot use a negative or zero value".into(),
        ))
    }
}

/// A balance must exist; returns it for convenience.
pub fn require_balance<'a>(
    balance: &'a Option<Balance>,
    pkey: &str,
) -> Result<&'a Balance, LedgerError> {
    balance
        .as_ref()
        .ok_or_else(|| LedgerError::NotFound(format!("no balance: {pkey}")))
}

/// A balance must cover `amount`.
pub fn sufficient_balance(balance: &Balance, amount: f64) -> Result<(), LedgerError> {
    if balance.asset.total_supply < amount {
        return Err(LedgerError::InvalidAmount(
            "not enough balance for the transfer".into(),
        ));
    }
    Ok(())
}

/// The endorsement gate for TRANSFER. Evaluated as an ordered
/// cascade; the first matching rule wins. Do not reorder or collapse
/// these checks into a single table — rule 2 can allow even when rule 1
/// would have denied, which only holds if 1 runs first.
pub fn transfer_allowed(receiver: &Account, token: &Token) -> Result<(), LedgerError> {
    // 1. Blacklisted receiver is always denied.
    if receiver.endorsement.iter().any(|a| a.key == "blacklist") {
        return Err(LedgerError::NotEndorsed("account is on blacklist".into()));
    }

    // 2. Token opted into blanket transfer endorsement.
    let basic_attrs_allow = token.attributes.iter().any(|a| {
        a.key == "basicattributes"
            && a.value.iter().any(|v| {
                v.key == "transferendorsement" && v.value.eq_ignore_ascii_case("true")
            })
    });
    if basic_attrs_allow {
        return Ok(());
    }

    // 3. Whitelisted receiver.
    if receiver.endorsement.iter().any(|a| a.key == "whitelist") {
        return Ok(());
    }

    // 4/5. Token-level endorsement immutable.
    if let Some(endorsement) = token.immutables.iter().find(|a| a.key == "endorsement") {
        if endorsement.value.is_empty() {
            return Ok(());
        }
        let allowed = endorsement
            .value
            .iter()
            .any(|token_item| receiver.endorsement.iter().any(|acc_item| acc_item.key == token_item.key));
        return if allowed {
            Ok(())
        } else {
            Err(LedgerError::NotEndorsed(
                "account is not endorsed for this token".into(),
            ))
        };
    }

    // 6. No policy in effect: allow.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_types::{Attribute, AttributeValue};

    fn account(endorsement: Vec<Attribute>) -> Account {
        Account {
            public_key: "pk".into(),
            name: "acc".into(),
            endorsement,
        }
    }

    fn token(attributes: Vec<Attribute>, immutables: Vec<Attribute>) -> Token {
        Token {
            name: "T".into(),
            issuer_pkey: "issuer".into(),
            total_supply: 100.0,
            status: TokenStatus::Active,
            attributes,
            immutables,
        }
    }

    #[test]
    fn blacklist_denies_even_if_also_whitelisted() {
        let receiver = account(vec![Attribute::flag("blacklist"), Attribute::flag("whitelist")]);
        let tok = token(vec![], vec![]);
        assert!(matches!(
            transfer_allowed(&receiver, &tok),
            Err(LedgerError::NotEndorsed(_))
        ));
    }

    #[test]
    fn basic_attributes_endorsement_allows_even_without_whitelist() {
        let receiver = account(vec![]);
        let tok = token(
            vec![Attribute {
                key: "basicattributes".into(),
                value: vec![AttributeValue {
                    key: "transferendorsement".into(),
                    value: "TRUE".into(),
                }],
            }],
            vec![],
        );
        assert!(transfer_allowed(&receiver, &tok).is_ok());
    }

    #[test]
    fn whitelist_allows() {
        let receiver = account(vec![Attribute::flag("whitelist")]);
        let tok = token(vec![], vec![]);
        assert!(transfer_allowed(&receiver, &tok).is_ok());
    }

    #[test]
    fn empty_endorsement_immutable_allows_anyone() {
        let receiver = account(vec![]);
        let tok = token(vec![], vec![Attribute::flag("endorsement")]);
        assert!(transfer_allowed(&receiver, &tok).is_ok());
    }

    #[test]
    fn populated_endorsement_immutable_requires_matching_key() {
        let tok = token(
            vec![],
            vec![Attribute {
                key: "endorsement".into(),
                value: vec![AttributeValue {
                    key: "partner".into(),
                    value: String::new(),
                }],
            }],
        );
        let matching_receiver = account(vec![Attribute::flag("partner")]);
        assert!(transfer_allowed(&matching_receiver, &tok).is_ok());

        let non_matching_receiver = account(vec![Attribute::flag("stranger")]);
        assert!(matches!(
            transfer_allowed(&non_matching_receiver, &tok),
            Err(LedgerError::NotEndorsed(_))
        ));
    }

    #[test]
    fn no_policy_allows_by_default() {
        let receiver = account(vec![]);
        let tok = token(vec![], vec![]);
        assert!(transfer_allowed(&receiver, &tok).is_ok());
    }
}
