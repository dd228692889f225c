//! # Core Domain Entities
//!
//! `Account`, `Token`, `Balance`, `Transfer` as specified by the registry's
//! data model. All monetary values are IEEE-754 doubles; public keys and
//! token identifiers are opaque strings. Field order is load-bearing: the
//! codec encodes struct fields in declaration order, and that order
//! participates in the bit-for-bit determinism the wire format promises.

use serde::{Deserialize, Serialize};

/// A single nested key/value pair inside an [`Attribute`]'s `value` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Nested key.
    pub key: String,
    /// Nested value.
    pub value: String,
}

/// A one-level-nested key/value tag attached to an account or token.
///
/// Used for `Account.endorsement`, `Token.attributes`, and
/// `Token.immutables`. The nesting is exactly one level deep: `value` is a
/// flat list of [`AttributeValue`], never a list of `Attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Tag key, e.g. `"blacklist"`, `"payments"`, `"endorsement"`.
    pub key: String,
    /// Nested values for this tag. Empty for boolean-style tags like
    /// `"blacklist"` or `"whitelist"`.
    pub value: Vec<AttributeValue>,
}

impl Attribute {
    /// Shorthand for a boolean-style tag with no nested value.
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Vec::new(),
        }
    }
}

/// A flat key/value attribute on a [`Balance`] (no nesting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAttribute {
    /// Attribute key.
    pub key: String,
    /// Attribute value.
    pub value: String,
}

/// An on-ledger account: a public key, a display name, and the
/// endorsement tags a manager has attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account's public key; also its state-address identity.
    pub public_key: String,
    /// Display name.
    pub name: String,
    /// Endorsement tags, overwritten wholesale by SET_ENDORSEMENT.
    pub endorsement: Vec<Attribute>,
}

/// Token activation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenStatus {
    /// Accepted as the subject of any mutating operation.
    #[default]
    Active,
    /// Rejected as the subject of any mutating operation except
    /// SET_TOKEN_STATUS.
    Inactive,
}

/// A named fungible asset with a total supply fixed at issue time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier, e.g. `"Cash Token"`.
    pub name: String,
    /// Public key of the issuing manager.
    pub issuer_pkey: String,
    /// Total supply at issue time. Monotonic apart from heartbeat payouts.
    pub total_supply: f64,
    /// Activation status.
    pub status: TokenStatus,
    /// Mutable attributes, e.g. the `"payments"` schedule consumed by
    /// HEARTBEAT.
    pub attributes: Vec<Attribute>,
    /// Write-once-and-append attributes set via ADD_IMMUTABLE.
    pub immutables: Vec<Attribute>,
}

/// A token-shaped amount, as carried inside a [`Balance`] or [`Transfer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAmount {
    /// Token name.
    pub name: String,
    /// Amount of `name` held or moved.
    pub total_supply: f64,
}

/// The holding of one [`Token`] by one [`Account`]. One per (account,
/// token) pair; never deleted once materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Holding account's public key.
    pub owner_pkey: String,
    /// Token and amount held.
    pub asset: AssetAmount,
    /// Freeform attributes, replaced wholesale by SET_BALANCE_ATTRIBUTES.
    pub attributes: Vec<BalanceAttribute>,
}

/// An append-only record of a completed transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Sender's public key.
    pub sender_pkey: String,
    /// Sender's display name at the time of transfer.
    pub sender_name: String,
    /// Receiver's public key.
    pub receiver_pkey: String,
    /// Receiver's display name at the time of transfer.
    pub receiver_name: String,
    /// Token and amount moved.
    pub asset: AssetAmount,
    /// Decimal seconds-since-epoch string carried by the originating payload.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_status_defaults_active() {
        assert_eq!(TokenStatus::default(), TokenStatus::Active);
    }

    #[test]
    fn flag_attribute_has_no_nested_value() {
        let attr = Attribute::flag("blacklist");
        assert_eq!(attr.key, "blacklist");
        assert!(attr.value.is_empty());
    }
}
