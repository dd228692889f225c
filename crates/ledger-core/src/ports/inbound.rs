//! # Driving Port: inbound payload
//!
//! The tagged payload the collaborator hands the processor, one variant
//! per operation. The enum is exhaustively matched by
//! [`crate::service::apply`], so adding a variant here cannot silently
//! skip a handler — the match arm is a compile error until one is added.

use ledger_types::{Attribute, AssetAmount, BalanceAttribute, TokenStatus};
use serde::{Deserialize, Serialize};

/// One submitted transaction body, already decoded by [`crate::codec`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Payload {
    /// Register the first (and only) Manager account.
    SetManager(SetManagerBody),
    /// Register the first (and only) Issuer account; auto-mints Cash Token.
    SetIssuer(SetIssuerBody),
    /// Register a new account for the signer.
    SetAccount(SetAccountBody),
    /// Replace a target account's endorsement list. Manager-only.
    SetEndorsement(SetEndorsementBody),
    /// Append immutable attributes to a token. Manager-only.
    AddImmutable(AddImmutableBody),
    /// Issue a new token. Manager-only.
    IssueToken(IssueTokenBody),
    /// Flip a token's ACTIVE/INACTIVE status. Manager-only.
    SetTokenStatus(SetTokenStatusBody),
    /// Move `asset.total_supply` units of a token from the signer to a
    /// receiver.
    Transfer(TransferBody),
    /// Pay out a scheduled Cash Token distribution to a token's holders.
    Heartbeat(HeartbeatBody),
    /// Replace a balance's attribute list wholesale.
    SetBalanceAttributes(SetBalanceAttributesBody),
}

/// Body of a SET_MANAGER payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetManagerBody {
    /// Display name for the new Manager account.
    pub name: String,
    /// Initial endorsement tags.
    pub endorsement: Vec<Attribute>,
}

/// Body of a SET_ISSUER payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetIssuerBody {
    /// Display name for the new Issuer account.
    pub name: String,
    /// Initial endorsement tags.
    pub endorsement: Vec<Attribute>,
}

/// Body of a SET_ACCOUNT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAccountBody {
    /// Display name for the new account.
    pub name: String,
    /// Initial endorsement tags.
    pub endorsement: Vec<Attribute>,
}

/// Body of a SET_ENDORSEMENT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEndorsementBody {
    /// Public key of the account whose endorsement list is replaced.
    pub public_key: String,
    /// The new endorsement list (replaces, does not merge).
    pub endorsement: Vec<Attribute>,
}

/// Body of an ADD_IMMUTABLE payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddImmutableBody {
    /// Token identifier.
    pub name: String,
    /// Immutable attributes to append; must be non-empty.
    pub immutables: Vec<Attribute>,
}

/// Body of an ISSUE_TOKEN payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenBody {
    /// Token identifier; must not already exist.
    pub name: String,
    /// Total supply at issue; must be positive.
    pub total_supply: f64,
    /// Initial attributes (e.g. a "payments" schedule).
    pub attributes: Vec<Attribute>,
}

/// Body of a SET_TOKEN_STATUS payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTokenStatusBody {
    /// Token identifier.
    pub name: String,
    /// New status.
    pub status: TokenStatus,
}

/// Body of a TRANSFER payload. The sender is always the signer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferBody {
    /// Receiving account's public key.
    pub receiver_pkey: String,
    /// Token and amount to move.
    pub asset: AssetAmount,
    /// Decimal seconds-since-epoch string, echoed into the Transfer event
    /// and used to derive its address.
    pub timestamp: String,
}

/// Body of a HEARTBEAT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatBody {
    /// Name of the token whose holders are paid.
    pub token_name: String,
    /// Decimal seconds-since-epoch string; its calendar date is matched
    /// against the token's "payments" schedule.
    pub date: String,
    /// Public keys of the holders to pay.
    pub receivers_pkey: Vec<String>,
}

/// Body of a SET_BALANCE_ATTRIBUTES payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBalanceAttributesBody {
    /// Owning account's public key.
    pub owner_pkey: String,
    /// Token identifiers whose balances get the new attributes.
    pub identifiers: Vec<String>,
    /// The new attribute list (replaces, does not merge).
    pub attributes: Vec<BalanceAttribute>,
}
