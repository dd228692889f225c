//! # Codec
//!
//! Canonical binary encoding for payloads and entities. `bincode` encodes
//! struct fields in declaration order with no self-describing framing, so
//! the same value always produces the same bytes — required determinism,
//! since the encoded form of an entity participates in address-keyed
//! state equality.

use ledger_types::LedgerError;
use serde::{de::DeserializeOwned, Serialize};

use crate::ports::inbound::Payload;

/// Encode any codec-eligible value (a [`Payload`] or an entity) to its
/// canonical byte representation.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, LedgerError> {
    bincode::serialize(value).map_err(|e| LedgerError::BadPayload(e.to_string()))
}

/// Decode a value previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, LedgerError> {
    bincode::deserialize(bytes).map_err(|e| LedgerError::BadPayload(e.to_string()))
}

/// Decode a submitted transaction's raw payload bytes into a [`Payload`].
///
/// Fails with `BadPayload` when the bytes don't decode to a recognized
/// tag — an unrecognized discriminant is an `Unhandled` case at the wire
/// boundary, since the in-memory `Payload` enum itself is matched
/// exhaustively and has no `Unhandled` arm.
pub fn decode_payload(bytes: &[u8]) -> Result<Payload, LedgerError> {
    decode(bytes)
}

/// Encode a [`Payload`] to its canonical wire bytes.
pub fn encode_payload(payload: &Payload) -> Result<Vec<u8>, LedgerError> {
    encode(payload)
}
