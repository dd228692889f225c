//! # Error Types
//!
//! The full error taxonomy the transaction processor can surface. Every
//! rule failure aborts the current transaction with one of these kinds;
//! there is no local recovery inside the core.

use thiserror::Error;

/// Errors surfaced by the transaction processor.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Payload is malformed, tagged unrecognizably, or missing a required field.
    #[error("bad payload: {0}")]
    BadPayload(String),

    /// Signer does not hold the role the operation requires.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A required entity (account, token, balance, manager, issuer) is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness invariant would be violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Amount is non-positive or exceeds available supply.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Operation attempted on a token with INACTIVE status.
    #[error("inactive token: {0}")]
    InactiveToken(String),

    /// Transfer denied by the endorsement gate.
    #[error("not endorsed: {0}")]
    NotEndorsed(String),

    /// Heartbeat ran against a token with no "payments" attribute.
    #[error("schedule empty: {0}")]
    ScheduleEmpty(String),

    /// State-store timeout or unexpected invariant breach.
    #[error("internal error: {0}")]
    InternalError(String),
}
