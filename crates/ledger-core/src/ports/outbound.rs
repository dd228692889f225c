//! # Driven Port: raw state store
//!
//! The generic key/value store addressed by hex strings. This is the
//! only interface [`crate::state::Ledger`] depends on; it knows nothing
//! about accounts, tokens, or balances. An adapter backs this with
//! whatever the collaborator's consensus layer provides.

use ledger_types::LedgerError;

/// Raw key/value access to the replicated state store.
///
/// Implementations must give every transaction a consistent
/// pre-transaction read view and commit writes atomically.
pub trait StateStore {
    /// Read the raw bytes at `address`, or `None` if unset.
    fn get(&self, address: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write every `(address, bytes)` pair atomically. Partial application
    /// on failure is not observable: either all entries land or none do.
    fn set_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), LedgerError>;
}
